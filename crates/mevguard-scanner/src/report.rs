//! Renderização do resultado de uma varredura para o terminal.

use std::fmt::Write;

use mevguard_core::utils::{format_address, format_date};
use mevguard_core::{Result, ScanResult};

/// Largura da barra de taxa de ataque
const RISK_BAR_WIDTH: usize = 20;

/// Recomendação de proteção exibida ao final do relatório
#[derive(Debug, Clone, Copy)]
pub struct Recommendation {
    pub title: &'static str,
    pub detail: &'static str,
}

pub const RECOMMENDATIONS: [Recommendation; 4] = [
    Recommendation {
        title: "Use MEV Blocker RPC",
        detail: "Add mevblocker.io as your RPC endpoint",
    },
    Recommendation {
        title: "Lower Slippage Tolerance",
        detail: "Set slippage to 0.5% or less when possible",
    },
    Recommendation {
        title: "Use CoW Swap",
        detail: "DEX with built-in MEV protection",
    },
    Recommendation {
        title: "Split Large Trades",
        detail: "Smaller trades are less attractive targets",
    },
];

/// Barra proporcional à taxa de ataque (0 a 100)
pub fn risk_bar(rate: f64) -> String {
    let clamped = rate.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * RISK_BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(RISK_BAR_WIDTH - filled)
    )
}

/// Relatório em texto
pub fn render_text(result: &ScanResult) -> String {
    let mut out = String::new();
    let rate = result.attack_rate();

    // write! em String não falha
    let _ = writeln!(out, "Wallet:               {}", result.display_name());
    let _ = writeln!(out, "Transactions Scanned: {}", result.total_transactions);
    let _ = writeln!(out, "MEV Attacks Found:    {}", result.attacked_transactions);
    let _ = writeln!(out, "Estimated Loss:       ${}", result.total_loss_usd);
    let _ = writeln!(out);

    let _ = writeln!(out, "Attack Rate  {}", result.risk_level.label());
    let _ = writeln!(out, "{}", risk_bar(rate));
    let _ = writeln!(out, "{:.1}% of transactions affected", rate);
    let _ = writeln!(out);

    let _ = writeln!(out, "AI Analysis");
    let _ = writeln!(out, "{}", result.ai_report);

    if !result.attacks.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Detected Attacks ({})", result.attacks.len());
        for attack in &result.attacks {
            let _ = writeln!(
                out,
                "  Sandwich Attack  {}  -${}  {}",
                attack.token_pair,
                attack.victim_loss_usd,
                format_date(attack.timestamp)
            );
            let _ = writeln!(out, "    Your Transaction: {}", format_address(&attack.victim_tx_hash));
            let _ = writeln!(out, "    Attacker:         {}", format_address(&attack.attacker_address));
            let _ = writeln!(out, "    Block:            {}", attack.block_number);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "How to Protect Yourself");
    for (idx, rec) in RECOMMENDATIONS.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}: {}", idx + 1, rec.title, rec.detail);
    }
    out
}

/// Relatório em JSON (campos em camelCase)
pub fn render_json(result: &ScanResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}
