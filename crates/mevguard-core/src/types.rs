/*!
 * MEV Guard Types
 *
 * Tipos comuns usados em toda a workspace MEV Guard
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::format_address;

/// Nível de risco atribuído a uma carteira
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Representação em string do nível
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// Rótulo exibido no relatório, ex.: `MEDIUM RISK`
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW RISK",
            RiskLevel::Medium => "MEDIUM RISK",
            RiskLevel::High => "HIGH RISK",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            other => Err(format!("Nível de risco desconhecido: {}", other)),
        }
    }
}

/// Um ataque sandwich detectado contra a carteira
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SandwichAttack {
    pub victim_tx_hash: String,
    pub frontrun_tx_hash: String,
    pub backrun_tx_hash: String,
    pub attacker_address: String,
    #[serde(rename = "victimLossUSD")]
    pub victim_loss_usd: String,
    pub block_number: u64,
    /// Milissegundos desde a época Unix
    pub timestamp: i64,
    pub token_pair: String,
}

/// Resultado de uma varredura de carteira
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub wallet_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ens_name: Option<String>,
    pub total_transactions: u64,
    pub attacked_transactions: u64,
    #[serde(rename = "totalLossUSD")]
    pub total_loss_usd: String,
    /// Amostra parcial; pode ter menos itens que `attacked_transactions`
    pub attacks: Vec<SandwichAttack>,
    pub ai_report: String,
    pub risk_level: RiskLevel,
}

impl ScanResult {
    /// Percentual de transações atacadas (0.0 quando não há transações)
    pub fn attack_rate(&self) -> f64 {
        if self.total_transactions == 0 {
            return 0.0;
        }
        self.attacked_transactions as f64 / self.total_transactions as f64 * 100.0
    }

    /// Nome exibido: o nome ENS, ou o endereço abreviado
    pub fn display_name(&self) -> String {
        match &self.ens_name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => format_address(&self.wallet_address),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ScanResult {
        ScanResult {
            wallet_address: "0x742d35Cc6634C0532925a3b844Bc9e7595f5bE21".to_string(),
            ens_name: None,
            total_transactions: 45,
            attacked_transactions: 3,
            total_loss_usd: "347.89".to_string(),
            attacks: vec![],
            ai_report: String::new(),
            risk_level: RiskLevel::Low,
        }
    }

    #[test]
    fn attack_rate_percentage() {
        let r = sample();
        assert!((r.attack_rate() - 6.666_666).abs() < 1e-3);
    }

    #[test]
    fn attack_rate_without_transactions() {
        let mut r = sample();
        r.total_transactions = 0;
        r.attacked_transactions = 0;
        assert_eq!(r.attack_rate(), 0.0);
    }

    #[test]
    fn display_name_prefers_ens() {
        let mut r = sample();
        assert_eq!(r.display_name(), "0x742d35Cc...95f5bE21");
        r.ens_name = Some("alice.eth".to_string());
        assert_eq!(r.display_name(), "alice.eth");
    }

    #[test]
    fn serializes_with_camel_case_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["walletAddress"], "0x742d35Cc6634C0532925a3b844Bc9e7595f5bE21");
        assert_eq!(json["totalLossUSD"], "347.89");
        assert_eq!(json["riskLevel"], "low");
        assert!(json.get("ensName").is_none());
    }

    #[test]
    fn risk_level_parse() {
        assert_eq!("MEDIUM".parse::<RiskLevel>().unwrap(), RiskLevel::Medium);
        assert!("extreme".parse::<RiskLevel>().is_err());
        assert_eq!(RiskLevel::High.label(), "HIGH RISK");
    }
}
