//! Registros fixos devolvidos pelo scanner de demonstração.
//!
//! Os modelos são construídos uma única vez por processo e nunca são
//! alterados; cada consulta recebe uma cópia própria.

use chrono::Utc;
use mevguard_core::utils::days_ago;
use mevguard_core::{RiskLevel, SandwichAttack, ScanResult};
use once_cell::sync::Lazy;

/// Instante de referência para os timestamps relativos dos ataques
static DATASET_EPOCH: Lazy<i64> = Lazy::new(|| Utc::now().timestamp_millis());

static SENTINEL_RESULT: Lazy<ScanResult> = Lazy::new(|| {
    let now = *DATASET_EPOCH;
    ScanResult {
        wallet_address: "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045".to_string(),
        ens_name: Some("vitalik.eth".to_string()),
        total_transactions: 156,
        attacked_transactions: 8,
        total_loss_usd: "2,847.32".to_string(),
        risk_level: RiskLevel::Medium,
        ai_report: "This wallet has experienced 8 sandwich attacks over 156 DEX transactions \
            (5.1% attack rate). The majority of attacks occurred during high-volatility periods \
            on Uniswap V3. Estimated total loss is $2,847. Recommendation: Use private RPC \
            endpoints like MEV Blocker or Flashbots Protect for future transactions."
            .to_string(),
        attacks: vec![
            SandwichAttack {
                victim_tx_hash: "0x1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef".to_string(),
                frontrun_tx_hash: format!("0x{}", "a".repeat(64)),
                backrun_tx_hash: format!("0x{}", "b".repeat(64)),
                attacker_address: "0xae2Fc483527B8EF99EB5D9B44875F005ba1FaE13".to_string(),
                victim_loss_usd: "523.45".to_string(),
                block_number: 18_956_234,
                timestamp: days_ago(now, 3),
                token_pair: "ETH/USDC".to_string(),
            },
            SandwichAttack {
                victim_tx_hash: "0x2345678901bcdef12345678901bcdef12345678901bcdef12345678901bcdef1".to_string(),
                frontrun_tx_hash: format!("0x{}", "c".repeat(64)),
                backrun_tx_hash: format!("0x{}", "d".repeat(64)),
                attacker_address: "0xae2Fc483527B8EF99EB5D9B44875F005ba1FaE13".to_string(),
                victim_loss_usd: "892.10".to_string(),
                block_number: 18_945_123,
                timestamp: days_ago(now, 7),
                token_pair: "ETH/USDT".to_string(),
            },
            SandwichAttack {
                victim_tx_hash: "0x3456789012cdef123456789012cdef123456789012cdef123456789012cdef12".to_string(),
                frontrun_tx_hash: format!("0x{}", "e".repeat(64)),
                backrun_tx_hash: format!("0x{}", "f".repeat(64)),
                attacker_address: "0x5050F69a9786F081509234F1a7F4684b5E5b76C9".to_string(),
                victim_loss_usd: "1,431.77".to_string(),
                block_number: 18_932_456,
                timestamp: days_ago(now, 14),
                token_pair: "WBTC/ETH".to_string(),
            },
        ],
    }
});

static DEFAULT_RESULT: Lazy<ScanResult> = Lazy::new(|| {
    let now = *DATASET_EPOCH;
    ScanResult {
        wallet_address: "0x742d35Cc6634C0532925a3b844Bc9e7595f5bE21".to_string(),
        ens_name: None,
        total_transactions: 45,
        attacked_transactions: 3,
        total_loss_usd: "347.89".to_string(),
        risk_level: RiskLevel::Low,
        ai_report: "This wallet shows moderate MEV exposure with 3 detected sandwich attacks \
            across 45 DEX transactions (6.7% attack rate). Total estimated loss is $347.89. \
            The attacks primarily targeted ETH/stablecoin swaps during periods of high gas \
            prices. Consider using MEV-protected RPC endpoints."
            .to_string(),
        attacks: vec![SandwichAttack {
            victim_tx_hash: "0x9876543210fedcba9876543210fedcba9876543210fedcba9876543210fedcba".to_string(),
            frontrun_tx_hash: format!("0x{}", "1".repeat(64)),
            backrun_tx_hash: format!("0x{}", "2".repeat(64)),
            attacker_address: "0xDEF171Fe48CF0115B1d80b88dc8eAB59176FEe57".to_string(),
            victim_loss_usd: "156.23".to_string(),
            block_number: 18_967_890,
            timestamp: days_ago(now, 2),
            token_pair: "ETH/DAI".to_string(),
        }],
    }
});

/// Cópia do registro completo associado ao nome de exemplo
pub fn sentinel_result() -> ScanResult {
    SENTINEL_RESULT.clone()
}

/// Cópia do registro padrão usado para qualquer outra consulta
pub fn default_result() -> ScanResult {
    DEFAULT_RESULT.clone()
}
