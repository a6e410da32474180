use async_trait::async_trait;
use mevguard_core::utils::{is_ens_name, random_wallet_address};
use mevguard_core::{QueryResolver, Result, ScanResult};
use tracing::{debug, info};

use crate::config::ScannerConfig;
use crate::dataset::{default_result, sentinel_result};

/// Resolvedor de demonstração: devolve registros fixos após uma latência
/// simulada, sem consultar nenhum node.
#[derive(Debug, Clone, Default)]
pub struct MockResolver {
    config: ScannerConfig,
}

impl MockResolver {
    pub fn new(config: ScannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Seleciona e ajusta o registro para `query`, sem aplicar a latência
    pub fn lookup(&self, query: &str) -> ScanResult {
        if query.to_lowercase() == self.config.sentinel.to_lowercase() {
            debug!(query, "consulta corresponde ao registro de exemplo");
            return sentinel_result();
        }

        let mut result = default_result();
        if is_ens_name(query) {
            result.ens_name = Some(query.to_string());
            result.wallet_address = random_wallet_address(&mut rand::thread_rng());
            debug!(query, address = %result.wallet_address, "nome ENS mapeado para endereço sintético");
        } else {
            result.wallet_address = query.to_string();
        }
        result
    }
}

#[async_trait]
impl QueryResolver for MockResolver {
    async fn resolve(&self, query: &str) -> Result<ScanResult> {
        info!(query, delay_ms = self.config.scan_delay.as_millis() as u64, "iniciando varredura simulada");
        tokio::time::sleep(self.config.scan_delay).await;
        let result = self.lookup(query);
        info!(
            query,
            attacked = result.attacked_transactions,
            total = result.total_transactions,
            risk = %result.risk_level,
            "varredura concluída"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mevguard_core::RiskLevel;

    fn resolver() -> MockResolver {
        MockResolver::default()
    }

    #[test]
    fn sentinel_is_case_insensitive() {
        let r = resolver().lookup("VITALIK.ETH");
        assert_eq!(r.total_transactions, 156);
        assert_eq!(r.risk_level, RiskLevel::Medium);
        assert_eq!(r.ens_name.as_deref(), Some("vitalik.eth"));
    }

    #[test]
    fn plain_query_is_echoed() {
        let r = resolver().lookup("not-an-address");
        assert_eq!(r.wallet_address, "not-an-address");
        assert!(r.ens_name.is_none());
        assert_eq!(r.total_transactions, 45);
    }

    #[test]
    fn uppercase_eth_suffix_is_not_ens() {
        let r = resolver().lookup("alice.ETH");
        assert_eq!(r.wallet_address, "alice.ETH");
        assert!(r.ens_name.is_none());
    }

    #[test]
    fn custom_sentinel() {
        let cfg = ScannerConfig {
            sentinel: "demo.eth".to_string(),
            ..ScannerConfig::default()
        };
        let r = MockResolver::new(cfg).lookup("Demo.eth");
        assert_eq!(r.attacks.len(), 3);
    }
}
