use std::time::Duration;

use mevguard_core::{Error, Result};

/// Variável de ambiente com a latência simulada em milissegundos
pub const SCAN_DELAY_ENV: &str = "MEVGUARD_SCAN_DELAY_MS";

/// Latência simulada padrão de uma varredura
pub const DEFAULT_SCAN_DELAY: Duration = Duration::from_millis(2000);

/// Nome de exemplo que devolve o registro completo
pub const DEFAULT_SENTINEL: &str = "vitalik.eth";

/// Configuração do scanner
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    /// Atraso aplicado antes de devolver cada resultado
    pub scan_delay: Duration,
    /// Consulta (sem distinção de maiúsculas) associada ao registro completo
    pub sentinel: String,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            scan_delay: DEFAULT_SCAN_DELAY,
            sentinel: DEFAULT_SENTINEL.to_string(),
        }
    }
}

impl ScannerConfig {
    /// Configuração padrão com outro atraso
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            scan_delay: delay,
            ..Self::default()
        }
    }

    /// Lê a configuração das variáveis de ambiente
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Lê a configuração a partir de uma função de consulta de variáveis
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(SCAN_DELAY_ENV) {
            let millis = raw.trim().parse::<u64>().map_err(|e| {
                Error::InvalidConfig(format!("{} = {:?}: {}", SCAN_DELAY_ENV, raw, e))
            })?;
            config.scan_delay = Duration::from_millis(millis);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = ScannerConfig::default();
        assert_eq!(cfg.scan_delay, Duration::from_millis(2000));
        assert_eq!(cfg.sentinel, "vitalik.eth");
    }

    #[test]
    fn delay_from_vars() {
        let cfg = ScannerConfig::from_vars(|k| (k == SCAN_DELAY_ENV).then(|| " 150 ".to_string())).unwrap();
        assert_eq!(cfg.scan_delay, Duration::from_millis(150));
    }

    #[test]
    fn missing_var_keeps_default() {
        let cfg = ScannerConfig::from_vars(|_| None).unwrap();
        assert_eq!(cfg.scan_delay, DEFAULT_SCAN_DELAY);
    }

    #[test]
    fn invalid_delay_is_rejected() {
        let err = ScannerConfig::from_vars(|_| Some("soon".to_string())).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}
