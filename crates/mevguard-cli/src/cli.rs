//! Interface de linha de comando

use clap::Parser;
use mevguard_scanner::logger::LogFormat;

/// MEV Guard - varredura de carteiras em busca de ataques sandwich (modo demonstração)
#[derive(Parser, Debug)]
#[command(name = "mev-guard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Endereço da carteira ou nome ENS (experimente: vitalik.eth)
    pub query: String,

    /// Latência simulada da varredura, em milissegundos
    #[arg(long, env = "MEVGUARD_SCAN_DELAY_MS")]
    pub delay_ms: Option<u64>,

    /// Imprime o resultado em JSON em vez do relatório em texto
    #[arg(long)]
    pub json: bool,

    /// Nível de log (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "MEVGUARD_LOG_LEVEL")]
    pub log_level: String,

    /// Formato de log (text, json)
    #[arg(long, default_value = "text", env = "MEVGUARD_LOG_FORMAT")]
    pub log_format: LogFormat,
}
