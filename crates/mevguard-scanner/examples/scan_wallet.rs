//! Executa uma varredura simulada e imprime o relatório em texto.
//!
//! ```bash
//! cargo run -p mevguard-scanner --example scan_wallet -- <ENDERECO|NOME_ENS> [ATRASO_MS]
//! ```

use std::env;
use std::time::Duration;

use mevguard_scanner::report::render_text;
use mevguard_scanner::{MockResolver, ScanController, ScanOutcome, ScannerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Uso: {} <ENDERECO|NOME_ENS> [ATRASO_MS]", args[0]);
        eprintln!("Exemplo: {} vitalik.eth 500", args[0]);
        std::process::exit(1);
    }

    let mut config = ScannerConfig::from_env()?;
    if let Some(raw) = args.get(2) {
        config.scan_delay = Duration::from_millis(raw.parse::<u64>()?);
    }

    let controller = ScanController::new(MockResolver::new(config));
    match controller.scan(&args[1]).await? {
        ScanOutcome::Completed(result) => print!("{}", render_text(&result)),
        ScanOutcome::Ignored => eprintln!("Consulta vazia"),
        ScanOutcome::Superseded => eprintln!("Varredura substituída"),
    }

    Ok(())
}
