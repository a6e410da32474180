use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use mevguard_core::utils::normalize_query;
use mevguard_scanner::logger::init_tracing;
use mevguard_scanner::report::{render_json, render_text};
use mevguard_scanner::{MockResolver, ScanController, ScanOutcome, ScannerConfig};
use tracing::debug;

mod cli;

use cli::Cli;

/// Intervalo entre os pontos do indicador de progresso
const PROGRESS_TICK: Duration = Duration::from_millis(500);

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.log_format)?;

    if normalize_query(&cli.query).is_none() {
        eprintln!("Consulta vazia: informe um endereço ou nome ENS");
        std::process::exit(2);
    }

    let mut config = ScannerConfig::default();
    if let Some(ms) = cli.delay_ms {
        config.scan_delay = Duration::from_millis(ms);
    }
    debug!(?config, "configuração carregada");

    let controller = ScanController::new(MockResolver::new(config));

    let scan = controller.scan(&cli.query);
    tokio::pin!(scan);
    let mut ticker = tokio::time::interval(PROGRESS_TICK);
    eprint!("Scanning");
    let outcome = loop {
        tokio::select! {
            outcome = &mut scan => break outcome?,
            _ = ticker.tick() => {
                if controller.is_pending() {
                    eprint!(".");
                    let _ = std::io::stderr().flush();
                }
            }
        }
    };
    eprintln!();

    match outcome {
        ScanOutcome::Completed(result) => {
            if cli.json {
                println!("{}", render_json(&result)?);
            } else {
                print!("{}", render_text(&result));
            }
        }
        ScanOutcome::Ignored | ScanOutcome::Superseded => {
            eprintln!("Nenhum resultado: varredura ignorada ou substituída");
        }
    }

    Ok(())
}
