/*! MEV Guard Scanner
 *
 * Varredura simulada de carteiras em busca de ataques sandwich. Os
 * resultados vêm de um conjunto fixo de registros, entregues após uma
 * latência artificial; não há acesso à blockchain.
 */

pub mod config;
pub mod dataset;
pub mod logger;
pub mod report;
pub mod resolver;
pub mod session;

pub use config::ScannerConfig;
pub use resolver::MockResolver;
pub use session::{ScanController, ScanOutcome};
