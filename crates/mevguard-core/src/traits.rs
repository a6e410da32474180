/*!
 * MEV Guard Traits
 *
 * Traits comuns usados em toda a workspace MEV Guard
 */

use async_trait::async_trait;
use crate::error::Result;
use crate::types::ScanResult;

/// Trait para resolvedores de consultas de carteira
#[async_trait]
pub trait QueryResolver: Send + Sync {
    /// Resolve um endereço ou nome ENS já aparado e não vazio
    async fn resolve(&self, query: &str) -> Result<ScanResult>;
}
