use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use mevguard_core::utils::normalize_query;
use mevguard_core::{QueryResolver, Result, ScanResult};
use tracing::{debug, warn};

/// Resultado de uma submissão ao [`ScanController`]
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// Consulta vazia; o resolvedor não foi chamado
    Ignored,
    /// Varredura mais recente concluída
    Completed(ScanResult),
    /// Uma submissão posterior (ou `cancel`) tornou este resultado obsoleto
    Superseded,
}

impl ScanOutcome {
    pub fn into_result(self) -> Option<ScanResult> {
        match self {
            ScanOutcome::Completed(result) => Some(result),
            _ => None,
        }
    }
}

/// Decrementa o contador de varreduras em andamento ao sair de escopo,
/// inclusive quando o future é descartado.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Chamador do resolvedor: apara a entrada, ignora consultas vazias e só
/// entrega o resultado da submissão mais recente.
pub struct ScanController<R: QueryResolver> {
    resolver: R,
    generation: AtomicU64,
    in_flight: AtomicUsize,
}

impl<R: QueryResolver> ScanController<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            generation: AtomicU64::new(0),
            in_flight: AtomicUsize::new(0),
        }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Indica se há alguma varredura aguardando resposta
    pub fn is_pending(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Invalida as varreduras em andamento
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Submete uma consulta
    pub async fn scan(&self, query: &str) -> Result<ScanOutcome> {
        let query = match normalize_query(query) {
            Some(q) => q,
            None => {
                debug!("consulta vazia ignorada");
                return Ok(ScanOutcome::Ignored);
            }
        };

        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let _guard = InFlight::enter(&self.in_flight);
        let result = self.resolver.resolve(query).await?;

        if self.generation.load(Ordering::SeqCst) != ticket {
            warn!(query, ticket, "resultado descartado: submissão mais recente em andamento");
            return Ok(ScanOutcome::Superseded);
        }
        Ok(ScanOutcome::Completed(result))
    }
}
