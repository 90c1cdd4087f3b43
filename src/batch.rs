//! Batch tokenization of independent sources
//!
//! Uses Rayon for work-stealing parallelism. Each source gets its own
//! automaton; only the read-only keyword set is shared.

use crate::error::{Error, Result};
use crate::lexer::{tokenize, Token};
use rayon::prelude::*;

/// Configuration for batch tokenization
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Maximum number of worker threads (default: num_cpus)
    pub max_parallelism: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_parallelism: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    /// Config with an explicit thread count (0 means default)
    pub fn with_parallelism(max_parallelism: usize) -> Self {
        if max_parallelism == 0 {
            Self::default()
        } else {
            Self { max_parallelism }
        }
    }
}

/// Tokenizes every source in parallel
///
/// Results are returned in the same order as `sources`.
pub fn tokenize_batch<S>(sources: &[S], config: &BatchConfig) -> Result<Vec<Vec<Token>>>
where
    S: AsRef<str> + Sync,
{
    // Empty batch fast path
    if sources.is_empty() {
        return Ok(Vec::new());
    }

    let threads = config.max_parallelism.max(1).min(sources.len());
    tracing::debug!(sources = sources.len(), threads, "starting batch tokenization");

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| Error::BatchError(format!("Failed to create thread pool: {}", e)))?;

    Ok(pool.install(|| {
        sources
            .par_iter()
            .map(|source| tokenize(source.as_ref()))
            .collect()
    }))
}
