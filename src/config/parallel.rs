//! Parallelism configuration for batch classification.

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

/// Controls how [`classify_pool`](crate::batch::classify_pool) spreads work
/// over rayon's thread pool.
///
/// # Example
///
/// ```rust
/// use methodsort::config::ParallelConfig;
///
/// let config = ParallelConfig {
///     enabled: true,
///     max_concurrency: Some(4),
/// };
/// assert_eq!(config.effective_concurrency(), 4);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Classify classes concurrently (default: true)
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Upper bound on worker threads (default: available CPU cores)
    #[serde(default)]
    pub max_concurrency: Option<usize>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            max_concurrency: None,
        }
    }
}

impl ParallelConfig {
    pub fn sequential() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// The configured `max_concurrency`, or the number of available CPU cores.
    pub fn effective_concurrency(&self) -> usize {
        self.max_concurrency.unwrap_or_else(num_cpus).max(1)
    }
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1)
}
