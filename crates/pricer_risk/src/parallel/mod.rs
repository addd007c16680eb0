//! Rayon-based parallelisation settings.
//!
//! Payoff evaluation is split into contiguous chunks of spot prices; each
//! chunk is summed across the whole portfolio on one worker, so results are
//! bit-identical to the sequential path.

/// Number of spot prices per parallel chunk.
///
/// Large enough to amortise task scheduling for a handful of instruments.
pub const DEFAULT_CHUNK_SIZE: usize = 2048;

/// Configuration for parallel execution.
#[derive(Clone, Debug)]
pub struct ParallelConfig {
    /// Spot prices per chunk
    pub chunk_size: usize,
    /// Minimum spot prices before using parallelism
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            parallel_threshold: 2 * DEFAULT_CHUNK_SIZE,
        }
    }
}

impl ParallelConfig {
    /// Creates a new parallel configuration.
    pub fn new(chunk_size: usize, parallel_threshold: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
            parallel_threshold,
        }
    }

    /// Returns whether to use parallel processing for the given item count.
    #[inline]
    pub fn should_parallelize(&self, n_items: usize) -> bool {
        n_items >= self.parallel_threshold
    }
}
