//! Progress of a single solve call.

use std::time::{Duration, Instant};

/// Counters that termination conditions look at.
#[derive(Debug, Clone)]
pub struct SolveScope {
    start_time: Instant,
    mutation_count: usize,
}

impl SolveScope {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            mutation_count: 0,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Candidates accepted into the arena so far.
    pub fn mutation_count(&self) -> usize {
        self.mutation_count
    }

    pub(crate) fn increment_mutation_count(&mut self) {
        self.mutation_count += 1;
    }
}

impl Default for SolveScope {
    fn default() -> Self {
        Self::new()
    }
}
