//! Solve statistics collection and reporting.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use serde::{Serialize, Serializer};

/// Candidates produced by one strategy, summed over tokenization variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyStatistics {
    pub strategy: &'static str,
    pub mutations: u64,
}

/// Complete statistics for a solve call.
#[derive(Debug, Clone, Serialize)]
pub struct SolveStatistics {
    /// Tokenization variants searched.
    pub variant_count: usize,
    /// Candidates generated across all variants.
    pub mutations_generated: u64,
    /// Candidates that passed the quick pre-filter.
    pub plausible_count: u64,
    /// Full evaluations performed.
    pub evaluated_count: u64,
    /// Evaluations that found a true equation, before de-duplication.
    pub valid_count: u64,
    /// Whether the budget or time limit cut generation short.
    pub terminated_early: bool,
    #[serde(rename = "duration_ms", serialize_with = "serialize_millis")]
    pub duration: Duration,
    pub strategies: Vec<StrategyStatistics>,
}

impl SolveStatistics {
    /// Generated candidates per second.
    pub fn mutation_speed(&self) -> u64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            (self.mutations_generated as f64 / secs) as u64
        } else {
            0
        }
    }
}

fn serialize_millis<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_millis() as u64)
}

/// Thread-safe collector for solve statistics.
///
/// Evaluation counters are atomics so parallel evaluation can record into a
/// shared collector; call [`into_statistics`](Self::into_statistics) when done.
#[derive(Debug)]
pub struct StatisticsCollector {
    start_time: Instant,
    evaluated: AtomicU64,
    valid: AtomicU64,
    strategies: Mutex<Vec<StrategyStatistics>>,
}

impl StatisticsCollector {
    /// Creates a new collector; the start time is recorded now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            evaluated: AtomicU64::new(0),
            valid: AtomicU64::new(0),
            strategies: Mutex::new(Vec::new()),
        }
    }

    /// Records one full evaluation.
    pub fn record_evaluation(&self, valid: bool) {
        self.evaluated.fetch_add(1, Ordering::Relaxed);
        if valid {
            self.valid.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Adds `mutations` to the running total of `strategy`.
    pub fn record_strategy(&self, strategy: &'static str, mutations: u64) {
        if let Ok(mut strategies) = self.strategies.lock() {
            match strategies.iter_mut().find(|s| s.strategy == strategy) {
                Some(entry) => entry.mutations += mutations,
                None => strategies.push(StrategyStatistics {
                    strategy,
                    mutations,
                }),
            }
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn current_evaluated(&self) -> u64 {
        self.evaluated.load(Ordering::Relaxed)
    }

    /// Finishes collection.
    pub fn into_statistics(
        self,
        variant_count: usize,
        mutations_generated: u64,
        plausible_count: u64,
        terminated_early: bool,
    ) -> SolveStatistics {
        SolveStatistics {
            variant_count,
            mutations_generated,
            plausible_count,
            evaluated_count: self.evaluated.load(Ordering::Relaxed),
            valid_count: self.valid.load(Ordering::Relaxed),
            terminated_early,
            duration: self.start_time.elapsed(),
            strategies: self.strategies.into_inner().unwrap_or_default(),
        }
    }
}

impl Default for StatisticsCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_totals_accumulate() {
        let collector = StatisticsCollector::new();
        collector.record_strategy("transform", 7);
        collector.record_strategy("relocate", 56);
        collector.record_strategy("transform", 3);

        let stats = collector.into_statistics(2, 66, 12, false);
        assert_eq!(
            stats.strategies,
            vec![
                StrategyStatistics { strategy: "transform", mutations: 10 },
                StrategyStatistics { strategy: "relocate", mutations: 56 },
            ]
        );
        assert_eq!(stats.variant_count, 2);
    }

    #[test]
    fn test_collector_thread_safety() {
        let collector = StatisticsCollector::new();

        rayon::scope(|s| {
            for _ in 0..4 {
                s.spawn(|_| {
                    for i in 0..1000 {
                        collector.record_evaluation(i % 10 == 0);
                    }
                });
            }
        });

        assert_eq!(collector.current_evaluated(), 4000);
        let stats = collector.into_statistics(1, 4000, 4000, false);
        assert_eq!(stats.valid_count, 400);
    }

    #[test]
    fn test_serializes_duration_as_millis() {
        let mut stats = StatisticsCollector::new().into_statistics(1, 0, 0, true);
        stats.duration = Duration::from_millis(1500);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["duration_ms"], 1500);
        assert_eq!(json["terminated_early"], true);
    }
}
