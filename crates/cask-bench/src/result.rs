use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing for one concurrency level.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LevelSample {
    /// Number of simultaneously active workers during this level.
    pub concurrency: usize,
    /// Wall-clock time from before the first worker launched until after
    /// the last one finished.
    pub elapsed: Duration,
    /// Operations completed during this level.
    pub operations: u64,
}

impl LevelSample {
    /// Average wall-clock time per operation.
    pub fn avg_per_op(&self) -> Duration {
        if self.operations == 0 {
            return Duration::ZERO;
        }
        self.elapsed.div_f64(self.operations as f64)
    }

    /// Operations per second achieved during this level.
    pub fn ops_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.operations as f64 / secs
    }
}

/// The outcome of one benchmark run.
///
/// Produced once per run and immutable thereafter. Reporters and plotters
/// consume this value; the driver never formats or renders anything itself.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Total operations completed across all levels.
    pub operations: u64,
    /// Total measured wall-clock time summed over all levels.
    pub total_elapsed: Duration,
    /// Per-level timings, in sweep order.
    pub levels: Vec<LevelSample>,
}
