use std::fmt;

use serde::{Deserialize, Serialize};

/// Which operation a benchmark level measures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// Each operation writes a distinct name.
    Write,
    /// The store is pre-populated outside the timed region; each operation
    /// reads a distinct name back, with digest verification on every read.
    Read,
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scenario::Write => write!(f, "write"),
            Scenario::Read => write!(f, "read"),
        }
    }
}

/// Configuration for a benchmark run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Total number of logical operations per concurrency level.
    ///
    /// This is the total across workers, not per worker: the driver splits
    /// it as evenly as possible over a level's workers, with the first
    /// `iterations % concurrency` workers taking one extra operation.
    pub iterations: u64,
    /// Concurrency levels to sweep, in order. Each level runs against a
    /// fresh store so levels never share mutated state.
    pub concurrency_levels: Vec<usize>,
    /// Optional cap on in-flight store operations. `None` leaves offered
    /// concurrency ungated.
    pub admission_capacity: Option<usize>,
    /// Operation each level measures.
    pub scenario: Scenario,
    /// Content written for every entry.
    pub payload: Vec<u8>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: 100_000,
            concurrency_levels: vec![2, 5, 20, 100],
            admission_capacity: None,
            scenario: Scenario::Write,
            payload: b"BenchmarkContent".repeat(5),
        }
    }
}
