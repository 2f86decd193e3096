use std::sync::Arc;
use std::time::Instant;

use tokio::task::JoinSet;
use tracing::{debug, info};

use cask_limiter::AdmissionLimiter;
use cask_store::{FileStore, InMemoryFileStore};

use crate::config::{BenchConfig, Scenario};
use crate::error::{BenchError, BenchResult};
use crate::result::{BenchmarkResult, LevelSample};

/// Orchestrates concurrent store operations and measures their timing.
#[derive(Debug)]
pub struct BenchmarkDriver {
    config: BenchConfig,
}

impl BenchmarkDriver {
    /// Create a driver, validating the configuration.
    pub fn new(config: BenchConfig) -> BenchResult<Self> {
        if config.iterations == 0 {
            return Err(BenchError::InvalidConfig(
                "iterations must be non-zero".into(),
            ));
        }
        if config.concurrency_levels.is_empty() {
            return Err(BenchError::InvalidConfig(
                "at least one concurrency level is required".into(),
            ));
        }
        if config.concurrency_levels.contains(&0) {
            return Err(BenchError::InvalidConfig(
                "concurrency levels must be non-zero".into(),
            ));
        }
        if config.admission_capacity == Some(0) {
            return Err(BenchError::InvalidConfig(
                "admission capacity must be non-zero".into(),
            ));
        }
        Ok(Self { config })
    }

    /// The validated configuration.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Run the configured sweep against fresh in-memory stores.
    pub async fn run(&self) -> BenchResult<BenchmarkResult> {
        self.run_with(InMemoryFileStore::new).await
    }

    /// Run the sweep, building one store per concurrency level with
    /// `make_store` so that levels never share mutated state.
    pub async fn run_with<S, F>(&self, make_store: F) -> BenchResult<BenchmarkResult>
    where
        S: FileStore + 'static,
        F: Fn() -> S,
    {
        let mut levels = Vec::with_capacity(self.config.concurrency_levels.len());
        for &concurrency in &self.config.concurrency_levels {
            let store = Arc::new(make_store());
            let sample = self.run_level(store, concurrency).await?;
            info!(
                concurrency,
                scenario = %self.config.scenario,
                operations = sample.operations,
                elapsed_us = sample.elapsed.as_micros() as u64,
                "level complete"
            );
            levels.push(sample);
        }

        let operations = levels.iter().map(|level| level.operations).sum();
        let total_elapsed = levels.iter().map(|level| level.elapsed).sum();
        Ok(BenchmarkResult {
            operations,
            total_elapsed,
            levels,
        })
    }

    /// Measure one concurrency level against the given store.
    async fn run_level<S>(&self, store: Arc<S>, concurrency: usize) -> BenchResult<LevelSample>
    where
        S: FileStore + 'static,
    {
        let limiter = self.config.admission_capacity.map(AdmissionLimiter::new);

        // Read levels operate on a store populated outside the timed region.
        if self.config.scenario == Scenario::Read {
            for i in 0..self.config.iterations {
                store.write(&entry_name(i), &self.config.payload)?;
            }
        }

        let mut workers = JoinSet::new();
        let started = Instant::now();

        for worker in 0..concurrency {
            let store = Arc::clone(&store);
            let limiter = limiter.clone();
            let payload = self.config.payload.clone();
            let scenario = self.config.scenario;
            let range = worker_range(self.config.iterations, concurrency, worker);

            workers.spawn(async move {
                let mut completed = 0u64;
                for i in range {
                    let _permit = match &limiter {
                        Some(limiter) => Some(limiter.acquire().await?),
                        None => None,
                    };
                    match scenario {
                        Scenario::Write => store.write(&entry_name(i), &payload)?,
                        Scenario::Read => {
                            store.read(&entry_name(i))?;
                        }
                    }
                    completed += 1;
                }
                Ok::<u64, BenchError>(completed)
            });
        }

        // Full barrier: the clock is read only after every worker finished.
        let mut operations = 0u64;
        while let Some(joined) = workers.join_next().await {
            operations += joined.map_err(|e| BenchError::Join(e.to_string()))??;
        }
        let elapsed = started.elapsed();

        debug!(concurrency, operations, "workers joined");
        Ok(LevelSample {
            concurrency,
            elapsed,
            operations,
        })
    }
}

fn entry_name(i: u64) -> String {
    format!("file{i}.txt")
}

/// Worker `index`'s slice of `iterations` total operations.
///
/// The total is split as evenly as possible; the first `iterations % workers`
/// workers take one extra operation.
fn worker_range(iterations: u64, workers: usize, index: usize) -> std::ops::Range<u64> {
    let workers = workers as u64;
    let index = index as u64;
    let base = iterations / workers;
    let extra = iterations % workers;
    let start = index * base + index.min(extra);
    let len = base + u64::from(index < extra);
    start..start + len
}
