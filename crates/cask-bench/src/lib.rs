//! Concurrent benchmark driver for the cask file store.
//!
//! The [`BenchmarkDriver`] sweeps a list of concurrency levels. For each
//! level it builds a fresh store, spawns that many parallel workers,
//! distributes a fixed total of operations across them (optionally gated by
//! an admission limiter), and measures wall-clock time from before the first
//! worker is launched until after the last one has finished: a full barrier,
//! so no partial-completion timing is ever reported.
//!
//! The driver returns a pure [`BenchmarkResult`] data value. Printing and
//! plotting live elsewhere and are never invoked from inside timed code
//! paths.

pub mod config;
pub mod driver;
pub mod error;
pub mod result;

pub use config::{BenchConfig, Scenario};
pub use driver::BenchmarkDriver;
pub use error::{BenchError, BenchResult};
pub use result::{BenchmarkResult, LevelSample};
