//! Reporting for cask benchmark results.
//!
//! Consumes the immutable [`BenchmarkResult`] value the driver produces and
//! renders it as a text table, JSON, or an SVG line chart of average time
//! per operation across concurrency levels. Rendering never runs inside
//! timed code paths, and a reporting failure (e.g. an unwritable
//! destination) is terminal for the reporting step only; the measured data
//! is unaffected.
//!
//! [`BenchmarkResult`]: cask_bench::BenchmarkResult

pub mod error;
pub mod plot;
pub mod report;

pub use error::ReportError;
pub use plot::render_svg;
pub use report::{render_json, render_text};
