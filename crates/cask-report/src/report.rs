use std::io::Write;

use cask_bench::BenchmarkResult;

use crate::error::ReportError;

/// Write a per-level text table followed by run totals.
pub fn render_text(result: &BenchmarkResult, out: &mut impl Write) -> Result<(), ReportError> {
    writeln!(
        out,
        "{:>11}  {:>10}  {:>12}  {:>12}  {:>12}",
        "concurrency", "operations", "elapsed", "avg/op", "ops/s"
    )?;
    for sample in &result.levels {
        writeln!(
            out,
            "{:>11}  {:>10}  {:>12}  {:>12}  {:>12.0}",
            sample.concurrency,
            sample.operations,
            format!("{:.3?}", sample.elapsed),
            format!("{:.3?}", sample.avg_per_op()),
            sample.ops_per_sec(),
        )?;
    }
    writeln!(
        out,
        "total: {} operations in {:.3?}",
        result.operations, result.total_elapsed
    )?;
    Ok(())
}

/// Serialize the result as pretty-printed JSON.
pub fn render_json(result: &BenchmarkResult) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(result)?)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use cask_bench::LevelSample;

    use super::*;

    fn sample_result() -> BenchmarkResult {
        BenchmarkResult {
            operations: 1500,
            total_elapsed: Duration::from_millis(300),
            levels: vec![
                LevelSample {
                    concurrency: 5,
                    elapsed: Duration::from_millis(100),
                    operations: 500,
                },
                LevelSample {
                    concurrency: 20,
                    elapsed: Duration::from_millis(200),
                    operations: 1000,
                },
            ],
        }
    }

    #[test]
    fn text_report_lists_every_level() {
        let mut out = Vec::new();
        render_text(&sample_result(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("concurrency"));
        assert!(text.lines().count() >= 4); // header + 2 levels + totals
        assert!(text.contains("total: 1500 operations"));
    }

    #[test]
    fn text_report_handles_empty_result() {
        let result = BenchmarkResult {
            operations: 0,
            total_elapsed: Duration::ZERO,
            levels: Vec::new(),
        };
        let mut out = Vec::new();
        render_text(&result, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("total: 0 operations"));
    }

    #[test]
    fn json_report_roundtrips() {
        let json = render_json(&sample_result()).unwrap();
        let parsed: BenchmarkResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.operations, 1500);
        assert_eq!(parsed.levels.len(), 2);
    }
}
