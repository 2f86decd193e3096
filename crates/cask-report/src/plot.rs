use std::fmt::Write as _;
use std::path::Path;

use cask_bench::BenchmarkResult;

use crate::error::ReportError;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 420.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;

/// Render the per-level series (average time per operation vs. concurrency
/// level) as an SVG line chart at `path`.
pub fn render_svg(result: &BenchmarkResult, path: &Path) -> Result<(), ReportError> {
    let svg = svg_document(result)?;
    std::fs::write(path, svg)?;
    Ok(())
}

fn svg_document(result: &BenchmarkResult) -> Result<String, ReportError> {
    if result.levels.is_empty() {
        return Err(ReportError::EmptySeries);
    }

    let points: Vec<(f64, f64)> = result
        .levels
        .iter()
        .map(|sample| {
            (
                sample.concurrency as f64,
                sample.avg_per_op().as_secs_f64() * 1e6,
            )
        })
        .collect();

    let x_min = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let x_max = points.iter().map(|p| p.0).fold(0.0, f64::max);
    let y_max = points.iter().map(|p| p.1).fold(0.0, f64::max);
    // Degenerate spans (single level, all-zero timings) still need a scale.
    let x_span = (x_max - x_min).max(1.0);
    let y_span = y_max.max(1e-3);

    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let to_x = |x: f64| MARGIN_LEFT + (x - x_min) / x_span * plot_w;
    let to_y = |y: f64| MARGIN_TOP + plot_h - y / y_span * plot_h;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}">"#
    );
    let _ = writeln!(svg, r#"<rect width="{WIDTH}" height="{HEIGHT}" fill="white"/>"#);
    let _ = writeln!(
        svg,
        r#"<text x="{}" y="24" text-anchor="middle" font-family="sans-serif" font-size="16">Average time per operation</text>"#,
        WIDTH / 2.0
    );

    // Axes.
    let x_axis_y = MARGIN_TOP + plot_h;
    let _ = writeln!(
        svg,
        r#"<line x1="{MARGIN_LEFT}" y1="{x_axis_y}" x2="{}" y2="{x_axis_y}" stroke="black"/>"#,
        MARGIN_LEFT + plot_w
    );
    let _ = writeln!(
        svg,
        r#"<line x1="{MARGIN_LEFT}" y1="{MARGIN_TOP}" x2="{MARGIN_LEFT}" y2="{x_axis_y}" stroke="black"/>"#
    );
    let _ = writeln!(
        svg,
        r#"<text x="{}" y="{}" text-anchor="middle" font-family="sans-serif" font-size="12">Concurrency level</text>"#,
        MARGIN_LEFT + plot_w / 2.0,
        HEIGHT - 16.0
    );
    let _ = writeln!(
        svg,
        r#"<text x="18" y="{}" text-anchor="middle" font-family="sans-serif" font-size="12" transform="rotate(-90 18 {})">µs per operation</text>"#,
        MARGIN_TOP + plot_h / 2.0,
        MARGIN_TOP + plot_h / 2.0
    );

    // Horizontal gridlines with y-axis tick labels.
    for tick in 0..=4 {
        let value = y_span * f64::from(tick) / 4.0;
        let y = to_y(value);
        let _ = writeln!(
            svg,
            r#"<line x1="{MARGIN_LEFT}" y1="{y:.1}" x2="{}" y2="{y:.1}" stroke="lightgray"/>"#,
            MARGIN_LEFT + plot_w
        );
        let _ = writeln!(
            svg,
            r#"<text x="{}" y="{:.1}" text-anchor="end" font-family="sans-serif" font-size="10">{value:.2}</text>"#,
            MARGIN_LEFT - 6.0,
            y + 3.0
        );
    }

    // Per-level x-axis tick labels.
    for point in &points {
        let _ = writeln!(
            svg,
            r#"<text x="{:.1}" y="{}" text-anchor="middle" font-family="sans-serif" font-size="10">{}</text>"#,
            to_x(point.0),
            x_axis_y + 16.0,
            point.0 as usize
        );
    }

    // The series itself.
    let polyline: Vec<String> = points
        .iter()
        .map(|p| format!("{:.1},{:.1}", to_x(p.0), to_y(p.1)))
        .collect();
    let _ = writeln!(
        svg,
        r#"<polyline points="{}" fill="none" stroke="steelblue" stroke-width="2"/>"#,
        polyline.join(" ")
    );
    for point in &points {
        let _ = writeln!(
            svg,
            r#"<circle cx="{:.1}" cy="{:.1}" r="3" fill="steelblue"/>"#,
            to_x(point.0),
            to_y(point.1)
        );
        let _ = writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-family="sans-serif" font-size="10">{:.2} µs</text>"#,
            to_x(point.0),
            to_y(point.1) - 8.0,
            point.1
        );
    }

    let _ = writeln!(svg, "</svg>");
    Ok(svg)
}
