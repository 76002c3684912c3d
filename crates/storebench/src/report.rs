//! Console summary and chart rendering for a paired benchmark report.

use std::path::{Path, PathBuf};

use plotters::coord::ranged1d::SegmentValue;
use plotters::prelude::*;
use tracing::info;

use crate::error::{Error, Result};
use crate::ops::{BenchReport, StoreTimings};

const CHART_SIZE: (u32, u32) = (640, 480);
const DOCUMENT_COLOR: RGBColor = RGBColor(68, 114, 196);
const RELATIONAL_COLOR: RGBColor = RGBColor(237, 125, 49);

/// Print an aligned per-operation summary of both passes to stdout.
pub fn print_summary(report: &BenchReport) {
    let doc = report.document().store();
    let rel = report.relational().store();
    println!("\nRESULTS");
    println!("{:<16} {:>14} {:>14} {:>12}", "OPERATION", doc, rel, "FASTER");
    println!("{}", "-".repeat(60));
    for (op, d, r) in report.rows() {
        let faster = if d <= r { doc } else { rel };
        println!(
            "{:<16} {:>14} {:>14} {:>12}",
            op.short(),
            format_seconds(d),
            format_seconds(r),
            faster,
        );
    }
}

/// Render the full chart set into `out_dir`, returning the written files.
///
/// One paired comparison chart per operation, one grouped chart across all
/// operations, and one single-store chart per pass — nine files for the
/// six-operation workload. Never fails on degenerate data: an all-zero
/// pass gets a padded axis instead of an empty range.
pub fn render_charts(report: &BenchReport, out_dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)?;
    let mut files = Vec::new();

    for (op, d, r) in report.rows() {
        let path = out_dir.join(format!("{}.svg", op.slug()));
        render_pair(&path, op.label(), report, d, r)?;
        files.push(path);
    }

    let path = out_dir.join("all_operations.svg");
    render_grouped(&path, report)?;
    files.push(path);

    for (side, color) in [
        (report.document(), DOCUMENT_COLOR),
        (report.relational(), RELATIONAL_COLOR),
    ] {
        let path = out_dir.join(format!("{}.svg", slugify(side.store())));
        render_store(&path, side, color)?;
        files.push(path);
    }

    info!(count = files.len(), dir = %out_dir.display(), "charts rendered");
    Ok(files)
}

/// Two-bar comparison chart for one operation.
fn render_pair(
    path: &Path,
    caption: &str,
    report: &BenchReport,
    doc_secs: f64,
    rel_secs: f64,
) -> Result<()> {
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let labels = [
        report.document().store().to_string(),
        report.relational().store().to_string(),
    ];
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(36)
        .y_label_area_size(64)
        .build_cartesian_2d((0usize..2usize).into_segmented(), 0f64..y_ceiling(&[doc_secs, rel_secs]))
        .map_err(chart_err)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("Seconds")
        .x_label_formatter(&|seg| segment_label(seg, &labels))
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(DOCUMENT_COLOR.filled())
                .margin(24)
                .data([(0usize, doc_secs)]),
        )
        .map_err(chart_err)?;
    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(RELATIONAL_COLOR.filled())
                .margin(24)
                .data([(1usize, rel_secs)]),
        )
        .map_err(chart_err)?;

    root.present().map_err(chart_err)
}

/// Grouped chart: side-by-side bars for every operation.
fn render_grouped(path: &Path, report: &BenchReport) -> Result<()> {
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let rows: Vec<_> = report.rows().collect();
    let all: Vec<f64> = rows.iter().flat_map(|(_, d, r)| [*d, *r]).collect();
    let labels: Vec<String> = rows
        .iter()
        .map(|(op, _, _)| op.short().to_string())
        .collect();

    let mut chart = ChartBuilder::on(&root)
        .caption("All operations", ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(36)
        .y_label_area_size(64)
        .build_cartesian_2d(
            (0usize..rows.len() * 2).into_segmented(),
            0f64..y_ceiling(&all),
        )
        .map_err(chart_err)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("Seconds")
        .x_label_formatter(&|seg| match seg {
            // Label the left bar of each pair with its operation.
            SegmentValue::CenterOf(i) if i % 2 == 0 => labels
                .get(i / 2)
                .cloned()
                .unwrap_or_default(),
            _ => String::new(),
        })
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(DOCUMENT_COLOR.filled())
                .margin(4)
                .data(rows.iter().enumerate().map(|(i, (_, d, _))| (i * 2, *d))),
        )
        .map_err(chart_err)?
        .label(report.document().store())
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], DOCUMENT_COLOR.filled()));
    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(RELATIONAL_COLOR.filled())
                .margin(4)
                .data(rows.iter().enumerate().map(|(i, (_, _, r))| (i * 2 + 1, *r))),
        )
        .map_err(chart_err)?
        .label(report.relational().store())
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], RELATIONAL_COLOR.filled()));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)
}

/// Single-store chart across that store's own operations.
fn render_store(path: &Path, side: &StoreTimings, color: RGBColor) -> Result<()> {
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let secs: Vec<f64> = side.timings().iter().map(|t| t.seconds()).collect();
    let labels: Vec<String> = side
        .timings()
        .iter()
        .map(|t| t.operation.short().to_string())
        .collect();

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("{} operation times", side.store()), ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(36)
        .y_label_area_size(64)
        .build_cartesian_2d((0usize..secs.len()).into_segmented(), 0f64..y_ceiling(&secs))
        .map_err(chart_err)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("Seconds")
        .x_label_formatter(&|seg| segment_label(seg, &labels))
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(color.filled())
                .margin(12)
                .data(secs.iter().enumerate().map(|(i, v)| (i, *v))),
        )
        .map_err(chart_err)?;

    root.present().map_err(chart_err)
}

fn segment_label(seg: &SegmentValue<usize>, labels: &[String]) -> String {
    match seg {
        SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
        _ => String::new(),
    }
}

/// Axis ceiling with headroom; all-zero data still gets a drawable range.
fn y_ceiling(values: &[f64]) -> f64 {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    if max > 0.0 {
        max * 1.15
    } else {
        1.0
    }
}

fn format_seconds(secs: f64) -> String {
    let micros = secs * 1e6;
    if micros < 1_000.0 {
        format!("{micros:.0} µs")
    } else if micros < 1_000_000.0 {
        format!("{:.2} ms", micros / 1_000.0)
    } else {
        format!("{secs:.2} s")
    }
}

fn slugify(label: &str) -> String {
    label
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

fn chart_err<E: std::fmt::Display>(e: E) -> Error {
    Error::Chart(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{BenchReport, OpTiming, StoreTimings, OPERATIONS};
    use std::time::Duration;

    fn report_with(doc: &[f64], rel: &[f64]) -> BenchReport {
        let build = |store: &str, secs: &[f64]| {
            StoreTimings::new(
                store,
                OPERATIONS
                    .iter()
                    .zip(secs)
                    .map(|(op, s)| OpTiming::new(*op, Duration::from_secs_f64(*s)))
                    .collect(),
            )
        };
        BenchReport::paired(build("MongoDB", doc), build("PostgreSQL", rel)).unwrap()
    }

    #[test]
    fn renders_nine_files() {
        let report = report_with(
            &[0.01, 0.02, 5.0, 0.5, 0.3, 0.4],
            &[0.005, 0.015, 6.0, 0.4, 0.35, 0.38],
        );
        let dir = tempfile::tempdir().unwrap();
        let files = render_charts(&report, dir.path()).unwrap();
        assert_eq!(files.len(), 9);
        for file in &files {
            assert!(file.exists(), "{} missing", file.display());
        }
    }

    #[test]
    fn all_zero_durations_render() {
        let report = report_with(&[0.0; 6], &[0.0; 6]);
        let dir = tempfile::tempdir().unwrap();
        let files = render_charts(&report, dir.path()).unwrap();
        assert_eq!(files.len(), 9);
    }

    #[test]
    fn summary_prints_without_panicking() {
        let report = report_with(
            &[0.01, 0.02, 5.0, 0.5, 0.3, 0.4],
            &[0.005, 0.015, 6.0, 0.4, 0.35, 0.38],
        );
        print_summary(&report);
    }

    #[test]
    fn formats_across_magnitudes() {
        assert_eq!(format_seconds(0.000_05), "50 µs");
        assert_eq!(format_seconds(0.012), "12.00 ms");
        assert_eq!(format_seconds(2.5), "2.50 s");
    }

    #[test]
    fn slugs_are_file_safe() {
        assert_eq!(slugify("PostgreSQL"), "postgresql");
        assert_eq!(slugify("My Store 2"), "my_store_2");
    }
}
