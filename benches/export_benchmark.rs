//! Benchmarks for reportdoc export performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks export synthetic reports with growing spreadsheets.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use reportdoc::{ExportOptions, Metric, Report, Spreadsheet};

/// Creates a synthetic report with the given number of spreadsheet rows.
fn create_test_report(row_count: usize) -> Report {
    let mut sheet = Spreadsheet::new("Benchmark Sheet", "Today");
    sheet.add_row(["Segment", "Revenue", "Growth", "Notes"]);
    for i in 0..row_count {
        sheet.add_row([
            format!("Segment {}", i),
            format!("${}K", i * 13 % 997),
            format!("{}%", i % 40),
            "Benchmark notes, long enough to wrap at the default width of ninety characters.".to_string(),
        ]);
    }

    Report::new("Synthetic report used to measure export throughput.")
        .with_highlights(["Revenue up", "Churn flat"])
        .with_metrics(vec![Metric::new("Revenue", "$1.2M")])
        .with_spreadsheet(sheet)
        .with_actions(["Share with finance"])
}

/// Benchmark CSV export at various sizes.
fn bench_delimited(c: &mut Criterion) {
    let mut group = c.benchmark_group("export_delimited");

    for row_count in [10, 100, 1000].iter() {
        let report = create_test_report(*row_count);

        group.bench_function(format!("{}_rows", row_count), |b| {
            b.iter(|| reportdoc::export_delimited(black_box(&report)));
        });
    }

    group.finish();
}

/// Benchmark PDF export at various sizes.
fn bench_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("export_document");
    let plain = ExportOptions::default();
    let compressed = ExportOptions::default().with_compression(true);

    for row_count in [10, 100, 1000].iter() {
        let report = create_test_report(*row_count);

        group.bench_function(format!("{}_rows", row_count), |b| {
            b.iter(|| reportdoc::export_document(black_box(&report), &plain).unwrap());
        });
        group.bench_function(format!("{}_rows_compressed", row_count), |b| {
            b.iter(|| reportdoc::export_document(black_box(&report), &compressed).unwrap());
        });
    }

    group.finish();
}

/// Benchmark word wrapping of a long paragraph.
fn bench_wrap(c: &mut Criterion) {
    let paragraph = "The quick brown fox jumps over the lazy dog. ".repeat(200);

    c.bench_function("wrap_line", |b| {
        b.iter(|| reportdoc::layout::wrap_line(black_box(&paragraph), 90));
    });
}

criterion_group!(benches, bench_delimited, bench_document, bench_wrap);
criterion_main!(benches);
