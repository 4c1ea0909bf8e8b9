//! Benchmarks for layout and windowing performance.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used, clippy::cast_possible_truncation)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gridview::columns::normalize_columns;
use gridview::layout::{distribute_widths, DistributeOpts, RowLayout};
use gridview::sort::sort_rows;
use gridview::{ColumnMode, ColumnSpec, RowHeight, SortDescriptor};
use serde_json::{json, Value};

fn make_rows(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            json!({
                "id": i,
                "name": format!("row-{}", (count - i) % 997),
                "score": ((i * 31) % 1000) as f64 / 10.0,
            })
        })
        .collect()
}

fn make_specs(count: usize) -> Vec<ColumnSpec> {
    (0..count)
        .map(|i| ColumnSpec::named(&format!("Col{i}")).width(100.0))
        .collect()
}

/// Benchmark force-fill width distribution across column counts
fn bench_force_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("force_fill");

    for count in [10usize, 50, 200] {
        let columns = normalize_columns(&make_specs(count));
        group.bench_with_input(BenchmarkId::new("columns", count), &columns, |b, cols| {
            b.iter(|| {
                let mut cols = cols.clone();
                distribute_widths(
                    &mut cols,
                    black_box(1400.0),
                    ColumnMode::Force,
                    DistributeOpts::default(),
                );
                cols
            })
        });
    }

    group.finish();
}

/// Benchmark stable multi-column sorting over JSON rows
fn bench_sort(c: &mut Criterion) {
    let columns = normalize_columns(&[
        ColumnSpec::named("Name"),
        ColumnSpec::named("Score"),
        ColumnSpec::named("Id"),
    ]);
    let sorts = vec![SortDescriptor::asc("name"), SortDescriptor::desc("score")];

    let mut group = c.benchmark_group("sort");

    for count in [1_000usize, 10_000, 100_000] {
        let rows = make_rows(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("rows", count), &rows, |b, rows| {
            b.iter(|| sort_rows(black_box(rows), &columns, &sorts))
        });
    }

    group.finish();
}

/// Benchmark window computation for uniform row heights
fn bench_window_fixed(c: &mut Criterion) {
    let layout = RowLayout::new(1_000_000, &RowHeight::Fixed(30.0));

    c.bench_function("window_fixed_1m_rows", |b| {
        let mut scroll = 0.0_f32;
        b.iter(|| {
            scroll = (scroll + 733.0) % 29_000_000.0;
            layout.visible_window(black_box(scroll), 600.0)
        })
    });
}

/// Benchmark window computation with per-row heights (binary search path)
fn bench_window_variable(c: &mut Criterion) {
    let heights = RowHeight::Variable(std::sync::Arc::new(|i| {
        if i % 10 == 0 {
            60.0
        } else {
            24.0
        }
    }));
    let layout = RowLayout::new(100_000, &heights);

    c.bench_function("window_variable_100k_rows", |b| {
        let mut scroll = 0.0_f32;
        b.iter(|| {
            scroll = (scroll + 733.0) % 2_000_000.0;
            layout.visible_window(black_box(scroll), 600.0)
        })
    });
}

criterion_group!(
    benches,
    bench_force_fill,
    bench_sort,
    bench_window_fixed,
    bench_window_variable,
);

criterion_main!(benches);
