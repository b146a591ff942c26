//! Table engine benchmarks for Tabula.
//!
//! Benchmarks for:
//! - Row insertion with type parsing
//! - Column addition across populated tables (including capacity growth)
//! - Column deletion
//! - Deep copy

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tabula_bench::utils::{generate_student_rows, student_table};
use tabula_common::DataType;
use tabula_table::Table;

/// Benchmark row inserts into an empty table.
fn bench_add_row(c: &mut Criterion) {
    let mut group = c.benchmark_group("table/add_row");

    for size in [1000, 10_000, 50_000].iter() {
        let rows = generate_student_rows(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut table = Table::new();
                table.add_column("name", DataType::Text);
                table.add_column("age", DataType::Integer);
                table.add_column("score", DataType::Real);
                for row in &rows {
                    table.add_row(row).unwrap();
                }
                black_box(table.row_count())
            });
        });
    }

    group.finish();
}

/// Benchmark adding columns to a populated table, crossing several doublings.
fn bench_add_column(c: &mut Criterion) {
    let mut group = c.benchmark_group("table/add_column");

    for size in [1000, 10_000].iter() {
        let base = student_table(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut table = base.clone();
                for i in 0..16 {
                    table.add_column(format!("extra_{}", i), DataType::Integer);
                }
                black_box(table.capacity())
            });
        });
    }

    group.finish();
}

/// Benchmark deleting the first column of a populated table.
fn bench_delete_column(c: &mut Criterion) {
    let mut group = c.benchmark_group("table/delete_column");

    for size in [1000, 10_000].iter() {
        let base = student_table(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut table = base.clone();
                table.delete_column_by_idx(0).unwrap();
                black_box(table.column_count())
            });
        });
    }

    group.finish();
}

/// Benchmark deep copies.
fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("table/clone");

    for size in [1000, 10_000, 50_000].iter() {
        let table = student_table(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(table.clone()));
        });
    }

    group.finish();
}

/// Benchmark rendering all rows as strings.
fn bench_get_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("table/get_rows");

    for size in [1000, 10_000].iter() {
        let table = student_table(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(table.get_rows().len()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_add_row,
    bench_add_column,
    bench_delete_column,
    bench_clone,
    bench_get_rows,
);
criterion_main!(benches);
