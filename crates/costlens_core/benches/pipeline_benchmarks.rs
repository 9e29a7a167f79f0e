//! Criterion benchmarks for the costlens_core pipeline
//!
//! Run with: cargo bench -p costlens_core

use costlens_core::levelized::{calculate_lcoe, calculate_lcoh};
use costlens_core::model::{DataType, ProjectInput};
use costlens_core::transform::AnalysisCatalog;
use costlens_core::tornado::build_tornado;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

const CATEGORIES: [&str; 10] = [
    "capex",
    "opex",
    "fuel",
    "production",
    "hydrogen",
    "discount_rate",
    "project_life",
    "revenue",
    "land",
    "insurance",
];

fn create_inputs(count: usize) -> Vec<ProjectInput> {
    (0..count)
        .map(|i| {
            let category = CATEGORIES[i % CATEGORIES.len()];
            let data_type = if i % 3 == 0 {
                DataType::TimeSeries
            } else {
                DataType::Constant
            };
            ProjectInput::new(format!("input-{i}"), format!("Input {i}"), category, 100.0 + i as f64)
                .with_data_type(data_type)
        })
        .collect()
}

fn bench_levelized(c: &mut Criterion) {
    let mut group = c.benchmark_group("levelized");
    for count in [10, 100, 1_000] {
        let inputs = create_inputs(count);
        group.bench_with_input(BenchmarkId::new("lcoe_lcoh", count), &inputs, |b, inputs| {
            b.iter(|| (calculate_lcoe(black_box(inputs)), calculate_lcoh(black_box(inputs))));
        });
    }
    group.finish();
}

fn bench_catalog(c: &mut Criterion) {
    let now = jiff::Timestamp::UNIX_EPOCH;
    let mut group = c.benchmark_group("catalog");
    for count in [10, 100, 1_000] {
        let inputs = create_inputs(count);
        group.bench_with_input(BenchmarkId::new("build", count), &inputs, |b, inputs| {
            b.iter(|| AnalysisCatalog::build(black_box(inputs), now));
        });
    }
    group.finish();
}

fn bench_tornado(c: &mut Criterion) {
    let catalog = AnalysisCatalog::build(&create_inputs(1_000), jiff::Timestamp::UNIX_EPOCH);
    c.bench_function("tornado_1000", |b| {
        b.iter(|| build_tornado("NPV", black_box(1_000_000.0), &catalog.variables));
    });
}

criterion_group!(benches, bench_levelized, bench_catalog, bench_tornado);
criterion_main!(benches);
