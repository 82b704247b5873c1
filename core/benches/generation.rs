use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use minefield_core::*;

fn presets() -> [(&'static str, FieldConfig); 4] {
    [
        ("beginner", FieldConfig::beginner()),
        ("intermediate", FieldConfig::intermediate()),
        ("expert", FieldConfig::expert()),
        ("classic", FieldConfig::classic()),
    ]
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (name, config) in presets() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, &config| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                Field::with_seed(black_box(config), seed)
            })
        });
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_cells");
    for (name, config) in presets() {
        let mines = RandomMinePlacer::from_seed(1).place(config.mines, config.dimensions);
        group.bench_with_input(BenchmarkId::from_parameter(name), &mines, |b, mines| {
            b.iter(|| build_cells(config.dimensions, black_box(mines)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_build);
criterion_main!(benches);
