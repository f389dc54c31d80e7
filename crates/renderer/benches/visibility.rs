//! Benchmarks for catalog construction and visibility resolution

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use energy_dashboard_renderer::{LayerCatalog, LayerGeometry, PointSampler, VisibilityResolver};
use energy_dashboard_shared::{
    CloudScale, LayerMode, StateGeneration, StateSummary, UsState, VisibilitySelection,
    YearlySales, YEARS,
};

fn full_catalog() -> LayerCatalog {
    let summaries: Vec<StateSummary> = UsState::ALL
        .into_iter()
        .enumerate()
        .map(|(i, state)| StateSummary {
            state,
            total_sales: 300_000.0 + i as f64 * 10_000.0,
            total_profit: 30_000.0,
            mean_solar_plants: 5.0 + i as f64,
            mean_wind_plants: 40.0 - i as f64,
            mean_discount: 0.25,
            total_plants: 45.0,
        })
        .collect();
    let yearly: Vec<YearlySales> = YEARS
        .into_iter()
        .flat_map(|year| {
            UsState::ALL.into_iter().map(move |state| YearlySales {
                year,
                state,
                sales: 50_000.0,
            })
        })
        .collect();
    let generation: Vec<StateGeneration> = UsState::ALL
        .into_iter()
        .map(|state| StateGeneration {
            state,
            solar_mwh: 1_200_000.0,
            wind_mwh: 2_400_000.0,
        })
        .collect();

    LayerCatalog::build(&summaries, &yearly, &generation, &CloudScale::default())
}

fn bench_resolve(c: &mut Criterion) {
    let catalog = full_catalog();

    let mut group = c.benchmark_group("resolve");
    for mode in LayerMode::ALL {
        let selection = VisibilitySelection::new(UsState::Texas, mode);
        group.bench_with_input(BenchmarkId::from_parameter(mode.as_str()), &selection, |b, sel| {
            b.iter(|| VisibilityResolver::resolve(black_box(&catalog), black_box(sel)).unwrap());
        });
    }
    group.finish();

    c.bench_function("resolve_all", |b| {
        b.iter(|| VisibilityResolver::resolve_all(black_box(&catalog)).unwrap());
    });
}

fn bench_geometry(c: &mut Criterion) {
    let catalog = full_catalog();
    let sampler = PointSampler::new(42);

    c.bench_function("sample_geometry", |b| {
        b.iter(|| LayerGeometry::sample(black_box(&catalog), &sampler));
    });
}

criterion_group!(benches, bench_resolve, bench_geometry);
criterion_main!(benches);
