use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use trend_chart::api::{ChartConfig, ChartSnapshot, DatasetConfig, RenderStyle, build_render_pass};
use trend_chart::core::{CanvasMetrics, resolve_y_range, thin_label_indices};
use trend_chart::interaction::nearest_index;

fn wave_config(categories: usize, series: usize) -> ChartConfig {
    let labels: Vec<String> = (0..categories).map(|i| format!("D{i}")).collect();
    let mut config = ChartConfig::new(labels);
    for s in 0..series {
        let data: Vec<Option<f64>> = (0..categories)
            .map(|i| {
                if (i + s) % 17 == 0 {
                    None
                } else {
                    Some(50.0 + (i as f64 * 0.07 + s as f64).sin() * 20.0)
                }
            })
            .collect();
        config = config.with_dataset(DatasetConfig::new(format!("series-{s}"), data));
    }
    config
}

fn bench_label_thinning(c: &mut Criterion) {
    c.bench_function("thin_label_indices_10k", |b| {
        b.iter(|| {
            let _ = thin_label_indices(black_box(10_000));
        })
    });
}

fn bench_y_range_resolution_10k(c: &mut Criterion) {
    let values: Vec<Option<f64>> = (0..10_000)
        .map(|i| (i % 13 != 0).then(|| (i as f64 * 0.01).cos() * 100.0))
        .collect();

    c.bench_function("resolve_y_range_10k", |b| {
        b.iter(|| {
            let _ = resolve_y_range(None, black_box(&values).iter().copied());
        })
    });
}

fn bench_nearest_index_2k(c: &mut Criterion) {
    let metrics = CanvasMetrics::from_client_size(1600.0, 900.0, 1.0).expect("valid metrics");
    let pass = build_render_pass(
        &ChartConfig::new((0..2_000).map(|i| i.to_string())),
        &RenderStyle::default(),
        metrics,
        None,
    );
    let xs = pass.x_positions;

    c.bench_function("nearest_index_2k", |b| {
        b.iter(|| {
            let _ = nearest_index(black_box(&xs), black_box(811.3));
        })
    });
}

fn bench_render_pass_4x2k(c: &mut Criterion) {
    let metrics = CanvasMetrics::from_client_size(1600.0, 900.0, 2.0).expect("valid metrics");
    let config = wave_config(2_000, 4);
    let style = RenderStyle::default();

    c.bench_function("build_render_pass_4x2k", |b| {
        b.iter(|| {
            let _ = build_render_pass(black_box(&config), &style, metrics, black_box(Some(997)));
        })
    });
}

fn bench_snapshot_json_4x2k(c: &mut Criterion) {
    let metrics = CanvasMetrics::from_client_size(1600.0, 900.0, 1.0).expect("valid metrics");
    let config = wave_config(2_000, 4);
    let pass = build_render_pass(&config, &RenderStyle::default(), metrics, None);
    let snapshot = ChartSnapshot {
        labels: config.labels.clone(),
        datasets: pass.datasets,
    };

    c.bench_function("snapshot_json_4x2k", |b| {
        b.iter(|| {
            let _ = black_box(&snapshot)
                .to_json_pretty()
                .expect("snapshot json should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_label_thinning,
    bench_y_range_resolution_10k,
    bench_nearest_index_2k,
    bench_render_pass_4x2k,
    bench_snapshot_json_4x2k
);
criterion_main!(benches);
