use boxstack_rs::api::{Axes, BoxSeriesConfig, BoxStackSeries, ChartState};
use boxstack_rs::core::{
    AxisData, BoxSeriesData, ConnectorStyle, PlotRect, Stack, StackSeriesData, sum_of_prev_values,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn series(count: usize, categories: usize, grouped: bool) -> Vec<BoxSeriesData> {
    (0..count)
        .map(|s| {
            let data = (0..categories)
                .map(|c| ((s * 31 + c * 17) % 90 + 10) as f64)
                .collect();
            let series = BoxSeriesData::new(format!("S{s}"), data);
            if grouped {
                series.with_stack_group(format!("g{}", s % 2))
            } else {
                series
            }
        })
        .collect()
}

fn state(categories: usize, stack: Stack, grouped: bool) -> ChartState {
    let data = StackSeriesData::new(series(8, categories, grouped), stack, false)
        .expect("valid stack data");
    ChartState::new(
        PlotRect::new(0.0, 0.0, 1920.0, categories as f64 * 24.0),
        Axes {
            x_axis: AxisData::from_values(&[0.0, 250.0, 500.0, 750.0, 1000.0], 0.0),
            y_axis: AxisData::new(
                (0..categories).map(|c| format!("C{c}")).collect(),
                categories + 1,
                24.0,
            ),
        },
    )
    .with_colors((0..8).map(|i| format!("#{i:06x}")))
    .with_categories((0..categories).map(|c| format!("C{c}")))
    .with_stack_series("bar", data)
}

fn bench_sum_of_prev_values(c: &mut Criterion) {
    let values: Vec<f64> = (0..32).map(|i| f64::from(i) - 12.0).collect();

    c.bench_function("sum_of_prev_values_32", |b| {
        b.iter(|| {
            for index in 0..values.len() {
                let _ = sum_of_prev_values(black_box(&values), index, true);
            }
        })
    });
}

fn bench_flat_stack_render_1k(c: &mut Criterion) {
    let state = state(1_000, Stack::normal().with_connector(ConnectorStyle::default()), false);
    let series = BoxStackSeries::new("bar", BoxSeriesConfig::bar());

    c.bench_function("flat_stack_render_1k", |b| {
        b.iter(|| {
            let _ = series
                .render(black_box(&state))
                .expect("render should succeed");
        })
    });
}

fn bench_grouped_percent_render_1k(c: &mut Criterion) {
    let state = state(1_000, Stack::percent(), true);
    let series = BoxStackSeries::new("bar", BoxSeriesConfig::bar());

    c.bench_function("grouped_percent_render_1k", |b| {
        b.iter(|| {
            let _ = series
                .render(black_box(&state))
                .expect("render should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_sum_of_prev_values,
    bench_flat_stack_render_1k,
    bench_grouped_percent_render_1k
);
criterion_main!(benches);
