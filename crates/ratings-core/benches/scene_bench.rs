// File: crates/ratings-core/benches/scene_bench.rs
// Summary: Layout + scene building + SVG serialization throughput.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ratings_core::{svg, BarChart, ChartConfig, Dataset};

const HEADERS: [&str; 6] =
    ["Season", "Year", "Episodes", "Avg. Viewers (mil)", "Most watched episode", "Viewers (mil)"];

fn build_dataset(n: usize) -> Dataset {
    let records = (0..n).map(|i| {
        let avg = (i as f64 * 0.37).sin().abs() * 15.0;
        vec![
            (i + 1).to_string(),
            (1990 + i).to_string(),
            "22".to_string(),
            format!("{avg:.2}"),
            format!("Episode {i}"),
            format!("{:.2}", avg * 1.4),
        ]
    });
    Dataset::from_records(HEADERS, records).expect("records")
}

fn bench_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("bar_chart");
    for &n in &[30usize, 1_000usize] {
        let ds = build_dataset(n);
        group.bench_function(format!("layout_{n}"), |b| {
            b.iter(|| black_box(BarChart::new(ds.clone(), ChartConfig::default()).expect("layout")));
        });
        let chart = BarChart::new(ds.clone(), ChartConfig::default()).expect("layout");
        group.bench_function(format!("svg_{n}"), |b| {
            b.iter(|| black_box(svg::to_svg_string(&chart.render())));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scene);
criterion_main!(benches);
