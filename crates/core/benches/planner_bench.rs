//! Benchmarks for layer evaluation and stack planning.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use u_stacking_core::{evaluate_layer, Material, StackPlanner};

fn layer_benchmark(c: &mut Criterion) {
    c.bench_function("evaluate_layer_6_boxes", |b| {
        b.iter(|| {
            let layout = evaluate_layer(
                black_box(400.0),
                black_box(300.0),
                black_box(1180.0),
                black_box(980.0),
                false,
            );
            black_box(layout)
        })
    });

    // Small boxes stress the placement loop; ~1500 positions per call
    c.bench_function("evaluate_layer_dense_grid", |b| {
        b.iter(|| {
            let layout = evaluate_layer(
                black_box(30.0),
                black_box(25.0),
                black_box(1180.0),
                black_box(980.0),
                false,
            );
            black_box(layout)
        })
    });
}

fn planner_benchmark(c: &mut Criterion) {
    let planner = StackPlanner::default_config();
    let material = Material::new("B1", 400.0, 300.0, 200.0);

    c.bench_function("plan_reference_stack", |b| {
        b.iter(|| {
            let plan = planner.plan(black_box(&material), black_box(1350.0));
            black_box(plan)
        })
    });

    let materials: Vec<Material> = (0..50)
        .map(|i| {
            Material::new(
                format!("B{}", i),
                150.0 + (i as f64) * 7.0,
                120.0 + (i as f64) * 5.0,
                80.0 + (i as f64) * 3.0,
            )
        })
        .collect();

    c.bench_function("plan_50_materials", |b| {
        b.iter(|| {
            for material in &materials {
                let plan = planner.plan(black_box(material), black_box(1350.0));
                black_box(plan).ok();
            }
        })
    });
}

criterion_group!(benches, layer_benchmark, planner_benchmark);
criterion_main!(benches);
