use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use std::hint::black_box;
use vektor2d_editor::{
    apply_transform, cohen_sutherland_clip, hit_test, ClipRect, Scene, ShapeGeometry,
};

/// Szene mit gemischten Formen auf einem Raster, jede vierte transformiert.
fn build_synthetic_scene(shape_count: usize) -> Scene {
    let mut scene = Scene::new();

    for index in 0..shape_count {
        let x = (index % 100) as f32 * 20.0;
        let y = (index / 100) as f32 * 20.0;
        let a = Vec2::new(x, y);
        let b = a + Vec2::new(12.0, 8.0);
        let geometry = match index % 4 {
            0 => ShapeGeometry::point(a),
            1 => ShapeGeometry::line(a, b),
            2 => ShapeGeometry::rectangle(a, b),
            _ => ShapeGeometry::ellipse(a, b),
        };
        let id = scene.add_shape(geometry, [1.0, 1.0, 1.0], 1.0);

        if index % 4 == 0 {
            if let Some(transform) = scene.transform_mut_or_identity(id) {
                transform.translate(Vec2::new(3.0, 3.0));
                transform.rotate(15.0);
                transform.scale_by(1.1);
            }
        }
    }

    scene
}

fn build_query_points(count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let x = (i % 100) as f32 * 20.0 + 0.37;
            let y = ((i * 7) % 100) as f32 * 20.0 + 0.63;
            Vec2::new(x, y)
        })
        .collect()
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_test");

    for &shape_count in &[100usize, 1_000, 10_000] {
        let scene = build_synthetic_scene(shape_count);
        let query_points = build_query_points(256);

        group.bench_with_input(
            BenchmarkId::new("topmost_batch", shape_count),
            &scene,
            |b, scene| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for point in &query_points {
                        if hit_test(scene, black_box(*point), 10.0).is_some() {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                })
            },
        );
    }

    group.finish();
}

fn bench_apply_transform(c: &mut Criterion) {
    let scene = build_synthetic_scene(4);
    let mut group = c.benchmark_group("apply_transform");

    // Index 0 ist transformiert, Index 1 nutzt den Pfad ohne Transformation
    for (label, index) in [("transformed", 0usize), ("identity", 1usize)] {
        let Some(shape) = scene.get(index) else {
            continue;
        };
        let transform = scene.transform_at(index);
        group.bench_function(label, |b| {
            b.iter(|| black_box(apply_transform(black_box(shape), transform).len()))
        });
    }

    group.finish();
}

fn bench_line_clipping(c: &mut Criterion) {
    let window = ClipRect::from_corners(Vec2::new(100.0, 100.0), Vec2::new(500.0, 400.0));
    let segments: Vec<(Vec2, Vec2)> = (0..1024)
        .map(|i| {
            let t = i as f32;
            (
                Vec2::new((t * 13.0) % 600.0, (t * 7.0) % 500.0),
                Vec2::new((t * 29.0) % 600.0, (t * 17.0) % 500.0),
            )
        })
        .collect();

    c.bench_function("cohen_sutherland_batch", |b| {
        b.iter(|| {
            let mut visible = 0usize;
            for (start, end) in &segments {
                let clipped = cohen_sutherland_clip(black_box(*start), black_box(*end), &window);
                visible += usize::from(clipped.is_some());
            }
            black_box(visible)
        })
    });
}

criterion_group!(
    core_benches,
    bench_hit_test,
    bench_apply_transform,
    bench_line_clipping
);
criterion_main!(core_benches);
