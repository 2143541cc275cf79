use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use escape_time_explorer::{
    Complex, Fractal, FractalAlgorithm, FractalKinds, HueCycleColourMap, IgnoreEvents, RenderJob,
    RenderScheduler, RenderTarget, compute_row,
};
use std::sync::Arc;

fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");

    // One point that escapes quickly and one inside the set that runs to the cap.
    let points = [
        ("escaping", Complex::new(0.4, 0.4)),
        ("bounded", Complex::new(-0.1, 0.1)),
    ];

    for &kind in FractalKinds::ALL {
        let fractal = Fractal::from(kind);
        for (name, point) in points {
            group.bench_with_input(BenchmarkId::new(kind.to_string(), name), &point, |b, &point| {
                b.iter(|| fractal.iterate(black_box(point)))
            });
        }
    }

    group.finish();
}

fn bench_row(c: &mut Criterion) {
    let fractal = Fractal::from(FractalKinds::Mandelbrot);
    let viewport = fractal.initial_range();
    let colour_map = HueCycleColourMap::new();

    c.bench_function("compute_row_400", |b| {
        b.iter(|| compute_row(&fractal, &colour_map, viewport, 400, black_box(200)))
    });
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_blocking");
    group.sample_size(10);

    let scheduler = RenderScheduler::new(None).expect("thread pool");

    for size in [64u32, 200] {
        let target = Arc::new(RenderTarget::new(size).expect("target"));

        for &kind in FractalKinds::ALL {
            let fractal = Fractal::from(kind);
            let job = RenderJob::new(fractal, fractal.initial_range());

            group.bench_with_input(BenchmarkId::new(kind.to_string(), size), &job, |b, &job| {
                b.iter(|| {
                    scheduler
                        .render_blocking(job, Arc::clone(&target), Arc::new(IgnoreEvents))
                        .expect("render")
                })
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_iterate, bench_row, bench_render);
criterion_main!(benches);
