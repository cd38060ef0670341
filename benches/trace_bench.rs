use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lightpath::{utils, Emitter, MaterialTable, Rectangle, TraceOptions, Tracer, AIR};
use nalgebra::Point2;

static MEDIA: [&str; 4] = ["water", "glass", "diamond", "mirror"];

fn build_tracer() -> Tracer {
    Tracer::new(
        TraceOptions::default(),
        MaterialTable::default(),
        Rectangle::default(),
    )
    .expect("default tracer is valid")
}

pub fn single_trace_benchmark(c: &mut Criterion) {
    let tracer = build_tracer();
    let emitter = Emitter::new(Point2::new(100.0, 350.0), 20.0);

    let mut group = c.benchmark_group("Single trace");
    for medium in &MEDIA {
        group.bench_with_input(BenchmarkId::new("Trace", medium), medium, |b, m| {
            b.iter(|| tracer.trace_emitter(&emitter, m))
        });
    }
    group.finish();
}

pub fn sweep_benchmark(c: &mut Criterion) {
    let tracer = build_tracer();
    let angles = utils::angle_range(-60.0, 60.0, 0.5);

    c.bench_function("Sweep glass", |b| {
        b.iter(|| tracer.sweep(Point2::new(100.0, 350.0), &angles, AIR, "glass", false))
    });
}

criterion_group!(benches, single_trace_benchmark, sweep_benchmark);
criterion_main!(benches);
