use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use orrery_engine::{position, solve_kepler, InputEvent, OrbitalElements, Orrery};
use std::hint::black_box;

const POLL_ITERS: u64 = 1024;
const MULTIPLIER: f64 = std::f64::consts::TAU / POLL_ITERS as f64;

#[inline(always)]
fn poll_solver(eccentricity: f64) {
    for i in 0..POLL_ITERS {
        let m = i as f64 * MULTIPLIER;
        black_box(solve_kepler(black_box(m), black_box(eccentricity)));
    }
}

#[inline(always)]
fn poll_position(elements: &OrbitalElements) {
    for i in 0..POLL_ITERS {
        let t = i as f64 * elements.period_days / POLL_ITERS as f64;
        black_box(position(elements, black_box(t)));
    }
}

fn solver_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_kepler@mean_anomaly");
    group.throughput(Throughput::Elements(POLL_ITERS));

    for e in [0.0167, 0.2056, 0.441, 0.85, 0.99] {
        group.bench_function(format!("e={e}"), |b| b.iter(|| poll_solver(black_box(e))));
    }
    group.finish();

    let eris = OrbitalElements::new(67.67, 203830.0, 0.441);
    let mut group = c.benchmark_group("position@time");
    group.throughput(Throughput::Elements(POLL_ITERS));
    group.bench_function("eris", |b| b.iter(|| poll_position(black_box(&eris))));
    group.finish();
}

fn frame_benchmark(c: &mut Criterion) {
    let mut orrery = Orrery::with_defaults();
    orrery.apply(InputEvent::Select(orrery.catalogue().find("Pluto")));

    let mut group = c.benchmark_group("orrery");
    group.throughput(Throughput::Elements(orrery.catalogue().len() as u64));
    group.bench_function("tick", |b| {
        b.iter(|| black_box(orrery.tick(black_box(1.0 / 60.0)).number))
    });
    group.finish();
}

criterion_group!(benches, solver_benchmark, frame_benchmark);
criterion_main!(benches);
