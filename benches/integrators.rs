//! Benchmarks for the sub-stepped integration driver
//!
//! Measures how the macro tick cost scales with body count and substep
//! count, for both shipped integrators.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use orrery::physics::integrators::{ExplicitEuler, Integrator, SemiImplicitEuler};
use orrery::physics::math::{Scalar, Vector};
use orrery::physics::{BodyState, advance};

const TAU: Scalar = std::f64::consts::TAU;

/// Deterministic ring of bodies with tangential velocities.
fn ring_of_bodies(count: usize) -> Vec<BodyState> {
    (0..count)
        .map(|i| {
            let angle = TAU * i as Scalar / count as Scalar;
            let radius = 100.0 + (i % 7) as Scalar;
            BodyState {
                position: Vector::new(radius * angle.cos(), radius * angle.sin(), 0.0),
                velocity: Vector::new(-angle.sin(), angle.cos(), 0.0),
                mass: 1.0 + (i % 3) as Scalar,
            }
        })
        .collect()
}

fn bench_substeps(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_substeps");

    for &substeps in &[1u32, 4, 8, 16] {
        group.bench_with_input(
            BenchmarkId::new("semi_implicit_euler", substeps),
            &substeps,
            |b, &substeps| {
                let integrator = SemiImplicitEuler;
                let bodies = ring_of_bodies(64);
                b.iter(|| {
                    let mut bodies = bodies.clone();
                    advance(black_box(&mut bodies), 1e-4, 0.01, substeps, &integrator).unwrap();
                    bodies
                });
            },
        );
    }

    group.finish();
}

fn bench_body_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_body_count");

    for &count in &[8usize, 32, 128] {
        group.bench_with_input(BenchmarkId::new("pairwise", count), &count, |b, &count| {
            let integrator = SemiImplicitEuler;
            let bodies = ring_of_bodies(count);
            b.iter(|| {
                let mut bodies = bodies.clone();
                advance(black_box(&mut bodies), 1e-4, 0.01, 1, &integrator).unwrap();
                bodies
            });
        });
    }

    group.finish();
}

fn bench_integrator_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("integrator_step_cost");

    let integrators: [(&str, Box<dyn Integrator>); 2] = [
        ("semi_implicit_euler", Box::new(SemiImplicitEuler)),
        ("explicit_euler", Box::new(ExplicitEuler)),
    ];

    for (name, integrator) in &integrators {
        group.bench_function(*name, |b| {
            let bodies = ring_of_bodies(64);
            b.iter(|| {
                let mut bodies = bodies.clone();
                advance(black_box(&mut bodies), 1e-4, 0.01, 4, integrator.as_ref()).unwrap();
                bodies
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_substeps,
    bench_body_count,
    bench_integrator_comparison
);
criterion_main!(benches);
