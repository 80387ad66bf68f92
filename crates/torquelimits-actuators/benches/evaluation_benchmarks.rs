//! Benchmark tests for registry evaluation.
//!
//! Run with: cargo bench --bench evaluation_benchmarks

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use nalgebra::DVector;
use torquelimits_actuators::{Actuator, BiomechanicalModel, Direction};
use torquelimits_curves::{Gauss3p, SigmoidGauss3p};
use torquelimits_kinematics::{Joint, Segment, SerialChain};
use torquelimits_scalar::Expr;

fn chain(dof: usize) -> SerialChain {
    let mut chain = SerialChain::new();
    for i in 0..dof {
        let parent = i.checked_sub(1).map(|p| format!("link{p}"));
        let segment = Segment::new(
            format!("link{i}"),
            parent.as_deref(),
            Joint::revolute(nalgebra::Vector3::z_axis()),
        );
        if let Err(e) = chain.add_segment(segment) {
            panic!("chain: {e}");
        }
    }
    chain
}

fn model(dof: usize) -> BiomechanicalModel<SerialChain> {
    let mut model = BiomechanicalModel::new(chain(dof));
    for i in 0..dof {
        let flexor = Gauss3p {
            t0: 50.0,
            wmax: 800.0,
            wc: 200.0,
            amin: 0.9,
            wr: 40.0,
            w1: -90.0,
            r: 60.0,
            qopt: 100.0,
        };
        let extensor = SigmoidGauss3p {
            theta: 100.0,
            lambda: 2.0,
            offset: 10.0,
            r: 0.8,
            qopt: 1.0,
        };
        let added = model
            .add_actuator(Actuator::new("j", i, Direction::Concentric, flexor))
            .and_then(|()| {
                model.add_actuator(Actuator::new("j", i, Direction::Eccentric, extensor))
            });
        if let Err(e) = added {
            panic!("model: {e}");
        }
    }
    if let Err(e) = model.close_actuators() {
        panic!("model: {e}");
    }
    model
}

fn alternating(dof: usize, scale: f64) -> DVector<f64> {
    DVector::from_fn(dof, |i, _| if i % 2 == 0 { scale } else { -scale })
}

fn bench_f64_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_f64");
    for dof in [2usize, 12, 40] {
        let model = model(dof);
        let activation = alternating(dof, 0.6);
        let pose = DVector::from_element(dof, 1.1);
        let velocity = alternating(dof, 0.4);

        group.bench_with_input(BenchmarkId::new("pair", dof), &dof, |b, _| {
            b.iter(|| std::hint::black_box(model.max_torque_pair(&pose, &velocity)));
        });
        group.bench_with_input(BenchmarkId::new("directed", dof), &dof, |b, _| {
            b.iter(|| std::hint::black_box(model.max_torque(&activation, &pose, &velocity)));
        });
        group.bench_with_input(BenchmarkId::new("signed", dof), &dof, |b, _| {
            b.iter(|| std::hint::black_box(model.torque(&activation, &pose, &velocity)));
        });
    }
    group.finish();
}

fn bench_symbolic_construction(c: &mut Criterion) {
    let dof = 12;
    let model = model(dof);
    let symbols = |prefix: &str| DVector::from_fn(dof, |i, _| Expr::var(format!("{prefix}{i}")));
    let activation = symbols("a");
    let pose = symbols("q");
    let velocity = symbols("qd");

    c.bench_function("registry_symbolic_signed_12", |b| {
        b.iter(|| std::hint::black_box(model.torque(&activation, &pose, &velocity)));
    });
}

criterion_group!(benches, bench_f64_modes, bench_symbolic_construction);
criterion_main!(benches);
