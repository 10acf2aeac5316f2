use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nbody2d::{Body, BodyList, NVec2, NullRenderer, Parameters, Scenario};

/// Deterministic cloud of `n` bodies, no rand needed
fn cloud(n: usize) -> BodyList {
    let bodies = (0..n)
        .map(|i| {
            let i_f = i as f64;
            let x = NVec2::new((i_f * 0.37).sin() * 5.0e11, (i_f * 0.13).cos() * 5.0e11);
            let v = NVec2::new((i_f * 0.07).sin() * 1.0e3, 0.0);
            Body::new(x, v, 1.0e24 * (1.0 + i_f % 7.0), format!("b{}", i))
        })
        .collect::<Result<Vec<_>, _>>()
        .expect("masses are positive");
    BodyList { radius: 1.0e12, bodies }
}

pub fn step_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("euler step");
    for n in [10, 50, 100, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut scenario = Scenario::build_scenario(cloud(n), Parameters::default());
            b.iter(|| {
                scenario.system.t = 0.0;
                scenario.step(&mut NullRenderer).expect("no coincident bodies")
            })
        });
    }
    group.finish();
}

criterion_group!(simulator_benches, step_benchmark);
criterion_main!(simulator_benches);
