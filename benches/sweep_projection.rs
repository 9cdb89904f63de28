/// Sweep benchmarks
///
/// Measures the full scenario × team-size sweep and chart rendering.
use amdahl_viz::chart::LineChart;
use amdahl_viz::projection::project_time;
use amdahl_viz::scenario::builtin_scenarios;
use amdahl_viz::sweep::{run_sweep, Baseline, TeamSizeSweep};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_project_time(c: &mut Criterion) {
    c.bench_function("project_time", |b| {
        b.iter(|| project_time(black_box(720.0), black_box(20), black_box(0.3), black_box(75)))
    });
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_sweep");
    let baseline = Baseline::default();
    let scenarios = builtin_scenarios();

    for end in [100u32, 1_000, 10_000] {
        let sweep = TeamSizeSweep {
            start: 5,
            end,
            step: 5,
        };
        let evaluations = sweep.team_sizes().len() * scenarios.len();
        group.throughput(Throughput::Elements(evaluations as u64));
        group.bench_with_input(BenchmarkId::from_parameter(end), &sweep, |b, sweep| {
            b.iter(|| run_sweep(&baseline, &scenarios, sweep))
        });
    }

    group.finish();
}

fn bench_render_chart(c: &mut Criterion) {
    let baseline = Baseline::default();
    let sweep = TeamSizeSweep::default();
    let results = run_sweep(&baseline, &builtin_scenarios(), &sweep).unwrap();

    c.bench_function("render_svg", |b| {
        b.iter(|| LineChart::new(&baseline, &sweep, black_box(&results)).to_svg())
    });
}

criterion_group!(benches, bench_project_time, bench_sweep, bench_render_chart);
criterion_main!(benches);
