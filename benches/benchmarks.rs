use lab3::core::*;
use lab3::piecewise::*;
use lab3::runs::*;
use lab3::series::*;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        building_prefix_sums,
        solving_short_runs,
        solving_long_runs,
        reconstructing_line,
        searching_minimax,
        solving_arbitrary,
        rendering_table,
        summing_series,
}

/// Deterministic spread of values in [-100, 100].
fn sequence(n: usize) -> Sequence {
    (0..n)
        .map(|i| (i * 7919 % 201) as Value - 100)
        .collect::<Vec<_>>()
        .into()
}

fn building_prefix_sums(c: &mut criterion::Criterion) {
    let ref sequence = sequence(1 << 20);
    c.bench_function("build prefix sums over 2^20 elements", |b| {
        b.iter(|| Prefix::from(sequence))
    });
}

fn solving_short_runs(c: &mut criterion::Criterion) {
    let ref prefix = Prefix::from(&sequence(1 << 20));
    c.bench_function("solve 2^20 elements with runs up to 2", |b| {
        b.iter(|| Advantage::solve(prefix, 2))
    });
}

fn solving_long_runs(c: &mut criterion::Criterion) {
    let ref prefix = Prefix::from(&sequence(1 << 16));
    c.bench_function("solve 2^16 elements with runs up to 64", |b| {
        b.iter(|| Advantage::solve(prefix, 64))
    });
}

fn reconstructing_line(c: &mut criterion::Criterion) {
    let solver = Solver::new(sequence(1 << 16), 8).expect("valid instance");
    c.bench_function("reconstruct optimal line over 2^16 elements", |b| {
        b.iter(|| solver.line())
    });
}

fn searching_minimax(c: &mut criterion::Criterion) {
    let ref sequence = sequence(12);
    c.bench_function("exhaustive minimax over 12 elements with runs up to 3", |b| {
        b.iter(|| minimax(&RunGame::root(sequence, 3)))
    });
}

fn solving_arbitrary(c: &mut criterion::Criterion) {
    c.bench_function("solve an arbitrary small instance", |b| {
        b.iter(|| Solver::random().verdict())
    });
}

fn rendering_table(c: &mut criterion::Criterion) {
    c.bench_function("render the piecewise table", |b| {
        b.iter(|| Table::default().to_string())
    });
}

fn summing_series(c: &mut criterion::Criterion) {
    let series = Series::new(MAX_POWER, 2).expect("valid series");
    c.bench_function("sum k^24 / 2^k exactly", |b| b.iter(|| series.sum()));
}
