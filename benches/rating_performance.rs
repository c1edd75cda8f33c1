//! Performance benchmarks for RPI calculations

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rpi_engine::config::{CoefficientProvider, StaticCoefficientProvider};
use rpi_engine::roster::RosterBuilder;
use rpi_engine::types::Team;
use rpi_engine::{RatingCalculator, RpiCalculator};

/// League where every team plays `games_per_team` random opponents
fn random_league(team_count: usize, games_per_team: usize, seed: u64) -> Vec<Team> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut builder = RosterBuilder::new();

    for i in 0..team_count {
        builder = builder.team(format!("team{}", i), format!("Team {}", i));
    }

    for home in 0..team_count {
        for _ in 0..games_per_team / 2 {
            let mut away = rng.gen_range(0..team_count);
            if away == home {
                away = (away + 1) % team_count;
            }
            builder = builder.played(
                format!("team{}", home),
                format!("team{}", away),
                rng.gen_range(0..100),
                rng.gen_range(0..100),
            );
        }
    }

    builder.build()
}

fn bench_league_sizes(c: &mut Criterion) {
    let coefficients = StaticCoefficientProvider::new()
        .coefficients_for("basketball")
        .unwrap();
    let calculator = RpiCalculator::new();

    let mut group = c.benchmark_group("rpi_league_size");
    for team_count in [32usize, 128, 512] {
        let teams = random_league(team_count, 30, 7);
        group.bench_with_input(BenchmarkId::from_parameter(team_count), &teams, |b, teams| {
            b.iter(|| black_box(calculator.calculate(black_box(teams), &coefficients).unwrap()))
        });
    }
    group.finish();
}

fn bench_sequential_vs_parallel(c: &mut Criterion) {
    let coefficients = StaticCoefficientProvider::new()
        .coefficients_for("generic")
        .unwrap();
    let teams = random_league(1024, 30, 42);

    let sequential = RpiCalculator::with_parallel_threshold(usize::MAX);
    let parallel = RpiCalculator::with_parallel_threshold(1);

    let mut group = c.benchmark_group("rpi_1024_teams");
    group.sample_size(20);
    group.bench_function("sequential", |b| {
        b.iter(|| black_box(sequential.calculate(&teams, &coefficients).unwrap()))
    });
    group.bench_function("parallel", |b| {
        b.iter(|| black_box(parallel.calculate(&teams, &coefficients).unwrap()))
    });
    group.finish();
}

criterion_group!(benches, bench_league_sizes, bench_sequential_vs_parallel);
criterion_main!(benches);
