use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::StdRng};

use monty_hall::game::{GameConfig, Strategy, simulate_game};
use monty_hall::trials::{TrialsBuilder, run_trials};

fn bench_simulate_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate_game");

    for (doors, reveal) in [(3, 1), (10, 1), (10, 8), (100, 98)] {
        for strategy in Strategy::ALL {
            let config = GameConfig::new(doors, reveal, strategy).unwrap();
            group.bench_with_input(
                BenchmarkId::new(strategy.as_str(), format!("{doors}_doors_{reveal}_revealed")),
                &config,
                |b, config| {
                    let mut rng = StdRng::seed_from_u64(42);
                    b.iter(|| simulate_game(config, &mut rng));
                },
            );
        }
    }

    group.finish();
}

fn bench_run_trials(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_trials");
    let config = GameConfig::default();

    for game_instances in [1_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("single_rng", game_instances),
            &game_instances,
            |b, &game_instances| {
                let mut rng = StdRng::seed_from_u64(42);
                b.iter(|| run_trials(&config, game_instances, &mut rng));
            },
        );
    }

    group.finish();
}

fn bench_workers(c: &mut Criterion) {
    let mut group = c.benchmark_group("workers");

    for threads in [1, 2, 4] {
        let trials = TrialsBuilder::new()
            .game_instances(100_000)
            .threads(threads)
            .seed(42)
            .build()
            .unwrap();
        group.bench_with_input(BenchmarkId::new("threads", threads), &trials, |b, trials| {
            b.iter(|| trials.run().unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_simulate_game, bench_run_trials, bench_workers);
criterion_main!(benches);
