use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mancala_engine::{KalahGame, RulesEngine, UniformRandom};

fn bench_auto_play(c: &mut Criterion) {
    c.bench_function("auto_play_full_game", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            let mut game = KalahGame::with_seed(seed);
            black_box(game.auto_play())
        })
    });
}

fn bench_valid_spaces(c: &mut Criterion) {
    let game = KalahGame::with_seed(42);
    c.bench_function("valid_spaces", |b| b.iter(|| black_box(game.valid_spaces())));
}

fn bench_play_out(c: &mut Criterion) {
    c.bench_function("play_out_uniform", |b| {
        let mut policy = UniformRandom::from_seed(7);
        b.iter(|| {
            let mut game = KalahGame::with_seed(3);
            black_box(game.play_out(&mut policy, 10_000))
        })
    });
}

criterion_group!(benches, bench_auto_play, bench_valid_spaces, bench_play_out);
criterion_main!(benches);
