use std::hint::black_box;

use animal_chess_core::{Dispatch, Game, Square};
use criterion::{Criterion, criterion_group, criterion_main};

/// Lower captures the upper lion on the fourth move.
const SHORT_GAME: &[Square] = &[
    Square::B1,
    Square::A2,
    Square::B3,
    Square::B2,
    Square::A2,
    Square::A3,
    Square::A4,
    Square::A3,
];

fn play_short_game() -> u32 {
    let mut game: Game = Game::default();
    for &sq in SHORT_GAME {
        if let Ok(Dispatch::Moved(record)) = game.click(black_box(sq)) {
            black_box(record);
        }
    }
    assert!(game.is_over());
    game.turn()
}

fn dispatch_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    group.bench_function("short_game", |b| b.iter(play_short_game));

    group.bench_function("reselect", |b| {
        let mut game: Game = Game::default();
        b.iter(|| {
            let _ = game.click(black_box(Square::B2));
            let _ = game.click(black_box(Square::A1));
        });
    });

    group.finish();
}

criterion_group!(benches, dispatch_benchmark);
criterion_main!(benches);
