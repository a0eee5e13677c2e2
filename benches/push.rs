use criterion::{black_box, criterion_group, criterion_main, Criterion};

use kuba::{Direction, GameState, KubaRules, Move, Player, RulesEngine};

fn bench_push(c: &mut Criterion) {
    let rules = KubaRules::new();
    let state = GameState::standard();
    let mv = Move::new((1, 0), Direction::Right);

    c.bench_function("validate_opening_push", |b| {
        b.iter(|| rules.validate_move(black_box(&state), Player::A, black_box(&mv)))
    });

    c.bench_function("apply_opening_push", |b| {
        b.iter(|| {
            let mut s = state.clone();
            rules.apply_move(&mut s, Player::A, black_box(&mv))
        })
    });

    c.bench_function("legal_moves_opening", |b| {
        b.iter(|| rules.legal_moves(black_box(&state), Player::A))
    });
}

criterion_group!(benches, bench_push);
criterion_main!(benches);
