use criterion::{criterion_group, criterion_main, Criterion, black_box};
use chesscoach::board::{Color, Position};
use chesscoach::movegen::candidate_moves;
use chesscoach::perft::perft;

fn bench_movegen(c: &mut Criterion) {
    let p = Position::demo();
    c.bench_function("candidate_moves_demo", |ben| {
        ben.iter(|| {
            let v = candidate_moves(black_box(&p), Color::White);
            black_box(v.len())
        })
    });
    c.bench_function("perft2_demo", |ben| {
        ben.iter(|| black_box(perft(black_box(&p), 2)))
    });
}

criterion_group!(benches, bench_movegen);
criterion_main!(benches);
