use criterion::{criterion_group, criterion_main, Criterion, black_box};
use chesscoach::board::Position;
use chesscoach::search::advisor::Advisor;
use chesscoach::search::eval::Evaluator;

fn bench_eval(c: &mut Criterion) {
    let p = Position::demo();
    let eval = Evaluator::default();
    let advisor = Advisor::default();
    c.bench_function("best_move_demo", |ben| {
        ben.iter(|| black_box(eval.best_move(black_box(&p))))
    });
    c.bench_function("advisor_demo", |ben| {
        ben.iter(|| black_box(advisor.recommend(black_box(&p))))
    });
}

criterion_group!(benches, bench_eval);
criterion_main!(benches);
