//! `chessvar_core::engine::rules` の性能計測（合法性判定）。

use core::hint::black_box;
use criterion::BenchmarkId;
use criterion::Criterion;
use chessvar_core::engine;
use chessvar_core::engine::rules;

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 中盤らしい局面（両者が数手ずつ指したもの）を返す。
fn developed_game() -> engine::Game {
    let mut game = engine::Game::initial();
    for (from, to) in [
        ("E2", "E4"),
        ("E7", "E5"),
        ("G1", "F3"),
        ("B8", "C6"),
        ("F1", "C4"),
        ("G8", "F6"),
        ("D2", "D3"),
        ("F8", "C5"),
    ] {
        if game.attempt_move(from, to).is_err() {
            break;
        }
    }
    game
}

/// 全ての (from, to) の組について合法性を判定し、合法手の数を返す。
fn count_legal_pairs(board: &engine::Board, color: engine::Color) -> usize {
    engine::Square::all()
        .flat_map(|from| engine::Square::all().map(move |to| (from, to)))
        .filter(|&(from, to)| rules::is_legal_move(board, color, from, to))
        .count()
}

/// 局面ごとに全組合せの判定を計測する。
fn bench_all_pairs(criterion: &mut Criterion) {
    let samples = [engine::Game::initial(), developed_game()];
    let mut group = criterion.benchmark_group("rules/all_pairs");

    for (index, game) in samples.iter().enumerate() {
        let bench_id = BenchmarkId::new("pos", index);
        group.bench_with_input(bench_id, game, |bench, input| {
            bench.iter(|| black_box(count_legal_pairs(input.board(), input.side_to_move())));
        });
    }

    group.finish();
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();
    bench_all_pairs(&mut criterion);
    criterion.final_summary();
}
