//! `othello_core::engine` の性能計測（合法手の全走査、着手適用）。

use core::hint::black_box;
use criterion::BatchSize;
use criterion::Criterion;
use othello_core::engine::{self, resolver};

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 初期配置済みの標準盤セッションを返す。
fn initial_session() -> engine::Session {
    let mut session = engine::Session::with_config(engine::GameConfig::default(), ());
    let _: Result<(), engine::SessionError> = session.initialize_board();
    session
}

/// `resolver::placeability_report` を計測する。
fn bench_placeability_report(criterion: &mut Criterion) {
    let session = initial_session();

    criterion.bench_function("engine/placeability_report_initial", |bench| {
        bench.iter(|| {
            black_box(resolver::placeability_report(
                session.board(),
                engine::Color::Black,
            ))
        });
    });
}

/// `Session::try_place_piece` と `Session::try_change_turn` を計測する。
fn bench_place_and_change_turn(criterion: &mut Criterion) {
    let square = engine::Coord::new(2, 4);

    criterion.bench_function("engine/place_and_change_turn_initial", |bench| {
        bench.iter_batched(
            initial_session,
            |mut session| {
                black_box(session.try_place_piece(square));
                black_box(session.try_change_turn())
            },
            BatchSize::SmallInput,
        );
    });
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();

    bench_placeability_report(&mut criterion);
    bench_place_and_change_turn(&mut criterion);

    criterion.final_summary();
}
