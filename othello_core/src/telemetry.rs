use tracing::Level;

/// JSON 形式の `tracing` サブスクライバをグローバルに登録する。
///
/// エンジン自身は登録しないので、表示層やテストから1度だけ呼ぶ。
/// すでに別のサブスクライバが登録済みなら `false`。
#[inline]
#[must_use]
pub fn try_init_json(max_level: Level) -> bool {
    tracing_subscriber::fmt()
        .json()
        .with_max_level(max_level)
        .with_target(true)
        .try_init()
        .is_ok()
}
