//! Reversi (Othello) rule engine.
//!
//! 盤面・合法手判定・反転処理・手番進行を提供するクレート。
//! 描画や入力はこのクレートの外側（表示層）が `engine::notify::Listener` で購読する。

#![forbid(unsafe_code)]

/// ゲームルール・盤面・進行を提供するモジュール。
pub mod engine;

/// ログ出力の初期化。
pub mod telemetry;
