/// 盤面（マス状態の2次元配列）。
pub mod board;
/// 初期設定（盤面サイズ、先手）。
pub mod config;
/// 挟み判定で辿る8方向。
pub mod direction;
/// エンジンから表示層への通知。
pub mod notify;
/// 着手可否と反転する石の判定。
pub mod resolver;
/// 手番進行と終局判定。
pub mod session;
pub mod types;

pub use session::Session;

pub type Board = board::Board;
pub type BoardSizeError = board::BoardSizeError;
pub type CaptureSet = resolver::CaptureSet;
pub type CellChange = notify::CellChange;
pub type CellState = types::CellState;
pub type Color = types::Color;
pub type Coord = types::Coord;
pub type Event = notify::Event;
pub type GameConfig = config::GameConfig;
pub type PlaceabilityReport = resolver::PlaceabilityReport;
pub type Recorder = notify::Recorder;
pub type SessionError = session::SessionError;
