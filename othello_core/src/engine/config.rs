use crate::engine::board::{BoardSizeError, check_size};
use crate::engine::types::Color;

/// 標準の盤の一辺の長さ。
pub const DEFAULT_BOARD_LEN: u8 = 8;

/// 1ゲームの設定。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct GameConfig {
    /// 先手の色（`None` は未設定で、着手を受け付けない）。
    first_player: Option<Color>,
    /// 盤の高さ。
    height: u8,
    /// 盤の幅。
    width: u8,
}

impl GameConfig {
    /// 先手の色を返す。
    #[inline]
    #[must_use]
    pub const fn first_player(&self) -> Option<Color> {
        self.first_player
    }

    /// 盤の高さを返す。
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u8 {
        self.height
    }

    /// 盤面サイズを検証して設定を生成する（先手は黒）。
    ///
    /// # Errors
    ///
    /// 幅・高さが0または奇数の場合にエラーを返す。
    #[inline]
    pub const fn new(width: u8, height: u8) -> Result<Self, BoardSizeError> {
        if let Err(err) = check_size(width, height) {
            return Err(err);
        }

        Ok(Self {
            first_player: Some(Color::Black),
            height,
            width,
        })
    }

    /// 盤の幅を返す。
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// 先手の色を差し替える。
    #[inline]
    #[must_use]
    pub const fn with_first_player(self, first_player: Option<Color>) -> Self {
        Self {
            first_player,
            height: self.height,
            width: self.width,
        }
    }
}

impl Default for GameConfig {
    #[inline]
    fn default() -> Self {
        Self {
            first_player: Some(Color::Black),
            height: DEFAULT_BOARD_LEN,
            width: DEFAULT_BOARD_LEN,
        }
    }
}
