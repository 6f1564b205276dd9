use core::fmt;

use crate::engine::board::{Board, BoardSizeError};
use crate::engine::config::GameConfig;
use crate::engine::notify::{Event, Listener};
use crate::engine::resolver::{self, PlaceabilityReport};
use crate::engine::types::{CellState, Color, Coord};

/// セッション操作の誤用。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum SessionError {
    /// 初期配置はすでに済んでいる。
    AlreadyInitialized,
}

impl fmt::Display for SessionError {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::AlreadyInitialized => formatter.write_str("board is already initialized"),
        }
    }
}

impl core::error::Error for SessionError {}

/// 1ゲーム分の盤面と手番を所有し、進行を管理する。
///
/// 盤面を書き換えるのはこの型だけで、変更はすべて `listener` に同期して通知される。
#[derive(Clone, Debug)]
pub struct Session<L = ()> {
    /// 盤面。
    board: Board,
    /// 現在の手番（`None` は未設定で、着手を受け付けない）。
    current_player: Option<Color>,
    /// 初期配置済みか。
    initialized: bool,
    /// 通知先。
    listener: L,
}

impl Session<()> {
    /// 通知先なしで標準設定（黒先手）のセッションを生成する。
    ///
    /// # Errors
    ///
    /// 幅・高さが0または奇数の場合にエラーを返す。
    #[inline]
    pub fn new(width: u8, height: u8) -> Result<Self, BoardSizeError> {
        match GameConfig::new(width, height) {
            Ok(config) => Ok(Self::with_config(config, ())),
            Err(err) => Err(err),
        }
    }
}

impl<L: Listener> Session<L> {
    /// 盤面を返す。
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// 指定マスの状態を返す。盤面外なら `None`。
    #[inline]
    #[must_use]
    pub fn cell_at(&self, coord: Coord) -> Option<CellState> {
        self.board.get(coord)
    }

    /// 石数（黒、白）を返す。
    #[inline]
    #[must_use]
    pub fn counts(&self) -> (u32, u32) {
        self.board.counts()
    }

    /// 現在の手番を返す。
    #[inline]
    #[must_use]
    pub const fn current_player(&self) -> Option<Color> {
        self.current_player
    }

    /// 任意の局面から再開する（初期配置済みとして扱う）。
    #[inline]
    #[must_use]
    pub const fn from_board(board: Board, current_player: Option<Color>, listener: L) -> Self {
        Self {
            board,
            current_player,
            initialized: true,
            listener,
        }
    }

    /// 初期配置（中央4石）を置き、先手の着手可能位置を通知する。
    ///
    /// 黒は `center` と `center - (1, 1)`、白は `center - (1, 0)` と `center - (0, 1)`。
    ///
    /// # Errors
    ///
    /// 2回目以降の呼び出しは `SessionError::AlreadyInitialized` を返し、何も変更しない。
    #[inline]
    pub fn initialize_board(&mut self) -> Result<(), SessionError> {
        if self.initialized {
            return Err(SessionError::AlreadyInitialized);
        }
        self.initialized = true;

        let cx = self.board.width() / 2;
        let cy = self.board.height() / 2;
        let low_x = cx.saturating_sub(1);
        let low_y = cy.saturating_sub(1);

        let start = [
            (Coord::new(cx, cy), CellState::Black),
            (Coord::new(low_x, low_y), CellState::Black),
            (Coord::new(low_x, cy), CellState::White),
            (Coord::new(cx, low_y), CellState::White),
        ];
        for (coord, state) in start {
            self.board.set(coord, state, &mut self.listener);
        }

        tracing::debug!(
            width = self.board.width(),
            height = self.board.height(),
            first = ?self.current_player,
            "board initialized"
        );

        if let Some(color) = self.current_player {
            let report = resolver::placeability_report(&self.board, color);
            self.publish(report);
        }

        Ok(())
    }

    /// 通知先を取り出してセッションを破棄する。
    #[inline]
    pub fn into_listener(self) -> L {
        self.listener
    }

    /// 現手番の着手可能位置を求める。手番が未設定なら `None`。
    #[inline]
    #[must_use]
    pub fn legal_moves(&self) -> Option<PlaceabilityReport> {
        self.current_player
            .map(|color| resolver::placeability_report(&self.board, color))
    }

    /// 通知先を返す。
    #[inline]
    #[must_use]
    pub const fn listener(&self) -> &L {
        &self.listener
    }

    /// 通知先への可変参照を返す。
    #[inline]
    pub const fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// 着手可能位置を通知する。
    fn publish(&mut self, report: PlaceabilityReport) {
        self.listener.on_event(&Event::LegalMovesChanged(report));
    }

    /// 手番を進める。
    ///
    /// - 相手に合法手があれば手番を渡してその一覧を通知し、`true`。
    /// - 相手が打てず自分が打てるならパスとして手番を維持し、`true`。
    /// - 双方打てなければ空の一覧を通知して `false`（終局）。
    ///
    /// 手番が未設定なら何も通知せず `false`。
    #[inline]
    pub fn try_change_turn(&mut self) -> bool {
        let Some(color) = self.current_player else {
            tracing::trace!("turn change without a current player");
            return false;
        };

        let opponent = color.opponent();
        let opponent_report = resolver::placeability_report(&self.board, opponent);
        if !opponent_report.is_empty() {
            self.current_player = Some(opponent);
            tracing::debug!(
                player = ?opponent,
                moves = opponent_report.count(),
                "turn changed"
            );
            self.publish(opponent_report);
            return true;
        }

        let own_report = resolver::placeability_report(&self.board, color);
        if !own_report.is_empty() {
            tracing::debug!(
                passed = ?opponent,
                player = ?color,
                moves = own_report.count(),
                "opponent passes"
            );
            self.publish(own_report);
            return true;
        }

        let (black, white) = self.board.counts();
        tracing::debug!(black, white, "game over");
        self.publish(own_report);
        false
    }

    /// 現手番の石を `coord` に置く。
    ///
    /// 反転する石を先に更新し、最後に着手マスを更新する。合法手でなければ何も変えずに
    /// `false`。
    #[inline]
    pub fn try_place_piece(&mut self, coord: Coord) -> bool {
        let Some(color) = self.current_player else {
            tracing::trace!(x = coord.x(), y = coord.y(), "placement without a current player");
            return false;
        };

        let captures = resolver::capture_set(&self.board, coord, color);
        if captures.is_empty() {
            tracing::trace!(x = coord.x(), y = coord.y(), player = ?color, "illegal placement");
            return false;
        }

        let state = CellState::from(color);
        for &cell in captures.cells() {
            self.board.set(cell, state, &mut self.listener);
        }
        self.board.set(coord, state, &mut self.listener);

        tracing::debug!(
            x = coord.x(),
            y = coord.y(),
            player = ?color,
            flipped = captures.len(),
            "piece placed"
        );
        true
    }

    /// 設定から初期配置前のセッションを生成する。
    #[inline]
    #[must_use]
    pub fn with_config(config: GameConfig, listener: L) -> Self {
        Self {
            board: Board::new_unchecked(config.width(), config.height()),
            current_player: config.first_player(),
            initialized: false,
            listener,
        }
    }
}

#[cfg(test)]
mod tests;
