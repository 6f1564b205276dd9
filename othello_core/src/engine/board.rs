use core::fmt;

use crate::engine::notify::{CellChange, Event, Listener};
use crate::engine::types::{CellState, Coord};

/// 盤面サイズが不正な理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum BoardSizeError {
    /// 幅または高さが0。
    NonPositive,
    /// 幅または高さが奇数（中央が定まらない）。
    Odd,
}

impl fmt::Display for BoardSizeError {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::NonPositive => formatter.write_str("board dimensions must be positive"),
            Self::Odd => formatter.write_str("board dimensions must be even"),
        }
    }
}

impl core::error::Error for BoardSizeError {}

/// 盤面サイズが正かつ偶数であることを確かめる。
///
/// # Errors
///
/// 幅・高さが0なら `NonPositive`、奇数なら `Odd`。
#[inline]
pub const fn check_size(width: u8, height: u8) -> Result<(), BoardSizeError> {
    if width == u8::MIN || height == u8::MIN {
        return Err(BoardSizeError::NonPositive);
    }

    if width % 2 != 0 || height % 2 != 0 {
        return Err(BoardSizeError::Odd);
    }

    Ok(())
}

/// テキスト盤面の読み込みに失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum BoardParseError {
    /// 行が1つも無い。
    Empty,
    /// 行の長さが揃っていない。
    RaggedRow {
        /// 長さが合わない行（y 座標）。
        row: usize,
    },
    /// 盤面サイズが不正。
    Size(BoardSizeError),
    /// 行数または列数が `u8` に収まらない。
    TooLarge,
    /// 解釈できない文字。
    UnknownCell {
        /// 列（x 座標）。
        column: usize,
        /// 行（y 座標）。
        row: usize,
        /// 読めなかった文字。
        symbol: char,
    },
}

impl fmt::Display for BoardParseError {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Empty => formatter.write_str("board text has no rows"),
            Self::RaggedRow { row } => write!(formatter, "row {row} has a different length"),
            Self::Size(err) => write!(formatter, "invalid board size: {err}"),
            Self::TooLarge => formatter.write_str("board text exceeds 255 rows or columns"),
            Self::UnknownCell {
                column,
                row,
                symbol,
            } => write!(formatter, "unknown cell {symbol:?} at ({column}, {row})"),
        }
    }
}

impl core::error::Error for BoardParseError {
    #[inline]
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match *self {
            Self::Size(ref err) => Some(err),
            Self::Empty | Self::RaggedRow { .. } | Self::TooLarge | Self::UnknownCell { .. } => {
                None
            }
        }
    }
}

/// 盤面（マス状態の2次元配列）。
///
/// 内部は `y * width + x` の1次元配列。
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    /// 各マスの状態。
    cells: Vec<CellState>,
    /// 高さ（マス）。
    height: u8,
    /// 幅（マス）。
    width: u8,
}

impl Board {
    /// 座標が盤面内かどうかを返す。
    #[inline]
    #[must_use]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.x() < self.width && coord.y() < self.height
    }

    /// 石数（黒、白）を返す。
    #[inline]
    #[must_use]
    pub fn counts(&self) -> (u32, u32) {
        let mut black = u32::MIN;
        let mut white = u32::MIN;

        for cell in &self.cells {
            match *cell {
                CellState::Black => black = black.saturating_add(1),
                CellState::White => white = white.saturating_add(1),
                CellState::Empty => {}
            }
        }

        (black, white)
    }

    /// テキストから盤面を生成する。
    ///
    /// `rows[0]` が `y = 0` の行。`.` は空き、`B`/`X` は黒、`W`/`O` は白。
    ///
    /// # Errors
    ///
    /// 行の長さが揃わない、未知の文字を含む、サイズが不正な場合にエラーを返す。
    #[inline]
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardParseError> {
        let Some(first) = rows.first() else {
            return Err(BoardParseError::Empty);
        };

        let width_len = first.chars().count();
        let (Ok(width), Ok(height)) = (u8::try_from(width_len), u8::try_from(rows.len())) else {
            return Err(BoardParseError::TooLarge);
        };

        let mut board = match Self::new(width, height) {
            Ok(value) => value,
            Err(err) => return Err(BoardParseError::Size(err)),
        };

        let mut cells = Vec::with_capacity(board.cells.len());
        for (row, text) in rows.iter().enumerate() {
            if text.chars().count() != width_len {
                return Err(BoardParseError::RaggedRow { row });
            }

            for (column, symbol) in text.chars().enumerate() {
                let state = match symbol {
                    '.' => CellState::Empty,
                    'B' | 'X' => CellState::Black,
                    'W' | 'O' => CellState::White,
                    _ => {
                        return Err(BoardParseError::UnknownCell {
                            column,
                            row,
                            symbol,
                        });
                    }
                };
                cells.push(state);
            }
        }

        board.cells = cells;
        Ok(board)
    }

    /// 指定マスの状態を返す。盤面外なら `None`。
    #[inline]
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<CellState> {
        match self.index(coord) {
            Some(idx) => self.cells.get(idx).copied(),
            None => None,
        }
    }

    /// 高さを返す。
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u8 {
        self.height
    }

    /// 座標を内部配列のインデックスに変換する。
    fn index(&self, coord: Coord) -> Option<usize> {
        if !self.contains(coord) {
            return None;
        }

        let row = usize::from(coord.y()).checked_mul(usize::from(self.width));
        row.and_then(|value| value.checked_add(usize::from(coord.x())))
    }

    /// すべて空きマスの盤面を生成する。
    ///
    /// # Errors
    ///
    /// 幅・高さが0または奇数の場合にエラーを返す。
    #[inline]
    pub fn new(width: u8, height: u8) -> Result<Self, BoardSizeError> {
        if let Err(err) = check_size(width, height) {
            return Err(err);
        }

        Ok(Self::new_unchecked(width, height))
    }

    /// サイズ検証を行わずに空の盤面を生成する（検証済みの設定向け）。
    pub(crate) fn new_unchecked(width: u8, height: u8) -> Self {
        let len = usize::from(width).saturating_mul(usize::from(height));
        Self {
            cells: vec![CellState::Empty; len],
            height,
            width,
        }
    }

    /// すべての座標を列優先（x 外側、y 内側）で列挙する。
    #[inline]
    pub fn positions(&self) -> impl Iterator<Item = Coord> + use<> {
        let height = self.height;
        (u8::MIN..self.width).flat_map(move |x| (u8::MIN..height).map(move |y| Coord::new(x, y)))
    }

    /// 指定マスを上書きし、変更を `listener` に通知する。
    ///
    /// 盤面外の座標は呼び出し側の誤り。
    pub(crate) fn set<L: Listener>(&mut self, coord: Coord, state: CellState, listener: &mut L) {
        debug_assert!(self.contains(coord), "write outside the board at {coord}");

        let Some(cell) = self.index(coord).and_then(|idx| self.cells.get_mut(idx)) else {
            return;
        };
        *cell = state;

        tracing::trace!(x = coord.x(), y = coord.y(), state = ?state, "cell changed");
        listener.on_event(&Event::CellChanged(CellChange::new(coord, state)));
    }

    /// 幅を返す。
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u8 {
        self.width
    }
}

impl fmt::Display for Board {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in u8::MIN..self.height {
            for x in u8::MIN..self.width {
                let state = self.get(Coord::new(x, y)).unwrap_or_default();
                write!(formatter, "{}", state.symbol())?;
            }
            writeln!(formatter)?;
        }
        Ok(())
    }
}
