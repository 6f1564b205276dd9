use crate::engine::board::Board;
use crate::engine::direction::{self, Direction};
use crate::engine::types::{CellState, Color, Coord};

/// 着手で反転する石の集合。
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct CaptureSet {
    /// 方向表の順、各方向内は着手点から近い順。
    cells: Vec<Coord>,
}

impl CaptureSet {
    /// 反転するマスを返す。
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// 指定マスが反転対象かを返す。
    #[inline]
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// 反転する石が無いかを返す。
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// 反転する石の数を返す。
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }
}

/// ある色の着手可能位置の一覧。
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PlaceabilityReport {
    /// 対象の色。
    color: Color,
    /// 着手可能な座標（`Board::positions` の順）。
    positions: Vec<Coord>,
}

impl PlaceabilityReport {
    /// 対象の色を返す。
    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// 指定マスに着手可能かを返す。
    #[inline]
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.positions.contains(&coord)
    }

    /// 着手可能位置の数を返す。
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.positions.len()
    }

    /// 着手可能位置が無いかを返す。
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// 一覧を生成する。
    #[inline]
    #[must_use]
    pub const fn new(color: Color, positions: Vec<Coord>) -> Self {
        Self { color, positions }
    }

    /// 着手可能な座標を返す。
    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[Coord] {
        &self.positions
    }
}

/// `color` が `coord` に置いたときに反転する石を返す。
///
/// 盤面外・空きでないマスでは空集合。
#[inline]
#[must_use]
pub fn capture_set(board: &Board, coord: Coord, color: Color) -> CaptureSet {
    let mut cells = Vec::new();
    if board.get(coord) != Some(CellState::Empty) {
        return CaptureSet { cells };
    }

    for dir in direction::ALL {
        collect_bracket(board, coord, dir, color, &mut cells);
    }

    CaptureSet { cells }
}

/// 1方向について挟める相手石を `out` に追加する。
fn collect_bracket(board: &Board, from: Coord, dir: Direction, color: Color, out: &mut Vec<Coord>) {
    let own = CellState::from(color);
    let other = CellState::from(color.opponent());
    let limit = board.width().max(board.height());
    let start = out.len();
    let mut cursor = from;

    for _ in u8::MIN..limit {
        let Some(next) = dir.step(cursor) else {
            break;
        };

        match board.get(next) {
            Some(state) if state == other => {
                out.push(next);
                cursor = next;
            }
            Some(state) if state == own => return,
            Some(_) | None => break,
        }
    }

    out.truncate(start);
}

/// `color` が `coord` に着手可能かを返す。
#[inline]
#[must_use]
pub fn is_legal(board: &Board, coord: Coord, color: Color) -> bool {
    !capture_set(board, coord, color).is_empty()
}

/// `color` の着手可能位置を盤面全体から求める。
#[inline]
#[must_use]
pub fn placeability_report(board: &Board, color: Color) -> PlaceabilityReport {
    let positions = board
        .positions()
        .filter(|&coord| is_legal(board, coord, color))
        .collect();

    PlaceabilityReport::new(color, positions)
}
