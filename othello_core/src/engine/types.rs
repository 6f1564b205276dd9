use core::fmt;

/// 石の色（手番）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Color {
    /// 先手。
    Black,
    /// 後手。
    White,
}

impl Color {
    /// 相手側の色を返す。
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }
}

/// マスの状態。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum CellState {
    /// 黒石。
    Black,
    /// 空きマス。
    #[default]
    Empty,
    /// 白石。
    White,
}

impl CellState {
    /// 石が置かれていればその色を返す。
    #[inline]
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Self::Black => Some(Color::Black),
            Self::Empty => None,
            Self::White => Some(Color::White),
        }
    }

    /// 空きマスかどうかを返す。
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// 盤面テキスト表現の1文字を返す。
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Black => 'B',
            Self::Empty => '.',
            Self::White => 'W',
        }
    }
}

impl From<Color> for CellState {
    #[inline]
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Self::Black,
            Color::White => Self::White,
        }
    }
}

/// 盤面上の座標。
///
/// 原点は盤の隅で、x は右へ、y は上へ増える。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// x 座標。
    x: u8,
    /// y 座標。
    y: u8,
}

impl Coord {
    /// 座標を生成する（盤面の範囲は `Board` 側で判定する）。
    #[inline]
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// x 座標を返す。
    #[inline]
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// y 座標を返す。
    #[inline]
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }
}

impl fmt::Display for Coord {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.x, self.y)
    }
}
