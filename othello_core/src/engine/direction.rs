use crate::engine::types::Coord;

/// 挟み判定で辿る単位方向。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Direction {
    /// x 方向の増分（-1..=1）。
    dx: i8,
    /// y 方向の増分（-1..=1）。
    dy: i8,
}

/// 8方向（北から時計回り）。
pub const ALL: [Direction; 8] = [
    Direction::new(0, 1),
    Direction::new(1, 1),
    Direction::new(1, 0),
    Direction::new(1, -1),
    Direction::new(0, -1),
    Direction::new(-1, -1),
    Direction::new(-1, 0),
    Direction::new(-1, 1),
];

impl Direction {
    /// x 方向の増分を返す。
    #[inline]
    #[must_use]
    pub const fn dx(self) -> i8 {
        self.dx
    }

    /// y 方向の増分を返す。
    #[inline]
    #[must_use]
    pub const fn dy(self) -> i8 {
        self.dy
    }

    /// 方向を生成する。
    const fn new(dx: i8, dy: i8) -> Self {
        Self { dx, dy }
    }

    /// `from` から1マス進んだ座標を返す。
    ///
    /// 負の座標や `u8` の範囲外になる場合は `None`。盤面の範囲は判定しない。
    #[inline]
    #[must_use]
    pub const fn step(self, from: Coord) -> Option<Coord> {
        let x = match from.x().checked_add_signed(self.dx) {
            Some(value) => value,
            None => return None,
        };
        let y = match from.y().checked_add_signed(self.dy) {
            Some(value) => value,
            None => return None,
        };

        Some(Coord::new(x, y))
    }
}
