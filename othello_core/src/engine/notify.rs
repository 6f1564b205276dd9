use crate::engine::resolver::PlaceabilityReport;
use crate::engine::types::{CellState, Coord};

/// 1マス分の更新情報。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct CellChange {
    /// 更新されたマス。
    coord: Coord,
    /// 更新後の状態。
    state: CellState,
}

impl CellChange {
    /// 更新されたマスを返す。
    #[inline]
    #[must_use]
    pub const fn coord(self) -> Coord {
        self.coord
    }

    /// 更新情報を生成する。
    #[inline]
    #[must_use]
    pub const fn new(coord: Coord, state: CellState) -> Self {
        Self { coord, state }
    }

    /// 更新後の状態を返す。
    #[inline]
    #[must_use]
    pub const fn state(self) -> CellState {
        self.state
    }
}

/// エンジンから購読者へ送られる通知。
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Event {
    /// マスの状態が変わった。
    CellChanged(CellChange),
    /// 着手可能位置が再計算された。
    LegalMovesChanged(PlaceabilityReport),
}

/// 通知の受け手。
///
/// 通知は変更と同期して、適用順に届く。
pub trait Listener {
    /// 通知を1件受け取る。
    fn on_event(&mut self, event: &Event);
}

/// 通知を捨てる。
impl Listener for () {
    #[inline]
    fn on_event(&mut self, _event: &Event) {}
}

impl<L: Listener + ?Sized> Listener for &mut L {
    #[inline]
    fn on_event(&mut self, event: &Event) {
        (**self).on_event(event);
    }
}

/// 届いた通知を順に保持する。
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Recorder {
    /// 受信済みの通知。
    events: Vec<Event>,
}

impl Recorder {
    /// マス更新の通知だけを受信順に返す。
    #[inline]
    pub fn cell_changes(&self) -> impl Iterator<Item = CellChange> + '_ {
        self.events.iter().filter_map(|event| match *event {
            Event::CellChanged(change) => Some(change),
            Event::LegalMovesChanged(_) => None,
        })
    }

    /// 受信済みの通知を返す。
    #[inline]
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// 最後に届いた着手可能位置の通知を返す。
    #[inline]
    #[must_use]
    pub fn last_report(&self) -> Option<&PlaceabilityReport> {
        self.events.iter().rev().find_map(|event| match *event {
            Event::CellChanged(_) => None,
            Event::LegalMovesChanged(ref report) => Some(report),
        })
    }

    /// 空のレコーダーを生成する。
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// 受信済みの通知を取り出し、内部を空にする。
    #[inline]
    pub fn take(&mut self) -> Vec<Event> {
        core::mem::take(&mut self.events)
    }
}

impl Listener for Recorder {
    #[inline]
    fn on_event(&mut self, event: &Event) {
        self.events.push(event.clone());
    }
}
