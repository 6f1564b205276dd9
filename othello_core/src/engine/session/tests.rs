use super::{Session, SessionError};
use crate::engine::board::Board;
use crate::engine::config::GameConfig;
use crate::engine::notify::{CellChange, Event, Listener, Recorder};
use crate::engine::resolver::{self, PlaceabilityReport};
use crate::engine::types::{CellState, Color, Coord};

fn standard_session() -> Session<Recorder> {
    let mut session = Session::with_config(GameConfig::default(), Recorder::new());
    assert_eq!(session.initialize_board(), Ok(()));
    session
}

fn session_from(rows: &[&str], player: Color) -> Session<Recorder> {
    let board = Board::from_rows(rows).unwrap_or_else(|err| panic!("{err}"));
    Session::from_board(board, Some(player), Recorder::new())
}

fn snapshot<L: Listener>(session: &Session<L>) -> Vec<(Coord, Option<CellState>)> {
    session
        .board()
        .positions()
        .map(|coord| (coord, session.cell_at(coord)))
        .collect()
}

#[test]
fn initial_position_is_four_symmetric_pieces_for_every_even_size() {
    let mut sizes = vec![(2_u8, 4_u8), (4, 2)];
    for width in (4_u8..=12).step_by(2) {
        for height in (4_u8..=12).step_by(2) {
            sizes.push((width, height));
        }
    }

    for (width, height) in sizes {
        let config = GameConfig::new(width, height).unwrap_or_else(|err| panic!("{err}"));
        let mut session = Session::with_config(config, Recorder::new());
        assert_eq!(session.initialize_board(), Ok(()));

        assert_eq!(session.counts(), (2, 2), "{width}x{height}");
        for coord in session.board().positions() {
            let mirror = Coord::new(width - 1 - coord.x(), height - 1 - coord.y());
            assert_eq!(
                session.cell_at(coord),
                session.cell_at(mirror),
                "{width}x{height} at {coord}"
            );
        }

        let report = session.listener().last_report().cloned();
        assert!(
            report.as_ref().is_some_and(|value| value.color() == Color::Black && !value.is_empty()),
            "{width}x{height}: {report:?}"
        );
    }
}

#[test]
fn initial_report_on_standard_board_is_the_four_openings() {
    let session = standard_session();
    let expected = PlaceabilityReport::new(
        Color::Black,
        vec![
            Coord::new(2, 4),
            Coord::new(3, 5),
            Coord::new(4, 2),
            Coord::new(5, 3),
        ],
    );

    assert_eq!(session.listener().last_report(), Some(&expected));
    assert_eq!(session.legal_moves(), Some(expected));
    assert_eq!(session.cell_at(Coord::new(4, 4)), Some(CellState::Black));
    assert_eq!(session.cell_at(Coord::new(3, 3)), Some(CellState::Black));
    assert_eq!(session.cell_at(Coord::new(3, 4)), Some(CellState::White));
    assert_eq!(session.cell_at(Coord::new(4, 3)), Some(CellState::White));
}

#[test]
fn initialization_updates_cells_before_publishing_moves() {
    let session = standard_session();
    let events = session.listener().events();

    assert_eq!(events.len(), 5);
    assert!(events.iter().take(4).all(|event| matches!(*event, Event::CellChanged(_))));
    assert!(matches!(events.last(), Some(&Event::LegalMovesChanged(_))));
}

#[test]
fn second_initialization_is_rejected_without_changes() {
    let mut session = standard_session();
    let before = snapshot(&session);
    let events_before = session.listener().events().len();

    assert_eq!(
        session.initialize_board(),
        Err(SessionError::AlreadyInitialized)
    );
    assert_eq!(snapshot(&session), before);
    assert_eq!(session.listener().events().len(), events_before);
}

#[test]
fn placement_outside_the_report_changes_nothing() {
    let mut session = standard_session();
    let report = session.legal_moves().unwrap_or_else(|| panic!("no current player"));
    let before = snapshot(&session);
    session.listener_mut().take();

    let mut candidates: Vec<Coord> = session.board().positions().collect();
    candidates.push(Coord::new(8, 0));
    candidates.push(Coord::new(0, 8));
    candidates.push(Coord::new(u8::MAX, u8::MAX));

    for coord in candidates.into_iter().filter(|&coord| !report.contains(coord)) {
        assert!(!session.try_place_piece(coord), "accepted {coord}");
    }

    assert_eq!(snapshot(&session), before);
    assert!(session.listener().events().is_empty());
    assert_eq!(session.current_player(), Some(Color::Black));
}

#[test]
fn placement_flips_exactly_the_capture_set() {
    let mut session = standard_session();
    let target = Coord::new(2, 4);
    let captures = resolver::capture_set(session.board(), target, Color::Black);
    let before = snapshot(&session);
    session.listener_mut().take();

    assert!(session.try_place_piece(target));

    for (coord, old) in before {
        let now = session.cell_at(coord);
        if coord == target || captures.contains(coord) {
            assert_eq!(now, Some(CellState::Black), "{coord}");
        } else {
            assert_eq!(now, old, "{coord}");
        }
    }
    assert_eq!(captures.cells(), &[Coord::new(3, 4)]);
    assert_eq!(session.counts(), (4, 1));

    let changes: Vec<CellChange> = session.listener().cell_changes().collect();
    assert_eq!(
        changes,
        vec![
            CellChange::new(Coord::new(3, 4), CellState::Black),
            CellChange::new(target, CellState::Black),
        ]
    );
    assert!(session.listener().last_report().is_none());
}

#[test]
fn queries_are_stable_without_mutation() {
    let session = standard_session();

    for coord in session.board().positions() {
        assert_eq!(session.cell_at(coord), session.cell_at(coord));
    }
    assert_eq!(session.cell_at(Coord::new(8, 8)), None);
    assert_eq!(session.cell_at(Coord::new(8, 8)), None);
}

#[test]
fn brackets_along_separate_directions_are_united() {
    let mut session = session_from(
        &[
            ".WB.....", //
            "WW......", //
            "B.B.....", //
            "........", //
            "........", //
            "........", //
            "........", //
            "........", //
        ],
        Color::Black,
    );

    assert!(session.try_place_piece(Coord::new(0, 0)));

    let changes: Vec<CellChange> = session.listener().cell_changes().collect();
    assert_eq!(
        changes,
        vec![
            CellChange::new(Coord::new(0, 1), CellState::Black),
            CellChange::new(Coord::new(1, 1), CellState::Black),
            CellChange::new(Coord::new(1, 0), CellState::Black),
            CellChange::new(Coord::new(0, 0), CellState::Black),
        ]
    );
    assert_eq!(session.counts(), (7, 0));
}

#[test]
fn turn_moves_to_opponent_when_current_player_is_stuck() {
    let mut session = session_from(&["WB..", "....", "....", "...."], Color::Black);
    assert!(session.legal_moves().is_some_and(|report| report.is_empty()));

    assert!(session.try_change_turn());

    assert_eq!(session.current_player(), Some(Color::White));
    let expected = PlaceabilityReport::new(Color::White, vec![Coord::new(2, 0)]);
    assert_eq!(session.listener().last_report(), Some(&expected));
}

#[test]
fn turn_stays_when_opponent_must_pass() {
    let mut session = session_from(&["WB..", "....", "....", "...."], Color::White);

    assert!(session.try_change_turn());

    assert_eq!(session.current_player(), Some(Color::White));
    let report = session.listener().last_report();
    assert!(report.is_some_and(|value| value.color() == Color::White && value.count() == 1));
}

#[test]
fn game_end_when_neither_side_can_move() {
    let mut session = session_from(&["BB..", "....", "....", "...."], Color::Black);
    let before = snapshot(&session);

    assert!(!session.try_change_turn());
    assert!(!session.try_change_turn());

    assert_eq!(snapshot(&session), before);
    assert_eq!(session.current_player(), Some(Color::Black));
    assert_eq!(session.listener().cell_changes().count(), 0);
    let report = session.listener().last_report();
    assert!(report.is_some_and(|value| value.color() == Color::Black && value.is_empty()));
}

#[test]
fn unset_player_never_moves() {
    let config = GameConfig::default().with_first_player(None);
    let mut session = Session::with_config(config, Recorder::new());

    assert_eq!(session.initialize_board(), Ok(()));
    assert_eq!(session.counts(), (2, 2));
    assert!(session.listener().last_report().is_none());
    assert_eq!(session.legal_moves(), None);

    assert!(!session.try_place_piece(Coord::new(2, 4)));
    assert!(!session.try_change_turn());
    assert_eq!(session.counts(), (2, 2));
    assert_eq!(session.listener().events().len(), 4);
}

#[test]
fn white_can_be_configured_to_move_first() {
    let config = GameConfig::default().with_first_player(Some(Color::White));
    let mut session = Session::with_config(config, Recorder::new());

    assert_eq!(session.initialize_board(), Ok(()));

    let report = session.listener().last_report();
    assert!(report.is_some_and(|value| value.color() == Color::White && value.count() == 4));
    assert!(session.try_place_piece(Coord::new(3, 2)));
    assert_eq!(session.counts(), (1, 4));
}

#[test]
fn new_rejects_invalid_sizes() {
    assert!(Session::new(0, 8).is_err());
    assert!(Session::new(8, 9).is_err());
    let session = Session::new(6, 6).unwrap_or_else(|err| panic!("{err}"));
    assert_eq!(session.counts(), (0, 0));
    session.into_listener();
}
