//! Integration tests for drag-and-drop: drop resolution and the CourtManager entry points.

use chrono::{DateTime, TimeZone, Utc};
use court_manager_web::{
    resolve_drop, Board, BoardError, BoardLayout, CourtManager, DragDescriptor, DropOutcome,
    DropTarget, PlayerId,
};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 4, 18, 0, 0).unwrap()
}

fn manager() -> CourtManager {
    CourtManager::new(Board::with_layout(&BoardLayout {
        courts: 2,
        next_courts: 1,
    }))
}

/// Drag a queued player onto a court through the full start/drop protocol.
fn drag_to_court(m: &mut CourtManager, id: PlayerId, court: &str) -> DropOutcome {
    let d = DragDescriptor::from_queue(id);
    m.on_drag_start(d.clone());
    m.on_drop(&d, &DropTarget::court(court), t0())
}

#[test]
fn queue_drop_on_court_moves_player() {
    let mut m = manager();
    let a = m.on_add_player("Ann", t0()).unwrap();
    assert_eq!(drag_to_court(&mut m, a, "court2"), DropOutcome::Applied);
    assert!(m.board().queue.is_empty());
    assert!(m.board().court("court2").unwrap().has_player(a));
    assert!(m.dragging().is_none());
}

#[test]
fn court_drop_on_queue_moves_player_back() {
    let mut m = manager();
    let a = m.on_add_player("Ann", t0()).unwrap();
    drag_to_court(&mut m, a, "court1");

    let d = DragDescriptor::from_court(a, "court1");
    m.on_drag_start(d.clone());
    assert!(m.on_drop(&d, &DropTarget::Queue, t0()).is_applied());
    assert_eq!(m.board().queue.len(), 1);
    assert!(m.board().court_holding(a).is_none());
}

#[test]
fn court_to_other_court_is_not_supported() {
    let mut m = manager();
    let a = m.on_add_player("Ann", t0()).unwrap();
    drag_to_court(&mut m, a, "court1");
    let before = m.board().clone();

    let d = DragDescriptor::from_court(a, "court1");
    m.on_drag_start(d.clone());
    let outcome = m.on_drop(&d, &DropTarget::court("next1"), t0());
    assert_eq!(
        outcome,
        DropOutcome::Ignored(BoardError::CourtToCourtUnsupported {
            from: "court1".to_string(),
            to: "next1".to_string(),
        })
    );
    assert_eq!(m.board(), &before);
    assert!(m.dragging().is_none());
}

#[test]
fn drop_on_own_container_does_nothing() {
    let mut m = manager();
    let a = m.on_add_player("Ann", t0()).unwrap();
    let b = m.on_add_player("Bob", t0()).unwrap();
    drag_to_court(&mut m, b, "court1");
    let before = m.board().clone();

    let mut board = before.clone();
    assert_eq!(
        resolve_drop(&mut board, &DragDescriptor::from_queue(a), &DropTarget::Queue, t0()),
        Err(BoardError::UnsupportedDrop)
    );
    assert_eq!(
        resolve_drop(
            &mut board,
            &DragDescriptor::from_court(b, "court1"),
            &DropTarget::court("court1"),
            t0()
        ),
        Err(BoardError::UnsupportedDrop)
    );
    assert_eq!(board, before);
}

#[test]
fn drop_on_full_court_is_silently_rejected() {
    let mut m = manager();
    for i in 0..4 {
        let id = m.on_add_player(&format!("P{i}"), t0()).unwrap();
        assert!(drag_to_court(&mut m, id, "court1").is_applied());
    }
    let late = m.on_add_player("Late", t0()).unwrap();
    let outcome = drag_to_court(&mut m, late, "court1");
    assert_eq!(outcome, DropOutcome::Ignored(BoardError::CourtFull("court1".to_string())));
    assert_eq!(m.board().court("court1").unwrap().players.len(), 4);
    assert!(m.board().queued_player(late).is_some());
}

#[test]
fn drop_without_drag_in_flight_is_ignored() {
    let mut m = manager();
    let a = m.on_add_player("Ann", t0()).unwrap();
    let outcome = m.on_drop(&DragDescriptor::from_queue(a), &DropTarget::court("court1"), t0());
    assert_eq!(outcome, DropOutcome::Ignored(BoardError::NoDragInFlight));
    assert!(m.board().queued_player(a).is_some());
}

#[test]
fn cancelled_drag_cannot_be_dropped() {
    let mut m = manager();
    let a = m.on_add_player("Ann", t0()).unwrap();
    let d = DragDescriptor::from_queue(a);
    m.on_drag_start(d.clone());
    m.cancel_drag();
    assert!(!m.on_drop(&d, &DropTarget::court("court1"), t0()).is_applied());
}

#[test]
fn add_player_trims_and_rejects_blank_names() {
    let mut m = manager();
    assert_eq!(m.on_add_player("   ", t0()), Err(BoardError::EmptyName));
    let id = m.on_add_player("  Ann ", t0()).unwrap();
    assert_eq!(m.board().queued_player(id).unwrap().name, "Ann");
}

#[test]
fn removing_dragged_player_discards_the_drag() {
    let mut m = manager();
    let a = m.on_add_player("Ann", t0()).unwrap();
    m.on_drag_start(DragDescriptor::from_queue(a));
    assert!(m.on_remove_player(a).is_some());
    assert!(m.dragging().is_none());
    assert!(m.on_remove_player(a).is_none());
}

#[test]
fn drop_after_registered_drag_start_applies_and_stale_drag_is_replaced() {
    let mut m = manager();
    let a = m.on_add_player("Ann", t0()).unwrap();
    let b = m.on_add_player("Bob", t0()).unwrap();

    // A drag registered for a player that was never dropped stays until replaced.
    m.on_drag_start(DragDescriptor::from_queue(b));
    let d = DragDescriptor::from_queue(a);
    m.on_drag_start(d.clone());
    assert_eq!(m.dragging(), Some(&d));
    assert!(m.on_drop(&d, &DropTarget::court("court1"), t0()).is_applied());
    assert!(m.board().court("court1").unwrap().has_player(a));
    assert!(m.board().queued_player(b).is_some());
}
