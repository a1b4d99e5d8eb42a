//! Integration tests for elapsed-time formatting, tiers, and the derived board view.

use chrono::{DateTime, Duration, TimeZone, Utc};
use court_manager_web::{
    board_to_csv, elapsed_ms, format_time, move_queue_to_court, time_tier, Board, BoardLayout,
    BoardView, CourtManager, Location, TimeTier,
};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 4, 18, 0, 0).unwrap()
}

#[test]
fn format_time_minutes_and_hours() {
    assert_eq!(format_time(0), "00:00");
    assert_eq!(format_time(999), "00:00");
    assert_eq!(format_time(65_000), "01:05");
    assert_eq!(format_time(599_000), "09:59");
    assert_eq!(format_time(3_599_999), "59:59");
    assert_eq!(format_time(3_600_000), "01:00:00");
    assert_eq!(format_time(3_661_000), "01:01:01");
    assert_eq!(format_time(100 * 3_600_000), "100:00:00");
}

#[test]
fn elapsed_is_clamped_at_zero() {
    assert_eq!(elapsed_ms(t0(), t0() + Duration::seconds(90)), 90_000);
    assert_eq!(elapsed_ms(t0() + Duration::seconds(5), t0()), 0);
}

#[test]
fn tiers_use_location_thresholds() {
    let min = 60_000;
    assert_eq!(time_tier(Location::Court, 29 * min), TimeTier::Nominal);
    assert_eq!(time_tier(Location::Court, 30 * min), TimeTier::Warning);
    assert_eq!(time_tier(Location::Court, 60 * min), TimeTier::Critical);
    assert_eq!(time_tier(Location::Queue, 9 * min + 59_000), TimeTier::Nominal);
    assert_eq!(time_tier(Location::Queue, 10 * min), TimeTier::Warning);
    assert_eq!(time_tier(Location::Queue, 20 * min), TimeTier::Critical);
}

#[test]
fn view_batches_queue_in_fours_and_formats_times() {
    let mut board = Board::with_layout(&BoardLayout {
        courts: 1,
        next_courts: 0,
    });
    let ids: Vec<_> = (0..6).map(|i| board.add_to_queue(format!("P{i}"), t0())).collect();
    move_queue_to_court(&mut board, ids[0], "court1", t0() + Duration::minutes(1)).unwrap();
    let manager = CourtManager::new(board);

    let view = BoardView::build(&manager, t0() + Duration::minutes(12));
    assert_eq!(view.waiting, 5);
    assert_eq!(view.batches.len(), 2);
    assert_eq!(view.batches[0].number, 1);
    assert_eq!(view.batches[0].players.len(), 4);
    assert_eq!(view.batches[1].players.len(), 1);
    assert_eq!(view.batches[0].players[0].name, "P1");

    let queued = &view.batches[0].players[0];
    assert_eq!(queued.elapsed, "12:00");
    assert_eq!(queued.tier, TimeTier::Warning);

    let court = &view.courts[0];
    assert!(!court.is_full);
    assert_eq!(court.players[0].elapsed, "11:00");
    assert_eq!(court.players[0].tier, TimeTier::Nominal);
    assert!(view.dragging.is_none());
}

#[test]
fn csv_export_lists_courts_then_queue() {
    let mut board = Board::with_layout(&BoardLayout {
        courts: 1,
        next_courts: 0,
    });
    let a = board.add_to_queue("Ann", t0());
    board.add_to_queue("Bob", t0());
    move_queue_to_court(&mut board, a, "court1", t0()).unwrap();

    let csv = String::from_utf8(board_to_csv(&board, t0() + Duration::seconds(65)).unwrap()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "location,container,player,since,elapsed");
    assert_eq!(lines[1], "court,Court 1,Ann,2024-05-04T18:00:00Z,01:05");
    assert_eq!(lines[2], "queue,Queue,Bob,2024-05-04T18:00:00Z,01:05");
    assert_eq!(lines.len(), 3);
}
