//! CSV export of the current board.

use crate::logic::timing::{elapsed_ms, format_time};
use crate::models::{Board, Location, Player};
use chrono::{DateTime, SecondsFormat, Utc};
use csv::Writer;
use serde::Serialize;

#[derive(Serialize)]
struct ExportRow<'a> {
    location: Location,
    /// Court name, or "Queue".
    container: &'a str,
    player: &'a str,
    since: String,
    elapsed: String,
}

impl<'a> ExportRow<'a> {
    fn new(player: &'a Player, container: &'a str, now: DateTime<Utc>) -> Self {
        Self {
            location: player.location(),
            container,
            player: &player.name,
            since: player.since().to_rfc3339_opts(SecondsFormat::Secs, true),
            elapsed: format_time(elapsed_ms(player.since(), now)),
        }
    }
}

/// One row per player: courts in board order, then the queue.
/// The header row comes with the first record, so an empty board exports nothing.
pub fn board_to_csv(board: &Board, now: DateTime<Utc>) -> Result<Vec<u8>, csv::Error> {
    let mut wtr = Writer::from_writer(Vec::new());
    for court in &board.courts {
        for player in &court.players {
            wtr.serialize(ExportRow::new(player, &court.name, now))?;
        }
    }
    for player in &board.queue {
        wtr.serialize(ExportRow::new(player, "Queue", now))?;
    }
    wtr.into_inner().map_err(|e| csv::Error::from(e.into_error()))
}
