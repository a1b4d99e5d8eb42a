//! Derived board snapshot for the page: elapsed times, tiers, queue batches.
//! Rebuilt on every request; never stored.

use crate::logic::controller::CourtManager;
use crate::logic::timing::{elapsed_ms, format_time, time_tier, TimeTier};
use crate::models::{Court, CourtId, DragDescriptor, Location, Player, PlayerId};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Queue players are shown in groups of this size (one court's worth).
pub const QUEUE_BATCH_SIZE: usize = 4;

#[derive(Clone, Debug, Serialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub location: Location,
    pub since: DateTime<Utc>,
    pub elapsed_ms: u64,
    /// `MM:SS` or `HH:MM:SS`.
    pub elapsed: String,
    pub tier: TimeTier,
}

impl PlayerView {
    pub fn new(player: &Player, now: DateTime<Utc>) -> Self {
        let location = player.location();
        let ms = elapsed_ms(player.since(), now);
        Self {
            id: player.id,
            name: player.name.clone(),
            location,
            since: player.since(),
            elapsed_ms: ms,
            elapsed: format_time(ms),
            tier: time_tier(location, ms),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct CourtView {
    pub id: CourtId,
    pub name: String,
    pub players: Vec<PlayerView>,
    pub capacity: usize,
    pub is_full: bool,
}

impl CourtView {
    pub fn new(court: &Court, now: DateTime<Utc>) -> Self {
        Self {
            id: court.id.clone(),
            name: court.name.clone(),
            players: court.players.iter().map(|p| PlayerView::new(p, now)).collect(),
            capacity: court.capacity,
            is_full: court.is_full(),
        }
    }
}

/// A display group of waiting players. `number` starts at 1.
#[derive(Clone, Debug, Serialize)]
pub struct QueueBatch {
    pub number: usize,
    pub players: Vec<PlayerView>,
}

#[derive(Clone, Debug, Serialize)]
pub struct BoardView {
    pub courts: Vec<CourtView>,
    pub batches: Vec<QueueBatch>,
    pub waiting: usize,
    pub dragging: Option<DragDescriptor>,
    pub generated_at: DateTime<Utc>,
}

impl BoardView {
    pub fn build(manager: &CourtManager, now: DateTime<Utc>) -> Self {
        let board = manager.board();
        Self {
            courts: board.courts.iter().map(|c| CourtView::new(c, now)).collect(),
            batches: queue_batches(&board.queue, now),
            waiting: board.queue.len(),
            dragging: manager.dragging().cloned(),
            generated_at: now,
        }
    }
}

/// Split the queue into batches of `QUEUE_BATCH_SIZE`, preserving arrival order.
pub fn queue_batches(queue: &[Player], now: DateTime<Utc>) -> Vec<QueueBatch> {
    queue
        .chunks(QUEUE_BATCH_SIZE)
        .enumerate()
        .map(|(i, chunk)| QueueBatch {
            number: i + 1,
            players: chunk.iter().map(|p| PlayerView::new(p, now)).collect(),
        })
        .collect()
}
