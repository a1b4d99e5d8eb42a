//! Player and PlayerStatus data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in drags and lookups).
pub type PlayerId = Uuid;

/// Where a player currently is, and since when.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "location", rename_all = "snake_case")]
pub enum PlayerStatus {
    /// In the waiting queue.
    Waiting { since: DateTime<Utc> },
    /// Assigned to a court.
    OnCourt { since: DateTime<Utc> },
}

/// Which kind of container holds a player; drives the time tier thresholds.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Queue,
    Court,
}

/// A player on the board.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(flatten)]
    pub status: PlayerStatus,
}

impl Player {
    /// Create a new waiting player with a fresh id.
    pub fn new(name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            status: PlayerStatus::Waiting { since: now },
        }
    }

    pub fn waiting_since(&self) -> Option<DateTime<Utc>> {
        match self.status {
            PlayerStatus::Waiting { since } => Some(since),
            PlayerStatus::OnCourt { .. } => None,
        }
    }

    pub fn on_court_since(&self) -> Option<DateTime<Utc>> {
        match self.status {
            PlayerStatus::OnCourt { since } => Some(since),
            PlayerStatus::Waiting { .. } => None,
        }
    }

    /// Timestamp of the current status, whichever it is.
    pub fn since(&self) -> DateTime<Utc> {
        match self.status {
            PlayerStatus::Waiting { since } | PlayerStatus::OnCourt { since } => since,
        }
    }

    pub fn location(&self) -> Location {
        match self.status {
            PlayerStatus::Waiting { .. } => Location::Queue,
            PlayerStatus::OnCourt { .. } => Location::Court,
        }
    }

    /// Mark the player as sent to a court; the waiting clock stops.
    pub fn send_to_court(&mut self, now: DateTime<Utc>) {
        self.status = PlayerStatus::OnCourt { since: now };
    }

    /// Mark the player as back in the queue; the court clock stops.
    pub fn return_to_queue(&mut self, now: DateTime<Utc>) {
        self.status = PlayerStatus::Waiting { since: now };
    }
}
