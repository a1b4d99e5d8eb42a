//! Court and BoardLayout.

use crate::models::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};

/// Identifier for a court (e.g. "court3", "next1").
pub type CourtId = String;

/// Slots per court.
pub const COURT_CAPACITY: usize = 4;

/// A court with a bounded roster. Roster order is display order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Court {
    pub id: CourtId,
    pub name: String,
    pub players: Vec<Player>,
    pub capacity: usize,
}

impl Court {
    /// Create an empty court with the standard capacity.
    pub fn new(id: impl Into<CourtId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            players: Vec::new(),
            capacity: COURT_CAPACITY,
        }
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= self.capacity
    }

    pub fn has_player(&self, id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == id)
    }
}

/// How many courts a fresh board starts with.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    /// Playing courts, named "Court 1".."Court N".
    pub courts: usize,
    /// Staging courts for the next rotation, named "Next 1".."Next M".
    pub next_courts: usize,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            courts: 10,
            next_courts: 5,
        }
    }
}

impl BoardLayout {
    /// Build the court list: playing courts first, then staging courts.
    pub fn build_courts(&self) -> Vec<Court> {
        let playing = (1..=self.courts).map(|n| Court::new(format!("court{n}"), format!("Court {n}")));
        let staging = (1..=self.next_courts).map(|n| Court::new(format!("next{n}"), format!("Next {n}")));
        playing.chain(staging).collect()
    }
}
