//! Board: courts plus the waiting queue. Sole owner of every Player record.

use crate::models::court::{BoardLayout, Court, CourtId};
use crate::models::player::{Player, PlayerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a board operation was rejected. A rejected operation never changes the board.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum BoardError {
    #[error("Player name must not be empty")]
    EmptyName,

    #[error("Player {0} is not in the queue")]
    PlayerNotInQueue(PlayerId),

    #[error("Player {0} is not on any court")]
    PlayerNotOnCourt(PlayerId),

    #[error("Court {0} not found")]
    CourtNotFound(CourtId),

    #[error("Court {0} is full")]
    CourtFull(CourtId),

    #[error("Moving a player directly from {from} to {to} is not supported")]
    CourtToCourtUnsupported { from: CourtId, to: CourtId },

    #[error("Dropping this player here has no effect")]
    UnsupportedDrop,

    #[error("No drag in progress")]
    NoDragInFlight,
}

/// Authoritative assignment state: every player is either in `queue` or on exactly one court.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub courts: Vec<Court>,
    /// Waiting players in arrival order.
    pub queue: Vec<Player>,
}

impl Board {
    /// Board with the given courts and an empty queue.
    pub fn with_courts(courts: Vec<Court>) -> Self {
        Self {
            courts,
            queue: Vec::new(),
        }
    }

    pub fn with_layout(layout: &BoardLayout) -> Self {
        Self::with_courts(layout.build_courts())
    }

    pub fn court(&self, id: &str) -> Option<&Court> {
        self.courts.iter().find(|c| c.id == id)
    }

    pub fn queued_player(&self, id: PlayerId) -> Option<&Player> {
        self.queue.iter().find(|p| p.id == id)
    }

    /// The court whose roster holds this player, if any.
    pub fn court_holding(&self, id: PlayerId) -> Option<&Court> {
        self.courts.iter().find(|c| c.has_player(id))
    }

    /// Total players on the board (queue + all courts).
    pub fn player_count(&self) -> usize {
        self.queue.len() + self.courts.iter().map(|c| c.players.len()).sum::<usize>()
    }

    /// Append a new waiting player. The caller guarantees a non-empty name.
    pub fn add_to_queue(&mut self, name: impl Into<String>, now: DateTime<Utc>) -> PlayerId {
        let player = Player::new(name, now);
        let id = player.id;
        self.queue.push(player);
        id
    }

    /// Remove a player from wherever they are (queue first, then courts).
    /// Returns the removed player; unknown ids are a no-op.
    pub fn remove_player(&mut self, id: PlayerId) -> Option<Player> {
        if let Some(idx) = self.queue.iter().position(|p| p.id == id) {
            return Some(self.queue.remove(idx));
        }
        self.courts.iter_mut().find_map(|court| {
            let idx = court.players.iter().position(|p| p.id == id)?;
            Some(court.players.remove(idx))
        })
    }
}
