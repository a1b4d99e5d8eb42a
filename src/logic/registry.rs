//! BoardRegistry: in-memory boards keyed by id, one per browser session.
//! Boards are only created by mutating requests; reads of an unknown id allocate nothing.

use crate::logic::controller::CourtManager;
use crate::models::{Board, BoardLayout};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Identifier of one session's board.
pub type BoardId = Uuid;

/// Board state + last activity time (for auto-cleanup).
struct BoardEntry {
    manager: CourtManager,
    last_activity: Instant,
}

#[derive(Default)]
pub struct BoardRegistry {
    boards: HashMap<BoardId, BoardEntry>,
    layout: BoardLayout,
}

impl BoardRegistry {
    /// Empty registry; new boards are built from `layout`.
    pub fn new(layout: BoardLayout) -> Self {
        Self {
            boards: HashMap::new(),
            layout,
        }
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// An unstored empty board, for answering reads from sessions without one.
    pub fn fresh_manager(&self) -> CourtManager {
        CourtManager::new(Board::with_layout(&self.layout))
    }

    /// Existing board for `id`, refreshing its activity time. Never creates one.
    pub fn get(&mut self, id: Option<BoardId>) -> Option<&CourtManager> {
        let entry = self.boards.get_mut(&id?)?;
        entry.last_activity = Instant::now();
        Some(&entry.manager)
    }

    /// Board for `id`, or a newly stored one if `id` is missing or expired.
    /// Returns the id actually used so the caller can remember it.
    pub fn get_or_create(&mut self, id: Option<BoardId>) -> (BoardId, &mut CourtManager) {
        let id = id
            .filter(|id| self.boards.contains_key(id))
            .unwrap_or_else(Uuid::new_v4);
        let layout = self.layout;
        let entry = self.boards.entry(id).or_insert_with(|| {
            log::info!("Created board {}", id);
            BoardEntry {
                manager: CourtManager::new(Board::with_layout(&layout)),
                last_activity: Instant::now(),
            }
        });
        entry.last_activity = Instant::now();
        (id, &mut entry.manager)
    }

    /// Drop boards idle for at least `timeout`. Returns how many were removed.
    pub fn remove_idle(&mut self, timeout: Duration) -> usize {
        let before = self.boards.len();
        self.boards
            .retain(|_, entry| entry.last_activity.elapsed() < timeout);
        before - self.boards.len()
    }
}
