//! CourtManager: the board plus the drag currently in flight. Entry point for UI events.

use crate::logic::drop::resolve_drop;
use crate::models::{Board, BoardError, DragDescriptor, DropTarget, Player, PlayerId};
use chrono::{DateTime, Utc};

/// Result of a drop. Rejections are not reported to the user, only logged.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DropOutcome {
    Applied,
    Ignored(BoardError),
}

impl DropOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, DropOutcome::Applied)
    }
}

/// One board and its in-flight drag. Every mutation goes through here.
#[derive(Clone, Debug, Default)]
pub struct CourtManager {
    board: Board,
    dragging: Option<DragDescriptor>,
}

impl CourtManager {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            dragging: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn dragging(&self) -> Option<&DragDescriptor> {
        self.dragging.as_ref()
    }

    /// Register the drag that just started, replacing any stale one.
    pub fn on_drag_start(&mut self, descriptor: DragDescriptor) {
        self.dragging = Some(descriptor);
    }

    /// Discard the in-flight drag (drag ended outside any drop target).
    pub fn cancel_drag(&mut self) {
        self.dragging = None;
    }

    /// Resolve a drop. Requires a registered drag; the drag is discarded either way.
    pub fn on_drop(
        &mut self,
        descriptor: &DragDescriptor,
        target: &DropTarget,
        now: DateTime<Utc>,
    ) -> DropOutcome {
        if self.dragging.take().is_none() {
            log::debug!("Drop of player {} without a drag in flight", descriptor.player_id);
            return DropOutcome::Ignored(BoardError::NoDragInFlight);
        }
        match resolve_drop(&mut self.board, descriptor, target, now) {
            Ok(()) => DropOutcome::Applied,
            Err(e) => {
                log::debug!("Drop of player {} ignored: {}", descriptor.player_id, e);
                DropOutcome::Ignored(e)
            }
        }
    }

    /// Add a player to the queue. Name is trimmed and must not be empty.
    pub fn on_add_player(&mut self, name: &str, now: DateTime<Utc>) -> Result<PlayerId, BoardError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BoardError::EmptyName);
        }
        Ok(self.board.add_to_queue(name, now))
    }

    /// Remove a player wherever they are. Unknown ids are a no-op.
    pub fn on_remove_player(&mut self, player_id: PlayerId) -> Option<Player> {
        if self
            .dragging
            .as_ref()
            .is_some_and(|d| d.player_id == player_id)
        {
            self.dragging = None;
        }
        self.board.remove_player(player_id)
    }
}
