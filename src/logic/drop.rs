//! Drop resolution: turn (drag origin, drop target) into a board move.

use crate::logic::assignment::{move_court_to_queue, move_queue_to_court};
use crate::models::{Board, BoardError, DragDescriptor, DragOrigin, DropTarget};
use chrono::{DateTime, Utc};

/// Apply a finished drag to the board.
///
/// | origin | target          | effect                         |
/// |--------|-----------------|--------------------------------|
/// | queue  | court           | `move_queue_to_court`          |
/// | court  | queue           | `move_court_to_queue`          |
/// | court  | same court      | no-op                          |
/// | court  | different court | rejected, not supported        |
/// | queue  | queue           | no-op                          |
pub fn resolve_drop(
    board: &mut Board,
    descriptor: &DragDescriptor,
    target: &DropTarget,
    now: DateTime<Utc>,
) -> Result<(), BoardError> {
    let player_id = descriptor.player_id;
    match (&descriptor.origin, target) {
        (DragOrigin::Queue, DropTarget::Court { court_id }) => {
            move_queue_to_court(board, player_id, court_id, now)
        }
        (DragOrigin::Court { .. }, DropTarget::Queue) => move_court_to_queue(board, player_id, now),
        (DragOrigin::Court { court_id: from }, DropTarget::Court { court_id: to }) => {
            if from == to {
                Err(BoardError::UnsupportedDrop)
            } else {
                Err(BoardError::CourtToCourtUnsupported {
                    from: from.clone(),
                    to: to.clone(),
                })
            }
        }
        (DragOrigin::Queue, DropTarget::Queue) => Err(BoardError::UnsupportedDrop),
    }
}
