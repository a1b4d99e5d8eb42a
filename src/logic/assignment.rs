//! Queue <-> court moves. Validation happens before any mutation.

use crate::models::{Board, BoardError, PlayerId};
use chrono::{DateTime, Utc};

/// Send a waiting player to a court.
///
/// Rejected (board unchanged) if the player is not queued, the court does not
/// exist, or the court is already at capacity.
pub fn move_queue_to_court(
    board: &mut Board,
    player_id: PlayerId,
    court_id: &str,
    now: DateTime<Utc>,
) -> Result<(), BoardError> {
    let idx = board
        .queue
        .iter()
        .position(|p| p.id == player_id)
        .ok_or(BoardError::PlayerNotInQueue(player_id))?;
    let court = board
        .courts
        .iter_mut()
        .find(|c| c.id == court_id)
        .ok_or_else(|| BoardError::CourtNotFound(court_id.to_string()))?;
    if court.is_full() {
        return Err(BoardError::CourtFull(court.id.clone()));
    }

    let mut player = board.queue.remove(idx);
    player.send_to_court(now);
    court.players.push(player);
    Ok(())
}

/// Send a player on a court back to the end of the queue.
pub fn move_court_to_queue(
    board: &mut Board,
    player_id: PlayerId,
    now: DateTime<Utc>,
) -> Result<(), BoardError> {
    let (court, idx) = board
        .courts
        .iter_mut()
        .find_map(|c| {
            let idx = c.players.iter().position(|p| p.id == player_id)?;
            Some((c, idx))
        })
        .ok_or(BoardError::PlayerNotOnCourt(player_id))?;

    let mut player = court.players.remove(idx);
    player.return_to_queue(now);
    board.queue.push(player);
    Ok(())
}
