//! Court rotation web app: library with the board model and assignment logic.

pub mod logic;
pub mod models;

pub use logic::{
    board_to_csv, elapsed_ms, format_time, move_court_to_queue, move_queue_to_court,
    queue_batches, resolve_drop, time_tier, BoardId, BoardRegistry, BoardView, CourtManager,
    CourtView, DropOutcome, PlayerView, QueueBatch, TimeTier, QUEUE_BATCH_SIZE,
};
pub use models::{
    Board, BoardError, BoardLayout, Court, CourtId, DragDescriptor, DragOrigin, DropTarget,
    Location, Player, PlayerId, PlayerStatus, COURT_CAPACITY,
};
