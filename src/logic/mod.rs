//! Board business logic: moves, drop resolution, timing, derived views, export, session boards.

mod assignment;
mod controller;
mod drop;
mod export;
mod registry;
mod timing;
mod view;

pub use assignment::{move_court_to_queue, move_queue_to_court};
pub use controller::{CourtManager, DropOutcome};
pub use drop::resolve_drop;
pub use export::board_to_csv;
pub use registry::{BoardId, BoardRegistry};
pub use timing::{elapsed_ms, format_time, time_tier, TimeTier};
pub use view::{queue_batches, BoardView, CourtView, PlayerView, QueueBatch, QUEUE_BATCH_SIZE};
