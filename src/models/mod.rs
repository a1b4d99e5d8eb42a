//! Data structures for the court board: players, courts, queue, drag descriptors.

mod board;
mod court;
mod drag;
mod player;

pub use board::{Board, BoardError};
pub use court::{BoardLayout, Court, CourtId, COURT_CAPACITY};
pub use drag::{DragDescriptor, DragOrigin, DropTarget};
pub use player::{Location, Player, PlayerId, PlayerStatus};
