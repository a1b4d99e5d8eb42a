//! Drag descriptor and drop target: the tagged values exchanged by drag-and-drop.

use crate::models::court::CourtId;
use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// Container a drag started from.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DragOrigin {
    Queue,
    Court { court_id: CourtId },
}

/// An in-flight drag: live from drag-start until drop (or cancel).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DragDescriptor {
    pub player_id: PlayerId,
    pub origin: DragOrigin,
}

impl DragDescriptor {
    pub fn from_queue(player_id: PlayerId) -> Self {
        Self {
            player_id,
            origin: DragOrigin::Queue,
        }
    }

    pub fn from_court(player_id: PlayerId, court_id: impl Into<CourtId>) -> Self {
        Self {
            player_id,
            origin: DragOrigin::Court {
                court_id: court_id.into(),
            },
        }
    }
}

/// Container a player was dropped onto.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DropTarget {
    Queue,
    Court { court_id: CourtId },
}

impl DropTarget {
    pub fn court(court_id: impl Into<CourtId>) -> Self {
        DropTarget::Court {
            court_id: court_id.into(),
        }
    }
}
