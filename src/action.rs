use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Geometry;

/// The kind of change that produced [`ActionState::last_geometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawAction {
    Created,
    Edited,
    Deleted,
    /// The trailing geometry was removed while it was the last one drawn,
    /// i.e. an undo of the most recent draw.
    RemovedLast,
}

impl fmt::Display for DrawAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DrawAction::Created => "created",
            DrawAction::Edited => "edited",
            DrawAction::Deleted => "deleted",
            DrawAction::RemovedLast => "removed_last",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionState {
    last_geometry: Option<Geometry>,
    last_action: Option<DrawAction>,
}

impl ActionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, action: DrawAction, geometry: Geometry) {
        self.last_action = Some(action);
        self.last_geometry = Some(geometry);
    }

    pub fn last_geometry(&self) -> Option<&Geometry> {
        self.last_geometry.as_ref()
    }

    pub fn last_action(&self) -> Option<DrawAction> {
        self.last_action
    }

    pub fn is_last(&self, geometry: &Geometry) -> bool {
        self.last_geometry.as_ref() == Some(geometry)
    }

    pub fn clear(&mut self) {
        self.last_geometry = None;
        self.last_action = None;
    }
}
