//! Table pile handles.
//!
//! Every pile placed on the table gets a `PileId` from a counter that only
//! moves forward. Handles are never reused within a game, so a stale handle
//! can never alias a newer pile.

use serde::{Deserialize, Serialize};

/// Handle of a pile on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PileId(pub u32);

impl PileId {
    /// Create a new pile handle.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw handle value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Arena slot for this handle.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for PileId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pile({})", self.0)
    }
}
