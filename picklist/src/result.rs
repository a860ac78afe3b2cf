//! Projection of a dual list into a submittable outcome.

use serde::{Deserialize, Serialize};

use crate::item::PickItem;

/// Snapshot of a finished dual-list edit.
///
/// `shown` holds the picked partition and `hidden` the remaining source
/// items, both in display order. `saved` starts out `false` and flips
/// once whatever persists the outcome has accepted it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DualListResult<T> {
    /// Items the edit assigned (the picked partition).
    pub shown: Vec<T>,
    /// Items left unassigned (the source partition).
    pub hidden: Vec<T>,
    /// Whether this outcome has been persisted.
    pub saved: bool,
}

impl<T> DualListResult<T> {
    /// Create an unsaved outcome from the two partitions.
    pub fn new(shown: Vec<T>, hidden: Vec<T>) -> Self {
        Self {
            shown,
            hidden,
            saved: false,
        }
    }

    /// Flag the outcome as persisted.
    pub fn mark_saved(&mut self) {
        self.saved = true;
    }
}

impl<T: PickItem> DualListResult<T> {
    /// Ids of the assigned items, in display order.
    pub fn shown_ids(&self) -> Vec<String> {
        self.shown.iter().map(|item| item.id().to_string()).collect()
    }

    /// Ids of the unassigned items, in display order.
    pub fn hidden_ids(&self) -> Vec<String> {
        self.hidden.iter().map(|item| item.id().to_string()).collect()
    }
}
