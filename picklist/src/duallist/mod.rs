//! Dual-list container: two ordered partitions of one candidate set.
//!
//! The container provides:
//! - Stable partitioning into a source list and a picked list
//! - Id-based multi-selection with toggle and range gestures
//! - Order-preserving transfers and within-partition reordering
//! - Display-only filtering of either partition
//! - A drag lifecycle whose transient flags reset on every exit path
//!
//! # Example
//!
//! ```ignore
//! use picklist::prelude::*;
//!
//! let mut members = DualList::new("role-members");
//! members.initialize(users, &assigned_ids)?;
//! members.select("ada", false)?;
//! members.move_selected(ListSide::Picked);
//! let outcome = members.project();
//! ```

mod events;
mod filter;
mod state;

pub use events::{
    DualListEvents, EventResult, ReorderEvent, SelectionChangeEvent, TransferEvent,
};
pub use filter::FilterMode;
pub use state::{DualList, ListSide};
