//! Dual-list selection model
//!
//! A reusable pick-list container: items split between an available and an
//! assigned partition, with multi-selection, display filtering, manual
//! ordering, and drag-and-drop transfer between the two.

pub mod duallist;
pub mod error;
pub mod item;
pub mod result;
pub mod selection;

pub use duallist::{DualList, ListSide};
pub use error::PickError;
pub use item::{PickItem, sort_candidates};
pub use result::DualListResult;

pub mod prelude {
    pub use crate::duallist::{
        DualList, DualListEvents, EventResult, FilterMode, ListSide, ReorderEvent,
        SelectionChangeEvent, TransferEvent,
    };
    pub use crate::error::PickError;
    pub use crate::item::{PickItem, sort_candidates};
    pub use crate::result::DualListResult;
    pub use crate::selection::Selection;
}
