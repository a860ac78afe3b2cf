//! Error types for dual-list operations.

/// Errors returned by dual-list operations.
///
/// A failed operation leaves the container exactly as it was before the
/// call; no partial mutation is ever observable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PickError {
    /// The initialization input contained the same id more than once.
    #[error("duplicate item id '{id}' in candidate set")]
    DuplicateId {
        /// The offending id.
        id: String,
    },

    /// A positional argument was outside the addressed partition.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange {
        /// The index that was passed in.
        index: usize,
        /// Length of the partition it was checked against.
        len: usize,
    },

    /// An id that is resident in neither partition.
    #[error("unknown item id '{id}'")]
    UnknownId {
        /// The id that could not be resolved.
        id: String,
    },

    /// The container caught itself violating an invariant, such as an id
    /// resident in both partitions or a selected id resident in neither.
    ///
    /// This indicates a bug inside the container rather than bad input.
    #[error("inconsistent state around item id '{id}'")]
    InconsistentState {
        /// The id the violation was detected on.
        id: String,
    },
}

impl PickError {
    /// Creates a duplicate-id error.
    pub fn duplicate(id: impl Into<String>) -> Self {
        Self::DuplicateId { id: id.into() }
    }

    /// Creates an index-out-of-range error.
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Creates an unknown-id error.
    pub fn unknown(id: impl Into<String>) -> Self {
        Self::UnknownId { id: id.into() }
    }

    /// Creates an inconsistent-state error.
    pub fn inconsistent(id: impl Into<String>) -> Self {
        Self::InconsistentState { id: id.into() }
    }

    /// Returns the item id this error refers to, if any.
    pub fn item_id(&self) -> Option<&str> {
        match self {
            Self::DuplicateId { id } => Some(id),
            Self::UnknownId { id } => Some(id),
            Self::InconsistentState { id } => Some(id),
            Self::IndexOutOfRange { .. } => None,
        }
    }

    /// Returns `true` if this error signals internal state corruption.
    pub fn is_corruption(&self) -> bool {
        matches!(self, Self::InconsistentState { .. })
    }
}
