//! Dual-list container state and operations.
//!
//! Every item is resident in exactly one partition at all times. Mutating
//! operations either succeed or leave the container exactly as it was;
//! there is no observable partial state.

use std::collections::HashSet;
use std::fmt;

use crate::error::PickError;
use crate::item::PickItem;
use crate::result::DualListResult;
use crate::selection::Selection;

use super::filter::{self, FilterMode};

/// The two partitions of a dual list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListSide {
    /// Items available but not chosen.
    Source,
    /// Items chosen for the assignment.
    Picked,
}

impl ListSide {
    /// The other partition.
    pub fn opposite(self) -> Self {
        match self {
            Self::Source => Self::Picked,
            Self::Picked => Self::Source,
        }
    }

    /// Lowercase name for logs and messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Picked => "picked",
        }
    }
}

impl fmt::Display for ListSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State for a dual-list assignment widget.
///
/// A candidate set is partitioned into a source list (available) and a
/// picked list (assigned). Items transfer between the partitions without
/// ever being copied or dropped, selection follows ids rather than
/// positions, and a filter controls visibility without touching
/// membership.
///
/// # Example
///
/// ```ignore
/// let mut members = DualList::new("role-members");
/// members.initialize(users, &assigned_ids)?;
/// members.select("ada", false)?;
/// members.move_selected(ListSide::Picked);
/// let outcome = members.project();
/// ```
#[derive(Debug, Clone)]
pub struct DualList<T: PickItem> {
    /// Name used in logs, typically the relation being edited.
    name: String,
    /// Items available for assignment, in display order.
    source: Vec<T>,
    /// Items currently assigned, in display order.
    picked: Vec<T>,
    /// Id-based selection spanning both partitions.
    selection: Selection,
    /// Current filter text. Empty means everything is visible.
    filter: String,
    /// The partition the filter applies to.
    filter_side: ListSide,
    /// How filter text is matched against labels.
    filter_mode: FilterMode,
    /// A drag that originated in this widget is in progress.
    drag_start: bool,
    /// The pointer is over a valid drop target.
    drag_over: bool,
}

impl<T: PickItem> DualList<T> {
    /// Create an empty container with a name for log lines.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: Vec::new(),
            picked: Vec::new(),
            selection: Selection::new(),
            filter: String::new(),
            filter_side: ListSide::Source,
            filter_mode: FilterMode::default(),
            drag_start: false,
            drag_over: false,
        }
    }

    /// Set the filter mode. Defaults to substring matching.
    pub fn with_filter_mode(mut self, mode: FilterMode) -> Self {
        self.filter_mode = mode;
        self
    }

    /// Partition `candidates` into source and picked lists.
    ///
    /// Items whose id is in `picked_ids` land in the picked partition;
    /// everything else stays in source. Both partitions keep the relative
    /// order of `candidates`. Ids in `picked_ids` that match no candidate
    /// are ignored. Re-initializing resets selection, filter text, and
    /// drag flags.
    pub fn initialize(
        &mut self,
        candidates: Vec<T>,
        picked_ids: &HashSet<String>,
    ) -> Result<(), PickError> {
        {
            let mut seen: HashSet<&str> = HashSet::with_capacity(candidates.len());
            for item in &candidates {
                if !seen.insert(item.id()) {
                    return Err(PickError::duplicate(item.id()));
                }
            }
        }

        let mut source = Vec::new();
        let mut picked = Vec::new();
        let mut matched = 0usize;
        for item in candidates {
            if picked_ids.contains(item.id()) {
                matched += 1;
                picked.push(item);
            } else {
                source.push(item);
            }
        }
        if matched < picked_ids.len() {
            log::debug!(
                "dual list '{}': {} picked id(s) not present in the candidate set",
                self.name,
                picked_ids.len() - matched
            );
        }

        self.source = source;
        self.picked = picked;
        self.selection.clear();
        self.filter.clear();
        self.drag_start = false;
        self.drag_over = false;
        log::debug!(
            "dual list '{}': initialized with {} source and {} picked item(s)",
            self.name,
            self.source.len(),
            self.picked.len()
        );
        Ok(())
    }

    // ---- Item access ----

    /// Name this container was created with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Items of one partition, in display order.
    pub fn items(&self, side: ListSide) -> &[T] {
        match side {
            ListSide::Source => &self.source,
            ListSide::Picked => &self.picked,
        }
    }

    /// The source partition.
    pub fn source(&self) -> &[T] {
        &self.source
    }

    /// The picked partition.
    pub fn picked(&self) -> &[T] {
        &self.picked
    }

    /// Number of items in one partition.
    pub fn len(&self, side: ListSide) -> usize {
        self.items(side).len()
    }

    /// Total number of items across both partitions.
    pub fn total_len(&self) -> usize {
        self.source.len() + self.picked.len()
    }

    /// Check if both partitions are empty.
    pub fn is_empty(&self) -> bool {
        self.source.is_empty() && self.picked.is_empty()
    }

    /// Look up an item anywhere in the container.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.source
            .iter()
            .chain(self.picked.iter())
            .find(|item| item.id() == id)
    }

    /// Check if an id is resident in either partition.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// The partition an id is resident in.
    ///
    /// Returns [`PickError::UnknownId`] for ids in neither partition and
    /// [`PickError::InconsistentState`] for ids somehow in both.
    pub fn side_of(&self, id: &str) -> Result<ListSide, PickError> {
        self.locate(id).map(|(side, _)| side)
    }

    fn locate(&self, id: &str) -> Result<(ListSide, usize), PickError> {
        let in_source = self.source.iter().position(|item| item.id() == id);
        let in_picked = self.picked.iter().position(|item| item.id() == id);
        match (in_source, in_picked) {
            (Some(_), Some(_)) => Err(PickError::inconsistent(id)),
            (Some(index), None) => Ok((ListSide::Source, index)),
            (None, Some(index)) => Ok((ListSide::Picked, index)),
            (None, None) => Err(PickError::unknown(id)),
        }
    }

    // ---- Selection ----

    /// Select an item by id.
    ///
    /// A plain select replaces the whole selection; an additive select
    /// toggles the one id. Either way the range anchor moves to `id`.
    pub fn select(&mut self, id: &str, additive: bool) -> Result<(), PickError> {
        self.select_impl(id, additive).map(|_| ())
    }

    /// Select the run of items between the range anchor and `id`.
    ///
    /// The run is taken over the displayed order of the partition `id`
    /// lives in and replaces the whole selection. Degrades to a plain
    /// select when no usable anchor exists; a no-op when the anchor is
    /// resident in the other partition.
    pub fn select_range(&mut self, id: &str) -> Result<(), PickError> {
        self.select_range_impl(id).map(|_| ())
    }

    pub(super) fn select_impl(
        &mut self,
        id: &str,
        additive: bool,
    ) -> Result<(Vec<String>, Vec<String>), PickError> {
        self.locate(id)?;
        let change = if additive {
            self.selection.toggle(id)
        } else {
            self.selection.select(id)
        };
        Ok(change)
    }

    pub(super) fn select_range_impl(
        &mut self,
        id: &str,
    ) -> Result<(Vec<String>, Vec<String>), PickError> {
        let (target_side, _) = self.locate(id)?;
        let Some(anchor_id) = self.selection.anchor().map(str::to_string) else {
            return self.select_impl(id, false);
        };
        let Ok((anchor_side, _)) = self.locate(&anchor_id) else {
            return self.select_impl(id, false);
        };
        if anchor_side != target_side {
            return Ok((Vec::new(), Vec::new()));
        }
        let order = self.display_order(target_side);
        Ok(self.selection.range_select(id, &order))
    }

    /// Add every visible item of one partition to the selection.
    /// Returns the ids that were newly selected.
    pub fn select_all(&mut self, side: ListSide) -> Vec<String> {
        let ids = self.display_order(side);
        self.selection.select_many(ids)
    }

    /// Clear the selection and the range anchor.
    /// Returns the deselected ids.
    pub fn clear_selection(&mut self) -> Vec<String> {
        self.selection.clear()
    }

    /// All selected ids, sorted.
    pub fn selected_ids(&self) -> Vec<String> {
        self.selection.ids()
    }

    /// Number of selected items.
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Check if an id is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.is_selected(id)
    }

    /// The range anchor, if set.
    pub fn anchor(&self) -> Option<&str> {
        self.selection.anchor()
    }

    // ---- Filtering ----

    /// Set the filter text for one partition.
    ///
    /// The filter is display-only; membership never changes. Selected
    /// items the new text hides are deselected so the selection always
    /// stays within the visible rows.
    pub fn set_filter(&mut self, side: ListSide, text: impl Into<String>) {
        self.filter = text.into();
        self.filter_side = side;

        let hidden: HashSet<String> = {
            let visible: HashSet<usize> = self.visible_indices(side).into_iter().collect();
            self.items(side)
                .iter()
                .enumerate()
                .filter_map(|(index, item)| {
                    (!visible.contains(&index)).then(|| item.id().to_string())
                })
                .collect()
        };
        if hidden.is_empty() {
            return;
        }
        let removed = self.selection.retain(|id| !hidden.contains(id));
        if !removed.is_empty() {
            log::trace!(
                "dual list '{}': filter hid {} selected item(s), deselected",
                self.name,
                removed.len()
            );
        }
    }

    /// Clear the filter text, making every item visible again.
    pub fn clear_filter(&mut self) {
        self.filter.clear();
    }

    /// Current filter text.
    pub fn filter_text(&self) -> &str {
        &self.filter
    }

    /// The partition the filter applies to.
    pub fn filter_side(&self) -> ListSide {
        self.filter_side
    }

    /// How filter text is matched.
    pub fn filter_mode(&self) -> FilterMode {
        self.filter_mode
    }

    /// Indices of one partition's visible items, in display order.
    pub fn visible_indices(&self, side: ListSide) -> Vec<usize> {
        let items = self.items(side);
        if side != self.filter_side || self.filter.is_empty() {
            return (0..items.len()).collect();
        }
        let labels: Vec<&str> = items.iter().map(|item| item.label()).collect();
        filter::visible_indices(self.filter_mode, &self.filter, &labels)
    }

    /// One partition's visible items, in display order.
    pub fn visible_items(&self, side: ListSide) -> Vec<&T> {
        let items = self.items(side);
        self.visible_indices(side)
            .into_iter()
            .map(|index| &items[index])
            .collect()
    }

    /// Id of the item at a row of the displayed (filtered) list.
    pub fn visible_id(&self, side: ListSide, visible_index: usize) -> Option<String> {
        let indices = self.visible_indices(side);
        let index = *indices.get(visible_index)?;
        self.items(side).get(index).map(|item| item.id().to_string())
    }

    fn display_order(&self, side: ListSide) -> Vec<String> {
        self.visible_items(side)
            .into_iter()
            .map(|item| item.id().to_string())
            .collect()
    }

    // ---- Transfers ----

    /// Move every selected item resident in the opposite partition into
    /// `to`, appending them in their current relative order.
    ///
    /// Clears the selection after a real move. A no-op returning an empty
    /// list when nothing is selected or no selected item lives in the
    /// opposite partition.
    pub fn move_selected(&mut self, to: ListSide) -> Vec<String> {
        if self.selection.is_empty() {
            return Vec::new();
        }
        let selection = &self.selection;
        let (from_items, to_items) = match to {
            ListSide::Source => (&mut self.picked, &mut self.source),
            ListSide::Picked => (&mut self.source, &mut self.picked),
        };

        let mut moved = Vec::new();
        let mut kept = Vec::with_capacity(from_items.len());
        for item in from_items.drain(..) {
            if selection.is_selected(item.id()) {
                moved.push(item);
            } else {
                kept.push(item);
            }
        }
        *from_items = kept;
        if moved.is_empty() {
            return Vec::new();
        }

        let moved_ids: Vec<String> = moved.iter().map(|item| item.id().to_string()).collect();
        to_items.extend(moved);
        self.selection.clear();
        log::debug!(
            "dual list '{}': moved {} item(s) to {}",
            self.name,
            moved_ids.len(),
            to
        );
        moved_ids
    }

    /// Move every item of the opposite partition into `to`, keeping their
    /// relative order. Clears the selection.
    pub fn move_all(&mut self, to: ListSide) -> Vec<String> {
        let (from_items, to_items) = match to {
            ListSide::Source => (&mut self.picked, &mut self.source),
            ListSide::Picked => (&mut self.source, &mut self.picked),
        };
        if from_items.is_empty() {
            return Vec::new();
        }
        let moved_ids: Vec<String> = from_items.iter().map(|item| item.id().to_string()).collect();
        to_items.append(from_items);
        self.selection.clear();
        log::debug!(
            "dual list '{}': moved all {} item(s) to {}",
            self.name,
            moved_ids.len(),
            to
        );
        moved_ids
    }

    /// Move one item to the opposite partition, appending it there.
    /// The id is dropped from the selection; other selected ids survive.
    pub(super) fn transfer_one(&mut self, id: &str) -> Result<ListSide, PickError> {
        let (side, position) = self.locate(id)?;
        let to = side.opposite();
        let item = match side {
            ListSide::Source => self.source.remove(position),
            ListSide::Picked => self.picked.remove(position),
        };
        match to {
            ListSide::Source => self.source.push(item),
            ListSide::Picked => self.picked.push(item),
        }
        self.selection.remove(id);
        log::debug!("dual list '{}': moved '{}' to {}", self.name, id, to);
        Ok(to)
    }

    // ---- Reordering ----

    /// Move the item at `from` to position `to` within one partition,
    /// shifting the items in between. Both indices address the partition
    /// before the move.
    pub fn reorder(&mut self, side: ListSide, from: usize, to: usize) -> Result<(), PickError> {
        let items = match side {
            ListSide::Source => &mut self.source,
            ListSide::Picked => &mut self.picked,
        };
        let len = items.len();
        if from >= len {
            return Err(PickError::out_of_range(from, len));
        }
        if to >= len {
            return Err(PickError::out_of_range(to, len));
        }
        if from == to {
            return Ok(());
        }
        let item = items.remove(from);
        items.insert(to, item);
        log::trace!(
            "dual list '{}': reordered {} item from {} to {}",
            self.name,
            side,
            from,
            to
        );
        Ok(())
    }

    // ---- Drag lifecycle ----

    /// Record the start of a drag on `id` and move the range anchor to it.
    pub fn begin_drag(&mut self, id: &str) -> Result<(), PickError> {
        self.locate(id)?;
        self.drag_start = true;
        self.selection.set_anchor(id);
        log::trace!("dual list '{}': drag started on '{}'", self.name, id);
        Ok(())
    }

    /// Mark the pointer as being over a valid drop target.
    /// Ignored when no drag is in progress.
    pub fn drag_enter(&mut self) {
        if self.drag_start {
            self.drag_over = true;
        }
    }

    /// Abandon an in-progress drag, clearing both drag flags.
    pub fn cancel_drag(&mut self) {
        self.drag_start = false;
        self.drag_over = false;
    }

    /// Complete a drag by dropping on `target`.
    ///
    /// Both drag flags are cleared no matter how the drop turns out. When
    /// the dragged item is part of a multi-selection this behaves like
    /// [`move_selected`](Self::move_selected); otherwise the one dragged
    /// item moves. Dropping on the partition the item already lives in,
    /// or without a drag in progress, is a no-op. Returns the moved ids.
    pub fn drop_on(&mut self, target: ListSide) -> Result<Vec<String>, PickError> {
        let was_dragging = self.drag_start;
        self.drag_start = false;
        self.drag_over = false;
        if !was_dragging {
            return Ok(Vec::new());
        }
        let Some(dragged) = self.selection.anchor().map(str::to_string) else {
            return Ok(Vec::new());
        };
        // a dragged item vanishing mid-drag is corruption, not caller error
        let (side, _) = self.locate(&dragged).map_err(|err| match err {
            PickError::UnknownId { id } => PickError::InconsistentState { id },
            other => other,
        })?;
        if self.selection.is_selected(&dragged) && self.selection.len() > 1 {
            return Ok(self.move_selected(target));
        }
        if side == target {
            return Ok(Vec::new());
        }
        self.transfer_one(&dragged)?;
        Ok(vec![dragged])
    }

    /// A drag that originated here is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag_start
    }

    /// The pointer is over a valid drop target.
    pub fn is_drag_over(&self) -> bool {
        self.drag_over
    }

    // ---- Projection ----

    /// Snapshot the container into a submittable outcome: picked items as
    /// `shown`, source items as `hidden`, not yet saved.
    pub fn project(&self) -> DualListResult<T> {
        DualListResult::new(self.picked.clone(), self.source.clone())
    }

    // ---- Consistency ----

    /// Verify the container invariants: unique residency, every selected
    /// id resident, the anchor resident if set.
    pub fn self_check(&self) -> Result<(), PickError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(self.total_len());
        for item in self.source.iter().chain(self.picked.iter()) {
            if !seen.insert(item.id()) {
                return Err(PickError::inconsistent(item.id()));
            }
        }
        for id in self.selection.ids() {
            if !seen.contains(id.as_str()) {
                return Err(PickError::inconsistent(id));
            }
        }
        if let Some(anchor) = self.selection.anchor()
            && !seen.contains(anchor)
        {
            return Err(PickError::inconsistent(anchor));
        }
        Ok(())
    }
}
