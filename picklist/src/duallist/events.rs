//! Event handling for the dual-list container.
//!
//! Input gestures map onto container operations here, and what changed
//! comes back as typed events, keeping the host's event loop a thin
//! dispatcher.

use crate::error::PickError;
use crate::item::PickItem;

use super::state::{DualList, ListSide};

/// Result of handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
    /// Event landed on an item and may begin a drag on it.
    StartDrag,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// Event fired when the selection changes.
#[derive(Debug, Clone)]
pub struct SelectionChangeEvent {
    /// All currently selected ids, sorted.
    pub selected: Vec<String>,
    /// Ids that were added to the selection.
    pub added: Vec<String>,
    /// Ids that were removed from the selection.
    pub removed: Vec<String>,
}

/// Event fired when items transfer between the partitions.
#[derive(Debug, Clone)]
pub struct TransferEvent {
    /// Ids that moved, in their transfer order.
    pub ids: Vec<String>,
    /// The partition they moved into.
    pub to: ListSide,
}

/// Event fired when an item is reordered within one partition.
#[derive(Debug, Clone)]
pub struct ReorderEvent {
    /// The partition that was reordered.
    pub side: ListSide,
    /// Index the item was taken from.
    pub from: usize,
    /// Index the item landed on.
    pub to: usize,
}

/// Pending events to be dispatched after input handling.
#[derive(Debug, Clone, Default)]
pub struct DualListEvents {
    pub selection_change: Option<SelectionChangeEvent>,
    pub transfer: Option<TransferEvent>,
    pub reorder: Option<ReorderEvent>,
}

impl<T: PickItem> DualList<T> {
    /// Handle a click on row `visible_index` of `side`'s displayed list.
    ///
    /// Plain click replaces the selection, Ctrl toggles the one item,
    /// Shift selects the range from the anchor. Clicks beyond the visible
    /// rows are ignored. A click that lands on an item returns
    /// [`EventResult::StartDrag`] since any item press may become a drag.
    pub fn handle_click(
        &mut self,
        side: ListSide,
        visible_index: usize,
        ctrl: bool,
        shift: bool,
    ) -> Result<(EventResult, DualListEvents), PickError> {
        let mut events = DualListEvents::default();
        let Some(id) = self.visible_id(side, visible_index) else {
            return Ok((EventResult::Ignored, events));
        };

        let (added, removed) = if shift {
            self.select_range_impl(&id)?
        } else if ctrl {
            self.select_impl(&id, true)?
        } else {
            self.select_impl(&id, false)?
        };
        if !added.is_empty() || !removed.is_empty() {
            events.selection_change = Some(SelectionChangeEvent {
                selected: self.selected_ids(),
                added,
                removed,
            });
        }

        Ok((EventResult::StartDrag, events))
    }

    /// Handle activation (Enter or double click) of row `visible_index`:
    /// the one activated item transfers to the opposite partition.
    pub fn handle_activate(
        &mut self,
        side: ListSide,
        visible_index: usize,
    ) -> Result<(EventResult, DualListEvents), PickError> {
        let mut events = DualListEvents::default();
        let Some(id) = self.visible_id(side, visible_index) else {
            return Ok((EventResult::Ignored, events));
        };

        let to = self.transfer_one(&id)?;
        events.transfer = Some(TransferEvent { ids: vec![id], to });
        Ok((EventResult::Consumed, events))
    }

    /// Handle a transfer gesture: move the selected items into `to`.
    pub fn handle_move_selected(&mut self, to: ListSide) -> (EventResult, DualListEvents) {
        let mut events = DualListEvents::default();
        let ids = self.move_selected(to);
        if ids.is_empty() {
            return (EventResult::Ignored, events);
        }
        events.transfer = Some(TransferEvent { ids, to });
        (EventResult::Consumed, events)
    }

    /// Handle a reorder gesture within one partition.
    pub fn handle_reorder(
        &mut self,
        side: ListSide,
        from: usize,
        to: usize,
    ) -> Result<(EventResult, DualListEvents), PickError> {
        let mut events = DualListEvents::default();
        self.reorder(side, from, to)?;
        if from == to {
            return Ok((EventResult::Ignored, events));
        }
        events.reorder = Some(ReorderEvent { side, from, to });
        Ok((EventResult::Consumed, events))
    }

    /// Handle the release of a drag over `target`.
    pub fn handle_drop(
        &mut self,
        target: ListSide,
    ) -> Result<(EventResult, DualListEvents), PickError> {
        let mut events = DualListEvents::default();
        let ids = self.drop_on(target)?;
        if ids.is_empty() {
            return Ok((EventResult::Ignored, events));
        }
        events.transfer = Some(TransferEvent { ids, to: target });
        Ok((EventResult::Consumed, events))
    }
}
