use std::collections::HashSet;

use picklist::prelude::*;

#[derive(Debug, Clone)]
struct Entry {
    id: String,
    label: String,
}

impl PickItem for Entry {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.label
    }
}

fn entry(id: &str) -> Entry {
    Entry {
        id: id.to_string(),
        label: format!("Entry {id}"),
    }
}

fn list(candidates: &[&str], picked: &[&str]) -> DualList<Entry> {
    let mut dual = DualList::new("test");
    let picked_ids: HashSet<String> = picked.iter().map(|id| id.to_string()).collect();
    dual.initialize(candidates.iter().map(|id| entry(id)).collect(), &picked_ids)
        .unwrap();
    dual
}

#[test]
fn test_plain_click_replaces_selection() {
    let mut dual = list(&["a", "b", "c"], &[]);
    dual.select("a", false).unwrap();

    let (result, events) = dual
        .handle_click(ListSide::Source, 1, false, false)
        .unwrap();

    assert_eq!(result, EventResult::StartDrag);
    let change = events.selection_change.unwrap();
    assert_eq!(change.selected, vec!["b"]);
    assert_eq!(change.added, vec!["b"]);
    assert_eq!(change.removed, vec!["a"]);
}

#[test]
fn test_ctrl_click_toggles_item() {
    let mut dual = list(&["a", "b"], &[]);
    dual.select("a", false).unwrap();

    let (_, events) = dual.handle_click(ListSide::Source, 1, true, false).unwrap();

    let change = events.selection_change.unwrap();
    assert_eq!(change.selected, vec!["a", "b"]);
    assert_eq!(change.added, vec!["b"]);
    assert!(change.removed.is_empty());

    let (_, events) = dual.handle_click(ListSide::Source, 1, true, false).unwrap();
    let change = events.selection_change.unwrap();
    assert_eq!(change.selected, vec!["a"]);
    assert_eq!(change.removed, vec!["b"]);
}

#[test]
fn test_shift_click_selects_range() {
    let mut dual = list(&["a", "b", "c", "d"], &[]);
    dual.handle_click(ListSide::Source, 1, false, false).unwrap();

    let (_, events) = dual.handle_click(ListSide::Source, 3, false, true).unwrap();

    let change = events.selection_change.unwrap();
    assert_eq!(change.selected, vec!["b", "c", "d"]);
    assert_eq!(change.added, vec!["c", "d"]);
    assert_eq!(dual.selected_ids(), vec!["b", "c", "d"]);
}

#[test]
fn test_shift_click_across_partitions_changes_nothing() {
    let mut dual = list(&["a", "b"], &["b"]);
    dual.handle_click(ListSide::Source, 0, false, false).unwrap();

    let (result, events) = dual.handle_click(ListSide::Picked, 0, false, true).unwrap();

    // the click landed on an item, but the range gesture is a no-op
    assert_eq!(result, EventResult::StartDrag);
    assert!(events.selection_change.is_none());
    assert_eq!(dual.selected_ids(), vec!["a"]);
}

#[test]
fn test_click_beyond_visible_rows_is_ignored() {
    let mut dual = list(&["a"], &[]);

    let (result, events) = dual
        .handle_click(ListSide::Source, 5, false, false)
        .unwrap();

    assert_eq!(result, EventResult::Ignored);
    assert!(events.selection_change.is_none());
    assert!(dual.selected_ids().is_empty());
}

#[test]
fn test_click_on_filtered_rows_uses_display_indices() {
    let mut dual = list(&["alpha", "beta", "gamma"], &[]);
    dual.set_filter(ListSide::Source, "ma");

    // row 0 of the displayed list is "gamma", not "alpha"
    let (_, events) = dual.handle_click(ListSide::Source, 0, false, false).unwrap();

    let change = events.selection_change.unwrap();
    assert_eq!(change.selected, vec!["gamma"]);
}

#[test]
fn test_repeated_plain_click_reports_no_change() {
    let mut dual = list(&["a", "b"], &[]);
    dual.handle_click(ListSide::Source, 0, false, false).unwrap();

    let (result, events) = dual
        .handle_click(ListSide::Source, 0, false, false)
        .unwrap();

    assert_eq!(result, EventResult::StartDrag);
    assert!(events.selection_change.is_none());
}

#[test]
fn test_activate_transfers_the_one_item() {
    let mut dual = list(&["a", "b"], &[]);

    let (result, events) = dual.handle_activate(ListSide::Source, 1).unwrap();

    assert_eq!(result, EventResult::Consumed);
    let transfer = events.transfer.unwrap();
    assert_eq!(transfer.ids, vec!["b"]);
    assert_eq!(transfer.to, ListSide::Picked);
    assert_eq!(dual.picked()[0].id, "b");
}

#[test]
fn test_activate_beyond_visible_rows_is_ignored() {
    let mut dual = list(&["a"], &[]);
    let (result, events) = dual.handle_activate(ListSide::Source, 3).unwrap();
    assert_eq!(result, EventResult::Ignored);
    assert!(events.transfer.is_none());
}

#[test]
fn test_move_selected_gesture_reports_transfer() {
    let mut dual = list(&["a", "b", "c"], &[]);
    dual.select("a", true).unwrap();
    dual.select("c", true).unwrap();

    let (result, events) = dual.handle_move_selected(ListSide::Picked);

    assert_eq!(result, EventResult::Consumed);
    let transfer = events.transfer.unwrap();
    assert_eq!(transfer.ids, vec!["a", "c"]);
    assert_eq!(transfer.to, ListSide::Picked);
}

#[test]
fn test_move_selected_gesture_with_nothing_to_move_is_ignored() {
    let mut dual = list(&["a"], &[]);
    let (result, events) = dual.handle_move_selected(ListSide::Picked);
    assert_eq!(result, EventResult::Ignored);
    assert!(events.transfer.is_none());
}

#[test]
fn test_reorder_gesture_reports_indices() {
    let mut dual = list(&["a", "b", "c"], &[]);

    let (result, events) = dual.handle_reorder(ListSide::Source, 2, 0).unwrap();

    assert_eq!(result, EventResult::Consumed);
    let reorder = events.reorder.unwrap();
    assert_eq!(reorder.side, ListSide::Source);
    assert_eq!(reorder.from, 2);
    assert_eq!(reorder.to, 0);
}

#[test]
fn test_reorder_gesture_to_same_slot_is_ignored() {
    let mut dual = list(&["a", "b"], &[]);
    let (result, events) = dual.handle_reorder(ListSide::Source, 1, 1).unwrap();
    assert_eq!(result, EventResult::Ignored);
    assert!(events.reorder.is_none());
}

#[test]
fn test_drop_gesture_reports_transfer() {
    let mut dual = list(&["a", "b"], &[]);
    dual.begin_drag("a").unwrap();
    dual.drag_enter();

    let (result, events) = dual.handle_drop(ListSide::Picked).unwrap();

    assert_eq!(result, EventResult::Consumed);
    let transfer = events.transfer.unwrap();
    assert_eq!(transfer.ids, vec!["a"]);
    assert_eq!(transfer.to, ListSide::Picked);
    assert!(!dual.is_dragging());
}

#[test]
fn test_drop_gesture_without_drag_is_ignored() {
    let mut dual = list(&["a"], &[]);
    let (result, events) = dual.handle_drop(ListSide::Picked).unwrap();
    assert_eq!(result, EventResult::Ignored);
    assert!(events.transfer.is_none());
}
