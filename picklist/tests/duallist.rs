use std::collections::HashSet;

use picklist::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Code {
    id: String,
    label: String,
}

impl PickItem for Code {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.label
    }
}

fn code(id: &str) -> Code {
    Code {
        id: id.to_string(),
        label: format!("Code {}", id.to_uppercase()),
    }
}

fn list(candidates: &[&str], picked: &[&str]) -> DualList<Code> {
    let mut dual = DualList::new("test");
    let picked_ids: HashSet<String> = picked.iter().map(|id| id.to_string()).collect();
    dual.initialize(candidates.iter().map(|id| code(id)).collect(), &picked_ids)
        .unwrap();
    dual
}

fn ids(items: &[Code]) -> Vec<&str> {
    items.iter().map(|item| item.id.as_str()).collect()
}

#[test]
fn test_initialize_partitions_candidates() {
    let dual = list(&["a", "b", "c", "d"], &["b", "d"]);
    assert_eq!(ids(dual.source()), vec!["a", "c"]);
    assert_eq!(ids(dual.picked()), vec!["b", "d"]);
    assert_eq!(dual.total_len(), 4);
    dual.self_check().unwrap();
}

#[test]
fn test_initialize_with_no_picked_ids() {
    let dual = list(&["a", "b", "c"], &[]);
    assert_eq!(ids(dual.source()), vec!["a", "b", "c"]);
    assert!(dual.picked().is_empty());
}

#[test]
fn test_initialize_rejects_duplicate_ids() {
    let mut dual = list(&["a", "b"], &["b"]);
    let candidates = vec![code("x"), code("y"), code("x")];
    let err = dual.initialize(candidates, &HashSet::new()).unwrap_err();
    assert_eq!(err, PickError::duplicate("x"));
    // prior state is untouched on failure
    assert_eq!(ids(dual.source()), vec!["a"]);
    assert_eq!(ids(dual.picked()), vec!["b"]);
}

#[test]
fn test_initialize_ignores_unknown_picked_ids() {
    let dual = list(&["a", "b"], &["zz"]);
    assert_eq!(ids(dual.source()), vec!["a", "b"]);
    assert!(dual.picked().is_empty());
}

#[test]
fn test_reinitialize_resets_transient_state() {
    let mut dual = list(&["a", "b", "c"], &[]);
    dual.select("a", false).unwrap();
    dual.set_filter(ListSide::Source, "code");
    dual.begin_drag("b").unwrap();
    dual.drag_enter();

    let picked_ids: HashSet<String> = ["b".to_string()].into_iter().collect();
    dual.initialize(vec![code("a"), code("b")], &picked_ids).unwrap();

    assert!(dual.selected_ids().is_empty());
    assert!(dual.anchor().is_none());
    assert_eq!(dual.filter_text(), "");
    assert!(!dual.is_dragging());
    assert!(!dual.is_drag_over());
    assert_eq!(ids(dual.source()), vec!["a"]);
    assert_eq!(ids(dual.picked()), vec!["b"]);
}

#[test]
fn test_move_selected_preserves_relative_order() {
    let mut dual = list(&["a", "b", "c", "d"], &[]);
    dual.select("b", true).unwrap();
    dual.select("d", true).unwrap();

    let moved = dual.move_selected(ListSide::Picked);

    assert_eq!(moved, vec!["b", "d"]);
    assert_eq!(ids(dual.source()), vec!["a", "c"]);
    assert_eq!(ids(dual.picked()), vec!["b", "d"]);
    assert!(dual.selected_ids().is_empty());
    dual.self_check().unwrap();
}

#[test]
fn test_move_selected_with_empty_selection_is_noop() {
    let mut dual = list(&["a", "b"], &["b"]);
    let moved = dual.move_selected(ListSide::Picked);
    assert!(moved.is_empty());
    assert_eq!(ids(dual.source()), vec!["a"]);
    assert_eq!(ids(dual.picked()), vec!["b"]);
}

#[test]
fn test_move_selected_ignores_items_already_in_target() {
    let mut dual = list(&["a", "b"], &["b"]);
    dual.select("b", false).unwrap();

    let moved = dual.move_selected(ListSide::Picked);

    assert!(moved.is_empty());
    // the no-op leaves the selection alone
    assert_eq!(dual.selected_ids(), vec!["b"]);
    assert_eq!(ids(dual.picked()), vec!["b"]);
}

#[test]
fn test_move_all_empties_the_opposite_partition() {
    let mut dual = list(&["a", "b", "c"], &["c"]);
    let moved = dual.move_all(ListSide::Picked);
    assert_eq!(moved, vec!["a", "b"]);
    assert!(dual.source().is_empty());
    assert_eq!(ids(dual.picked()), vec!["c", "a", "b"]);

    let again = dual.move_all(ListSide::Picked);
    assert!(again.is_empty());
}

#[test]
fn test_reorder_removes_then_inserts() {
    let mut dual = list(&["a", "b", "c", "d"], &[]);
    dual.reorder(ListSide::Source, 0, 2).unwrap();
    assert_eq!(ids(dual.source()), vec!["b", "c", "a", "d"]);

    dual.reorder(ListSide::Source, 3, 0).unwrap();
    assert_eq!(ids(dual.source()), vec!["d", "b", "c", "a"]);
}

#[test]
fn test_reorder_same_index_is_noop() {
    let mut dual = list(&["a", "b"], &[]);
    dual.reorder(ListSide::Source, 1, 1).unwrap();
    assert_eq!(ids(dual.source()), vec!["a", "b"]);
}

#[test]
fn test_reorder_rejects_out_of_range_indices() {
    let mut dual = list(&["a", "b", "c"], &[]);

    let err = dual.reorder(ListSide::Source, 3, 0).unwrap_err();
    assert_eq!(err, PickError::out_of_range(3, 3));

    let err = dual.reorder(ListSide::Source, 0, 3).unwrap_err();
    assert_eq!(err, PickError::out_of_range(3, 3));

    // failed reorders leave the order untouched
    assert_eq!(ids(dual.source()), vec!["a", "b", "c"]);
}

#[test]
fn test_reorder_empty_partition_fails() {
    let mut dual = list(&["a"], &["a"]);
    let err = dual.reorder(ListSide::Source, 0, 0).unwrap_err();
    assert_eq!(err, PickError::out_of_range(0, 0));
}

#[test]
fn test_every_item_stays_resident_through_a_session() {
    let mut dual = list(&["a", "b", "c", "d", "e"], &["d"]);

    dual.select("a", false).unwrap();
    dual.select("c", true).unwrap();
    dual.move_selected(ListSide::Picked);
    dual.reorder(ListSide::Picked, 0, 2).unwrap();
    dual.begin_drag("b").unwrap();
    dual.drag_enter();
    dual.drop_on(ListSide::Picked).unwrap();
    dual.move_all(ListSide::Source);

    let mut all: Vec<&str> = ids(dual.source());
    all.extend(ids(dual.picked()));
    all.sort_unstable();
    assert_eq!(all, vec!["a", "b", "c", "d", "e"]);
    dual.self_check().unwrap();
}

#[test]
fn test_select_replaces_and_toggles() {
    let mut dual = list(&["a", "b", "c"], &[]);

    dual.select("b", false).unwrap();
    assert_eq!(dual.selected_ids(), vec!["b"]);

    dual.select("c", false).unwrap();
    assert_eq!(dual.selected_ids(), vec!["c"]);

    dual.select("b", true).unwrap();
    assert_eq!(dual.selected_ids(), vec!["b", "c"]);

    dual.select("b", true).unwrap();
    assert_eq!(dual.selected_ids(), vec!["c"]);
}

#[test]
fn test_select_unknown_id_fails() {
    let mut dual = list(&["a"], &[]);
    let err = dual.select("zz", false).unwrap_err();
    assert_eq!(err, PickError::unknown("zz"));
    assert!(dual.selected_ids().is_empty());
}

#[test]
fn test_anchor_follows_the_last_touched_item() {
    let mut dual = list(&["a", "b", "c"], &[]);
    dual.select("b", false).unwrap();
    assert_eq!(dual.anchor(), Some("b"));

    dual.select("c", true).unwrap();
    assert_eq!(dual.anchor(), Some("c"));

    dual.clear_selection();
    assert!(dual.anchor().is_none());
}

#[test]
fn test_side_of_resolves_residency() {
    let dual = list(&["a", "b"], &["b"]);
    assert_eq!(dual.side_of("a").unwrap(), ListSide::Source);
    assert_eq!(dual.side_of("b").unwrap(), ListSide::Picked);
    assert_eq!(dual.side_of("zz").unwrap_err(), PickError::unknown("zz"));
}

#[test]
fn test_project_snapshots_both_partitions() {
    let mut dual = list(&["a", "b", "c"], &["b"]);
    dual.select("a", false).unwrap();
    dual.move_selected(ListSide::Picked);

    let mut outcome = dual.project();
    assert_eq!(outcome.shown_ids(), vec!["b", "a"]);
    assert_eq!(outcome.hidden_ids(), vec!["c"]);
    assert!(!outcome.saved);

    outcome.mark_saved();
    assert!(outcome.saved);

    // the projection is a copy, the container is not consumed
    assert_eq!(ids(dual.picked()), vec!["b", "a"]);
}

#[test]
fn test_drag_flags_reset_after_drop() {
    let mut dual = list(&["a", "b"], &[]);
    dual.begin_drag("a").unwrap();
    assert!(dual.is_dragging());
    dual.drag_enter();
    assert!(dual.is_drag_over());

    let moved = dual.drop_on(ListSide::Picked).unwrap();

    assert_eq!(moved, vec!["a"]);
    assert!(!dual.is_dragging());
    assert!(!dual.is_drag_over());
    assert_eq!(ids(dual.picked()), vec!["a"]);
}

#[test]
fn test_drop_without_drag_is_noop() {
    let mut dual = list(&["a"], &[]);
    let moved = dual.drop_on(ListSide::Picked).unwrap();
    assert!(moved.is_empty());
    assert!(!dual.is_dragging());
    assert!(!dual.is_drag_over());
    assert_eq!(ids(dual.source()), vec!["a"]);
}

#[test]
fn test_drop_on_own_partition_is_noop() {
    let mut dual = list(&["a", "b"], &[]);
    dual.begin_drag("a").unwrap();
    dual.drag_enter();

    let moved = dual.drop_on(ListSide::Source).unwrap();

    assert!(moved.is_empty());
    assert!(!dual.is_dragging());
    assert!(!dual.is_drag_over());
    assert_eq!(ids(dual.source()), vec!["a", "b"]);
}

#[test]
fn test_cancel_drag_clears_flags() {
    let mut dual = list(&["a"], &[]);
    dual.begin_drag("a").unwrap();
    dual.drag_enter();
    dual.cancel_drag();
    assert!(!dual.is_dragging());
    assert!(!dual.is_drag_over());
}

#[test]
fn test_begin_drag_on_unknown_id_fails() {
    let mut dual = list(&["a"], &[]);
    let err = dual.begin_drag("zz").unwrap_err();
    assert_eq!(err, PickError::unknown("zz"));
    assert!(!dual.is_dragging());
}

#[test]
fn test_drop_moves_the_whole_multi_selection() {
    let mut dual = list(&["a", "b", "c"], &[]);
    dual.select("a", true).unwrap();
    dual.select("c", true).unwrap();
    dual.begin_drag("a").unwrap();

    let moved = dual.drop_on(ListSide::Picked).unwrap();

    assert_eq!(moved, vec!["a", "c"]);
    assert_eq!(ids(dual.source()), vec!["b"]);
    assert_eq!(ids(dual.picked()), vec!["a", "c"]);
    assert!(dual.selected_ids().is_empty());
    assert!(!dual.is_dragging());
}

#[test]
fn test_drop_of_unselected_item_moves_only_that_item() {
    let mut dual = list(&["a", "b"], &[]);
    dual.select("b", false).unwrap();
    dual.begin_drag("a").unwrap();

    let moved = dual.drop_on(ListSide::Picked).unwrap();

    assert_eq!(moved, vec!["a"]);
    assert_eq!(ids(dual.picked()), vec!["a"]);
    // the selection on the untouched item survives
    assert_eq!(dual.selected_ids(), vec!["b"]);
}
