//! Selection state for dual-list containers.
//!
//! Selection tracks ids, not positions, so it stays stable while items
//! move between partitions or are hidden by a filter. The anchor is the
//! starting point for range selection; it is a weak back-reference and
//! never keeps an item resident on its own.

use std::collections::HashSet;

/// Id-based multi-selection with a range anchor.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Currently selected ids.
    selected: HashSet<String>,
    /// Starting point for range selection (Shift+click).
    anchor: Option<String>,
}

impl Selection {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// All selected ids, sorted for deterministic reporting.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Check if an id is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// The anchor id for range selection, if one is set.
    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }

    /// Move the anchor without touching the selected set.
    pub fn set_anchor(&mut self, id: impl Into<String>) {
        self.anchor = Some(id.into());
    }

    /// Clear the selection and the anchor.
    /// Returns the deselected ids, sorted.
    pub fn clear(&mut self) -> Vec<String> {
        let mut removed: Vec<_> = self.selected.drain().collect();
        removed.sort();
        self.anchor = None;
        removed
    }

    /// Select a single id, dropping every other selected id.
    /// The anchor moves to `id`. Returns (added, removed), sorted.
    pub fn select(&mut self, id: &str) -> (Vec<String>, Vec<String>) {
        let mut removed: Vec<_> = self.selected.iter().filter(|&i| i != id).cloned().collect();
        removed.sort();
        let was_selected = self.selected.contains(id);
        self.selected.clear();
        self.selected.insert(id.to_string());
        self.anchor = Some(id.to_string());
        let added = if was_selected {
            vec![]
        } else {
            vec![id.to_string()]
        };
        (added, removed)
    }

    /// Toggle one id in or out of the selection (Ctrl+click behavior).
    /// The anchor moves to `id` either way. Returns (added, removed).
    pub fn toggle(&mut self, id: &str) -> (Vec<String>, Vec<String>) {
        self.anchor = Some(id.to_string());
        if self.selected.remove(id) {
            (vec![], vec![id.to_string()])
        } else {
            self.selected.insert(id.to_string());
            (vec![id.to_string()], vec![])
        }
    }

    /// Range select from the anchor to `target_id` (Shift+click behavior).
    ///
    /// `ordered_ids` is the display order the range runs over. The new
    /// selection is exactly the ids between anchor and target, inclusive;
    /// everything outside the run is dropped. Falls back to a plain
    /// [`select`](Self::select) when the anchor is unset or either end is
    /// not in `ordered_ids`. The anchor itself does not move, so repeated
    /// range selects pivot around the same starting point.
    ///
    /// Returns (added, removed), sorted.
    pub fn range_select(
        &mut self,
        target_id: &str,
        ordered_ids: &[String],
    ) -> (Vec<String>, Vec<String>) {
        let Some(anchor_id) = self.anchor.clone() else {
            return self.select(target_id);
        };

        let anchor_pos = ordered_ids.iter().position(|id| id == &anchor_id);
        let target_pos = ordered_ids.iter().position(|id| id == target_id);

        let (start, end) = match (anchor_pos, target_pos) {
            (Some(a), Some(t)) => {
                if a <= t {
                    (a, t)
                } else {
                    (t, a)
                }
            }
            _ => return self.select(target_id),
        };

        let run: HashSet<String> = ordered_ids[start..=end].iter().cloned().collect();

        let mut removed: Vec<_> = self
            .selected
            .iter()
            .filter(|id| !run.contains(*id))
            .cloned()
            .collect();
        removed.sort();
        for id in &removed {
            self.selected.remove(id);
        }

        let mut added = Vec::new();
        for id in run {
            if self.selected.insert(id.clone()) {
                added.push(id);
            }
        }
        added.sort();

        (added, removed)
    }

    /// Add every id in `ids` to the selection.
    /// Returns the ids that were newly selected, sorted.
    pub fn select_many(&mut self, ids: impl IntoIterator<Item = String>) -> Vec<String> {
        let mut added = Vec::new();
        for id in ids {
            if self.selected.insert(id.clone()) {
                added.push(id);
            }
        }
        added.sort();
        added
    }

    /// Remove a single id from the selection, leaving the anchor alone.
    /// Returns `true` if the id was selected.
    pub fn remove(&mut self, id: &str) -> bool {
        self.selected.remove(id)
    }

    /// Drop every selected id for which `keep` returns `false`.
    /// Returns the removed ids, sorted.
    pub fn retain(&mut self, keep: impl Fn(&str) -> bool) -> Vec<String> {
        let mut removed: Vec<_> = self
            .selected
            .iter()
            .filter(|id| !keep(id))
            .cloned()
            .collect();
        removed.sort();
        for id in &removed {
            self.selected.remove(id);
        }
        removed
    }
}
