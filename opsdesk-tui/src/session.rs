//! Assignment sessions tie one dual-list editor to a save target.
//!
//! A session owns the [`DualList`] for one relation (role members, project
//! locations, job SAP codes), remembers the last saved outcome, and pushes
//! new outcomes through a [`SavePort`].

use std::collections::HashSet;

use log::debug;
use picklist::prelude::*;
use serde::Serialize;

use crate::store::StoreError;

/// Where a saved assignment outcome goes.
///
/// The production console posts to a REST endpoint; tests and the demo
/// binary use [`MemorySavePort`].
pub trait SavePort<T> {
    fn submit(&mut self, relation: &str, outcome: &DualListResult<T>) -> Result<(), StoreError>;
}

/// Save port that serializes outcomes and keeps them in memory.
#[derive(Debug, Default)]
pub struct MemorySavePort {
    submissions: Vec<(String, String)>,
}

impl MemorySavePort {
    pub fn new() -> Self {
        Self::default()
    }

    /// All accepted submissions as `(relation, json)` pairs.
    pub fn submissions(&self) -> &[(String, String)] {
        &self.submissions
    }
}

impl<T: Serialize> SavePort<T> for MemorySavePort {
    fn submit(&mut self, relation: &str, outcome: &DualListResult<T>) -> Result<(), StoreError> {
        let payload = serde_json::to_string(outcome)
            .map_err(|e| StoreError::new(format!("serialize '{}' outcome: {}", relation, e)))?;
        debug!("submitting '{}' ({} bytes)", relation, payload.len());
        self.submissions.push((relation.to_string(), payload));
        Ok(())
    }
}

/// One dual-list editing session for a single owner/relation pair.
#[derive(Debug)]
pub struct AssignmentSession<T: PickItem> {
    relation: String,
    owner_label: String,
    pub list: DualList<T>,
    last_result: Option<DualListResult<T>>,
}

impl<T: PickItem> AssignmentSession<T> {
    /// Build a session from the full candidate set and the currently
    /// assigned ids.
    pub fn new(
        relation: impl Into<String>,
        owner_label: impl Into<String>,
        candidates: Vec<T>,
        assigned: &HashSet<String>,
    ) -> Result<Self, PickError> {
        let relation = relation.into();
        let mut list = DualList::new(&relation);
        list.initialize(candidates, assigned)?;
        Ok(Self {
            relation,
            owner_label: owner_label.into(),
            list,
            last_result: None,
        })
    }

    pub fn relation(&self) -> &str {
        &self.relation
    }

    pub fn owner_label(&self) -> &str {
        &self.owner_label
    }

    /// Snapshot the current split and push it through the port.
    ///
    /// The stored result is only marked saved after the port accepts it.
    pub fn save(&mut self, port: &mut impl SavePort<T>) -> Result<(), StoreError>
    where
        T: Serialize,
    {
        let mut outcome = self.list.project();
        port.submit(&self.relation, &outcome)?;
        outcome.mark_saved();
        debug!(
            "saved '{}' for {}: {} assigned, {} available",
            self.relation,
            self.owner_label,
            outcome.shown.len(),
            outcome.hidden.len()
        );
        self.last_result = Some(outcome);
        Ok(())
    }

    /// The most recently saved outcome, if any.
    pub fn last_saved(&self) -> Option<&DualListResult<T>> {
        self.last_result.as_ref()
    }

    /// Whether the current split differs from the last saved one.
    ///
    /// A session that has never saved counts as dirty.
    pub fn is_dirty(&self) -> bool {
        let Some(saved) = &self.last_result else {
            return true;
        };
        let current: Vec<&str> = self.list.picked().iter().map(|item| item.id()).collect();
        let stored: Vec<&str> = saved.shown.iter().map(|item| item.id()).collect();
        current != stored
    }
}
