use std::collections::BTreeSet;

use crate::domain::entities::Row;

/// Authoritative record collection plus the derived current view.
///
/// Business mutations touch the full collection only; the orchestrator
/// re-derives the view afterwards (`set_view`/`reset_view`), so there is a
/// single recomputation point instead of hidden refreshes. Selection is the
/// one exception: it is mirrored into both collections immediately so a
/// checked row stays checked across a re-filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStore<R: Row> {
    all: Vec<R>,
    view: Vec<R>,
}

impl<R: Row> RecordStore<R> {
    pub fn new(seed: Vec<R>) -> Self {
        let view = seed.clone();
        RecordStore { all: seed, view }
    }

    pub fn all(&self) -> &[R] {
        &self.all
    }

    pub fn view(&self) -> &[R] {
        &self.view
    }

    pub fn contains_key(&self, id: &str) -> bool {
        self.all.iter().any(|record| record.id() == id)
    }

    /// Appends to the full collection. Uniqueness of `id` is the caller's
    /// responsibility.
    pub fn insert(&mut self, record: R) {
        self.all.push(record);
    }

    /// Replaces the record whose id matches; an unmatched id is a no-op, not
    /// an error, and never inserts.
    pub fn update_by_key(&mut self, id: &str, record: R) {
        if let Some(existing) = self.all.iter_mut().find(|existing| existing.id() == id) {
            *existing = record;
        }
    }

    /// Removes every record whose id is in `ids`; returns how many went away.
    pub fn delete_by_keys(&mut self, ids: &BTreeSet<String>) -> usize {
        let before = self.all.len();
        self.all.retain(|record| !ids.contains(record.id()));
        before - self.all.len()
    }

    /// Applies `mutate` to every record in the full collection whose id is in
    /// `ids`. The view is refreshed by the caller afterwards.
    pub fn mutate_by_keys(&mut self, ids: &BTreeSet<String>, mut mutate: impl FnMut(&mut R)) {
        for record in self.all.iter_mut() {
            if ids.contains(record.id()) {
                mutate(record);
            }
        }
    }

    pub fn set_selection(&mut self, id: &str, selected: bool) {
        for record in self.all.iter_mut().chain(self.view.iter_mut()) {
            if record.id() == id {
                record.set_selected(selected);
            }
        }
    }

    /// Flips one record's selection in both collections; returns the new
    /// state, or None when the id is unknown to the view.
    pub fn toggle_selection(&mut self, id: &str) -> Option<bool> {
        let next = !self
            .view
            .iter()
            .find(|record| record.id() == id)?
            .is_selected();
        self.set_selection(id, next);
        Some(next)
    }

    pub fn set_selection_for_keys(&mut self, ids: &BTreeSet<String>, selected: bool) {
        for record in self.all.iter_mut().chain(self.view.iter_mut()) {
            if ids.contains(record.id()) {
                record.set_selected(selected);
            }
        }
    }

    pub fn selected_ids(&self) -> BTreeSet<String> {
        self.view
            .iter()
            .filter(|record| record.is_selected())
            .map(|record| record.id().to_string())
            .collect()
    }

    /// Replaces the current view with a freshly derived subset.
    pub fn set_view(&mut self, view: Vec<R>) {
        self.view = view;
    }

    /// No active filter: the view is the full collection again.
    pub fn reset_view(&mut self) {
        self.view = self.all.clone();
    }
}
