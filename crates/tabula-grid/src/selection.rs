//! Row selection across pages and filters
//!
//! Selection is keyed by record id, so it survives paging and re-sorting.
//! "Select all" only ever adds or removes the ids of the visible page; rows
//! selected on other pages are left alone.

use std::collections::HashSet;

use indexmap::IndexSet;
use serde::Serialize;
use tabula_core::RecordId;

/// Selected record ids in the order they were selected
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    ids: IndexSet<RecordId>,
}

impl SelectionState {
    pub fn contains(&self, id: &RecordId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecordId> {
        self.ids.iter()
    }

    pub fn ids(&self) -> Vec<RecordId> {
        self.ids.iter().cloned().collect()
    }
}

/// Tri-state of the page header checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderCheckbox {
    Unchecked,
    Indeterminate,
    Checked,
}

/// Ids added by the last "select all", so that an immediate "unselect all"
/// over the same page undoes exactly that step.
#[derive(Debug, Clone)]
struct BulkSelect {
    visible: HashSet<RecordId>,
    added: Vec<RecordId>,
}

#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    state: SelectionState,
    known: HashSet<RecordId>,
    last_bulk: Option<BulkSelect>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.state.contains(id)
    }

    pub fn selected_ids(&self) -> Vec<RecordId> {
        self.state.ids()
    }

    /// Replace the set of known record ids, pruning selected ids that are no
    /// longer present. Returns the number of pruned ids.
    pub fn sync_known<'a>(&mut self, ids: impl IntoIterator<Item = &'a RecordId>) -> usize {
        self.known = ids.into_iter().cloned().collect();
        self.last_bulk = None;

        let before = self.state.ids.len();
        let known = &self.known;
        self.state.ids.retain(|id| known.contains(id));
        let pruned = before - self.state.ids.len();
        if pruned > 0 {
            tracing::debug!(pruned, "pruned selection after record set change");
        }
        pruned
    }

    /// Flip a single row. Ids outside the known record set are ignored.
    /// Returns whether the row is now selected.
    pub fn toggle_row(&mut self, id: &RecordId) -> bool {
        if !self.known.contains(id) {
            tracing::debug!(%id, "ignoring toggle for unknown record");
            return false;
        }
        self.last_bulk = None;

        if self.state.ids.shift_remove(id) {
            false
        } else {
            self.state.ids.insert(id.clone());
            true
        }
    }

    /// Union (`checked`) or subtract (`!checked`) the visible ids.
    ///
    /// Never a full reset: ids selected outside `visible` are preserved.
    pub fn select_all(&mut self, checked: bool, visible: &[RecordId]) {
        let visible_set: HashSet<RecordId> = visible
            .iter()
            .filter(|id| self.known.contains(*id))
            .cloned()
            .collect();

        if checked {
            let mut added = Vec::new();
            for id in visible {
                if visible_set.contains(id) && self.state.ids.insert(id.clone()) {
                    added.push(id.clone());
                }
            }
            tracing::debug!(added = added.len(), "selected visible rows");
            self.last_bulk = Some(BulkSelect {
                visible: visible_set,
                added,
            });
            return;
        }

        match self.last_bulk.take() {
            Some(bulk) if bulk.visible == visible_set => {
                for id in &bulk.added {
                    self.state.ids.shift_remove(id);
                }
                tracing::debug!(removed = bulk.added.len(), "undid select-all on visible rows");
            }
            _ => {
                let before = self.state.ids.len();
                self.state.ids.retain(|id| !visible_set.contains(id));
                tracing::debug!(
                    removed = before - self.state.ids.len(),
                    "unselected visible rows"
                );
            }
        }
    }

    pub fn clear(&mut self) {
        self.last_bulk = None;
        self.state.ids.clear();
    }

    pub fn header_state(&self, visible: &[RecordId]) -> HeaderCheckbox {
        let selected = visible.iter().filter(|id| self.state.contains(id)).count();
        if selected == 0 {
            HeaderCheckbox::Unchecked
        } else if selected == visible.len() {
            HeaderCheckbox::Checked
        } else {
            HeaderCheckbox::Indeterminate
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ids(raw: &[&str]) -> Vec<RecordId> {
        raw.iter().map(|id| RecordId::from(*id)).collect()
    }

    fn controller(known: &[&str], selected: &[&str]) -> SelectionController {
        let mut selection = SelectionController::new();
        selection.sync_known(&ids(known));
        for id in ids(selected) {
            selection.toggle_row(&id);
        }
        selection
    }

    #[test]
    fn test_toggle_row() {
        let mut selection = controller(&["A", "B"], &[]);
        let a = RecordId::from("A");

        assert!(selection.toggle_row(&a));
        assert!(selection.is_selected(&a));
        assert!(!selection.toggle_row(&a));
        assert!(!selection.is_selected(&a));
    }

    #[test]
    fn test_toggle_unknown_row_is_ignored() {
        let mut selection = controller(&["A"], &[]);

        assert!(!selection.toggle_row(&RecordId::from("Z")));
        assert!(selection.state().is_empty());
    }

    #[test]
    fn test_unselect_all_subtracts_visible_only() {
        let mut selection = controller(&["A", "B", "C", "D"], &["A", "B"]);

        selection.select_all(false, &ids(&["B", "C", "D"]));

        assert_eq!(selection.selected_ids(), ids(&["A"]));
    }

    #[test]
    fn test_select_all_unions_visible() {
        let mut selection = controller(&["A", "B", "C", "D"], &["A", "B"]);

        selection.select_all(true, &ids(&["B", "C", "D"]));

        assert_eq!(selection.selected_ids(), ids(&["A", "B", "C", "D"]));
    }

    #[test]
    fn test_select_then_unselect_restores_overlapping_selection() {
        let mut selection = controller(&["A", "B", "C", "D"], &["A", "B"]);
        let visible = ids(&["B", "C", "D"]);

        selection.select_all(true, &visible);
        selection.select_all(false, &visible);

        assert_eq!(selection.selected_ids(), ids(&["A", "B"]));
    }

    #[test]
    fn test_intervening_toggle_forgets_bulk_memo() {
        let mut selection = controller(&["A", "B", "C", "D"], &["B"]);
        let visible = ids(&["B", "C", "D"]);

        selection.select_all(true, &visible);
        selection.toggle_row(&RecordId::from("A"));
        selection.select_all(false, &visible);

        assert_eq!(selection.selected_ids(), ids(&["A"]));
    }

    #[test]
    fn test_select_all_ignores_unknown_ids() {
        let mut selection = controller(&["A"], &[]);

        selection.select_all(true, &ids(&["A", "ghost"]));

        assert_eq!(selection.selected_ids(), ids(&["A"]));
    }

    #[test]
    fn test_sync_known_prunes_vanished_ids() {
        let mut selection = controller(&["A", "B", "C"], &["A", "C"]);

        let pruned = selection.sync_known(&ids(&["B", "C"]));

        assert_eq!(pruned, 1);
        assert_eq!(selection.selected_ids(), ids(&["C"]));
    }

    #[test]
    fn test_header_state() {
        let selection = controller(&["A", "B", "C"], &["A"]);

        assert_eq!(selection.header_state(&ids(&["B", "C"])), HeaderCheckbox::Unchecked);
        assert_eq!(selection.header_state(&ids(&["A", "B"])), HeaderCheckbox::Indeterminate);
        assert_eq!(selection.header_state(&ids(&["A"])), HeaderCheckbox::Checked);
        assert_eq!(selection.header_state(&[]), HeaderCheckbox::Unchecked);
    }

    #[test]
    fn test_clear() {
        let mut selection = controller(&["A", "B"], &["A", "B"]);

        selection.clear();

        assert!(selection.state().is_empty());
        assert_eq!(selection.state().len(), 0);
    }
}
