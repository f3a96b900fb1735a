//! Per-row checkbox state for a paginated list, and its "select all" box.
//!
//! The select-all state is never stored. It is derived from the row flags every
//! time it is read, so it cannot drift from them.

use crate::model::ProductId;
use std::collections::HashMap;
use tracing::debug;

/// Checked flags for the rows of the page on screen.
///
/// Flags are kept per [`ProductId`]. Replacing the page clears them, so the set
/// is scoped to what is currently displayed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    displayed: Vec<ProductId>,
    flags: HashMap<ProductId, bool>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A selection over `ids`, nothing checked.
    pub fn for_page(ids: impl IntoIterator<Item = ProductId>) -> Self {
        let mut selection = Self::new();
        selection.set_page(ids);
        selection
    }

    /// Replaces the displayed rows. All flags are dropped.
    pub fn set_page(&mut self, ids: impl IntoIterator<Item = ProductId>) {
        self.displayed = ids.into_iter().collect();
        self.flags.clear();
    }

    pub fn displayed(&self) -> &[ProductId] {
        &self.displayed
    }

    /// Sets the row's flag to `checked`. Setting, not flipping: repeating the
    /// call changes nothing.
    ///
    /// Ids that are not on the page are ignored; returns whether the flag was set.
    pub fn toggle_one(&mut self, id: ProductId, checked: bool) -> bool {
        if !self.displayed.contains(&id) {
            debug!(%id, "Ignoring toggle for row not on page");
            return false;
        }
        self.flags.insert(id, checked);
        true
    }

    /// Checking sets every displayed row. Unchecking clears every flag,
    /// including flags left over for rows no longer displayed.
    pub fn toggle_all(&mut self, checked: bool) {
        if checked {
            for id in &self.displayed {
                self.flags.insert(*id, true);
            }
        } else {
            for flag in self.flags.values_mut() {
                *flag = false;
            }
        }
    }

    /// True iff the page is not empty and every displayed row is checked.
    pub fn is_all_checked(&self) -> bool {
        let checked = self.displayed.iter().filter(|id| self.is_checked(**id)).count();
        checked == self.displayed.len() && checked > 0
    }

    pub fn is_checked(&self, id: ProductId) -> bool {
        self.flags.get(&id).copied().unwrap_or(false)
    }

    /// Checked rows in display order. This is what a bulk delete sends.
    pub fn selected(&self) -> Vec<ProductId> {
        self.displayed
            .iter()
            .copied()
            .filter(|id| self.is_checked(*id))
            .collect()
    }

    pub fn has_selection(&self) -> bool {
        self.displayed.iter().any(|id| self.is_checked(*id))
    }

    /// Drops deleted rows from the page along with their flags.
    pub fn remove_deleted(&mut self, deleted: &[ProductId]) {
        self.displayed.retain(|id| !deleted.contains(id));
        for id in deleted {
            self.flags.remove(id);
        }
    }

    /// Unchecks everything and forgets every flag.
    pub fn clear(&mut self) {
        self.flags.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u32]) -> Vec<ProductId> {
        raw.iter().copied().map(ProductId).collect()
    }

    #[test]
    fn test_empty_page_is_never_all_checked() {
        let mut selection = SelectionSet::new();
        assert!(!selection.is_all_checked());
        selection.toggle_all(true);
        assert!(!selection.is_all_checked());
    }

    #[test]
    fn test_all_checked_only_when_every_row_checked() {
        let mut selection = SelectionSet::for_page(ids(&[1, 2, 3]));
        selection.toggle_one(ProductId(1), true);
        selection.toggle_one(ProductId(2), true);
        assert!(!selection.is_all_checked());

        selection.toggle_one(ProductId(3), true);
        assert!(selection.is_all_checked());
    }

    #[test]
    fn test_unchecking_one_row_clears_select_all() {
        let mut selection = SelectionSet::for_page(ids(&[1, 2, 3]));
        selection.toggle_all(true);
        assert!(selection.is_all_checked());

        selection.toggle_one(ProductId(2), false);
        assert!(!selection.is_all_checked());
        assert_eq!(selection.selected(), ids(&[1, 3]));
    }

    #[test]
    fn test_toggle_one_sets_rather_than_flips() {
        let mut selection = SelectionSet::for_page(ids(&[1]));
        selection.toggle_one(ProductId(1), true);
        selection.toggle_one(ProductId(1), true);
        assert!(selection.is_checked(ProductId(1)));
    }

    #[test]
    fn test_toggle_one_ignores_rows_not_on_page() {
        let mut selection = SelectionSet::for_page(ids(&[1, 2]));
        assert!(!selection.toggle_one(ProductId(9), true));
        assert!(!selection.is_checked(ProductId(9)));
    }

    #[test]
    fn test_uncheck_all_clears_every_flag() {
        let mut selection = SelectionSet::for_page(ids(&[1, 2, 3]));
        selection.toggle_all(true);
        selection.toggle_all(false);
        assert!(selection.selected().is_empty());
        assert!(!selection.has_selection());
    }

    #[test]
    fn test_remove_deleted_drops_rows_and_flags() {
        let mut selection = SelectionSet::for_page(ids(&[1, 2, 3]));
        selection.toggle_one(ProductId(1), true);
        selection.toggle_one(ProductId(3), true);

        selection.remove_deleted(&ids(&[1]));

        assert_eq!(selection.displayed(), ids(&[2, 3]).as_slice());
        assert!(!selection.is_checked(ProductId(1)));
        assert_eq!(selection.selected(), ids(&[3]));
    }

    #[test]
    fn test_all_checked_recomputed_after_delete() {
        let mut selection = SelectionSet::for_page(ids(&[1, 2]));
        selection.toggle_one(ProductId(1), true);
        assert!(!selection.is_all_checked());

        // Deleting the unchecked row leaves only checked rows.
        selection.remove_deleted(&ids(&[2]));
        assert!(selection.is_all_checked());

        selection.remove_deleted(&ids(&[1]));
        assert!(!selection.is_all_checked());
    }

    #[test]
    fn test_new_page_clears_flags() {
        let mut selection = SelectionSet::for_page(ids(&[1, 2]));
        selection.toggle_all(true);
        selection.set_page(ids(&[3, 4]));
        assert!(!selection.has_selection());
        assert!(!selection.is_all_checked());
    }
}
