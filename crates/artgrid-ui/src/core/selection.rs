//! Cross-page row selection.
//!
//! # Design
//! - Track identifiers, never records, so selection outlives any one page fetch.
//! - Unchecking is scoped to the ids currently on screen; ids from other pages
//!   are never touched by a page-level reconcile.
//! - Bulk additions are monotonic.

use artgrid_api_models::{Artwork, ArtworkId};
use std::collections::HashSet;

/// Session-scoped set of selected artwork identifiers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionStore {
    ids: HashSet<ArtworkId>,
}

impl SelectionStore {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the checked state of the visible page.
    ///
    /// Every id in `newly_checked` is added. Every id in `visible` that is not in
    /// `newly_checked` is removed. Ids outside `visible` are left as they are.
    pub fn reconcile_visible_page(&mut self, visible: &[ArtworkId], newly_checked: &[ArtworkId]) {
        let checked: HashSet<ArtworkId> = newly_checked.iter().copied().collect();
        for id in visible {
            if !checked.contains(id) {
                self.ids.remove(id);
            }
        }
        self.ids.extend(checked);
    }

    /// Add every id; never removes. Returns how many ids were not already selected.
    pub fn bulk_add<I>(&mut self, ids: I) -> usize
    where
        I: IntoIterator<Item = ArtworkId>,
    {
        let before = self.ids.len();
        self.ids.extend(ids);
        self.ids.len() - before
    }

    /// Number of selected ids.
    #[must_use]
    pub fn size(&self) -> usize {
        self.ids.len()
    }

    /// True when nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Membership test used for per-row checkbox state.
    #[must_use]
    pub fn contains(&self, id: ArtworkId) -> bool {
        self.ids.contains(&id)
    }

    /// Ids of `rows` that are currently selected, in row order.
    #[must_use]
    pub fn checked_on_page(&self, rows: &[Artwork]) -> Vec<ArtworkId> {
        rows.iter()
            .map(|row| row.id)
            .filter(|id| self.ids.contains(id))
            .collect()
    }

    /// True when the page has rows and every one of them is selected.
    #[must_use]
    pub fn all_visible_selected(&self, rows: &[Artwork]) -> bool {
        !rows.is_empty() && rows.iter().all(|row| self.ids.contains(&row.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artgrid_test_support::fixtures::{ids, page_of};

    #[test]
    fn reconcile_adds_checked_and_drops_unchecked_visible() {
        let mut store = SelectionStore::new();
        let visible = ids(1..=4);
        store.reconcile_visible_page(&visible, &ids(1..=3));
        assert_eq!(store.size(), 3);

        store.reconcile_visible_page(&visible, &ids(2..=3));
        assert!(!store.contains(ArtworkId(1)));
        assert!(store.contains(ArtworkId(2)));
        assert_eq!(store.size(), 2);
    }

    #[test]
    fn reconcile_never_touches_ids_outside_visible() {
        let mut store = SelectionStore::new();
        store.bulk_add(ids(100..=110));
        for window in [ids(1..=12), ids(13..=24), Vec::new()] {
            for checked_len in 0..=window.len() {
                let checked = &window[..checked_len];
                store.reconcile_visible_page(&window, checked);
                for id in ids(100..=110) {
                    assert!(store.contains(id), "{id} was dropped");
                }
            }
        }
    }

    #[test]
    fn reconcile_is_idempotent() {
        let mut store = SelectionStore::new();
        let visible = ids(1..=5);
        let checked = vec![ArtworkId(2), ArtworkId(4), ArtworkId(4)];
        store.reconcile_visible_page(&visible, &checked);
        let snapshot = store.clone();
        store.reconcile_visible_page(&visible, &checked);
        assert_eq!(store, snapshot);
        assert_eq!(store.size(), 2);
    }

    #[test]
    fn bulk_add_is_monotonic_and_counts_new_ids() {
        let mut store = SelectionStore::new();
        assert_eq!(store.bulk_add(ids(1..=5)), 5);
        let mut previous = store.size();
        for batch in [ids(3..=8), Vec::new(), ids(1..=2), ids(20..=20)] {
            store.bulk_add(batch);
            assert!(store.size() >= previous);
            previous = store.size();
        }
        assert_eq!(store.size(), 9);
        assert_eq!(store.bulk_add(ids(1..=9)), 0);
    }

    #[test]
    fn size_tracks_true_cardinality() {
        let mut store = SelectionStore::new();
        store.reconcile_visible_page(&ids(1..=3), &[ArtworkId(1), ArtworkId(1)]);
        store.bulk_add([ArtworkId(1), ArtworkId(2), ArtworkId(2)]);
        assert_eq!(store.size(), 2);
        store.reconcile_visible_page(&ids(1..=3), &[]);
        assert_eq!(store.size(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn selection_survives_navigation_between_pages() {
        let page_one = page_of(1, 12, 50);
        let page_two = page_of(2, 12, 50);
        let mut store = SelectionStore::new();

        let picked = vec![page_one.data[0].id, page_one.data[4].id, page_one.data[9].id];
        store.reconcile_visible_page(&page_one.ids(), &picked);

        store.reconcile_visible_page(&page_two.ids(), &[]);

        assert_eq!(store.checked_on_page(&page_one.data), picked);
        assert_eq!(store.size(), 3);
    }

    #[test]
    fn all_visible_selected_requires_rows() {
        let page = page_of(1, 3, 3);
        let mut store = SelectionStore::new();
        assert!(!store.all_visible_selected(&[]));
        store.bulk_add(page.ids());
        assert!(store.all_visible_selected(&page.data));
    }
}
