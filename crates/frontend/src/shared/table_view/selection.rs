use indexmap::IndexSet;
use std::hash::Hash;

/// Ids of the selected rows, kept in the order they were selected.
///
/// Bulk actions walk the set in this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSet<Id: Hash + Eq> {
    ids: IndexSet<Id>,
}

impl<Id: Hash + Eq> Default for SelectionSet<Id> {
    fn default() -> Self {
        Self {
            ids: IndexSet::new(),
        }
    }
}

impl<Id: Hash + Eq + Clone> SelectionSet<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `id` is selected afterwards
    pub fn toggle(&mut self, id: &Id) -> bool {
        if self.ids.shift_remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    pub fn insert(&mut self, id: Id) {
        self.ids.insert(id);
    }

    pub fn remove(&mut self, id: &Id) {
        self.ids.shift_remove(id);
    }

    pub fn contains(&self, id: &Id) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Id> {
        self.ids.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut set = SelectionSet::new();
        set.insert(1);
        let before = set.clone();
        assert!(set.toggle(&2));
        assert!(!set.toggle(&2));
        assert_eq!(set, before);
        assert!(!set.toggle(&1));
        assert!(set.toggle(&1));
        assert!(set.contains(&1));
    }

    #[test]
    fn test_keeps_selection_order() {
        let mut set = SelectionSet::new();
        for id in [3, 1, 2] {
            set.toggle(&id);
        }
        set.toggle(&1);
        set.toggle(&1);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    }
}
