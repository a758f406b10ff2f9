use std::collections::{BTreeMap, BTreeSet};

use super::model::Category;

/// The set of currently chosen options per category, keyed by position
/// in the parsed category list.
///
/// Invariant: a category index is present only while its option set is
/// non-empty. Ordered containers keep iteration in index order, which
/// makes combination output deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    chosen: BTreeMap<usize, BTreeSet<usize>>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    pub fn contains(&self, category: usize, option: usize) -> bool {
        self.chosen
            .get(&category)
            .is_some_and(|opts| opts.contains(&option))
    }

    /// The chosen option indices for one category, if any.
    pub fn options_for(&self, category: usize) -> Option<&BTreeSet<usize>> {
        self.chosen.get(&category)
    }

    /// Iterate `(category index, chosen option indices)` in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &BTreeSet<usize>)> {
        self.chosen.iter().map(|(&cat, opts)| (cat, opts))
    }

    /// Flip one option's membership, returning the new state. The input
    /// is left untouched so callers can compare old and new values.
    pub fn toggled(&self, category: usize, option: usize) -> Self {
        let mut chosen = self.chosen.clone();
        let entry = chosen.entry(category).or_default();
        if !entry.insert(option) {
            entry.remove(&option);
        }
        if entry.is_empty() {
            chosen.remove(&category);
        }
        Self { chosen }
    }

    /// In-place convenience over [`Selection::toggled`].
    pub fn toggle(&mut self, category: usize, option: usize) {
        *self = self.toggled(category, option);
    }

    pub fn clear(&mut self) {
        self.chosen.clear();
    }

    /// Drop entries that point past the bounds of `categories`. Used
    /// after a reparse, where indices can go stale.
    pub fn pruned(&self, categories: &[Category]) -> Self {
        let chosen = self
            .chosen
            .iter()
            .filter_map(|(&cat, opts)| {
                let category = categories.get(cat)?;
                let surviving: BTreeSet<usize> = opts
                    .iter()
                    .copied()
                    .filter(|&opt| opt < category.options.len())
                    .collect();
                if surviving.is_empty() {
                    None
                } else {
                    Some((cat, surviving))
                }
            })
            .collect();
        Self { chosen }
    }
}

impl FromIterator<(usize, Vec<usize>)> for Selection {
    fn from_iter<T: IntoIterator<Item = (usize, Vec<usize>)>>(iter: T) -> Self {
        let mut selection = Selection::new();
        for (category, options) in iter {
            for option in options {
                if !selection.contains(category, option) {
                    selection.toggle(category, option);
                }
            }
        }
        selection
    }
}
