use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Selected option ids per category, in selection order.
///
/// Order within a category records when each pick happened; no rule depends on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selections(BTreeMap<String, Vec<String>>);

impl Selections {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected ids for a category; empty if the category has none.
    pub fn get(&self, category_id: &str) -> &[String] {
        self.0.get(category_id).map_or(&[], Vec::as_slice)
    }

    /// Returns true if `option_id` is selected in `category_id`.
    pub fn contains(&self, category_id: &str, option_id: &str) -> bool {
        self.get(category_id).iter().any(|id| id == option_id)
    }

    /// Number of selected ids in a category.
    pub fn count(&self, category_id: &str) -> usize {
        self.get(category_id).len()
    }

    /// Replace a category's picks with exactly one id.
    pub fn replace(&mut self, category_id: &str, option_id: &str) {
        self.0
            .insert(category_id.to_string(), vec![option_id.to_string()]);
    }

    /// Append an id to a category unless it is already present.
    pub fn push(&mut self, category_id: &str, option_id: &str) {
        let ids = self.0.entry(category_id.to_string()).or_default();
        if !ids.iter().any(|id| id == option_id) {
            ids.push(option_id.to_string());
        }
    }

    /// Remove an id from a category. Returns true if it was present.
    pub fn remove(&mut self, category_id: &str, option_id: &str) -> bool {
        let Some(ids) = self.0.get_mut(category_id) else {
            return false;
        };
        let before = ids.len();
        ids.retain(|id| id != option_id);
        before != ids.len()
    }

    /// Iterate `(category_id, option_id)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0
            .iter()
            .flat_map(|(cat, ids)| ids.iter().map(move |id| (cat.as_str(), id.as_str())))
    }

    /// Total number of selected ids across all categories.
    pub fn total(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
