//! The builder's in-progress character.

use fw_core::{AppearanceSelections, Attributes, Selections};
use serde::Serialize;

use crate::aggregate::Contribution;

/// A character under construction.
///
/// Selections change only through [`toggle_option`](crate::toggle_option) and
/// [`update_appearance_selections`](crate::update_appearance_selections). The
/// calculated fields always equal the summed effects of the selected options
/// and the chosen appearance; they have no setters.
///
/// The state serializes for display and export but never deserializes: a
/// state read back from JSON could carry totals its selections do not produce.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterBuilderState {
    name: String,
    selections: Selections,
    appearance_selections: AppearanceSelections,
    calculated_fate: i32,
    calculated_attributes: Attributes,
    calculated_traits: Vec<String>,
    #[serde(skip)]
    category_contribution: Contribution,
    #[serde(skip)]
    appearance_contribution: Contribution,
}

impl CharacterBuilderState {
    /// Create an empty state: no name, no picks, all derived values zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy with the given name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Change the name. The name has no effect on derived values.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The free-text name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Category selections.
    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    /// Appearance sub-selections.
    pub fn appearance_selections(&self) -> &AppearanceSelections {
        &self.appearance_selections
    }

    /// Current fate total.
    pub fn calculated_fate(&self) -> i32 {
        self.calculated_fate
    }

    /// Current attribute totals.
    pub fn calculated_attributes(&self) -> &Attributes {
        &self.calculated_attributes
    }

    /// Current traits, deduplicated in first-seen order.
    pub fn calculated_traits(&self) -> &[String] {
        &self.calculated_traits
    }

    /// Returns true if the trait is currently granted.
    pub fn has_trait(&self, name: &str) -> bool {
        self.calculated_traits.iter().any(|t| t == name)
    }

    pub(crate) fn selections_mut(&mut self) -> &mut Selections {
        &mut self.selections
    }

    /// Install a freshly computed category contribution and rebuild the totals.
    pub(crate) fn set_category_contribution(&mut self, contribution: Contribution) {
        self.category_contribution = contribution;
        self.refresh_totals();
    }

    /// Swap the appearance contribution, patching fate and attributes by the
    /// difference from the cached one instead of re-summing the categories.
    pub(crate) fn patch_appearance(&mut self, selections: AppearanceSelections, new: Contribution) {
        let old = &self.appearance_contribution;
        self.calculated_fate = self
            .calculated_fate
            .saturating_sub(old.fate)
            .saturating_add(new.fate);
        self.calculated_attributes = self.calculated_attributes - old.attributes + new.attributes;
        self.calculated_traits =
            Contribution::merge_traits(&self.category_contribution.traits, &new.traits);
        self.appearance_selections = selections;
        self.appearance_contribution = new;
    }

    fn refresh_totals(&mut self) {
        let total = self.category_contribution.combined(&self.appearance_contribution);
        self.calculated_fate = total.fate;
        self.calculated_attributes = total.attributes;
        self.calculated_traits = total.traits;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_empty() {
        let state = CharacterBuilderState::new();
        assert_eq!(state.name(), "");
        assert!(state.selections().is_empty());
        assert_eq!(state.calculated_fate(), 0);
        assert!(state.calculated_attributes().is_zero());
        assert!(state.calculated_traits().is_empty());
    }

    #[test]
    fn name_does_not_touch_derived_values() {
        let mut state = CharacterBuilderState::new().with_name("Kael");
        state.set_name("Mira");
        assert_eq!(state.name(), "Mira");
        assert_eq!(state.calculated_fate(), 0);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_string(&CharacterBuilderState::new()).unwrap();
        assert!(json.contains("\"calculatedFate\""));
        assert!(json.contains("\"appearanceSelections\""));
    }

    #[test]
    fn cached_contributions_stay_out_of_json() {
        let json = serde_json::to_string(&CharacterBuilderState::new()).unwrap();
        assert!(!json.contains("Contribution"), "cache leaked: {json}");
    }
}
