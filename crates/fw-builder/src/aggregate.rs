//! Derived-value aggregation: fate, attributes, and traits from selected options.

use fw_core::{AttributeDeltas, Attributes, CharacterCreationData, Selections};

use crate::state::CharacterBuilderState;

/// The summed effects of a set of options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contribution {
    /// Summed fate deltas.
    pub fate: i32,
    /// Summed attribute deltas, starting from zero.
    pub attributes: Attributes,
    /// Granted traits, deduplicated in first-seen order.
    pub traits: Vec<String>,
}

impl Contribution {
    /// Add one source's effects. Fate saturates at the `i32` bounds.
    pub fn add(&mut self, fate: i32, attributes: &AttributeDeltas, traits: &[String]) {
        self.fate = self.fate.saturating_add(fate);
        self.attributes.apply(attributes);
        for t in traits {
            if !self.traits.contains(t) {
                self.traits.push(t.clone());
            }
        }
    }

    /// Sum of two contributions. Traits of `self` come first.
    pub fn combined(&self, other: &Contribution) -> Contribution {
        Contribution {
            fate: self.fate.saturating_add(other.fate),
            attributes: self.attributes + other.attributes,
            traits: Self::merge_traits(&self.traits, &other.traits),
        }
    }

    /// Union of two trait lists, keeping first-seen order.
    pub fn merge_traits(first: &[String], second: &[String]) -> Vec<String> {
        let mut out = first.to_vec();
        for t in second {
            if !out.contains(t) {
                out.push(t.clone());
            }
        }
        out
    }
}

/// Sum the effects of every selected option, in category order.
///
/// Ids that do not resolve to an option (stale or unknown references) are
/// skipped.
pub fn category_contribution(
    selections: &Selections,
    data: &CharacterCreationData,
) -> Contribution {
    let mut total = Contribution::default();
    for category in &data.categories {
        for option_id in selections.get(&category.id) {
            match category.option(option_id) {
                Some(option) => total.add(option.fate, &option.attributes, &option.traits),
                None => tracing::trace!(
                    category = %category.id,
                    option = %option_id,
                    "skipping unresolved option id"
                ),
            }
        }
    }
    total
}

/// Recompute the derived fields from every category selection.
///
/// The current appearance contribution is carried over as-is; appearance
/// effects are only ever recomputed by
/// [`update_appearance_selections`](crate::update_appearance_selections).
pub fn recalculate_derived_values(
    state: &CharacterBuilderState,
    data: &CharacterCreationData,
) -> CharacterBuilderState {
    let mut next = state.clone();
    next.set_category_contribution(category_contribution(state.selections(), data));
    next
}
