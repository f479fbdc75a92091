//! Completion checks for categories and the whole character.

use fw_core::{CategoryConfig, CharacterCreationData};

use crate::availability::is_category_fully_locked;
use crate::state::CharacterBuilderState;

/// Returns true if the category's minimum-pick requirement is met.
///
/// The appearance category is complete once build, skin tone, and hair color
/// are chosen; a portrait is optional.
pub fn is_category_complete(category: &CategoryConfig, state: &CharacterBuilderState) -> bool {
    if category.is_appearance() {
        return state.appearance_selections().is_complete();
    }
    state.selections().count(&category.id) >= category.min_picks as usize
}

/// Returns true if the character has a name and every reachable category is complete.
///
/// Fully locked categories are skipped.
pub fn is_character_complete(state: &CharacterBuilderState, data: &CharacterCreationData) -> bool {
    first_incomplete(state, data).is_none()
}

/// Why the character is not complete yet, or `None` if it is.
pub fn first_incomplete(state: &CharacterBuilderState, data: &CharacterCreationData) -> Option<String> {
    let pending = data
        .categories
        .iter()
        .filter(|c| !is_category_fully_locked(c, state))
        .find(|c| !is_category_complete(c, state));
    if let Some(category) = pending {
        return Some(if category.is_appearance() {
            "appearance needs a build, skin tone, and hair color".to_string()
        } else {
            format!(
                "category \"{}\" needs at least {} pick(s), has {}",
                category.id,
                category.min_picks,
                state.selections().count(&category.id)
            )
        });
    }
    if state.name().trim().is_empty() {
        return Some("name is empty".to_string());
    }
    None
}
