//! Freezing a finished builder state into a [`Character`].

use fw_core::{Character, CharacterCreationData};

use crate::completion::first_incomplete;
use crate::error::{BuildError, BuildResult};
use crate::state::CharacterBuilderState;

/// Copy the builder's name (verbatim), derived values, and selections into a
/// [`Character`].
///
/// Performs no validation; see [`assemble_checked`].
pub fn assemble_character(state: &CharacterBuilderState) -> Character {
    Character {
        name: state.name().to_string(),
        fate: state.calculated_fate(),
        attributes: *state.calculated_attributes(),
        traits: state.calculated_traits().to_vec(),
        selections: state.selections().clone(),
        appearance: state.appearance_selections().clone(),
    }
}

/// Assemble the character only if it is complete.
pub fn assemble_checked(
    state: &CharacterBuilderState,
    data: &CharacterCreationData,
) -> BuildResult<Character> {
    if let Some(reason) = first_incomplete(state, data) {
        return Err(BuildError::Incomplete(reason));
    }
    Ok(assemble_character(state))
}
