//! Single-action transitions on category selections.

use fw_core::{CategoryConfig, CharacterCreationData};

use crate::aggregate::recalculate_derived_values;
use crate::availability::{can_select, is_option_available};
use crate::error::{BuildError, BuildResult};
use crate::state::CharacterBuilderState;

/// Toggle `option_id` in `category` and recompute the derived values.
///
/// - A selected option is deselected.
/// - In a single-select category a new pick replaces the old one.
/// - In a multi-select category that is already full, a new pick is ignored and
///   the state comes back unchanged. Callers filter with [`can_select`] first.
///
/// Prerequisites are not checked here.
pub fn toggle_option(
    state: &CharacterBuilderState,
    category: &CategoryConfig,
    option_id: &str,
    data: &CharacterCreationData,
) -> CharacterBuilderState {
    let mut next = state.clone();
    let selections = next.selections_mut();

    if selections.remove(&category.id, option_id) {
        tracing::debug!(category = %category.id, option = %option_id, "deselected option");
    } else if category.is_single_select() {
        selections.replace(&category.id, option_id);
        tracing::debug!(category = %category.id, option = %option_id, "replaced selection");
    } else if selections.count(&category.id) >= category.max_picks as usize {
        tracing::debug!(
            category = %category.id,
            option = %option_id,
            max = category.max_picks,
            "category full, ignoring pick"
        );
        return next;
    } else {
        selections.push(&category.id, option_id);
        tracing::debug!(category = %category.id, option = %option_id, "selected option");
    }

    recalculate_derived_values(&next, data)
}

/// Toggle an option addressed by ids, failing if either id does not exist.
pub fn toggle_option_by_id(
    state: &CharacterBuilderState,
    category_id: &str,
    option_id: &str,
    data: &CharacterCreationData,
) -> BuildResult<CharacterBuilderState> {
    let category = data.category(category_id)?;
    data.option(category_id, option_id)?;
    Ok(toggle_option(state, category, option_id, data))
}

/// Select an option addressed by ids, refusing picks the player could not make.
///
/// Already-selected options are left selected. Unlike [`toggle_option`], a
/// blocked or over-capacity pick is reported as an error.
pub fn select_option(
    state: &CharacterBuilderState,
    category_id: &str,
    option_id: &str,
    data: &CharacterCreationData,
) -> BuildResult<CharacterBuilderState> {
    let category = data.category(category_id)?;
    let option = data.option(category_id, option_id)?;

    if state.selections().contains(category_id, option_id) {
        return Ok(state.clone());
    }
    if !is_option_available(option, category, state) {
        return Err(BuildError::Unavailable {
            category: category_id.to_string(),
            option: option_id.to_string(),
        });
    }
    if !category.is_single_select() && !can_select(option, category, state) {
        return Err(BuildError::CategoryFull {
            category: category_id.to_string(),
            max: category.max_picks,
        });
    }
    Ok(toggle_option(state, category, option_id, data))
}
