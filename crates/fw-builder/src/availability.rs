//! Which options can be picked and which categories are out of reach.

use fw_core::{CategoryConfig, CharacterOption};

use crate::requirement::check_requirement;
use crate::state::CharacterBuilderState;

/// Returns true if every requirement of `option` holds and none of its
/// declared incompatible siblings is selected in `category`.
pub fn is_option_available(
    option: &CharacterOption,
    category: &CategoryConfig,
    state: &CharacterBuilderState,
) -> bool {
    if !option.requires.iter().all(|r| check_requirement(r, state)) {
        return false;
    }
    let selected = state.selections();
    !option
        .incompatible_with
        .iter()
        .any(|other| selected.contains(&category.id, other))
}

/// Returns true if the option may be clicked right now: available, and either
/// already picked or the category still has room.
pub fn can_select(
    option: &CharacterOption,
    category: &CategoryConfig,
    state: &CharacterBuilderState,
) -> bool {
    let selected = state.selections();
    let already = selected.contains(&category.id, &option.id);
    let has_room = selected.count(&category.id) < category.max_picks as usize;
    is_option_available(option, category, state) && (already || has_room)
}

/// Returns true if no option in the category can currently be picked.
///
/// The appearance category is never locked; a category without options always is.
pub fn is_category_fully_locked(category: &CategoryConfig, state: &CharacterBuilderState) -> bool {
    if category.is_appearance() {
        return false;
    }
    if category.options.is_empty() {
        return true;
    }
    !category
        .options
        .iter()
        .any(|o| is_option_available(o, category, state))
}
