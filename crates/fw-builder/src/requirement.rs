//! Evaluation of option prerequisites against the current builder state.

use fw_core::OptionRequirement;

use crate::state::CharacterBuilderState;

/// Returns true if every populated check of `req` holds for `state`.
///
/// Attribute checks read the current derived totals, so a requirement can be
/// satisfied by any mix of selected options and appearance effects.
pub fn check_requirement(req: &OptionRequirement, state: &CharacterBuilderState) -> bool {
    if let Some(t) = &req.has_trait
        && !state.has_trait(t)
    {
        return false;
    }
    if let Some(t) = &req.not_trait
        && state.has_trait(t)
    {
        return false;
    }
    if let Some(a) = &req.attribute
        && !a.op.holds(state.calculated_attributes().get(a.id), a.value)
    {
        return false;
    }
    if let Some(s) = &req.selection
        && !state.selections().contains(&s.category, &s.option_id)
    {
        return false;
    }
    if let Some(s) = &req.not_selection
        && state.selections().contains(&s.category, &s.option_id)
    {
        return false;
    }
    true
}
