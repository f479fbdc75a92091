//! Incremental updates for appearance sub-selections.
//!
//! Appearance changes arrive one step at a time (build, skin tone, hair color,
//! portrait), so the derived totals are patched by the difference between the
//! old and new appearance effects rather than re-summed from every category.

use fw_core::{AppearanceConfig, AppearanceSelections};

use crate::aggregate::Contribution;
use crate::state::CharacterBuilderState;

/// Summed effects of the chosen build, skin tone, hair color, and portrait.
///
/// Each source contributes independently; unresolved entries contribute nothing.
pub fn appearance_contribution(
    selections: &AppearanceSelections,
    config: &AppearanceConfig,
) -> Contribution {
    let mut total = Contribution::default();
    if let Some(build) = selections.build.and_then(|id| config.build(id)) {
        total.add(build.fate, &build.attributes, &build.traits);
    }
    if let Some(tone) = selections.skin_tone.and_then(|id| config.skin_tone(id)) {
        total.add(tone.fate, &tone.attributes, &tone.traits);
    }
    if let Some(hair) = selections.hair_color.and_then(|id| config.hair_color(id)) {
        total.add(hair.fate, &hair.attributes, &hair.traits);
    }
    if let Some(portrait_id) = &selections.portrait_id {
        match config.find_portrait(portrait_id) {
            Some(p) => total.add(p.fate, &p.attributes, &p.traits),
            None => tracing::trace!(portrait = %portrait_id, "skipping unresolved portrait id"),
        }
    }
    total
}

/// Replace the appearance sub-selections, patching the derived totals by the
/// difference between the old and new appearance effects.
///
/// The old effects come from the state itself, so the result is correct even
/// when `config` is not the table the previous appearance was resolved with.
///
/// Category selections are left untouched. A trait that a category option also
/// grants survives the removal of the same trait from the appearance.
pub fn update_appearance_selections(
    state: &CharacterBuilderState,
    new_selections: AppearanceSelections,
    config: &AppearanceConfig,
) -> CharacterBuilderState {
    let new = appearance_contribution(&new_selections, config);
    tracing::debug!(
        fate = new.fate,
        selections = ?new_selections,
        "updated appearance"
    );

    let mut next = state.clone();
    next.patch_appearance(new_selections, new);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::recalculate_derived_values;
    use crate::fixtures;
    use crate::toggle::toggle_option_by_id;
    use fw_core::{AttributeId, BuildType, HairColor, SkinTone};

    #[test]
    fn slim_to_muscular_swaps_deltas() {
        let cfg = fixtures::appearance_config();
        let base = CharacterBuilderState::new();

        let slim = update_appearance_selections(
            &base,
            AppearanceSelections::default().with_build(BuildType::Slim),
            &cfg,
        );
        assert_eq!(slim.calculated_attributes().strength, -1);
        assert_eq!(slim.calculated_attributes().agility, 1);

        let muscular = update_appearance_selections(
            &slim,
            AppearanceSelections::default().with_build(BuildType::Muscular),
            &cfg,
        );
        assert_eq!(muscular.calculated_attributes().strength, 2);
        assert_eq!(muscular.calculated_attributes().agility, -1);
        assert!(muscular.has_trait("intimidating"));
        assert_eq!(
            muscular.appearance_selections().build,
            Some(BuildType::Muscular)
        );
    }

    #[test]
    fn leaves_category_selections_alone() {
        let data = fixtures::creation_data();
        let cfg = fixtures::appearance_config();
        let state = toggle_option_by_id(&CharacterBuilderState::new(), "class", "mage", &data).unwrap();

        let next = update_appearance_selections(
            &state,
            AppearanceSelections::default().with_build(BuildType::Muscular),
            &cfg,
        );
        assert_eq!(next.selections(), state.selections());
        assert_eq!(next.calculated_attributes().cunning, 1);
        assert_eq!(next.calculated_attributes().strength, 2);
        assert_eq!(next.calculated_traits(), ["caster", "intimidating"]);
    }

    #[test]
    fn shared_trait_survives_appearance_removal() {
        let data = fixtures::creation_data();
        let cfg = fixtures::appearance_config();
        let state = toggle_option_by_id(&CharacterBuilderState::new(), "race", "orc", &data).unwrap();

        let muscular = update_appearance_selections(
            &state,
            AppearanceSelections::default().with_build(BuildType::Muscular),
            &cfg,
        );
        assert_eq!(muscular.calculated_traits(), ["intimidating"]);

        let slim = update_appearance_selections(
            &muscular,
            AppearanceSelections::default().with_build(BuildType::Slim),
            &cfg,
        );
        assert!(slim.has_trait("intimidating"));
        assert_eq!(slim.calculated_attributes().strength, 1);
    }

    #[test]
    fn every_source_contributes() {
        let cfg = fixtures::appearance_config();
        let sel = AppearanceSelections::default()
            .with_build(BuildType::Slim)
            .with_skin_tone(SkinTone::Pale)
            .with_hair_color(HairColor::Red)
            .with_portrait("elf-slim-1");

        let c = appearance_contribution(&sel, &cfg);
        assert_eq!(c.fate, 1);
        assert_eq!(c.attributes.get(AttributeId::Will), 1);
        assert_eq!(c.attributes.get(AttributeId::Charisma), 1);
        assert_eq!(c.attributes.get(AttributeId::Agility), 1);
    }

    #[test]
    fn unknown_portrait_contributes_nothing() {
        let cfg = fixtures::appearance_config();
        let sel = AppearanceSelections::default().with_portrait("missing");
        assert_eq!(appearance_contribution(&sel, &cfg), Contribution::default());
    }

    #[test]
    fn clearing_appearance_returns_to_category_totals() {
        let data = fixtures::creation_data();
        let cfg = fixtures::appearance_config();
        let state = toggle_option_by_id(&CharacterBuilderState::new(), "race", "elf", &data).unwrap();

        let dressed = update_appearance_selections(
            &state,
            AppearanceSelections::default()
                .with_build(BuildType::Muscular)
                .with_skin_tone(SkinTone::Dark)
                .with_hair_color(HairColor::Black)
                .with_portrait("orc-muscular-1"),
            &cfg,
        );
        assert_eq!(dressed.calculated_fate(), 1);
        assert!(dressed.has_trait("scarred"));

        let cleared = update_appearance_selections(&dressed, AppearanceSelections::default(), &cfg);
        assert_eq!(cleared.calculated_fate(), state.calculated_fate());
        assert_eq!(cleared.calculated_attributes(), state.calculated_attributes());
        assert_eq!(cleared.calculated_traits(), state.calculated_traits());
    }

    #[test]
    fn switching_tables_subtracts_the_applied_effects() {
        let data = fixtures::creation_data();
        let state = toggle_option_by_id(&CharacterBuilderState::new(), "race", "orc", &data).unwrap();
        let slim = update_appearance_selections(
            &state,
            AppearanceSelections::default().with_build(BuildType::Slim),
            &fixtures::appearance_config(),
        );
        assert_eq!(slim.calculated_attributes().strength, 1);

        // The empty table knows nothing about slim; its -1 must still come off.
        let empty = AppearanceConfig::default();
        let cleared = update_appearance_selections(&slim, AppearanceSelections::default(), &empty);
        assert_eq!(cleared.calculated_fate(), state.calculated_fate());
        assert_eq!(cleared.calculated_attributes(), state.calculated_attributes());
        assert_eq!(cleared, recalculate_derived_values(&cleared, &data));
    }

    #[test]
    fn category_toggle_keeps_appearance_effects() {
        let data = fixtures::creation_data();
        let cfg = fixtures::appearance_config();
        let state = update_appearance_selections(
            &CharacterBuilderState::new(),
            AppearanceSelections::default().with_hair_color(HairColor::Red),
            &cfg,
        );
        assert_eq!(state.calculated_fate(), 1);

        let state = toggle_option_by_id(&state, "race", "orc", &data).unwrap();
        assert_eq!(state.calculated_fate(), 0);
        let state = recalculate_derived_values(&state, &data);
        assert_eq!(state.calculated_fate(), 0);
        assert_eq!(state.appearance_selections().hair_color, Some(HairColor::Red));
    }
}
