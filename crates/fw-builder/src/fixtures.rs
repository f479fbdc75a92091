//! Shared test content.

use fw_core::{
    APPEARANCE_CATEGORY_ID, AppearanceConfig, AppearanceOption, AttributeId, BuildType,
    CategoryConfig, CharacterCreationData, CharacterOption, Comparison, HairColor,
    OptionRequirement, Portrait, Sex, SkinTone,
};

pub(crate) fn creation_data() -> CharacterCreationData {
    CharacterCreationData {
        categories: vec![
            CategoryConfig::new("race", "Race")
                .with_option(CharacterOption::new("human", "Human"))
                .with_option(
                    CharacterOption::new("orc", "Orc")
                        .with_attribute(AttributeId::Strength, 2)
                        .with_fate(-1)
                        .with_trait("intimidating"),
                )
                .with_option(
                    CharacterOption::new("elf", "Elf")
                        .with_attribute(AttributeId::Agility, 1)
                        .with_trait("keen-eyed"),
                ),
            CategoryConfig::new("class", "Class")
                .with_option(
                    CharacterOption::new("warrior", "Warrior")
                        .with_attribute(AttributeId::Strength, 1)
                        .with_trait("soldier"),
                )
                .with_option(
                    CharacterOption::new("mage", "Mage")
                        .with_attribute(AttributeId::Cunning, 1)
                        .with_trait("caster"),
                )
                .with_option(
                    CharacterOption::new("rogue", "Rogue").with_attribute(AttributeId::Agility, 1),
                ),
            CategoryConfig::new("feats", "Feats")
                .with_picks(0, 2)
                .with_option(
                    CharacterOption::new("tough", "Tough")
                        .with_attribute(AttributeId::Endurance, 2)
                        .with_trait("hardy"),
                )
                .with_option(
                    CharacterOption::new("brawler", "Brawler")
                        .with_attribute(AttributeId::Strength, 1)
                        .with_fate(1)
                        .with_trait("intimidating"),
                )
                .with_option(
                    CharacterOption::new("veteran", "Veteran")
                        .with_trait("veteran")
                        .with_requirement(OptionRequirement::attribute(
                            AttributeId::Strength,
                            Comparison::AtLeast,
                            3,
                        )),
                )
                .with_option(
                    CharacterOption::new("berserker", "Berserker")
                        .with_fate(-1)
                        .incompatible_with("pacifist")
                        .as_drawback(),
                )
                .with_option(CharacterOption::new("pacifist", "Pacifist").with_fate(2)),
            CategoryConfig::new("skills", "Skills")
                .with_picks(1, 3)
                .with_option(
                    CharacterOption::new("stealth", "Stealth")
                        .with_attribute(AttributeId::Agility, 1),
                )
                .with_option(
                    CharacterOption::new("archery", "Archery")
                        .with_attribute(AttributeId::Agility, 1)
                        .with_trait("marksman"),
                )
                .with_option(
                    CharacterOption::new("lore", "Lore")
                        .with_attribute(AttributeId::Cunning, 1)
                        .with_fate(1),
                )
                .with_option(
                    CharacterOption::new("haggling", "Haggling")
                        .with_attribute(AttributeId::Charisma, 1)
                        .with_trait("silver-tongued"),
                ),
            CategoryConfig::new("spells", "Spells")
                .with_picks(1, 2)
                .with_option(
                    CharacterOption::new("fireball", "Fireball")
                        .with_requirement(OptionRequirement::has_trait("caster")),
                )
                .with_option(
                    CharacterOption::new("ward", "Ward")
                        .with_attribute(AttributeId::Will, 1)
                        .with_requirement(OptionRequirement::has_trait("caster")),
                ),
            CategoryConfig::new(APPEARANCE_CATEGORY_ID, "Appearance"),
        ],
    }
}

pub(crate) fn appearance_config() -> AppearanceConfig {
    AppearanceConfig {
        builds: vec![
            AppearanceOption::new(BuildType::Slim, "Slim")
                .with_attribute(AttributeId::Agility, 1)
                .with_attribute(AttributeId::Strength, -1),
            AppearanceOption::new(BuildType::Average, "Average"),
            AppearanceOption::new(BuildType::Muscular, "Muscular")
                .with_attribute(AttributeId::Strength, 2)
                .with_attribute(AttributeId::Agility, -1)
                .with_trait("intimidating"),
        ],
        skin_tones: vec![
            AppearanceOption::new(SkinTone::Olive, "Olive"),
            AppearanceOption::new(SkinTone::Dark, "Dark"),
            AppearanceOption::new(SkinTone::Pale, "Pale").with_attribute(AttributeId::Will, 1),
        ],
        hair_colors: vec![
            AppearanceOption::new(HairColor::Red, "Red").with_fate(1),
            AppearanceOption::new(HairColor::Black, "Black"),
        ],
        portraits: vec![
            Portrait {
                id: "orc-muscular-1".to_string(),
                build: BuildType::Muscular,
                skin_tone: SkinTone::Dark,
                hair_color: HairColor::Black,
                sex: Sex::Male,
                race: "orc".to_string(),
                fate: 1,
                attributes: Default::default(),
                traits: vec!["scarred".to_string()],
            },
            Portrait {
                id: "elf-slim-1".to_string(),
                build: BuildType::Slim,
                skin_tone: SkinTone::Olive,
                hair_color: HairColor::Red,
                sex: Sex::Female,
                race: "elf".to_string(),
                fate: 0,
                attributes: [(AttributeId::Charisma, 1)].into(),
                traits: Vec::new(),
            },
        ],
    }
}
