use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attribute::AttributeDeltas;
use crate::error::{CoreError, CoreResult};

/// Body build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildType {
    /// Slender frame.
    Slim,
    /// Unremarkable frame.
    Average,
    /// Lean and fit.
    Athletic,
    /// Broad and strong.
    Muscular,
    /// Large and heavy-set.
    Heavy,
}

/// Skin tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinTone {
    /// Very light.
    Pale,
    /// Light.
    Fair,
    /// Olive.
    Olive,
    /// Tanned.
    Tan,
    /// Brown.
    Brown,
    /// Dark.
    Dark,
}

/// Hair color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HairColor {
    /// Black.
    Black,
    /// Brown.
    Brown,
    /// Blonde.
    Blonde,
    /// Red.
    Red,
    /// Grey.
    Grey,
    /// White.
    White,
}

/// Portrait sex tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male.
    Male,
    /// Female.
    Female,
}

macro_rules! display_as_serde_key {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    let key = format!("{self:?}").to_lowercase();
                    write!(f, "{key}")
                }
            }
        )*
    };
}

display_as_serde_key!(BuildType, SkinTone, HairColor, Sex);

/// An appearance entry keyed by a closed enum, shaped like a character option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppearanceOption<K> {
    /// Enum key.
    pub id: K,
    /// Display name.
    pub name: String,
    /// Display description.
    #[serde(default)]
    pub description: String,
    /// Fate delta.
    #[serde(default)]
    pub fate: i32,
    /// Attribute deltas.
    #[serde(default, skip_serializing_if = "AttributeDeltas::is_empty")]
    pub attributes: AttributeDeltas,
    /// Traits granted.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub traits: Vec<String>,
}

impl<K> AppearanceOption<K> {
    /// Create an entry with no effects.
    pub fn new(id: K, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            fate: 0,
            attributes: AttributeDeltas::new(),
            traits: Vec::new(),
        }
    }

    /// Set the fate delta.
    pub fn with_fate(mut self, fate: i32) -> Self {
        self.fate = fate;
        self
    }

    /// Add an attribute delta.
    pub fn with_attribute(mut self, id: crate::AttributeId, delta: i32) -> Self {
        *self.attributes.entry(id).or_insert(0) += delta;
        self
    }

    /// Grant a trait.
    pub fn with_trait(mut self, name: impl Into<String>) -> Self {
        self.traits.push(name.into());
        self
    }
}

/// A portrait tagged with the appearance it depicts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portrait {
    /// Portrait id.
    pub id: String,
    /// Depicted build.
    pub build: BuildType,
    /// Depicted skin tone.
    pub skin_tone: SkinTone,
    /// Depicted hair color.
    pub hair_color: HairColor,
    /// Depicted sex.
    pub sex: Sex,
    /// Race option id depicted.
    pub race: String,
    /// Fate delta when chosen.
    #[serde(default)]
    pub fate: i32,
    /// Attribute deltas when chosen.
    #[serde(default, skip_serializing_if = "AttributeDeltas::is_empty")]
    pub attributes: AttributeDeltas,
    /// Traits granted when chosen.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub traits: Vec<String>,
}

/// The appearance sub-selections of a character in progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppearanceSelections {
    /// Chosen build.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<BuildType>,
    /// Chosen skin tone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin_tone: Option<SkinTone>,
    /// Chosen hair color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hair_color: Option<HairColor>,
    /// Chosen portrait id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portrait_id: Option<String>,
}

impl AppearanceSelections {
    /// Set the build.
    pub fn with_build(mut self, build: BuildType) -> Self {
        self.build = Some(build);
        self
    }

    /// Set the skin tone.
    pub fn with_skin_tone(mut self, skin_tone: SkinTone) -> Self {
        self.skin_tone = Some(skin_tone);
        self
    }

    /// Set the hair color.
    pub fn with_hair_color(mut self, hair_color: HairColor) -> Self {
        self.hair_color = Some(hair_color);
        self
    }

    /// Set the portrait.
    pub fn with_portrait(mut self, portrait_id: impl Into<String>) -> Self {
        self.portrait_id = Some(portrait_id.into());
        self
    }

    /// Build, skin tone, and hair color are all chosen. The portrait is optional.
    pub fn is_complete(&self) -> bool {
        self.build.is_some() && self.skin_tone.is_some() && self.hair_color.is_some()
    }
}

/// Appearance tables for the builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppearanceConfig {
    /// Available builds.
    #[serde(default)]
    pub builds: Vec<AppearanceOption<BuildType>>,
    /// Available skin tones.
    #[serde(default)]
    pub skin_tones: Vec<AppearanceOption<SkinTone>>,
    /// Available hair colors.
    #[serde(default)]
    pub hair_colors: Vec<AppearanceOption<HairColor>>,
    /// Available portraits.
    #[serde(default)]
    pub portraits: Vec<Portrait>,
}

impl AppearanceConfig {
    /// Parse an appearance config from JSON.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Find a build entry.
    pub fn build(&self, id: BuildType) -> Option<&AppearanceOption<BuildType>> {
        self.builds.iter().find(|b| b.id == id)
    }

    /// Find a skin tone entry.
    pub fn skin_tone(&self, id: SkinTone) -> Option<&AppearanceOption<SkinTone>> {
        self.skin_tones.iter().find(|s| s.id == id)
    }

    /// Find a hair color entry.
    pub fn hair_color(&self, id: HairColor) -> Option<&AppearanceOption<HairColor>> {
        self.hair_colors.iter().find(|h| h.id == id)
    }

    /// Find a portrait by id.
    pub fn find_portrait(&self, portrait_id: &str) -> Option<&Portrait> {
        self.portraits.iter().find(|p| p.id == portrait_id)
    }

    /// Get a portrait by id, returning an error if not found.
    pub fn portrait(&self, portrait_id: &str) -> CoreResult<&Portrait> {
        self.find_portrait(portrait_id)
            .ok_or_else(|| CoreError::PortraitNotFound(portrait_id.to_string()))
    }

    /// Check that every chosen sub-selection exists in this config.
    pub fn check_selections(&self, selections: &AppearanceSelections) -> CoreResult<()> {
        if let Some(build) = selections.build
            && self.build(build).is_none()
        {
            return Err(CoreError::AppearanceOptionNotFound(format!("build {build}")));
        }
        if let Some(tone) = selections.skin_tone
            && self.skin_tone(tone).is_none()
        {
            return Err(CoreError::AppearanceOptionNotFound(format!(
                "skin tone {tone}"
            )));
        }
        if let Some(hair) = selections.hair_color
            && self.hair_color(hair).is_none()
        {
            return Err(CoreError::AppearanceOptionNotFound(format!(
                "hair color {hair}"
            )));
        }
        if let Some(portrait_id) = &selections.portrait_id {
            self.portrait(portrait_id)?;
        }
        Ok(())
    }

    /// Portraits depicting the chosen build, skin tone, and hair color.
    ///
    /// Returns nothing until all three are chosen. `race` and `sex` narrow the
    /// result further when given. Rare combinations may have no portrait at all.
    pub fn matching_portraits(
        &self,
        selections: &AppearanceSelections,
        race: Option<&str>,
        sex: Option<Sex>,
    ) -> Vec<&Portrait> {
        let (Some(build), Some(tone), Some(hair)) = (
            selections.build,
            selections.skin_tone,
            selections.hair_color,
        ) else {
            return Vec::new();
        };

        self.portraits
            .iter()
            .filter(|p| p.build == build && p.skin_tone == tone && p.hair_color == hair)
            .filter(|p| race.is_none_or(|r| p.race == r))
            .filter(|p| sex.is_none_or(|s| p.sex == s))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AttributeId;

    fn config() -> AppearanceConfig {
        AppearanceConfig::from_json(
            r#"{
                "builds": [
                    { "id": "slim", "name": "Slim", "attributes": { "agility": 1, "strength": -1 } },
                    { "id": "muscular", "name": "Muscular", "attributes": { "strength": 2, "agility": -1 }, "traits": ["intimidating"] }
                ],
                "skinTones": [ { "id": "olive", "name": "Olive" } ],
                "hairColors": [ { "id": "red", "name": "Red", "fate": 1 } ],
                "portraits": [
                    { "id": "p1", "build": "slim", "skinTone": "olive", "hairColor": "red", "sex": "female", "race": "elf", "traits": ["striking"] },
                    { "id": "p2", "build": "slim", "skinTone": "olive", "hairColor": "red", "sex": "male", "race": "human" }
                ],
                "portraitConfig": { "basePath": "/portraits" }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn parse_config() {
        let cfg = config();
        let muscular = cfg.build(BuildType::Muscular).unwrap();
        assert_eq!(muscular.attributes.get(&AttributeId::Strength), Some(&2));
        assert_eq!(cfg.hair_color(HairColor::Red).unwrap().fate, 1);
        assert!(cfg.skin_tone(SkinTone::Dark).is_none());
        assert_eq!(cfg.portrait("p1").unwrap().traits, vec!["striking"]);
    }

    #[test]
    fn portrait_not_found() {
        let err = config().portrait("p9").unwrap_err();
        assert!(matches!(err, CoreError::PortraitNotFound(ref id) if id == "p9"));
    }

    #[test]
    fn selections_complete_without_portrait() {
        let sel = AppearanceSelections::default()
            .with_build(BuildType::Slim)
            .with_skin_tone(SkinTone::Olive);
        assert!(!sel.is_complete());
        assert!(sel.with_hair_color(HairColor::Red).is_complete());
    }

    #[test]
    fn matching_portraits_filters() {
        let cfg = config();
        let partial = AppearanceSelections::default().with_build(BuildType::Slim);
        assert!(cfg.matching_portraits(&partial, None, None).is_empty());

        let sel = partial
            .with_skin_tone(SkinTone::Olive)
            .with_hair_color(HairColor::Red);
        assert_eq!(cfg.matching_portraits(&sel, None, None).len(), 2);
        let elves = cfg.matching_portraits(&sel, Some("elf"), None);
        assert_eq!(elves.len(), 1);
        assert_eq!(elves[0].id, "p1");
        assert!(cfg.matching_portraits(&sel, Some("elf"), Some(Sex::Male)).is_empty());

        let rare = AppearanceSelections::default()
            .with_build(BuildType::Muscular)
            .with_skin_tone(SkinTone::Olive)
            .with_hair_color(HairColor::Red);
        assert!(cfg.matching_portraits(&rare, None, None).is_empty());
    }

    #[test]
    fn check_selections_reports_missing_entries() {
        let cfg = config();
        let ok = AppearanceSelections::default()
            .with_build(BuildType::Slim)
            .with_portrait("p2");
        assert!(cfg.check_selections(&ok).is_ok());

        let bad = AppearanceSelections::default().with_skin_tone(SkinTone::Dark);
        let err = cfg.check_selections(&bad).unwrap_err();
        assert_eq!(err.to_string(), "appearance option not found: skin tone dark");
    }
}
