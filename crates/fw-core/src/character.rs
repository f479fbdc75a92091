use serde::{Deserialize, Serialize};

use crate::appearance::AppearanceSelections;
use crate::attribute::Attributes;
use crate::error::CoreResult;
use crate::selection::Selections;

/// A finished character. Produced once by the builder and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Character name.
    pub name: String,
    /// Aggregate fate score.
    pub fate: i32,
    /// Aggregate attribute totals.
    pub attributes: Attributes,
    /// Granted traits, deduplicated in first-seen order.
    pub traits: Vec<String>,
    /// The choices the character was built from.
    pub selections: Selections,
    /// The appearance the character was built with.
    #[serde(default)]
    pub appearance: AppearanceSelections,
}

impl Character {
    /// Parse a character from JSON.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns true if the character has the trait.
    pub fn has_trait(&self, name: &str) -> bool {
        self.traits.iter().any(|t| t == name)
    }

    /// Attribute total by content key. Unknown names read as 0.
    pub fn attribute(&self, name: &str) -> i32 {
        self.attributes.get_by_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AttributeId;

    fn kael() -> Character {
        let mut attributes = Attributes::default();
        attributes.set(AttributeId::Strength, 3);
        let mut selections = Selections::new();
        selections.push("race", "orc");
        Character {
            name: "Kael".to_string(),
            fate: 2,
            attributes,
            traits: vec!["intimidating".to_string()],
            selections,
            appearance: AppearanceSelections::default(),
        }
    }

    #[test]
    fn trait_and_attribute_lookup() {
        let c = kael();
        assert!(c.has_trait("intimidating"));
        assert!(!c.has_trait("caster"));
        assert_eq!(c.attribute("strength"), 3);
        assert_eq!(c.attribute("luck"), 0);
    }

    #[test]
    fn attribute_keys_are_exact() {
        let c = kael();
        assert_eq!(c.attribute("Strength"), 0);
        assert_eq!(c.attribute(" strength"), 0);
    }

    #[test]
    fn json_round_trip_keeps_selections() {
        let c = kael();
        let json = c.to_json().unwrap();
        assert!(json.contains("\"selections\""));
        let back = Character::from_json(&json).unwrap();
        assert_eq!(back, c);
    }
}
