use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attribute::{AttributeDeltas, AttributeId};
use crate::error::{CoreError, CoreResult};

/// Id of the category that is filled through the appearance selector rather
/// than through option toggles.
pub const APPEARANCE_CATEGORY_ID: &str = "appearance";

/// Comparison operator used by attribute requirements on options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparison {
    /// Greater than or equal.
    #[serde(rename = ">=")]
    AtLeast,
    /// Strictly greater than.
    #[serde(rename = ">")]
    Above,
    /// Less than or equal.
    #[serde(rename = "<=")]
    AtMost,
    /// Strictly less than.
    #[serde(rename = "<")]
    Below,
}

impl Comparison {
    /// Compare `actual` against `expected`.
    pub fn holds(self, actual: i32, expected: i32) -> bool {
        match self {
            Self::AtLeast => actual >= expected,
            Self::Above => actual > expected,
            Self::AtMost => actual <= expected,
            Self::Below => actual < expected,
        }
    }

    /// The operator symbol as written in content files.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::AtLeast => ">=",
            Self::Above => ">",
            Self::AtMost => "<=",
            Self::Below => "<",
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Requirement on the current derived value of one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRequirement {
    /// Attribute to read.
    pub id: AttributeId,
    /// How to compare.
    #[serde(alias = "comparison")]
    pub op: Comparison,
    /// Threshold value.
    pub value: i32,
}

/// Requirement on whether an option is selected in some category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRequirement {
    /// Category id.
    pub category: String,
    /// Option id within that category.
    pub option_id: String,
}

/// A prerequisite attached to an option.
///
/// Every populated field is an independent check and all of them must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionRequirement {
    /// Trait that must be present.
    #[serde(rename = "trait", default, skip_serializing_if = "Option::is_none")]
    pub has_trait: Option<String>,
    /// Trait that must be absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_trait: Option<String>,
    /// Attribute threshold that must hold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<AttributeRequirement>,
    /// Option that must be selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection: Option<SelectionRequirement>,
    /// Option that must not be selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_selection: Option<SelectionRequirement>,
}

impl OptionRequirement {
    /// Require a trait to be present.
    pub fn has_trait(name: impl Into<String>) -> Self {
        Self {
            has_trait: Some(name.into()),
            ..Self::default()
        }
    }

    /// Require a trait to be absent.
    pub fn not_trait(name: impl Into<String>) -> Self {
        Self {
            not_trait: Some(name.into()),
            ..Self::default()
        }
    }

    /// Require an attribute comparison to hold.
    pub fn attribute(id: AttributeId, op: Comparison, value: i32) -> Self {
        Self {
            attribute: Some(AttributeRequirement { id, op, value }),
            ..Self::default()
        }
    }

    /// Require an option to be selected.
    pub fn selected(category: impl Into<String>, option_id: impl Into<String>) -> Self {
        Self {
            selection: Some(SelectionRequirement {
                category: category.into(),
                option_id: option_id.into(),
            }),
            ..Self::default()
        }
    }

    /// Require an option not to be selected.
    pub fn not_selected(category: impl Into<String>, option_id: impl Into<String>) -> Self {
        Self {
            not_selection: Some(SelectionRequirement {
                category: category.into(),
                option_id: option_id.into(),
            }),
            ..Self::default()
        }
    }

    /// Number of populated checks.
    pub fn check_count(&self) -> usize {
        [
            self.has_trait.is_some(),
            self.not_trait.is_some(),
            self.attribute.is_some(),
            self.selection.is_some(),
            self.not_selection.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }
}

/// A single pickable entry within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterOption {
    /// Id, unique within its category.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display description.
    #[serde(default)]
    pub description: String,
    /// Fate delta granted when selected.
    #[serde(default)]
    pub fate: i32,
    /// Attribute deltas granted when selected.
    #[serde(default, skip_serializing_if = "AttributeDeltas::is_empty")]
    pub attributes: AttributeDeltas,
    /// Traits granted when selected.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub traits: Vec<String>,
    /// Prerequisites, all of which must hold.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<OptionRequirement>,
    /// Option ids in the same category that block this one when selected.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub incompatible_with: Vec<String>,
    /// Display-only marker for options that are disadvantages.
    #[serde(default)]
    pub is_drawback: bool,
}

impl CharacterOption {
    /// Create an option with no effects.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            fate: 0,
            attributes: AttributeDeltas::new(),
            traits: Vec::new(),
            requires: Vec::new(),
            incompatible_with: Vec::new(),
            is_drawback: false,
        }
    }

    /// Set the fate delta.
    pub fn with_fate(mut self, fate: i32) -> Self {
        self.fate = fate;
        self
    }

    /// Add an attribute delta.
    pub fn with_attribute(mut self, id: AttributeId, delta: i32) -> Self {
        *self.attributes.entry(id).or_insert(0) += delta;
        self
    }

    /// Grant a trait.
    pub fn with_trait(mut self, name: impl Into<String>) -> Self {
        self.traits.push(name.into());
        self
    }

    /// Add a prerequisite.
    pub fn with_requirement(mut self, requirement: OptionRequirement) -> Self {
        self.requires.push(requirement);
        self
    }

    /// Declare an incompatible sibling option.
    pub fn incompatible_with(mut self, option_id: impl Into<String>) -> Self {
        self.incompatible_with.push(option_id.into());
        self
    }

    /// Mark as a drawback.
    pub fn as_drawback(mut self) -> Self {
        self.is_drawback = true;
        self
    }
}

/// A group of options with pick-count limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryConfig {
    /// Stable key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display description.
    #[serde(default)]
    pub description: String,
    /// Minimum number of picks; 0 means optional.
    #[serde(default)]
    pub min_picks: u32,
    /// Maximum number of picks; 1 means single-select.
    #[serde(default = "default_max_picks")]
    pub max_picks: u32,
    /// Options in display order.
    #[serde(default)]
    pub options: Vec<CharacterOption>,
}

fn default_max_picks() -> u32 {
    1
}

impl CategoryConfig {
    /// Create a single-select, required category with no options.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            min_picks: 1,
            max_picks: 1,
            options: Vec::new(),
        }
    }

    /// Set the pick limits.
    pub fn with_picks(mut self, min_picks: u32, max_picks: u32) -> Self {
        self.min_picks = min_picks;
        self.max_picks = max_picks;
        self
    }

    /// Add an option.
    pub fn with_option(mut self, option: CharacterOption) -> Self {
        self.options.push(option);
        self
    }

    /// Find an option by id.
    pub fn option(&self, option_id: &str) -> Option<&CharacterOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    /// Returns true if picking a new option replaces the current one.
    pub fn is_single_select(&self) -> bool {
        self.max_picks == 1
    }

    /// Returns true for the bespoke appearance category.
    pub fn is_appearance(&self) -> bool {
        self.id == APPEARANCE_CATEGORY_ID
    }
}

/// The full set of builder categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterCreationData {
    /// Categories in display order.
    pub categories: Vec<CategoryConfig>,
}

impl CharacterCreationData {
    /// Parse creation data from JSON.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Find a category by id.
    pub fn find_category(&self, category_id: &str) -> Option<&CategoryConfig> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    /// Get a category by id, returning an error if not found.
    pub fn category(&self, category_id: &str) -> CoreResult<&CategoryConfig> {
        self.find_category(category_id)
            .ok_or_else(|| CoreError::CategoryNotFound(category_id.to_string()))
    }

    /// Get an option by category and option id, returning an error if either is missing.
    pub fn option(&self, category_id: &str, option_id: &str) -> CoreResult<&CharacterOption> {
        self.category(category_id)?
            .option(option_id)
            .ok_or_else(|| CoreError::OptionNotFound {
                category: category_id.to_string(),
                option: option_id.to_string(),
            })
    }
}
