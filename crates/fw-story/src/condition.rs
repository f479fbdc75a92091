//! Conditions that gate and branch story choices.

use std::fmt;

use fw_core::Character;
use serde::{Deserialize, Serialize};

use crate::error::StoryError;

/// Comparison operator for attribute conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Strictly greater than.
    #[serde(rename = ">")]
    Gt,
    /// Strictly less than.
    #[serde(rename = "<")]
    Lt,
    /// Greater than or equal.
    #[serde(rename = ">=")]
    Ge,
    /// Less than or equal.
    #[serde(rename = "<=")]
    Le,
    /// Equal.
    #[serde(rename = "==")]
    Eq,
    /// Not equal.
    #[serde(rename = "!=")]
    Ne,
}

impl Operator {
    /// Compare `actual` against `expected`.
    pub fn holds(self, actual: i32, expected: i32) -> bool {
        match self {
            Self::Gt => actual > expected,
            Self::Lt => actual < expected,
            Self::Ge => actual >= expected,
            Self::Le => actual <= expected,
            Self::Eq => actual == expected,
            Self::Ne => actual != expected,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Ge => ">=",
            Self::Le => "<=",
            Self::Eq => "==",
            Self::Ne => "!=",
        };
        write!(f, "{symbol}")
    }
}

/// Compare a character attribute against a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeCondition {
    /// Attribute key. Unknown keys read as 0.
    pub attribute: String,
    /// Comparison operator.
    pub op: Operator,
    /// Value to compare against.
    pub value: i32,
}

/// Check for the presence or absence of a trait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitCondition {
    /// Trait name.
    #[serde(rename = "trait")]
    pub name: String,
    /// `true` requires the trait, `false` requires its absence.
    #[serde(default = "default_has")]
    pub has: bool,
}

fn default_has() -> bool {
    true
}

/// A condition evaluated against a finished character.
///
/// In content files this is either the string `"default"`, an attribute
/// object `{ "attribute", "op", "value" }`, or a trait object
/// `{ "trait", "has"? }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCondition", into = "RawCondition")]
pub enum Condition {
    /// Always true.
    Default,
    /// Attribute comparison.
    Attribute(AttributeCondition),
    /// Trait presence or absence.
    Trait(TraitCondition),
}

impl Condition {
    /// An attribute comparison.
    pub fn attribute(attribute: impl Into<String>, op: Operator, value: i32) -> Self {
        Self::Attribute(AttributeCondition {
            attribute: attribute.into(),
            op,
            value,
        })
    }

    /// Require a trait.
    pub fn has_trait(name: impl Into<String>) -> Self {
        Self::Trait(TraitCondition {
            name: name.into(),
            has: true,
        })
    }

    /// Require a trait to be absent.
    pub fn lacks_trait(name: impl Into<String>) -> Self {
        Self::Trait(TraitCondition {
            name: name.into(),
            has: false,
        })
    }

    /// Evaluate the condition against a character.
    pub fn evaluate(&self, character: &Character) -> bool {
        match self {
            Condition::Default => true,
            Condition::Attribute(c) => c.op.holds(character.attribute(&c.attribute), c.value),
            Condition::Trait(c) => character.has_trait(&c.name) == c.has,
        }
    }
}

const DEFAULT_KEYWORD: &str = "default";

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawCondition {
    Keyword(String),
    Attribute(AttributeCondition),
    Trait(TraitCondition),
}

impl TryFrom<RawCondition> for Condition {
    type Error = StoryError;

    fn try_from(raw: RawCondition) -> Result<Self, Self::Error> {
        match raw {
            RawCondition::Keyword(k) if k == DEFAULT_KEYWORD => Ok(Condition::Default),
            RawCondition::Keyword(k) => Err(StoryError::InvalidCondition(format!(
                "unknown keyword \"{k}\""
            ))),
            RawCondition::Attribute(c) => Ok(Condition::Attribute(c)),
            RawCondition::Trait(c) => Ok(Condition::Trait(c)),
        }
    }
}

impl From<Condition> for RawCondition {
    fn from(condition: Condition) -> Self {
        match condition {
            Condition::Default => RawCondition::Keyword(DEFAULT_KEYWORD.to_string()),
            Condition::Attribute(c) => RawCondition::Attribute(c),
            Condition::Trait(c) => RawCondition::Trait(c),
        }
    }
}
