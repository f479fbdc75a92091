//! Scenarios, choices, and outcomes.

use std::collections::BTreeMap;

use fw_core::Character;
use fw_core::describe::fate_label;
use serde::{Deserialize, Serialize};

use crate::condition::Condition;
use crate::error::{StoryError, StoryResult};

/// Gate on whether a choice is offered at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityRequirement {
    /// Condition the character must meet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires: Option<Condition>,
    /// Probability in `0.0..=1.0` that the choice is offered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chance: Option<f64>,
}

/// A condition paired with the scenario it leads to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Condition that selects this outcome.
    pub condition: Condition,
    /// Destination scenario id.
    pub next: String,
}

impl Outcome {
    /// Create an outcome.
    pub fn new(condition: Condition, next: impl Into<String>) -> Self {
        Self {
            condition,
            next: next.into(),
        }
    }

    /// An outcome that always matches.
    pub fn otherwise(next: impl Into<String>) -> Self {
        Self::new(Condition::Default, next)
    }
}

/// A choice presented in a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    /// Text shown to the player.
    pub text: String,
    /// Availability gate; absent means always offered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<AvailabilityRequirement>,
    /// Outcomes in priority order; the first match wins.
    #[serde(default)]
    pub outcomes: Vec<Outcome>,
}

impl Choice {
    /// Create a choice with no gate and no outcomes.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            available: None,
            outcomes: Vec::new(),
        }
    }

    /// Gate the choice on a condition.
    pub fn requires(mut self, condition: Condition) -> Self {
        self.available.get_or_insert_with(Default::default).requires = Some(condition);
        self
    }

    /// Gate the choice on a random chance.
    pub fn with_chance(mut self, chance: f64) -> Self {
        self.available.get_or_insert_with(Default::default).chance = Some(chance);
        self
    }

    /// Add an outcome.
    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcomes.push(outcome);
        self
    }
}

/// One node of the story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// Scenario id. Filled from the bundle key when omitted.
    #[serde(default)]
    pub id: String,
    /// Optional heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Markdown body. `{name}` and `{fate}` are replaced when rendered.
    #[serde(default, alias = "text", alias = "content")]
    pub body: String,
    /// Choices in display order.
    #[serde(default)]
    pub choices: Vec<Choice>,
    /// Marks the entry point.
    #[serde(default)]
    pub is_start: bool,
    /// Marks a terminal scenario.
    #[serde(default)]
    pub is_ending: bool,
}

impl Scenario {
    /// Create a scenario with a body and no choices.
    pub fn new(id: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            body: body.into(),
            choices: Vec::new(),
            is_start: false,
            is_ending: false,
        }
    }

    /// Mark as the start scenario.
    pub fn as_start(mut self) -> Self {
        self.is_start = true;
        self
    }

    /// Mark as an ending.
    pub fn as_ending(mut self) -> Self {
        self.is_ending = true;
        self
    }

    /// Add a choice.
    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }

    /// The body with the character's name and fate label filled in.
    pub fn render(&self, character: &Character) -> String {
        self.body
            .replace("{name}", &character.name)
            .replace("{fate}", fate_label(character.fate))
    }
}

/// All scenarios of a story, keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioBundle {
    scenarios: BTreeMap<String, Scenario>,
}

impl ScenarioBundle {
    /// Build a bundle from scenarios, keyed by their ids.
    pub fn new(scenarios: impl IntoIterator<Item = Scenario>) -> Self {
        Self {
            scenarios: scenarios.into_iter().map(|s| (s.id.clone(), s)).collect(),
        }
    }

    /// Parse a bundle from a JSON object of id to scenario.
    pub fn from_json(json: &str) -> StoryResult<Self> {
        let mut bundle: Self = serde_json::from_str(json)?;
        for (key, scenario) in &mut bundle.scenarios {
            if scenario.id.is_empty() {
                scenario.id = key.clone();
            }
        }
        Ok(bundle)
    }

    /// Find a scenario by id.
    pub fn find(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.get(id)
    }

    /// Get a scenario by id, returning an error if not found.
    pub fn get(&self, id: &str) -> StoryResult<&Scenario> {
        self.find(id)
            .ok_or_else(|| StoryError::ScenarioNotFound(id.to_string()))
    }

    /// The single scenario marked as the start.
    pub fn start(&self) -> StoryResult<&Scenario> {
        let starts: Vec<&Scenario> = self.scenarios.values().filter(|s| s.is_start).collect();
        match starts.as_slice() {
            [] => Err(StoryError::NoStartScenario),
            [only] => Ok(only),
            many => Err(StoryError::MultipleStartScenarios(
                many.iter().map(|s| s.id.clone()).collect(),
            )),
        }
    }

    /// Iterate scenarios in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Scenario> + '_ {
        self.scenarios.values()
    }

    /// Number of scenarios.
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Returns true if the bundle has no scenarios.
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}
