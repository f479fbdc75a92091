//! Story session management.
//!
//! `StorySession` walks a [`ScenarioBundle`] with a finished character,
//! rolling choice availability from a seeded random source.

use fw_core::Character;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::StoryConfig;
use crate::error::{StoryError, StoryResult};
use crate::resolver::{is_choice_available, resolve_outcome};
use crate::scenario::{Choice, Scenario, ScenarioBundle};

/// An in-progress playthrough.
pub struct StorySession {
    bundle: ScenarioBundle,
    character: Character,
    config: StoryConfig,
    rng: StdRng,
    current: Scenario,
    /// Indices of the choices offered in the current scenario.
    offered: Vec<usize>,
    history: Vec<String>,
}

impl StorySession {
    /// Start a session at the bundle's start scenario.
    pub fn new(
        bundle: ScenarioBundle,
        character: Character,
        config: StoryConfig,
    ) -> StoryResult<Self> {
        let start = bundle.start()?.clone();
        let rng = StdRng::seed_from_u64(config.seed);
        let mut session = Self {
            bundle,
            character,
            config,
            rng,
            current: start.clone(),
            offered: Vec::new(),
            history: Vec::new(),
        };
        session.enter(start);
        Ok(session)
    }

    /// The character being played.
    pub fn character(&self) -> &Character {
        &self.character
    }

    /// The current scenario.
    pub fn current(&self) -> &Scenario {
        &self.current
    }

    /// The current scenario's body with placeholders filled in.
    pub fn rendered_body(&self) -> String {
        self.current.render(&self.character)
    }

    /// Scenario ids visited so far, including the current one.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Returns true once an ending scenario is reached.
    pub fn is_ended(&self) -> bool {
        self.current.is_ending
    }

    /// Choices currently offered, with their index in the scenario's choice list.
    ///
    /// With sticky availability the rolls made on entering the scenario are
    /// reused; otherwise every call rolls again.
    pub fn offered_choices(&mut self) -> Vec<(usize, &Choice)> {
        if !self.config.sticky_availability {
            self.roll_offered();
        }
        self.offered
            .iter()
            .map(|&i| (i, &self.current.choices[i]))
            .collect()
    }

    /// Take the choice at `index` and move to the scenario its first matching
    /// outcome names.
    pub fn choose(&mut self, index: usize) -> StoryResult<&Scenario> {
        if self.is_ended() {
            return Err(StoryError::StoryEnded);
        }
        if !self.offered.contains(&index) {
            return Err(StoryError::InvalidChoice(index));
        }

        let choice = &self.current.choices[index];
        let Some(next) = resolve_outcome(&choice.outcomes, &self.character) else {
            tracing::warn!(scenario = %self.current.id, choice = index, "no outcome matched");
            return Err(StoryError::NoTransition {
                scenario: self.current.id.clone(),
                choice: index,
            });
        };
        let next = self.bundle.get(next)?.clone();

        tracing::debug!(from = %self.current.id, to = %next.id, choice = index, "resolved choice");
        self.enter(next);
        Ok(&self.current)
    }

    fn enter(&mut self, scenario: Scenario) {
        tracing::debug!(scenario = %scenario.id, "entering scenario");
        self.history.push(scenario.id.clone());
        self.current = scenario;
        self.roll_offered();
    }

    fn roll_offered(&mut self) {
        self.offered = self
            .current
            .choices
            .iter()
            .enumerate()
            .filter(|(_, c)| is_choice_available(c, &self.character, &mut self.rng))
            .map(|(i, _)| i)
            .collect();
    }
}
