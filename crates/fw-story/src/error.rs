//! Error types for the story engine.

use thiserror::Error;

/// Result type for story operations.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors that can occur while loading or playing a story.
#[derive(Debug, Error)]
pub enum StoryError {
    /// A scenario id does not exist in the bundle.
    #[error("scenario not found: {0}")]
    ScenarioNotFound(String),

    /// No scenario is marked as the start.
    #[error("no start scenario")]
    NoStartScenario,

    /// More than one scenario is marked as the start.
    #[error("multiple start scenarios: {}", .0.join(", "))]
    MultipleStartScenarios(Vec<String>),

    /// The choice index is out of range or the choice is not available.
    #[error("invalid choice: {0}")]
    InvalidChoice(usize),

    /// No outcome of the chosen choice matched the character.
    #[error("no outcome of choice {choice} in scenario {scenario} matches")]
    NoTransition {
        /// Scenario the choice belongs to.
        scenario: String,
        /// Index of the choice.
        choice: usize,
    },

    /// The story has reached an ending scenario.
    #[error("the story has ended")]
    StoryEnded,

    /// A condition in the content could not be understood.
    #[error("invalid condition: {0}")]
    InvalidCondition(String),

    /// The scenario bundle could not be parsed.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
