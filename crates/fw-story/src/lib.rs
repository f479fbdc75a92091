//! Branching narrative engine for Fateweaver.
//!
//! Scenarios present choices whose availability and outcomes depend on a
//! finished [`Character`](fw_core::Character). Conditions are evaluated
//! against the character's attributes and traits; optional `chance` gates draw
//! from an injected random source so play is reproducible from a seed.

pub mod condition;
pub mod config;
pub mod error;
pub mod resolver;
pub mod scenario;
pub mod session;
pub mod validate;

pub use condition::{AttributeCondition, Condition, Operator, TraitCondition};
pub use config::StoryConfig;
pub use error::{StoryError, StoryResult};
pub use resolver::{evaluate_condition, is_choice_available, resolve_outcome};
pub use scenario::{AvailabilityRequirement, Choice, Outcome, Scenario, ScenarioBundle};
pub use session::StorySession;
pub use validate::{ValidationIssue, validate_bundle};
