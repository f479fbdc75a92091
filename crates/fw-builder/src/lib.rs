//! Character builder engine for Fateweaver.
//!
//! Tracks category selections and appearance choices, enforces pick counts,
//! prerequisites, and incompatibilities, and keeps the derived fate,
//! attributes, and traits in step with every transition. Every entry point
//! takes the current [`CharacterBuilderState`] by reference and returns a new
//! one; nothing here performs I/O.

pub mod aggregate;
pub mod appearance;
pub mod assemble;
pub mod availability;
pub mod completion;
pub mod error;
pub mod requirement;
pub mod state;
pub mod toggle;
pub mod validate;

#[cfg(test)]
pub(crate) mod fixtures;

pub use aggregate::{Contribution, category_contribution, recalculate_derived_values};
pub use appearance::{appearance_contribution, update_appearance_selections};
pub use assemble::{assemble_character, assemble_checked};
pub use availability::{can_select, is_category_fully_locked, is_option_available};
pub use completion::{first_incomplete, is_category_complete, is_character_complete};
pub use error::{BuildError, BuildResult};
pub use requirement::check_requirement;
pub use state::CharacterBuilderState;
pub use toggle::{select_option, toggle_option, toggle_option_by_id};
pub use validate::{ValidationIssue, validate_creation_data};
