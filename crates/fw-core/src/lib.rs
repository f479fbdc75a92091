//! Core types for Fateweaver: attributes, character options, appearance, and
//! the finished character record.
//!
//! This crate defines the data model that the builder and story engines share.
//! It performs no I/O; content tables are deserialized from JSON with
//! [`CharacterCreationData::from_json`] and [`AppearanceConfig::from_json`] or
//! constructed programmatically.

/// Appearance options (build, skin tone, hair color) and portraits.
pub mod appearance;
/// The six character attributes and their snapshots.
pub mod attribute;
/// The immutable character record produced by the builder.
pub mod character;
/// Human-readable descriptions of requirements, effects, and scores.
pub mod describe;
/// Error types used throughout the crate.
pub mod error;
/// Choice categories, options, and option requirements.
pub mod option;
/// The category to selected-option-ids store.
pub mod selection;

/// Re-export appearance types.
pub use appearance::{
    AppearanceConfig, AppearanceOption, AppearanceSelections, BuildType, HairColor, Portrait, Sex,
    SkinTone,
};
/// Re-export attribute types.
pub use attribute::{AttributeDeltas, AttributeId, Attributes};
/// Re-export the character record.
pub use character::Character;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export option types.
pub use option::{
    APPEARANCE_CATEGORY_ID, AttributeRequirement, CategoryConfig, CharacterCreationData,
    CharacterOption, Comparison, OptionRequirement, SelectionRequirement,
};
/// Re-export the selection store.
pub use selection::Selections;
