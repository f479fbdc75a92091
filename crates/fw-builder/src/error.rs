//! Error types for the builder engine.

use fw_core::CoreError;

/// Errors raised by checked builder operations.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// A category, option, or appearance entry could not be resolved.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The character does not yet satisfy its completion requirements.
    #[error("character is incomplete: {0}")]
    Incomplete(String),

    /// A multi-select category already holds its maximum number of picks.
    #[error("category \"{category}\" already has {max} picks")]
    CategoryFull {
        /// The full category.
        category: String,
        /// Its pick limit.
        max: u32,
    },

    /// The option exists but its prerequisites or incompatibilities block it.
    #[error("option \"{option}\" is not available in category \"{category}\"")]
    Unavailable {
        /// The category searched.
        category: String,
        /// The blocked option.
        option: String,
    },
}

/// Convenience result type for builder operations.
pub type BuildResult<T> = Result<T, BuildError>;
