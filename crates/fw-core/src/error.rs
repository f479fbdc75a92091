/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised when content is looked up by id or fails to load.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested category id does not exist in the creation data.
    #[error("category not found: \"{0}\"")]
    CategoryNotFound(String),

    /// The requested option id does not exist in the given category.
    #[error("option \"{option}\" not found in category \"{category}\"")]
    OptionNotFound {
        /// The category that was searched.
        category: String,
        /// The unresolved option id.
        option: String,
    },

    /// The requested portrait id does not exist in the appearance config.
    #[error("portrait not found: \"{0}\"")]
    PortraitNotFound(String),

    /// An appearance option (build, skin tone, hair color) is missing from the config.
    #[error("appearance option not found: {0}")]
    AppearanceOptionNotFound(String),

    /// Content could not be parsed as JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
