use thiserror::Error;

/// Unified error type for tagging-core operations.
///
/// Every variant is recoverable: a rejected operation leaves all owned
/// state unchanged, and the caller decides how to surface the message.
#[derive(Debug, Error)]
pub enum TaggerError {
    /// A non-custom operation named a tag outside the standard vocabulary.
    #[error("invalid tag '{0}': not in the standard vocabulary")]
    InvalidTag(String),

    /// Command generation was requested for a tag with no cards.
    #[error("no cards tagged as '{0}'")]
    EmptyTagSet(String),

    /// An import payload carried neither `standardTags` nor `customTags`.
    #[error("invalid tag data: expected 'standardTags' or 'customTags'")]
    InvalidFormat,

    /// A card lookup used a code not present in the catalog.
    #[error("no card with code '{0}'")]
    NotFound(String),

    /// An import payload was not parseable JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for tagging-core operations
pub type TaggerResult<T> = Result<T, TaggerError>;
