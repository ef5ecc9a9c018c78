use thiserror::Error;

/// Errors that can occur while saving or loading an aggregate.
///
/// These are faults, never the factory's domain rejections: a load either
/// produces the saved aggregate or fails loudly with one of these.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("path must not be empty")]
    EmptyPath,

    #[error("file access failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode or parse file content: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid file content: {0}")]
    InvalidFormat(String),

    #[error("unsupported format version {0}")]
    UnsupportedVersion(u32),
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;
