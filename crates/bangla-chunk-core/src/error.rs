//! Error type shared by the splitter and the document chunker.

use thiserror::Error;

/// Errors raised by splitter configuration and document field access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChunkError {
    #[error("chunk_size must be > 0")]
    ZeroChunkSize,

    #[error("chunk_overlap ({overlap}) must be smaller than chunk_size ({size})")]
    OverlapTooLarge { size: usize, overlap: usize },

    /// A document field exists but does not hold a string.
    #[error("field '{field}' must be a string, found {found}")]
    NonStringField { field: String, found: &'static str },

    #[error("field '{0}' collides with a reserved chunk key")]
    ReservedField(String),
}

pub type Result<T, E = ChunkError> = std::result::Result<T, E>;
