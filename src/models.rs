//! Data types produced by the document loaders.
//!
//! Chunk-level types live in `bangla-chunk-core` and are re-exported here.

pub use bangla_chunk_core::models::{Chunk, Document, FieldSet};

/// A document read from disk or stdin, before chunking.
#[derive(Debug, Clone)]
pub struct SourceItem {
    /// `"filesystem"` or `"stdin"`.
    pub source: String,
    /// Relative path, with `:<line>` appended for JSON-lines records and
    /// `[<n>]` for elements of a JSON array.
    pub source_id: String,
    pub document: Document,
}
