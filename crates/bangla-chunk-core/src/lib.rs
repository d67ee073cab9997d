//! # bangla-chunk core
//!
//! Boundary-aware chunking for Bengali text: NFC normalization, a
//! character-level splitter that prefers `।` / newline / space cuts, and a
//! document chunker that turns JSON records into chunk records.
//!
//! This crate does no I/O. Everything here is synchronous and pure apart
//! from document id generation, which is pluggable through
//! [`ids::IdGenerator`].
//!
//! ```rust
//! use bangla_chunk_core::{normalize, split};
//!
//! assert_eq!(normalize("  ক  খ "), "ক খ");
//! assert_eq!(split("ক খ", 512, 150).unwrap(), vec!["ক খ".to_string()]);
//! ```

pub mod chunk;
pub mod document;
pub mod error;
pub mod ids;
pub mod models;
pub mod normalize;

pub use chunk::{split, SplitterConfig, TextSplitter};
pub use document::{chunk_comparison_document, chunk_document, DocumentChunker};
pub use error::ChunkError;
pub use ids::{IdGenerator, SequentialIds, UuidGenerator};
pub use models::{Chunk, Document, FieldSet};
pub use normalize::normalize;
