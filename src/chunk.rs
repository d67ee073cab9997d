//! Boundary-aware splitter and document chunker, re-exported from `bangla-chunk-core`.
//!
//! # Example
//!
//! ```rust
//! use bangla_chunk::chunk::split;
//!
//! let chunks = split("ঢাকা শহরে অনেক মানুষ বসবাস করে।", 512, 150).unwrap();
//! assert_eq!(chunks.len(), 1);
//! ```

pub use bangla_chunk_core::chunk::*;
pub use bangla_chunk_core::document::*;
pub use bangla_chunk_core::normalize::normalize;
