//! # bangla-chunk
//!
//! **Boundary-aware chunking of Bengali documents for indexing and retrieval.**
//!
//! The chunking logic lives in `bangla-chunk-core` and is re-exported here.
//! This crate adds the pieces a command-line caller needs: TOML
//! configuration, loading JSON documents from disk or stdin, and progress
//! reporting.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   ┌─────────────┐   ┌──────────────┐   ┌──────────────┐
//! │  JSON/JSONL │──▶│ Normalizer  │──▶│   Splitter   │──▶│ Doc chunker  │──▶ stdout
//! │ files/stdin │   │ NFC + ws    │   │ । / \n / ' ' │   │ ids + fields │
//! └─────────────┘   └─────────────┘   └──────────────┘   └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! bchunk split article.txt --chunk-size 256 --chunk-overlap 64
//! bchunk chunk docs/ --variant comparison --id-field id > chunks.jsonl
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`chunk`] | Normalizer, splitter and document chunker (re-exported) |
//! | [`config`] | TOML configuration parsing |
//! | [`connector_fs`] | Document loading from files, directories, stdin |
//! | [`ingest`] | The `chunk` pipeline |
//! | [`models`] | Loader and chunk data types |
//! | [`progress`] | Progress reporting on stderr |
//! | [`split_cmd`] | The `normalize` and `split` commands |

pub mod chunk;
pub mod config;
pub mod connector_fs;
pub mod ingest;
pub mod models;
pub mod progress;
pub mod split_cmd;

pub use bangla_chunk_core::{
    chunk_comparison_document, chunk_document, normalize, split, ChunkError, DocumentChunker,
    IdGenerator, SequentialIds, SplitterConfig, TextSplitter, UuidGenerator,
};
pub use models::{Chunk, Document, FieldSet};
