//! Chunking pipeline orchestration.
//!
//! Coordinates the `bchunk chunk` flow: load documents → resolve document
//! ids → chunk → write one JSON record per chunk.

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::io::Write;
use std::path::PathBuf;

use crate::config::Config;
use crate::connector_fs;
use crate::models::{Document, SourceItem};
use crate::progress::{ChunkProgressEvent, ChunkProgressReporter};

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChunkStats {
    pub documents: u64,
    pub chunks: u64,
}

pub fn run_chunk(
    config: &Config,
    paths: &[PathBuf],
    dry_run: bool,
    limit: Option<usize>,
    progress: &dyn ChunkProgressReporter,
) -> Result<ChunkStats> {
    let mut items = connector_fs::load_documents(paths, &config.input)?;

    if let Some(lim) = limit {
        items.truncate(lim);
    }

    progress.report(ChunkProgressEvent::Loaded {
        documents: items.len() as u64,
    });

    let stats = {
        let mut out = std::io::stdout().lock();
        chunk_items(config, &items, dry_run, progress, &mut out)?
    };

    if dry_run {
        println!("chunk (dry-run)");
        println!("  documents found: {}", stats.documents);
        println!("  chunks: {}", stats.chunks);
    }

    progress.report(ChunkProgressEvent::Done {
        documents: stats.documents,
        chunks: stats.chunks,
    });
    tracing::info!(documents = stats.documents, chunks = stats.chunks, "chunking complete");

    Ok(stats)
}

/// Chunk `items` and write each chunk as a JSON line to `out` (unless `dry_run`).
pub fn chunk_items<W: Write>(
    config: &Config,
    items: &[SourceItem],
    dry_run: bool,
    progress: &dyn ChunkProgressReporter,
    out: &mut W,
) -> Result<ChunkStats> {
    let chunker = config.chunker()?;
    let id_field = config.document.id_field.as_deref();
    let total = items.len() as u64;
    let mut stats = ChunkStats::default();

    for item in items {
        let doc_id = match id_field {
            Some(field) => document_id(&item.document, field)
                .with_context(|| format!("{}: bad document id", item.source_id))?,
            None => None,
        };

        let chunks = chunker
            .chunk(&item.document, doc_id.as_deref())
            .with_context(|| format!("Failed to chunk {}", item.source_id))?;

        if !dry_run {
            for chunk in &chunks {
                serde_json::to_writer(&mut *out, chunk)?;
                out.write_all(b"\n")?;
            }
        }

        stats.documents += 1;
        stats.chunks += chunks.len() as u64;
        progress.report(ChunkProgressEvent::Chunking {
            n: stats.documents,
            total,
        });
    }

    out.flush()?;
    Ok(stats)
}

/// Read the document id from `field`. Strings and integers are accepted;
/// a missing, `null` or empty value means "generate one".
fn document_id(doc: &Document, field: &str) -> Result<Option<String>> {
    match doc.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) if n.is_i64() || n.is_u64() => Ok(Some(n.to_string())),
        Some(other) => bail!("field '{}' must be a string or integer, found {}", field, other),
    }
}
