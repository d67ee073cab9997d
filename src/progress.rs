//! Chunking progress reporting.
//!
//! `bchunk chunk` writes chunk records to stdout, so progress is emitted on
//! **stderr**, either as human-readable lines or as one JSON object per line.

use std::io::Write;

/// A single progress event for `bchunk chunk`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChunkProgressEvent {
    /// Documents were loaded from the inputs.
    Loaded { documents: u64 },
    /// n documents chunked out of total.
    Chunking { n: u64, total: u64 },
    /// All documents processed.
    Done { documents: u64, chunks: u64 },
}

/// Reports chunking progress. Implementations write to stderr (human or JSON).
pub trait ChunkProgressReporter: Send + Sync {
    fn report(&self, event: ChunkProgressEvent);
}

/// Human-friendly progress on stderr: "chunk  1,234 / 5,000 documents".
pub struct StderrProgress;

impl ChunkProgressReporter for StderrProgress {
    fn report(&self, event: ChunkProgressEvent) {
        let line = match &event {
            ChunkProgressEvent::Loaded { documents } => {
                format!("chunk  loaded {} documents\n", format_number(*documents))
            }
            ChunkProgressEvent::Chunking { n, total } => format!(
                "chunk  {} / {} documents\n",
                format_number(*n),
                format_number(*total)
            ),
            ChunkProgressEvent::Done { documents, chunks } => format!(
                "chunk  done: {} documents, {} chunks\n",
                format_number(*documents),
                format_number(*chunks)
            ),
        };
        let mut stderr = std::io::stderr().lock();
        let _ = stderr.write_all(line.as_bytes());
        let _ = stderr.flush();
    }
}

/// Machine-readable progress: one JSON object per line on stderr.
pub struct JsonProgress;

impl ChunkProgressReporter for JsonProgress {
    fn report(&self, event: ChunkProgressEvent) {
        let obj = event_json(&event);
        if let Ok(line) = serde_json::to_string(&obj) {
            let mut stderr = std::io::stderr().lock();
            let _ = writeln!(stderr, "{}", line);
            let _ = stderr.flush();
        }
    }
}

fn event_json(event: &ChunkProgressEvent) -> serde_json::Value {
    match event {
        ChunkProgressEvent::Loaded { documents } => serde_json::json!({
            "event": "progress",
            "phase": "loaded",
            "documents": documents
        }),
        ChunkProgressEvent::Chunking { n, total } => serde_json::json!({
            "event": "progress",
            "phase": "chunking",
            "n": n,
            "total": total
        }),
        ChunkProgressEvent::Done { documents, chunks } => serde_json::json!({
            "event": "done",
            "documents": documents,
            "chunks": chunks
        }),
    }
}

/// No-op reporter when progress is disabled.
pub struct NoProgress;

impl ChunkProgressReporter for NoProgress {
    fn report(&self, _event: ChunkProgressEvent) {}
}

fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + (s.len() - 1) / 3);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Progress mode for the CLI: off, human (stderr), or JSON (stderr).
#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum ProgressMode {
    Off,
    Human,
    Json,
}

impl ProgressMode {
    /// Default: human progress when stderr is a TTY, otherwise off.
    pub fn default_for_tty() -> Self {
        if atty::is(atty::Stream::Stderr) {
            ProgressMode::Human
        } else {
            ProgressMode::Off
        }
    }

    pub fn reporter(&self) -> Box<dyn ChunkProgressReporter> {
        match self {
            ProgressMode::Off => Box::new(NoProgress),
            ProgressMode::Human => Box::new(StderrProgress),
            ProgressMode::Json => Box::new(JsonProgress),
        }
    }
}
