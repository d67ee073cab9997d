//! # bangla-chunk CLI (`bchunk`)
//!
//! Splits Bengali text and JSON documents into overlapping, boundary-aware
//! chunks.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `bchunk normalize [FILE]` | Print NFC-normalized, whitespace-collapsed text |
//! | `bchunk split [FILE]` | Print the chunks of a text as a JSON array |
//! | `bchunk chunk [PATH...]` | Chunk JSON documents, one chunk record per line |
//!
//! Input defaults to stdin. Logging goes to stderr and is controlled with
//! `RUST_LOG` (default `warn`).
//!
//! ## Examples
//!
//! ```bash
//! # Chunk every document under ./catalog with the comparison field set
//! bchunk chunk ./catalog --variant comparison --id-field id > chunks.jsonl
//!
//! # Preview how an article splits with smaller chunks
//! bchunk split article.txt --chunk-size 256 --chunk-overlap 64
//! ```

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use bangla_chunk::config::{self, Config, Variant};
use bangla_chunk::progress::ProgressMode;
use bangla_chunk::{ingest, split_cmd};

/// bangla-chunk CLI: boundary-aware chunking of Bengali documents.
#[derive(Parser)]
#[command(name = "bchunk", version, about)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Size overrides shared by `split` and `chunk`.
#[derive(Args, Debug, Default)]
struct SizeArgs {
    /// Maximum chunk length in characters.
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Characters shared by consecutive chunks (must be below chunk size).
    #[arg(long)]
    chunk_overlap: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the normalized form of a text (NFC, whitespace collapsed).
    Normalize {
        /// Input text file. Reads stdin when omitted.
        file: Option<PathBuf>,
    },

    /// Split a text into chunks and print them as a JSON array.
    Split {
        /// Input text file. Reads stdin when omitted.
        file: Option<PathBuf>,

        #[command(flatten)]
        size: SizeArgs,
    },

    /// Chunk JSON documents and print one chunk record per line.
    ///
    /// Each path may be a `.json` file (object or array of objects), a
    /// `.jsonl` file, or a directory scanned with the `[input]` globs.
    Chunk {
        /// Input files or directories. Reads stdin when omitted.
        paths: Vec<PathBuf>,

        #[command(flatten)]
        size: SizeArgs,

        /// Field set propagated into every chunk.
        #[arg(long, value_enum)]
        variant: Option<Variant>,

        /// Document field holding the text to split.
        #[arg(long)]
        content_field: Option<String>,

        /// Document field holding the document id.
        #[arg(long)]
        id_field: Option<String>,

        /// Only count documents and chunks; print no records.
        #[arg(long)]
        dry_run: bool,

        /// Maximum number of documents to process.
        #[arg(long)]
        limit: Option<usize>,

        /// Progress output on stderr. Defaults to `human` on a TTY, else `off`.
        #[arg(long, value_enum)]
        progress: Option<ProgressMode>,
    },
}

fn apply_size(cfg: &mut Config, size: &SizeArgs) {
    if let Some(chunk_size) = size.chunk_size {
        cfg.chunking.chunk_size = chunk_size;
    }
    if let Some(chunk_overlap) = size.chunk_overlap {
        cfg.chunking.chunk_overlap = chunk_overlap;
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut cfg = match &cli.config {
        Some(path) => {
            let cfg = config::read_config(path)?;
            tracing::debug!(path = %path.display(), "loaded config");
            cfg
        }
        None => Config::default(),
    };

    match cli.command {
        Commands::Normalize { file } => {
            cfg.validate()?;
            split_cmd::run_normalize(file.as_deref())?;
        }
        Commands::Split { file, size } => {
            apply_size(&mut cfg, &size);
            cfg.validate()?;
            split_cmd::run_split(&cfg, file.as_deref())?;
        }
        Commands::Chunk {
            paths,
            size,
            variant,
            content_field,
            id_field,
            dry_run,
            limit,
            progress,
        } => {
            apply_size(&mut cfg, &size);
            if let Some(variant) = variant {
                cfg.document.variant = variant;
                cfg.document.fields = None;
            }
            if let Some(field) = content_field {
                cfg.document.content_field = field;
            }
            if id_field.is_some() {
                cfg.document.id_field = id_field;
            }
            cfg.validate()?;

            let reporter = progress
                .unwrap_or_else(ProgressMode::default_for_tty)
                .reporter();
            ingest::run_chunk(&cfg, &paths, dry_run, limit, reporter.as_ref())?;
        }
    }

    Ok(())
}
