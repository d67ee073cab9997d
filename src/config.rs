//! TOML configuration for the `bchunk` CLI.
//!
//! Every section is optional. A missing file means all defaults, which match
//! the library defaults (512 / 150, `description`, simple field set).

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

use bangla_chunk_core::chunk::{DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};
use bangla_chunk_core::document::DEFAULT_CONTENT_FIELD;
use bangla_chunk_core::{DocumentChunker, FieldSet, SplitterConfig, TextSplitter};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub document: DocumentConfig,
    #[serde(default)]
    pub input: InputConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChunkingConfig {
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}
fn default_chunk_overlap() -> usize {
    DEFAULT_CHUNK_OVERLAP
}

/// Which built-in field set a document is chunked with.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Simple,
    Comparison,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DocumentConfig {
    #[serde(default = "default_content_field")]
    pub content_field: String,
    #[serde(default)]
    pub variant: Variant,
    /// Overrides the variant's field set when present.
    #[serde(default)]
    pub fields: Option<Vec<String>>,
    /// Document field holding the document id. Absent → generated ids.
    #[serde(default)]
    pub id_field: Option<String>,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            content_field: default_content_field(),
            variant: Variant::default(),
            fields: None,
            id_field: None,
        }
    }
}

fn default_content_field() -> String {
    DEFAULT_CONTENT_FIELD.to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct InputConfig {
    #[serde(default = "default_include_globs")]
    pub include_globs: Vec<String>,
    #[serde(default)]
    pub exclude_globs: Vec<String>,
    #[serde(default)]
    pub follow_symlinks: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            include_globs: default_include_globs(),
            exclude_globs: Vec::new(),
            follow_symlinks: false,
        }
    }
}

fn default_include_globs() -> Vec<String> {
    vec!["**/*.json".to_string(), "**/*.jsonl".to_string()]
}

impl Config {
    pub fn splitter(&self) -> Result<TextSplitter> {
        let config = SplitterConfig::new(self.chunking.chunk_size, self.chunking.chunk_overlap)
            .context("invalid [chunking] section")?;
        Ok(TextSplitter::new(config))
    }

    pub fn field_set(&self) -> FieldSet {
        match (&self.document.fields, self.document.variant) {
            (Some(fields), _) => FieldSet::Custom(fields.clone()),
            (None, Variant::Simple) => FieldSet::Simple,
            (None, Variant::Comparison) => FieldSet::Comparison,
        }
    }

    /// Build the document chunker described by this configuration.
    pub fn chunker(&self) -> Result<DocumentChunker> {
        let chunker = DocumentChunker::new()
            .with_splitter(self.splitter()?)
            .with_fields(self.field_set())
            .context("invalid document.fields")?
            .with_content_field(self.document.content_field.clone());
        Ok(chunker)
    }

    pub fn validate(&self) -> Result<()> {
        if self.chunking.chunk_size == 0 {
            bail!("chunking.chunk_size must be > 0");
        }
        if self.chunking.chunk_overlap >= self.chunking.chunk_size {
            bail!(
                "chunking.chunk_overlap ({}) must be smaller than chunking.chunk_size ({})",
                self.chunking.chunk_overlap,
                self.chunking.chunk_size
            );
        }
        if self.document.content_field.is_empty() {
            bail!("document.content_field must not be empty");
        }
        if let Some(id_field) = &self.document.id_field {
            if id_field.is_empty() {
                bail!("document.id_field must not be empty when set");
            }
        }
        self.chunker()?;
        Ok(())
    }
}

/// Read and parse `path` without validating it. CLI flags may still fix up
/// values before [`Config::validate`] runs.
pub fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    toml::from_str(&content).with_context(|| "Failed to parse config file")
}

pub fn load_config(path: &Path) -> Result<Config> {
    let config = read_config(path)?;
    config.validate()?;

    Ok(config)
}
