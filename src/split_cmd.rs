//! `bchunk normalize` and `bchunk split`: operate on raw text rather than
//! JSON documents.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use crate::config::Config;

fn read_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read input file: {}", p.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read text from stdin")?;
            Ok(text)
        }
    }
}

pub fn run_normalize(path: Option<&Path>) -> Result<()> {
    let text = read_text(path)?;
    println!("{}", bangla_chunk_core::normalize(&text));
    Ok(())
}

/// Print the chunks of the input text as a pretty JSON array of strings.
pub fn run_split(config: &Config, path: Option<&Path>) -> Result<()> {
    let text = read_text(path)?;
    let chunks = config.splitter()?.split(&text);
    tracing::debug!(chunks = chunks.len(), "split input text");
    println!("{}", serde_json::to_string_pretty(&chunks)?);
    Ok(())
}
