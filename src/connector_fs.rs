//! Loads documents from JSON / JSON-lines files, directories, or stdin.
//!
//! Accepted shapes:
//!
//! - one JSON object (a single document),
//! - a JSON array of objects,
//! - JSON lines: one object per non-blank line.
//!
//! Directories are walked recursively and filtered with the `[input]`
//! include/exclude globs. Items come back in path order.

use anyhow::{anyhow, bail, Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::InputConfig;
use crate::models::{Document, SourceItem};

/// Load every document under `paths`. An empty slice reads stdin.
pub fn load_documents(paths: &[PathBuf], input: &InputConfig) -> Result<Vec<SourceItem>> {
    if paths.is_empty() {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read documents from stdin")?;
        return parse_documents(&text, "stdin", "stdin");
    }

    let mut items = Vec::new();
    for path in paths {
        if path.is_dir() {
            items.extend(scan_directory(path, input)?);
        } else {
            items.extend(load_file(path, &path.display().to_string())?);
        }
    }
    Ok(items)
}

fn scan_directory(root: &Path, input: &InputConfig) -> Result<Vec<SourceItem>> {
    let include_set = build_globset(&input.include_globs)?;

    let mut default_excludes = vec!["**/.git/**".to_string(), "**/target/**".to_string()];
    default_excludes.extend(input.exclude_globs.clone());
    let exclude_set = build_globset(&default_excludes)?;

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(input.follow_symlinks) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        let rel_str = relative.to_string_lossy().to_string();

        if exclude_set.is_match(&rel_str) || !include_set.is_match(&rel_str) {
            continue;
        }
        files.push((rel_str, path.to_path_buf()));
    }

    files.sort();
    tracing::debug!(root = %root.display(), files = files.len(), "scanned input directory");

    let mut items = Vec::new();
    for (rel_str, path) in files {
        items.extend(load_file(&path, &rel_str)?);
    }
    Ok(items)
}

fn load_file(path: &Path, source_id: &str) -> Result<Vec<SourceItem>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    parse_documents(&text, "filesystem", source_id)
}

/// Parse `text` as one object, an array of objects, or JSON lines.
pub fn parse_documents(text: &str, source: &str, source_id: &str) -> Result<Vec<SourceItem>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let item = |source_id: String, document: Document| SourceItem {
        source: source.to_string(),
        source_id,
        document,
    };

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return match value {
            Value::Object(document) => Ok(vec![item(source_id.to_string(), document)]),
            Value::Array(values) => values
                .into_iter()
                .enumerate()
                .map(|(i, value)| {
                    let id = format!("{}[{}]", source_id, i);
                    into_document(value, &id).map(|document| item(id, document))
                })
                .collect(),
            other => bail!(
                "{}: expected a JSON object or array of objects, found {}",
                source_id,
                type_name(&other)
            ),
        };
    }

    let mut items = Vec::new();
    for (n, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let id = format!("{}:{}", source_id, n + 1);
        let value: Value =
            serde_json::from_str(line).with_context(|| format!("{}: invalid JSON", id))?;
        items.push(item(id.clone(), into_document(value, &id)?));
    }
    Ok(items)
}

fn into_document(value: Value, id: &str) -> Result<Document> {
    match value {
        Value::Object(document) => Ok(document),
        other => Err(anyhow!(
            "{}: expected a JSON object, found {}",
            id,
            type_name(&other)
        )),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_single_object() {
        let items = parse_documents(r#"{"description": "x", "title": "T"}"#, "stdin", "stdin").unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].source_id, "stdin");
        assert_eq!(items[0].document["title"], "T");
    }

    #[test]
    fn test_array_of_objects() {
        let items = parse_documents(r#"[{"a": "1"}, {"a": "2"}]"#, "filesystem", "docs.json").unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].source_id, "docs.json[1]");
    }

    #[test]
    fn test_json_lines() {
        let text = "{\"a\": \"1\"}\n\n{\"a\": \"2\"}\n";
        let items = parse_documents(text, "filesystem", "docs.jsonl").unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].source_id, "docs.jsonl:1");
        assert_eq!(items[1].source_id, "docs.jsonl:3");
    }

    #[test]
    fn test_blank_input() {
        assert!(parse_documents("  \n", "stdin", "stdin").unwrap().is_empty());
    }

    #[test]
    fn test_rejects_non_object_elements() {
        let err = parse_documents(r#"[{"a": "1"}, 7]"#, "stdin", "stdin").unwrap_err();
        assert!(err.to_string().contains("stdin[1]"));
        assert!(parse_documents("\"just a string\"", "stdin", "stdin").is_err());
    }

    #[test]
    fn test_rejects_bad_json_line() {
        let err = parse_documents("{\"a\": \"1\"}\nnot json\n", "stdin", "stdin").unwrap_err();
        assert!(err.to_string().contains("stdin:2"));
    }

    #[test]
    fn test_scan_directory_with_globs() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("nested")).unwrap();
        fs::create_dir_all(root.join("skip")).unwrap();
        fs::write(root.join("b.json"), r#"{"description": "b"}"#).unwrap();
        fs::write(root.join("nested/a.jsonl"), "{\"description\": \"a1\"}\n{\"description\": \"a2\"}\n").unwrap();
        fs::write(root.join("notes.txt"), "not a document").unwrap();
        fs::write(root.join("skip/c.json"), r#"{"description": "c"}"#).unwrap();

        let input = InputConfig {
            exclude_globs: vec!["skip/**".to_string()],
            ..InputConfig::default()
        };
        let items = load_documents(&[root.to_path_buf()], &input).unwrap();
        let ids: Vec<&str> = items.iter().map(|i| i.source_id.as_str()).collect();
        assert_eq!(ids, vec!["b.json", "nested/a.jsonl:1", "nested/a.jsonl:2"]);
    }
}
