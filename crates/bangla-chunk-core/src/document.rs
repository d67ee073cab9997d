//! Document → chunk records.
//!
//! A [`DocumentChunker`] reads one text field from a [`Document`], splits it
//! with a [`TextSplitter`], and stamps each piece with a derived id, its
//! position, and the document's descriptive fields.
//!
//! # Example
//!
//! ```rust
//! use bangla_chunk_core::document::chunk_document;
//! use serde_json::json;
//!
//! let doc = json!({"description": "hello", "title": "T"});
//! let chunks = chunk_document(doc.as_object().unwrap(), "description", Some("doc1")).unwrap();
//! assert_eq!(chunks.len(), 1);
//! assert_eq!(chunks[0].id, "doc1_chunk_0");
//! assert_eq!(chunks[0].field("title"), Some("T"));
//! ```

use std::collections::BTreeMap;

use serde_json::Value;

use crate::chunk::TextSplitter;
use crate::error::{ChunkError, Result};
use crate::ids::{IdGenerator, UuidGenerator};
use crate::models::{json_type_name, Chunk, Document, FieldSet, RESERVED_KEYS};

pub const DEFAULT_CONTENT_FIELD: &str = "description";

/// Generic document chunker. The simple and comparison variants differ only
/// in their [`FieldSet`].
pub struct DocumentChunker {
    splitter: TextSplitter,
    fields: FieldSet,
    content_field: String,
    ids: Box<dyn IdGenerator>,
}

impl Default for DocumentChunker {
    fn default() -> Self {
        Self {
            splitter: TextSplitter::default(),
            fields: FieldSet::Simple,
            content_field: DEFAULT_CONTENT_FIELD.to_string(),
            ids: Box::new(UuidGenerator),
        }
    }
}

impl std::fmt::Debug for DocumentChunker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentChunker")
            .field("splitter", &self.splitter)
            .field("fields", &self.fields)
            .field("content_field", &self.content_field)
            .finish_non_exhaustive()
    }
}

impl DocumentChunker {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_splitter(mut self, splitter: TextSplitter) -> Self {
        self.splitter = splitter;
        self
    }

    /// Set the propagated fields. Custom names may not shadow chunk keys.
    pub fn with_fields(mut self, fields: FieldSet) -> Result<Self> {
        if let Some(name) = fields.names().into_iter().find(|n| RESERVED_KEYS.contains(n)) {
            return Err(ChunkError::ReservedField(name.to_string()));
        }
        self.fields = fields;
        Ok(self)
    }

    #[must_use]
    pub fn with_content_field(mut self, field: impl Into<String>) -> Self {
        self.content_field = field.into();
        self
    }

    #[must_use]
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn content_field(&self) -> &str {
        &self.content_field
    }

    /// Chunk `doc`. When `doc_id` is `None` a fresh id is drawn from the
    /// configured generator.
    ///
    /// # Errors
    ///
    /// [`ChunkError::NonStringField`] if the content field or any propagated
    /// field holds a non-string value, `null` included. Missing fields read
    /// as `""`.
    pub fn chunk(&self, doc: &Document, doc_id: Option<&str>) -> Result<Vec<Chunk>> {
        let content = string_field(doc, &self.content_field)?;

        let mut fields = BTreeMap::new();
        for name in self.fields.names() {
            fields.insert(name.to_string(), string_field(doc, name)?.to_string());
        }

        let pieces = self.splitter.split(content);
        let total_chunks = pieces.len();
        let base_id = match doc_id {
            Some(id) => id.to_string(),
            None => self.ids.generate(),
        };

        tracing::debug!(doc_id = %base_id, chunks = total_chunks, "chunked document");

        Ok(pieces
            .into_iter()
            .enumerate()
            .map(|(i, content)| Chunk {
                id: format!("{}_chunk_{}", base_id, i),
                chunk_index: i,
                total_chunks,
                content,
                fields: fields.clone(),
            })
            .collect())
    }
}

/// Read `name` from `doc` as a string; only an absent key reads as `""`.
fn string_field<'a>(doc: &'a Document, name: &str) -> Result<&'a str> {
    match doc.get(name) {
        None => Ok(""),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(other) => Err(ChunkError::NonStringField {
            field: name.to_string(),
            found: json_type_name(other),
        }),
    }
}

/// Chunk `doc` with default splitting, propagating `title`.
pub fn chunk_document(doc: &Document, content_field: &str, doc_id: Option<&str>) -> Result<Vec<Chunk>> {
    DocumentChunker::new()
        .with_content_field(content_field)
        .chunk(doc, doc_id)
}

/// Chunk a paired catalog comparison, propagating both sides' fields.
pub fn chunk_comparison_document(
    doc: &Document,
    content_field: &str,
    doc_id: Option<&str>,
) -> Result<Vec<Chunk>> {
    DocumentChunker::new()
        .with_fields(FieldSet::Comparison)?
        .with_content_field(content_field)
        .chunk(doc, doc_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::SplitterConfig;
    use crate::ids::SequentialIds;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            _ => panic!("test document must be an object"),
        }
    }

    #[test]
    fn test_simple_document() {
        let d = doc(json!({"description": "hello", "title": "T"}));
        let chunks = chunk_document(&d, "description", Some("doc1")).unwrap();
        assert_eq!(
            serde_json::to_value(&chunks).unwrap(),
            json!([{
                "id": "doc1_chunk_0",
                "title": "T",
                "content": "hello",
                "chunk_index": 0,
                "total_chunks": 1
            }])
        );
    }

    #[test]
    fn test_missing_content_field() {
        let d = doc(json!({"title": "only a title"}));
        let chunks = chunk_document(&d, "description", Some("d")).unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].content, "");
        assert_eq!(chunks[0].field("title"), Some("only a title"));
    }

    #[test]
    fn test_missing_title_defaults_empty() {
        let d = doc(json!({"description": "x"}));
        let chunks = chunk_document(&d, "description", Some("d")).unwrap();
        assert_eq!(chunks[0].field("title"), Some(""));
    }

    #[test]
    fn test_null_content_rejected() {
        let d = doc(json!({"description": null, "title": null}));
        let err = chunk_document(&d, "description", Some("d")).unwrap_err();
        assert_eq!(
            err,
            ChunkError::NonStringField {
                field: "description".to_string(),
                found: "null"
            }
        );
    }

    #[test]
    fn test_null_title_rejected() {
        let d = doc(json!({"description": "x", "title": null}));
        let err = chunk_document(&d, "description", Some("d")).unwrap_err();
        assert!(matches!(err, ChunkError::NonStringField { ref field, found: "null" } if field == "title"));
    }

    #[test]
    fn test_custom_content_field() {
        let d = doc(json!({"body": "  আমার   সোনার বাংলা ", "description": "ignored"}));
        let chunks = chunk_document(&d, "body", Some("d")).unwrap();
        assert_eq!(chunks[0].content, "আমার সোনার বাংলা");
    }

    #[test]
    fn test_non_string_content_rejected() {
        let d = doc(json!({"description": 42}));
        let err = chunk_document(&d, "description", Some("d")).unwrap_err();
        assert_eq!(
            err,
            ChunkError::NonStringField {
                field: "description".to_string(),
                found: "number"
            }
        );
    }

    #[test]
    fn test_non_string_title_rejected() {
        let d = doc(json!({"description": "x", "title": ["a"]}));
        let err = chunk_document(&d, "description", Some("d")).unwrap_err();
        assert!(matches!(err, ChunkError::NonStringField { ref field, found: "array" } if field == "title"));
    }

    #[test]
    fn test_comparison_fields() {
        let d = doc(json!({
            "description": "তুলনা",
            "title": "A vs B",
            "category_left": "phone",
            "description_left": "left side",
            "title_right": "B",
            "category_right": "phone",
            "unrelated": "dropped"
        }));
        let chunks = chunk_comparison_document(&d, "description", Some("cmp")).unwrap();
        assert_eq!(chunks.len(), 1);
        let c = &chunks[0];
        assert_eq!(c.id, "cmp_chunk_0");
        assert_eq!(c.field("title"), Some("A vs B"));
        assert_eq!(c.field("category_left"), Some("phone"));
        assert_eq!(c.field("description_left"), Some("left side"));
        assert_eq!(c.field("title_right"), Some("B"));
        assert_eq!(c.field("description_right"), Some(""));
        assert_eq!(c.field("unrelated"), None);
        assert_eq!(c.fields.len(), 6);
    }

    #[test]
    fn test_generated_id_shared_by_all_chunks() {
        let d = doc(json!({"description": "ঢাকা শহরে অনেক মানুষ বসবাস করে।".repeat(50)}));
        let chunks = chunk_document(&d, "description", None).unwrap();
        assert_eq!(chunks.len(), 4);
        let base = chunks[0].id.strip_suffix("_chunk_0").unwrap().to_string();
        assert!(uuid::Uuid::parse_str(&base).is_ok());
        for (i, c) in chunks.iter().enumerate() {
            assert_eq!(c.id, format!("{}_chunk_{}", base, i));
        }
    }

    #[test]
    fn test_fresh_id_per_call() {
        let d = doc(json!({"description": "x"}));
        let a = chunk_document(&d, "description", None).unwrap();
        let b = chunk_document(&d, "description", None).unwrap();
        assert_ne!(a[0].id, b[0].id);
    }

    #[test]
    fn test_injected_id_generator() {
        let chunker = DocumentChunker::new().with_id_generator(SequentialIds::new("doc"));
        let d = doc(json!({"description": "x"}));
        assert_eq!(chunker.chunk(&d, None).unwrap()[0].id, "doc-0_chunk_0");
        assert_eq!(chunker.chunk(&d, None).unwrap()[0].id, "doc-1_chunk_0");
        // An explicit id does not consume the generator.
        assert_eq!(chunker.chunk(&d, Some("x")).unwrap()[0].id, "x_chunk_0");
        assert_eq!(chunker.chunk(&d, None).unwrap()[0].id, "doc-2_chunk_0");
    }

    #[test]
    fn test_positions_match_split() {
        let text = "abcdefghijklmnopqrstuvwxyz";
        let splitter = TextSplitter::new(SplitterConfig::new(10, 3).unwrap());
        let expected = splitter.split(text);
        let chunker = DocumentChunker::new().with_splitter(splitter);
        let d = doc(json!({"description": text}));
        let chunks = chunker.chunk(&d, Some("a")).unwrap();
        assert_eq!(chunks.len(), expected.len());
        for (i, c) in chunks.iter().enumerate() {
            assert_eq!(c.chunk_index, i);
            assert_eq!(c.total_chunks, expected.len());
            assert_eq!(c.content, expected[i]);
        }
    }

    #[test]
    fn test_custom_fields() {
        let chunker = DocumentChunker::new()
            .with_fields(FieldSet::Custom(vec!["author".into(), "lang".into()]))
            .unwrap();
        let d = doc(json!({"description": "x", "author": "রবীন্দ্রনাথ", "title": "skip"}));
        let c = &chunker.chunk(&d, Some("d")).unwrap()[0];
        assert_eq!(c.field("author"), Some("রবীন্দ্রনাথ"));
        assert_eq!(c.field("lang"), Some(""));
        assert_eq!(c.field("title"), None);
    }

    #[test]
    fn test_reserved_custom_field_rejected() {
        let err = DocumentChunker::new()
            .with_fields(FieldSet::Custom(vec!["content".into()]))
            .unwrap_err();
        assert_eq!(err, ChunkError::ReservedField("content".to_string()));
    }
}
