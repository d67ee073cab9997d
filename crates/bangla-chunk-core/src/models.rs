//! Data types flowing through the document chunker.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A source record: field name to JSON value. No schema is enforced.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Keys every [`Chunk`] serializes itself; propagated fields may not reuse them.
pub const RESERVED_KEYS: [&str; 4] = ["id", "chunk_index", "total_chunks", "content"];

/// One piece of a document's text plus the document's descriptive fields.
///
/// Propagated fields are flattened into the same JSON object, so a simple
/// chunk serializes as
/// `{"id": "doc1_chunk_0", "chunk_index": 0, "total_chunks": 1, "content": "…", "title": "…"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub id: String,
    pub chunk_index: usize,
    pub total_chunks: usize,
    pub content: String,
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
}

impl Chunk {
    /// Value of a propagated field, if this chunk carries it.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Which descriptive fields are copied from a document into each chunk.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldSet {
    /// `title`
    #[default]
    Simple,
    /// Both sides of a paired catalog comparison.
    Comparison,
    Custom(Vec<String>),
}

const SIMPLE_FIELDS: &[&str] = &["title"];

const COMPARISON_FIELDS: &[&str] = &[
    "title",
    "category_left",
    "description_left",
    "title_right",
    "category_right",
    "description_right",
];

impl FieldSet {
    pub fn names(&self) -> Vec<&str> {
        match self {
            FieldSet::Simple => SIMPLE_FIELDS.to_vec(),
            FieldSet::Comparison => COMPARISON_FIELDS.to_vec(),
            FieldSet::Custom(names) => names.iter().map(String::as_str).collect(),
        }
    }
}

/// Short name for a JSON value's type, used in error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
