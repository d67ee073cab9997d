//! Library-level checks of the chunking contract through the public API.

use bangla_chunk::{
    chunk_comparison_document, chunk_document, normalize, split, ChunkError, Document,
    DocumentChunker, SequentialIds, SplitterConfig, TextSplitter,
};
use serde_json::json;

const DHAKA: &str = "ঢাকা শহরে অনেক মানুষ বসবাস করে।";

fn doc(value: serde_json::Value) -> Document {
    value.as_object().cloned().unwrap()
}

#[test]
fn test_long_bengali_text_prefers_dari_cuts() {
    let text = DHAKA.repeat(50);
    let chunks = split(&text, 512, 150).unwrap();
    assert!(chunks.len() > 1);
    for c in &chunks {
        let len = c.chars().count();
        assert!(len <= 512);
        assert!(c.ends_with('।'));
    }
    // Every cut except the tail lands in the latter half of the window.
    for c in &chunks[..chunks.len() - 1] {
        assert!(c.chars().count() > 256);
    }
}

#[test]
fn test_chunk_document_matches_split() {
    let text = vec![DHAKA; 40].join("\n");
    let d = doc(json!({"description": text, "title": "শিরোনাম"}));
    let chunks = chunk_document(&d, "description", Some("doc")).unwrap();
    let pieces = split(&text, 512, 150).unwrap();

    assert_eq!(chunks.len(), pieces.len());
    for (i, c) in chunks.iter().enumerate() {
        assert_eq!(c.chunk_index, i);
        assert_eq!(c.total_chunks, pieces.len());
        assert_eq!(c.content, pieces[i]);
        assert_eq!(c.id, format!("doc_chunk_{}", i));
        assert_eq!(c.field("title"), Some("শিরোনাম"));
    }
}

#[test]
fn test_chunks_reassemble_source() {
    let text = format!("{}  \n\n {}", DHAKA.repeat(20), "শেষ অংশ ".repeat(80));
    let splitter = TextSplitter::new(SplitterConfig::new(100, 30).unwrap());
    let (normalized, spans) = splitter.split_spans(&text);
    let chars: Vec<char> = normalized.chars().collect();

    let mut rebuilt = String::new();
    let mut covered = 0;
    for span in spans {
        assert!(span.start <= covered, "gap before {}", span.start);
        rebuilt.extend(&chars[covered.max(span.start)..span.end]);
        covered = span.end;
    }
    assert_eq!(rebuilt, normalized);
}

#[test]
fn test_normalize_idempotent_on_mixed_text() {
    let text = "\u{0995}\u{09C7}\u{09D7}\t\t\u{09A1}\u{09BC}  abc \n\n";
    let once = normalize(text);
    assert_eq!(normalize(&once), once);
}

#[test]
fn test_invalid_configuration() {
    assert_eq!(split("x", 0, 0), Err(ChunkError::ZeroChunkSize));
    assert!(matches!(
        split("x", 5, 7),
        Err(ChunkError::OverlapTooLarge { size: 5, overlap: 7 })
    ));
}

#[test]
fn test_comparison_and_deterministic_ids() {
    let chunker = DocumentChunker::new()
        .with_fields(bangla_chunk::FieldSet::Comparison)
        .unwrap()
        .with_id_generator(SequentialIds::new("cmp"));
    let d = doc(json!({"description": "x", "description_left": "বাম", "description_right": "ডান"}));
    let chunks = chunker.chunk(&d, None).unwrap();
    assert_eq!(chunks[0].id, "cmp-0_chunk_0");
    assert_eq!(chunks[0].field("description_left"), Some("বাম"));

    let free = chunk_comparison_document(&d, "description", Some("p")).unwrap();
    assert_eq!(free[0].fields, chunks[0].fields);
}
