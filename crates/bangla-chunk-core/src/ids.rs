//! Document identifier generation.
//!
//! A document id is computed once per chunking call and becomes the prefix of
//! every chunk id (`<doc_id>_chunk_<n>`). Generation is behind a trait so
//! callers can substitute a deterministic source, e.g. in tests.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Produces unique document identifiers. Implementations must be safe to
/// call from several threads at once.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random UUID v4 identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// `<prefix>-0`, `<prefix>-1`, … in call order.
#[derive(Debug, Default)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn generate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}

impl<F> IdGenerator for F
where
    F: Fn() -> String + Send + Sync,
{
    fn generate(&self) -> String {
        self()
    }
}
