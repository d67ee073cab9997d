//! Boundary-aware character splitter.
//!
//! Splits normalized text into overlapping chunks of at most `chunk_size`
//! characters. Cuts prefer a Bengali full stop (`।`), then a newline, then a
//! space, and fall back to a hard character cut when none of those sit in the
//! latter half of the window.
//!
//! All positions are counted in `char`s, not bytes, so a limit of 512 means
//! 512 Bengali letters and signs regardless of their UTF-8 width.
//!
//! # Algorithm
//!
//! 1. Normalize the input (NFC, whitespace collapsed).
//! 2. If it fits in one chunk, return it whole.
//! 3. From a `start` cursor, take a window of `chunk_size` chars and pull its
//!    end back to the rightmost breakpoint past the window's midpoint.
//! 4. Emit the window, then restart just after a `।` found in the last
//!    `2 * chunk_overlap` chars, or `chunk_overlap` chars before the end.
//! 5. `start` advances by at least one char per step.
//!
//! # Example
//!
//! ```rust
//! use bangla_chunk_core::chunk::split;
//!
//! let chunks = split("short text", 512, 150).unwrap();
//! assert_eq!(chunks, vec!["short text".to_string()]);
//! ```

use std::ops::Range;

use crate::error::{ChunkError, Result};
use crate::normalize::normalize;

/// Bengali full stop (dari).
pub const SENTENCE_TERMINATOR: char = '।';

pub const DEFAULT_CHUNK_SIZE: usize = 512;
pub const DEFAULT_CHUNK_OVERLAP: usize = 150;

/// Validated size and overlap for a [`TextSplitter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitterConfig {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl SplitterConfig {
    /// Build a config, rejecting a zero size or an overlap that is not
    /// strictly smaller than the size.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(ChunkError::ZeroChunkSize);
        }
        if chunk_overlap >= chunk_size {
            return Err(ChunkError::OverlapTooLarge {
                size: chunk_size,
                overlap: chunk_overlap,
            });
        }
        Ok(Self {
            chunk_size,
            chunk_overlap,
        })
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn chunk_overlap(&self) -> usize {
        self.chunk_overlap
    }
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}

/// Splits text according to a [`SplitterConfig`].
#[derive(Debug, Clone, Default)]
pub struct TextSplitter {
    config: SplitterConfig,
}

impl TextSplitter {
    #[must_use]
    pub fn new(config: SplitterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SplitterConfig {
        &self.config
    }

    /// Split `text` into chunk strings.
    ///
    /// # Guarantees
    ///
    /// - At least one chunk is returned (`[""]` for blank input).
    /// - Every chunk is non-empty when the normalized text is non-empty.
    /// - No chunk is longer than `chunk_size` chars.
    /// - Consecutive chunks leave no gap in the normalized text.
    #[must_use]
    pub fn split(&self, text: &str) -> Vec<String> {
        let normalized = normalize(text);
        let chars: Vec<char> = normalized.chars().collect();
        if chars.len() <= self.config.chunk_size {
            return vec![normalized];
        }
        self.spans_of(&chars)
            .into_iter()
            .map(|range| chars[range].iter().collect())
            .collect()
    }

    /// Split `text` and return the normalized text together with the char
    /// range each chunk covers in it.
    pub fn split_spans(&self, text: &str) -> (String, Vec<Range<usize>>) {
        let normalized = normalize(text);
        let chars: Vec<char> = normalized.chars().collect();
        let spans = if chars.len() <= self.config.chunk_size {
            vec![0..chars.len()]
        } else {
            self.spans_of(&chars)
        };
        (normalized, spans)
    }

    fn spans_of(&self, chars: &[char]) -> Vec<Range<usize>> {
        let size = self.config.chunk_size;
        let overlap = self.config.chunk_overlap;
        let len = chars.len();

        let mut spans = Vec::new();
        let mut start = 0;

        while start < len {
            let mut end = (start + size).min(len);

            if end < len {
                // Only breakpoints strictly past start + size / 2 count.
                let past_midpoint = |pos: &usize| 2 * (*pos - start) > size;

                if let Some(pos) = rfind(chars, start..end, SENTENCE_TERMINATOR).filter(past_midpoint) {
                    end = pos + 1;
                } else if let Some(pos) = rfind(chars, start..end, '\n').filter(past_midpoint) {
                    end = pos;
                } else if let Some(pos) = rfind(chars, start..end, ' ').filter(past_midpoint) {
                    end = pos;
                } else {
                    tracing::trace!(start, end, "no breakpoint, hard cut");
                }
            }

            spans.push(start..end);

            start = if end >= len {
                end
            } else {
                let lookback = end.saturating_sub(2 * overlap).max(start);
                match rfind(chars, lookback..end, SENTENCE_TERMINATOR) {
                    Some(pos) if pos > lookback => pos + 1,
                    _ => end.saturating_sub(overlap).max(start + 1),
                }
            };
        }

        tracing::debug!(chars = len, chunks = spans.len(), size, overlap, "split text");
        spans
    }
}

/// Rightmost index of `needle` within `range`.
fn rfind(chars: &[char], range: Range<usize>, needle: char) -> Option<usize> {
    let offset = range.start;
    chars[range].iter().rposition(|&c| c == needle).map(|i| i + offset)
}

/// Validate `chunk_size` / `chunk_overlap` and split `text`.
pub fn split(text: &str, chunk_size: usize, chunk_overlap: usize) -> Result<Vec<String>> {
    let config = SplitterConfig::new(chunk_size, chunk_overlap)?;
    Ok(TextSplitter::new(config).split(text))
}
