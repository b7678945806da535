//! Byte-range source editing

use std::ops::Range;
use thiserror::Error;

/// Errors that can occur during edit application
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EditError {
    #[error("Overlapping edits detected at offset {0}")]
    OverlappingEdits(usize),

    #[error("Edit span {start}..{end} out of bounds for source length {len}")]
    SpanOutOfBounds { start: usize, end: usize, len: usize },

    #[error("Edit span {start}..{end} does not fall on UTF-8 character boundaries")]
    NotCharBoundary { start: usize, end: usize },
}

/// A single replacement of the bytes `start..end` in a buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Byte offset where the replaced text starts
    pub start: usize,
    /// Byte offset one past the replaced text
    pub end: usize,
    /// The replacement text
    pub replacement: String,
    /// Human-readable description of the edit
    pub message: String,
    /// Name of the rule that produced this edit
    pub rule: Option<String>,
}

impl Edit {
    /// Create a new edit
    pub fn new(span: Range<usize>, replacement: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            start: span.start,
            end: span.end,
            replacement: replacement.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Attach the name of the producing rule
    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = Some(rule.into());
        self
    }

    /// The replaced byte range
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Apply edits to a buffer
///
/// Edits are applied in reverse order (from end to start) to keep the
/// offsets of the remaining edits valid. Replacement text is inserted
/// verbatim.
///
/// # Returns
/// * `Ok(String)` - The modified buffer
/// * `Err(EditError)` - If edits overlap, are out of bounds or split a character
pub fn apply_edits(source: &str, edits: &[Edit]) -> Result<String, EditError> {
    if edits.is_empty() {
        return Ok(source.to_string());
    }

    let mut sorted_edits: Vec<&Edit> = edits.iter().collect();
    sorted_edits.sort_by(|a, b| b.start.cmp(&a.start));

    let source_len = source.len();
    let mut prev_start: Option<usize> = None;

    for edit in &sorted_edits {
        let (start, end) = (edit.start, edit.end);

        if start > end || end > source_len {
            return Err(EditError::SpanOutOfBounds {
                start,
                end,
                len: source_len,
            });
        }

        if !source.is_char_boundary(start) || !source.is_char_boundary(end) {
            return Err(EditError::NotCharBoundary { start, end });
        }

        if let Some(prev) = prev_start {
            if end > prev {
                return Err(EditError::OverlappingEdits(start));
            }
        }

        prev_start = Some(start);
    }

    let mut result = source.to_string();
    for edit in sorted_edits {
        result.replace_range(edit.span(), &edit.replacement);
    }

    Ok(result)
}
