//! File processing: read, patch, write

use anyhow::{Context, Result};
use std::path::Path;

use groupfix_rules::RuleRegistry;

use crate::output::EditInfo;

/// Result of patching a single file in memory
#[derive(Debug)]
pub struct ProcessResult {
    /// Edits that were found
    pub edits: Vec<EditInfo>,
    /// Original file contents
    pub old_source: String,
    /// Contents after every rule ran
    pub new_source: String,
}

impl ProcessResult {
    pub fn has_changes(&self) -> bool {
        !self.edits.is_empty()
    }
}

/// Read `path` and run every rule over it. Nothing is written.
pub fn process_file(path: &Path, registry: &RuleRegistry) -> Result<ProcessResult> {
    let source_code = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let patch = registry
        .check_all(&source_code)
        .with_context(|| format!("Failed to patch {}", path.display()))?;

    let edits = patch
        .edits
        .into_iter()
        .map(|applied| EditInfo {
            rule: applied.edit.rule.unwrap_or_else(|| "unknown".to_string()),
            line: applied.line,
            column: applied.column,
            message: applied.edit.message,
        })
        .collect();

    Ok(ProcessResult {
        edits,
        old_source: source_code,
        new_source: patch.source,
    })
}

/// Overwrite `path` with `content`
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}
