use groupfix_core::EditError;
use thiserror::Error;

/// Errors raised while building or running rules
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("Invalid rule pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Unknown rule '{0}'")]
    UnknownRule(String),

    #[error("Failed to apply edits: {0}")]
    Edit(#[from] EditError),
}
