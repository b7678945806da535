//! Pattern/template pairs

use groupfix_core::Edit;
use regex::Regex;

use crate::RuleError;

/// A compiled pattern plus the template its matches are rewritten to
///
/// Templates use `regex` expansion syntax: `${1}` for a capture group and
/// `$$` for a literal dollar sign.
#[derive(Debug, Clone)]
pub struct Substitution {
    pattern: Regex,
    template: &'static str,
}

impl Substitution {
    pub fn new(pattern: &str, template: &'static str) -> Result<Self, RuleError> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            template,
        })
    }

    /// One edit per non-overlapping match, in source order
    pub fn edits(&self, source: &str, rule: &str, message: &str) -> Vec<Edit> {
        let mut edits = Vec::new();

        for cap in self.pattern.captures_iter(source) {
            let Some(full) = cap.get(0) else { continue };

            let mut replacement = String::new();
            cap.expand(self.template, &mut replacement);

            edits.push(Edit::new(full.range(), replacement, message).with_rule(rule));
        }

        edits
    }
}
