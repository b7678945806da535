//! Rule registry
//!
//! The registry holds the rules in their fixed execution order and runs them
//! one pass at a time, so each rule sees the buffer already rewritten by the
//! rules before it.

use std::collections::HashMap;
use std::sync::Arc;

use groupfix_core::{apply_edits, offset_to_line_column, Edit};
use serde::Serialize;

use crate::rules::{GuardedGroupArrayItem, GuardedGroupAssignment, Rule};
use crate::RuleError;

/// Information about a registered rule
#[derive(Debug, Clone, Serialize)]
pub struct RuleInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// An edit together with where it landed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedEdit {
    /// Offsets are relative to the buffer the producing rule scanned
    pub edit: Edit,
    /// 1-based line of the edit start
    pub line: usize,
    /// 1-based column of the edit start
    pub column: usize,
}

/// Result of running rules over a buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// The rewritten buffer
    pub source: String,
    /// Every edit, in rule order
    pub edits: Vec<AppliedEdit>,
}

impl Patch {
    pub fn has_changes(&self) -> bool {
        !self.edits.is_empty()
    }
}

/// Registry of all rules, in execution order
pub struct RuleRegistry {
    rules: Vec<Arc<dyn Rule>>,
    by_name: HashMap<&'static str, usize>,
}

impl RuleRegistry {
    /// Create a new registry with both built-in rules
    pub fn new() -> Result<Self, RuleError> {
        let mut registry = Self {
            rules: Vec::new(),
            by_name: HashMap::new(),
        };

        registry.register(Arc::new(GuardedGroupArrayItem::new()?));
        registry.register(Arc::new(GuardedGroupAssignment::new()?));

        Ok(registry)
    }

    fn register(&mut self, rule: Arc<dyn Rule>) {
        let idx = self.rules.len();
        self.by_name.insert(rule.name(), idx);
        self.rules.push(rule);
    }

    /// Rule names in execution order
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn list(&self) -> Vec<RuleInfo> {
        self.rules
            .iter()
            .map(|r| RuleInfo {
                name: r.name(),
                description: r.description(),
            })
            .collect()
    }

    /// Run the named rules over `source`
    ///
    /// Rules run in registration order regardless of the order of `names`.
    /// Each rule's edits are applied before the next rule runs.
    pub fn check(&self, source: &str, names: &[&str]) -> Result<Patch, RuleError> {
        for name in names {
            if !self.by_name.contains_key(name) {
                return Err(RuleError::UnknownRule(name.to_string()));
            }
        }

        let mut all_edits = Vec::new();
        let mut current_source = source.to_string();

        for rule in self.rules.iter().filter(|r| names.contains(&r.name())) {
            let edits = rule.check(&current_source);

            if edits.is_empty() {
                continue;
            }

            let next_source = apply_edits(&current_source, &edits)?;
            all_edits.extend(edits.into_iter().map(|edit| {
                let (line, column) = offset_to_line_column(&current_source, edit.start);
                AppliedEdit { edit, line, column }
            }));
            current_source = next_source;
        }

        Ok(Patch {
            source: current_source,
            edits: all_edits,
        })
    }

    /// Run every rule over `source`
    pub fn check_all(&self, source: &str) -> Result<Patch, RuleError> {
        self.check(source, &self.names())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
