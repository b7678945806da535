//! Guard `$this->stats[$id]["Group"] = $event["X"]["Group"];` assignments

use groupfix_core::Edit;

use crate::rules::Rule;
use crate::{RuleError, Substitution};

// `=` must be surrounded by whitespace. The left-hand side keeps its
// whitespace verbatim; the right-hand side always starts after one space.
const PATTERN: &str =
    r#"(\$this->stats\[\$\w+\]\["Group"\]\s+)=\s+\$event\["(\w+)"\]\["Group"\];"#;
const TEMPLATE: &str =
    r#"${1}= isset($$event["${2}"]["Group"]) ? $$event["${2}"]["Group"] : "Unknown";"#;

pub struct GuardedGroupAssignment {
    substitution: Substitution,
}

impl GuardedGroupAssignment {
    pub fn new() -> Result<Self, RuleError> {
        Ok(Self {
            substitution: Substitution::new(PATTERN, TEMPLATE)?,
        })
    }
}

impl Rule for GuardedGroupAssignment {
    fn name(&self) -> &'static str { "guarded_group_assignment" }
    fn description(&self) -> &'static str {
        "Guard $this->stats[$id][\"Group\"] = $event[\"X\"][\"Group\"] assignments with isset()"
    }

    fn check(&self, source: &str) -> Vec<Edit> {
        self.substitution
            .edits(source, self.name(), "Guard Group key in assignment")
    }
}
