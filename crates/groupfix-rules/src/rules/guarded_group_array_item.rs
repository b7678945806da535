//! Guard `'group' => $event["X"]["Group"],` array items

use groupfix_core::Edit;

use crate::rules::Rule;
use crate::{RuleError, Substitution};

const PATTERN: &str = r#"'group' => \$event\["(\w+)"\]\["Group"\],"#;
const TEMPLATE: &str =
    r#"'group' => isset($$event["${1}"]["Group"]) ? $$event["${1}"]["Group"] : "Unknown","#;

pub struct GuardedGroupArrayItem {
    substitution: Substitution,
}

impl GuardedGroupArrayItem {
    pub fn new() -> Result<Self, RuleError> {
        Ok(Self {
            substitution: Substitution::new(PATTERN, TEMPLATE)?,
        })
    }
}

impl Rule for GuardedGroupArrayItem {
    fn name(&self) -> &'static str { "guarded_group_array_item" }
    fn description(&self) -> &'static str {
        "Guard 'group' => $event[\"X\"][\"Group\"] array items with isset()"
    }

    fn check(&self, source: &str) -> Vec<Edit> {
        self.substitution
            .edits(source, self.name(), "Guard Group key in array item")
    }
}
