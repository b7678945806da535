//! Rewrite rules for unguarded `["Group"]` accesses
//!
//! Both rules turn `$event["X"]["Group"]` into
//! `isset($event["X"]["Group"]) ? $event["X"]["Group"] : "Unknown"`.
//! Neither pattern matches its own output, so a second run is a no-op.

mod guarded_group_array_item;
mod guarded_group_assignment;

pub use guarded_group_array_item::GuardedGroupArrayItem;
pub use guarded_group_assignment::GuardedGroupAssignment;

use groupfix_core::Edit;

/// A rewrite rule applied as one global pass over a buffer
pub trait Rule: Send + Sync {
    /// Internal name for this rule
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Check the source and return edits to apply
    fn check(&self, source: &str) -> Vec<Edit>;
}
