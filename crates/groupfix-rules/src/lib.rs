//! groupfix-rules: regex rules that guard `["Group"]` key accesses
//!
//! Each rule is a fixed (pattern, template) pair. The registry runs them in
//! registration order, one global pass per rule, applying each pass before
//! the next one scans the buffer.
//!
//! # Example
//!
//! ```
//! use groupfix_rules::RuleRegistry;
//!
//! let registry = RuleRegistry::new().unwrap();
//! let patch = registry
//!     .check_all("'group' => $event[\"PrimaryObject\"][\"Group\"],")
//!     .unwrap();
//! assert!(patch.source.contains("isset("));
//! ```

mod error;
mod registry;
pub mod rules;
mod substitution;

pub use error::RuleError;
pub use registry::{AppliedEdit, Patch, RuleInfo, RuleRegistry};
pub use rules::{GuardedGroupArrayItem, GuardedGroupAssignment, Rule};
pub use substitution::Substitution;
