//! groupfix-core: Core abstractions for text patching
//!
//! This crate provides:
//! - `Edit`: A byte-range replacement produced by a rule
//! - `apply_edits()`: Function to splice a set of edits into a buffer
//! - `offset_to_line_column()`: Location helper for reporting

mod edit;
mod position;

pub use edit::{apply_edits, Edit, EditError};
pub use position::offset_to_line_column;
