//! Output formatting for fix-group-keys
//!
//! Supports text (colored terminal), JSON and unified diff output.

use colored::*;
use groupfix_rules::RuleInfo;
use serde::Serialize;
use similar::{ChangeTag, TextDiff};
use std::path::Path;

/// Line printed after a successful fix run
pub const CONFIRMATION: &str = "Fixed Group key access issues!";

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Diff,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<OutputFormat> {
        match s.to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            "diff" => Some(OutputFormat::Diff),
            _ => None,
        }
    }
}

/// Information about a single edit
#[derive(Debug, Clone, Serialize)]
pub struct EditInfo {
    pub rule: String,
    pub line: usize,
    pub column: usize,
    pub message: String,
}

/// Full JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    pub version: String,
    pub path: String,
    pub mode: &'static str,
    pub written: bool,
    pub edits: Vec<EditInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

/// Reporter for a single patched file
pub struct Reporter {
    format: OutputFormat,
    verbose: bool,
}

impl Reporter {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    /// Print the registered rules, as JSON when that format was asked for
    pub fn report_rules(&self, rules: &[RuleInfo]) {
        if self.format == OutputFormat::Json {
            match serde_json::to_string_pretty(rules) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("{}: failed to serialize rules: {}", "Error".red(), e),
            }
            return;
        }

        println!("{}", "Available rules:".bold());
        for info in rules {
            println!("  {} - {}", info.name.green(), info.description);
        }
    }

    /// Report a file after the patched buffer was (or deliberately wasn't) written
    pub fn report_fix(
        &self,
        path: &Path,
        edits: Vec<EditInfo>,
        written: bool,
        old_source: &str,
        new_source: &str,
    ) {
        match self.format {
            OutputFormat::Text => {
                if self.verbose {
                    println!("{}", path.display().to_string().bold());
                    print_edits(&edits);
                    if !written {
                        println!("  {} No changes, file left untouched", "-".yellow());
                    }
                    println!();
                }
                println!("{}", CONFIRMATION);
            }
            OutputFormat::Diff => {
                print_unified_diff(path, old_source, new_source);
            }
            OutputFormat::Json => {
                print_json(JsonOutput {
                    version: env!("CARGO_PKG_VERSION").to_string(),
                    path: path.display().to_string(),
                    mode: "fix",
                    written,
                    edits,
                    message: Some(CONFIRMATION),
                });
            }
        }
    }

    /// Report what a fix run would change, without writing
    pub fn report_check(&self, path: &Path, edits: Vec<EditInfo>, old_source: &str, new_source: &str) {
        match self.format {
            OutputFormat::Text => {
                if edits.is_empty() {
                    println!("{}: No changes needed", path.display());
                    return;
                }

                println!("{}", path.display().to_string().bold());
                print_changed_lines(old_source, new_source);
                println!();
                print_edits(&edits);
                println!();
                println!("{}", "Run without --check to apply changes".yellow());
            }
            OutputFormat::Diff => {
                print_unified_diff(path, old_source, new_source);
            }
            OutputFormat::Json => {
                print_json(JsonOutput {
                    version: env!("CARGO_PKG_VERSION").to_string(),
                    path: path.display().to_string(),
                    mode: "check",
                    written: false,
                    edits,
                    message: None,
                });
            }
        }
    }
}

fn print_edits(edits: &[EditInfo]) {
    for edit in edits {
        println!(
            "  {} {}:{} {} ({})",
            "->".green(),
            edit.line,
            edit.column,
            edit.message,
            edit.rule.dimmed()
        );
    }
}

fn print_json(output: JsonOutput) {
    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("{}: failed to serialize output: {}", "Error".red(), e),
    }
}

/// Print removed and added lines with their line numbers
fn print_changed_lines(old: &str, new: &str) {
    for change in TextDiff::from_lines(old, new).iter_all_changes() {
        let (sign, index) = match change.tag() {
            ChangeTag::Delete => ("-", change.old_index()),
            ChangeTag::Insert => ("+", change.new_index()),
            ChangeTag::Equal => continue,
        };
        let line = format!(
            "{:>5} {} {}",
            index.map_or(0, |i| i + 1),
            sign,
            change.value().trim_end_matches(['\r', '\n'])
        );

        if change.tag() == ChangeTag::Delete {
            println!("  {}", line.red());
        } else {
            println!("  {}", line.green());
        }
    }
}

fn print_unified_diff(path: &Path, old: &str, new: &str) {
    print!("{}", unified_diff(path, old, new));
}

/// `diff -u` style patch of the target, empty when nothing changed
fn unified_diff(path: &Path, old: &str, new: &str) -> String {
    if old == new {
        return String::new();
    }

    let name = path.display().to_string();
    let (old_header, new_header) = (format!("a/{}", name), format!("b/{}", name));
    let diff = TextDiff::from_lines(old, new);

    diff.unified_diff()
        .context_radius(3)
        .header(&old_header, &new_header)
        .to_string()
}
