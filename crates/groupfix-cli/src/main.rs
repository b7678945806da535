//! fix-group-keys - guard unsafe `["Group"]` key accesses in a PHP file
//!
//! Rules, applied in order as one global pass each:
//! - guarded_group_array_item: `'group' => $event["X"]["Group"],`
//! - guarded_group_assignment: `$this->stats[$id]["Group"] = $event["X"]["Group"];`
//!
//! Both rewrite the access to
//! `isset($event["X"]["Group"]) ? $event["X"]["Group"] : "Unknown"`.

mod config;
mod output;
mod process;

use anyhow::Result;
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use std::process::ExitCode;

use config::Config;
use groupfix_rules::RuleRegistry;
use output::{OutputFormat, Reporter};
use process::{process_file, write_file};

#[derive(Parser)]
#[command(name = "fix-group-keys")]
#[command(version)]
#[command(about = "Guard unsafe [\"Group\"] key accesses in a PHP source file")]
struct Cli {
    /// File to patch (default: public/tacview.php)
    path: Option<PathBuf>,

    /// Show what would change without writing the file
    #[arg(long, short = 'n', visible_alias = "dry-run")]
    check: bool,

    /// Show verbose output
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Output format: text, json, diff
    #[arg(long, value_name = "FORMAT")]
    format: Option<String>,

    /// Shorthand for --format json
    #[arg(long, conflicts_with = "format")]
    json: bool,

    /// Leave the file untouched when no rule matched
    #[arg(long)]
    skip_unchanged: bool,

    /// Path to config file (default: auto-detect .groupfix.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long, conflicts_with = "config")]
    no_config: bool,

    /// List available rules and exit
    #[arg(long)]
    list_rules: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red(), e);
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let registry = RuleRegistry::new()?;
    let (config, config_path) =
        Config::resolve(cli.config.as_deref(), cli.no_config, &std::env::current_dir()?)?;

    let format_name = if cli.json {
        Some("json")
    } else {
        cli.format.as_deref().or(config.output.format.as_deref())
    };
    let output_format = match format_name {
        Some(name) => OutputFormat::from_str(name).ok_or_else(|| {
            anyhow::anyhow!("Invalid output format '{}'. Valid options: text, json, diff", name)
        })?,
        None => OutputFormat::Text,
    };
    let reporter = Reporter::new(output_format, cli.verbose);

    if cli.list_rules {
        reporter.report_rules(&registry.list());
        return Ok(ExitCode::SUCCESS);
    }

    let target = config.target_path(cli.path.as_deref());
    let skip_unchanged = cli.skip_unchanged || config.write.skip_unchanged;
    let verbose = cli.verbose && output_format == OutputFormat::Text;

    if verbose {
        if let Some(path) = &config_path {
            println!("{}: {}", "Using config".bold(), path.display());
        }
        println!("{}: {}", "Target".bold(), target.display());
        println!("{}: {}", "Mode".bold(), if cli.check { "check" } else { "fix" });
        println!("{}: {}", "Rules".bold(), registry.names().join(", "));
        println!();
    }

    let result = process_file(&target, &registry)?;

    if cli.check {
        let has_changes = result.has_changes();
        reporter.report_check(&target, result.edits, &result.old_source, &result.new_source);
        return Ok(if has_changes { ExitCode::from(2) } else { ExitCode::SUCCESS });
    }

    // The buffer is written back even when nothing matched unless asked not to.
    let written = !(skip_unchanged && !result.has_changes());
    if written {
        write_file(&target, &result.new_source)?;
    }

    reporter.report_fix(&target, result.edits, written, &result.old_source, &result.new_source);

    Ok(ExitCode::SUCCESS)
}
