//! End-to-end tests for the fix-group-keys binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const CONFIRMATION: &str = "Fixed Group key access issues!";

const UNGUARDED: &str = r#"<?php
class TacviewStats
{
    public function onHit(array $event, string $id): void
    {
        $this->weaponOwners[$id] = [
            'pilot' => $event["PrimaryObject"]["Pilot"],
            'group' => $event["PrimaryObject"]["Group"],
        ];
        $this->stats[$id]["Group"]    = $event["SecondaryObject"]["Group"];
    }
}
"#;

const GUARDED: &str = r#"<?php
class TacviewStats
{
    public function onHit(array $event, string $id): void
    {
        $this->weaponOwners[$id] = [
            'pilot' => $event["PrimaryObject"]["Pilot"],
            'group' => isset($event["PrimaryObject"]["Group"]) ? $event["PrimaryObject"]["Group"] : "Unknown",
        ];
        $this->stats[$id]["Group"]    = isset($event["SecondaryObject"]["Group"]) ? $event["SecondaryObject"]["Group"] : "Unknown";
    }
}
"#;

/// A working directory holding `public/tacview.php`
fn workspace(contents: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("public")).unwrap();
    fs::write(temp.path().join("public/tacview.php"), contents).unwrap();
    temp
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fix-group-keys"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .output()
        .unwrap()
}

fn target(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join("public/tacview.php")).unwrap()
}

#[test]
fn test_default_run_patches_tacview() {
    let dir = workspace(UNGUARDED);
    // An empty config stops the upward search at the temp dir and keeps
    // every built-in default.
    fs::write(dir.path().join(".groupfix.toml"), "").unwrap();

    let output = run(dir.path(), &[]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), format!("{}\n", CONFIRMATION));
    assert_eq!(target(&dir), GUARDED);
}

#[test]
fn test_second_run_is_identical() {
    let dir = workspace(UNGUARDED);

    assert!(run(dir.path(), &["--no-config"]).status.success());
    let first = target(&dir);
    assert!(run(dir.path(), &["--no-config"]).status.success());

    assert_eq!(target(&dir), first);
}

#[test]
fn test_no_match_writes_identical_file() {
    let source = "<?php\n$group = $event[\"PrimaryObject\"][\"Group\"] ?? \"Unknown\";\n";
    let dir = workspace(source);

    let output = run(dir.path(), &["--no-config"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains(CONFIRMATION));
    assert_eq!(target(&dir), source);
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    let output = run(dir.path(), &["--no-config"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read file"));
    assert!(stderr.contains("tacview.php"));
    assert!(!dir.path().join("public/tacview.php").exists());
}

#[test]
fn test_invalid_utf8_fails_without_writing() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("public")).unwrap();
    let bytes = b"<?php\n$a = '\xff';\n".to_vec();
    fs::write(dir.path().join("public/tacview.php"), &bytes).unwrap();

    let output = run(dir.path(), &["--no-config"]);

    assert!(!output.status.success());
    assert_eq!(fs::read(dir.path().join("public/tacview.php")).unwrap(), bytes);
}

#[test]
fn test_explicit_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stats.php");
    fs::write(&path, UNGUARDED).unwrap();

    let output = run(dir.path(), &["--no-config", "stats.php"]);

    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&path).unwrap(), GUARDED);
}

#[test]
fn test_check_does_not_write() {
    let dir = workspace(UNGUARDED);

    let output = run(dir.path(), &["--no-config", "--check"]);

    assert_eq!(output.status.code(), Some(2));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("guarded_group_array_item"));
    assert!(stdout.contains("guarded_group_assignment"));
    assert!(!stdout.contains(CONFIRMATION));
    assert_eq!(target(&dir), UNGUARDED);
}

#[test]
fn test_check_clean_file() {
    let dir = workspace(GUARDED);

    let output = run(dir.path(), &["--no-config", "--dry-run"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("No changes needed"));
}

#[test]
fn test_json_output() {
    let dir = workspace(UNGUARDED);

    let output = run(dir.path(), &["--no-config", "--json"]);

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["mode"], "fix");
    assert_eq!(json["written"], true);
    assert_eq!(json["message"], CONFIRMATION);
    assert_eq!(json["edits"].as_array().unwrap().len(), 2);
    assert_eq!(json["edits"][0]["line"], 8);
    assert_eq!(json["edits"][1]["rule"], "guarded_group_assignment");
    assert_eq!(json["edits"][1]["line"], 10);
    assert_eq!(target(&dir), GUARDED);
}

#[test]
fn test_diff_output_in_check_mode() {
    let dir = workspace(UNGUARDED);

    let output = run(dir.path(), &["--no-config", "--check", "--format", "diff"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("--- a/public/tacview.php\n+++ b/public/tacview.php\n"));
    assert!(stdout.contains(r#"-            'group' => $event["PrimaryObject"]["Group"],"#));
    assert!(stdout.contains(r#"+        $this->stats[$id]["Group"]    = isset("#));
    assert_eq!(target(&dir), UNGUARDED);
}

#[test]
fn test_invalid_format() {
    let dir = workspace(UNGUARDED);

    let output = run(dir.path(), &["--no-config", "--format", "xml"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid output format 'xml'"));
    assert_eq!(target(&dir), UNGUARDED);
}

#[test]
fn test_config_file_target_and_skip_unchanged() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("web")).unwrap();
    fs::write(dir.path().join("web/stats.php"), UNGUARDED).unwrap();
    fs::write(
        dir.path().join(".groupfix.toml"),
        "[target]\npath = \"web/stats.php\"\n\n[write]\nskip_unchanged = true\n",
    )
    .unwrap();

    let output = run(dir.path(), &["--verbose"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Using config"));
    assert!(stdout.trim_end().ends_with(CONFIRMATION));
    assert_eq!(fs::read_to_string(dir.path().join("web/stats.php")).unwrap(), GUARDED);

    let output = run(dir.path(), &["--verbose"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("file left untouched"));
}

#[test]
fn test_list_rules_as_json() {
    let dir = TempDir::new().unwrap();

    let output = run(dir.path(), &["--no-config", "--list-rules", "--json"]);

    assert!(output.status.success());
    let rules: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rules = rules.as_array().unwrap();
    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0]["name"], "guarded_group_array_item");
    assert_eq!(rules[1]["name"], "guarded_group_assignment");
    assert!(!rules[1]["description"].as_str().unwrap().is_empty());
}

#[test]
fn test_unspaced_assignment_left_alone() {
    let source = "<?php\n$this->stats[$id][\"Group\"]=$event[\"Bar\"][\"Group\"];\n";
    let dir = workspace(source);

    assert!(run(dir.path(), &["--no-config"]).status.success());
    assert_eq!(target(&dir), source);
}

#[test]
fn test_list_rules() {
    let dir = TempDir::new().unwrap();

    let output = run(dir.path(), &["--no-config", "--list-rules"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("guarded_group_array_item"));
    assert!(stdout.contains("guarded_group_assignment"));
}
