use std::io::Write;
use std::process::{Command, Stdio};

fn cargo_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO"));
    cmd.args(["run", "--quiet", "--"]);
    cmd
}

#[test]
fn test_cli_no_subcommand_shows_help() {
    let output = cargo_bin().output().unwrap();
    // clap exits with error when no subcommand is provided
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Usage") || stderr.contains("chat-script"),
        "Expected usage info, got: {stderr}"
    );
}

#[test]
fn test_cli_check_reports_counts() {
    let output = cargo_bin()
        .args(["check", "demos/hashing.chat"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("is valid: 8 messages, 5 speakers"), "got: {stdout}");
    assert!(stdout.contains("Title: Hash Functions in the Club Room"));
}

#[test]
fn test_cli_check_missing_file_errors() {
    let output = cargo_bin()
        .args(["check", "nonexistent.chat"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nonexistent.chat"), "got: {stderr}");
}

#[test]
fn test_cli_show_prints_transcript() {
    let output = cargo_bin()
        .args(["show", "demos/hashing.chat"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("=== Hash Functions in the Club Room ==="));
    assert!(stdout.contains("--- 1 Narrator [N] #64748b"));
    assert!(stdout.contains("Chitanda [C] #06b6d4 /chitanda.jpg"));
    assert!(stdout.contains("  | Something like $h(x) = x \\bmod m$."));
    assert!(stdout.contains("Oreki (#10b981) 2 turns"));
}

#[test]
fn test_cli_parse_outputs_json() {
    let output = cargo_bin()
        .args(["parse", "demos/hashing.chat"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let messages: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let messages = messages.as_array().unwrap();
    assert_eq!(messages.len(), 8);
    assert_eq!(messages[0]["name"], "Narrator");
    assert!(messages[0].get("avatar").is_none());
    assert_eq!(messages[1]["avatar"], "/chitanda.jpg");
    assert_eq!(messages[7]["message"], "I see!");
    let probability = messages[6]["message"].as_str().unwrap();
    assert!(probability.contains("$n$"));
    assert!(probability.contains("$$\n1 - e^{-n^2 / 2m}\n$$"));
}

#[test]
fn test_cli_parse_reads_stdin() {
    let mut child = cargo_bin()
        .args(["parse", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"Alice: hi\nBob: yo\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let messages: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(messages[0]["name"], "Alice");
    assert_eq!(messages[1]["message"], "yo");
}

#[test]
fn test_cli_roster_override() {
    let output = cargo_bin()
        .args([
            "show",
            "--roster",
            "demos/roster.json",
            "demos/narration.chat",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Narrator [N] #333333"));
    assert!(stdout.contains("Holmes [H]"));
    assert!(stdout.contains("/holmes.png"));
}

#[test]
fn test_cli_invalid_roster_errors() {
    let output = cargo_bin()
        .args(["check", "--roster", "demos/hashing.chat", "demos/hashing.chat"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid roster JSON"), "got: {stderr}");
}

#[test]
fn test_cli_speaker_identity() {
    let output = cargo_bin()
        .args(["speaker", "mayaka", "dr watson"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let identities: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(identities[0]["name"], "Mayaka");
    assert_eq!(identities[0]["color"], "#8b5cf6");
    assert_eq!(identities[0]["avatar"], "/mayaka.jpg");
    assert_eq!(identities[1]["name"], "Dr Watson");
    assert_eq!(identities[1]["initials"], "DW");
}
