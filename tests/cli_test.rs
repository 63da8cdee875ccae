use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn pairsum(args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_pairsum"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?)
}

fn pairsum_batch(args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_pairsum-batch"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn demo_config() -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("demos/textbook.toml")
        .to_string_lossy()
        .to_string()
}

#[test]
fn test_pairsum_prints_true() -> Result<()> {
    let output = pairsum(&["17", "10,15,3,7"])?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "true\n");
    Ok(())
}

#[test]
fn test_pairsum_prints_false_for_lone_half() -> Result<()> {
    let output = pairsum(&["6", "15,4,11,3,-10,12,7,27"])?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "false\n");
    Ok(())
}

#[test]
fn test_pairsum_accepts_negative_arguments() -> Result<()> {
    let output = pairsum(&["-4", "-1,-3"])?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "true\n");
    Ok(())
}

#[test]
fn test_pairsum_lists_pairs() -> Result<()> {
    let output = pairsum(&["--pairs", "6", "3,1,3"])?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "true\n0,2: 3 + 3\n");
    Ok(())
}

#[test]
fn test_pairsum_rejects_malformed_token() -> Result<()> {
    let output = pairsum(&["6", "3,x"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("'x'"));

    let output = pairsum(&["six", "3,3"])?;
    assert_eq!(output.status.code(), Some(1));
    Ok(())
}

#[test]
fn test_batch_runs_demo_file() -> Result<()> {
    let config = demo_config();
    let output = pairsum_batch(&["--config", &config])?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "six needs two threes: false\nseventeen: true\nclassic list: true\neven match count: true\n"
    );
    Ok(())
}

#[test]
fn test_batch_exits_2_on_expectation_mismatch() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(
        br#"
[batch]
name = "wrong"

[[query]]
name = "self pairing"
target = 6
values = [3]
expect = true
"#,
    )?;

    let path = file.path().to_string_lossy().to_string();
    let output = pairsum_batch(&["--config", &path])?;
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "self pairing: false (expected true)\n");
    Ok(())
}

#[test]
fn test_batch_exits_3_on_missing_file() -> Result<()> {
    let output = pairsum_batch(&["--config", "/definitely/not/here/pairsum.toml"])?;
    assert_eq!(output.status.code(), Some(3));
    assert!(stdout(&output).is_empty());
    Ok(())
}

#[test]
fn test_batch_dry_run_lists_without_evaluating() -> Result<()> {
    let config = demo_config();
    let output = pairsum_batch(&["--config", &config, "--dry-run"])?;
    assert_eq!(output.status.code(), Some(0));

    let text = stdout(&output);
    assert!(text.contains("DRY RUN: textbook"));
    assert!(text.contains("  - six needs two threes: target 6 over 8 values (mode: exists)"));
    assert!(text.contains("  - even match count: target 6 over 3 values (mode: even-match-count)"));
    assert!(text
        .lines()
        .all(|line| !line.ends_with(": true") && !line.ends_with(": false")));
    Ok(())
}
