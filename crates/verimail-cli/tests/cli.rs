use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Output;
use tempfile::TempDir;

fn run_raw(config_home: &Path, args: &[&str], stdin: Option<&str>) -> Output {
    let mut cmd = cargo_bin_cmd!("verimail");
    cmd.env("XDG_CONFIG_HOME", config_home).args(args);
    if let Some(input) = stdin {
        cmd.write_stdin(input);
    }
    cmd.output().expect("run command")
}

fn run_cmd(config_home: &Path, args: &[&str]) -> String {
    let output = run_raw(config_home, args, None);
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn run_cmd_json(config_home: &Path, args: &[&str]) -> Value {
    let args = [&["--json"][..], args].concat();
    let output = run_raw(config_home, &args, None);
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

#[test]
fn cli_verify_reports_in_input_order() {
    let temp = TempDir::new().expect("temp dir");

    let report = run_cmd_json(temp.path(), &["verify", "good@x.com", "bad"]);
    let results = report["results"].as_array().expect("array");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["candidate"], "good@x.com");
    assert_eq!(results[0]["valid"], true);
    assert_eq!(results[0]["status"], "valid");
    assert_eq!(results[0]["message"], "Email format is valid");
    assert_eq!(results[1]["candidate"], "bad");
    assert_eq!(results[1]["valid"], false);
    assert_eq!(results[1]["message"], "Invalid email format");
    assert_eq!(report["summary"]["total"], 2);
    assert_eq!(report["summary"]["valid"], 1);
    assert_eq!(report["summary"]["invalid"], 1);
}

#[test]
fn cli_verify_text_output_with_summary() {
    let temp = TempDir::new().expect("temp dir");
    let stdout = run_cmd(temp.path(), &["verify", "a@b.com, c@d.org; a@b.c"]);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "valid    a@b.com  Email format is valid",
            "valid    c@d.org  Email format is valid",
            "invalid  a@b.c  Invalid email format",
            "3 checked, 2 valid, 1 invalid",
        ]
    );
}

#[test]
fn cli_verify_reads_stdin() {
    let temp = TempDir::new().expect("temp dir");
    let output = run_raw(
        temp.path(),
        &["verify", "--no-summary", "--invalid-only"],
        Some("ada@example.com\nuser@@example.com\n"),
    );
    assert!(output.status.success(), "command failed: {:?}", output);
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert_eq!(stdout, "invalid  user@@example.com  Invalid email format\n");
}

#[test]
fn cli_verify_blank_input() {
    let temp = TempDir::new().expect("temp dir");
    let output = run_raw(temp.path(), &["--json", "verify"], Some("   \n"));
    assert!(output.status.success(), "command failed: {:?}", output);
    let report: Value = serde_json::from_slice(&output.stdout).expect("parse json");
    assert_eq!(report["results"].as_array().expect("array").len(), 0);
    assert_eq!(report["summary"]["total"], 0);
}

#[test]
fn cli_verify_reads_csv_file() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("leads.csv");
    fs::write(&path, "ada@example.com,grace@example.org\nnot-an-email\n").expect("write");

    let report = run_cmd_json(
        temp.path(),
        &["verify", "--file", path.to_str().expect("path")],
    );
    assert_eq!(report["summary"]["total"], 3);
    assert_eq!(report["summary"]["valid"], 2);
}

#[test]
fn cli_verify_reads_csv_with_byte_order_mark() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("export.csv");
    fs::write(&path, "\u{FEFF}ada@example.com\r\ngrace@example.org\r\n").expect("write");
    let path = path.to_str().expect("path");

    let report = run_cmd_json(temp.path(), &["verify", "--file", path]);
    let results = report["results"].as_array().expect("array");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["candidate"], "ada@example.com");
    assert_eq!(results[0]["valid"], true);
    assert_eq!(report["summary"]["valid"], 2);

    let gate = run_cmd_json(temp.path(), &["check", "--file", path]);
    assert_eq!(gate["has_valid"], true);
}

#[test]
fn cli_verify_rejects_spreadsheet_file() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("leads.xlsx");
    fs::write(&path, "PK").expect("write");

    let output = run_raw(
        temp.path(),
        &["verify", "--file", path.to_str().expect("path")],
        None,
    );
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn cli_check_gates_on_valid_address() {
    let temp = TempDir::new().expect("temp dir");

    let gate = run_cmd_json(temp.path(), &["check", "bad", "good@x.com"]);
    assert_eq!(gate["has_valid"], true);

    let output = run_raw(temp.path(), &["check", "bad", "a@b.c"], None);
    assert_eq!(output.status.code(), Some(4));
    assert_eq!(String::from_utf8(output.stdout.clone()).expect("utf8"), "no\n");
    assert!(output.stderr.is_empty(), "unexpected stderr: {:?}", output);
}

#[test]
fn cli_tokenize_lists_candidates() {
    let temp = TempDir::new().expect("temp dir");
    let stdout = run_cmd(temp.path(), &["tokenize", " a@b.com,,c@d.org ; e@f.net "]);
    assert_eq!(stdout, "a@b.com\nc@d.org\ne@f.net\n");

    let tokens = run_cmd_json(temp.path(), &["tokenize", "x;y"]);
    assert_eq!(tokens, serde_json::json!(["x", "y"]));
}

#[test]
fn cli_config_disables_summary() {
    let temp = TempDir::new().expect("temp dir");
    let dir = temp.path().join("verimail");
    fs::create_dir_all(&dir).expect("mkdir");
    fs::write(dir.join("config.toml"), "[output]\nsummary = false\n").expect("write config");

    let stdout = run_cmd(temp.path(), &["verify", "ada@example.com"]);
    assert_eq!(stdout, "valid    ada@example.com  Email format is valid\n");
}

#[test]
fn cli_missing_explicit_config_is_invalid_input() {
    let temp = TempDir::new().expect("temp dir");
    let missing = temp.path().join("missing.toml");
    let output = run_raw(
        temp.path(),
        &[
            "--config",
            missing.to_str().expect("path"),
            "verify",
            "ada@example.com",
        ],
        None,
    );
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.starts_with("error: "));
}
