#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("shiftroster-cli").unwrap()
}

#[test]
fn generate_prints_schedule_and_writes_outputs() {
    let dir = tempdir().unwrap();
    let out_dir = dir.path().join("sheets");
    let out_json = dir.path().join("roster.json");

    cli()
        .args([
            "generate",
            "--shift",
            "Day | 09:00-17:00 | 1 | WFO",
            "--people",
            "ana,ben,chloe",
            "--start",
            "2025-01-06",
            "--end",
            "2025-01-07",
            "--seed",
            "7",
        ])
        .arg("--out-dir")
        .arg(&out_dir)
        .arg("--out-json")
        .arg(&out_json)
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-01-06 | Day (09:00-17:00) | WFO |"))
        .stdout(predicate::str::contains("2025-01-07 | Day (09:00-17:00) | WFO |"));

    assert!(out_dir.join("shift_schedule.csv").exists());
    assert!(out_dir.join("summary_stats.csv").exists());
    assert!(out_dir.join("shift_info.csv").exists());
    let json = fs::read_to_string(out_json).unwrap();
    assert!(json.contains("\"assignments\""));
}

#[test]
fn seeded_runs_are_identical() {
    let args = [
        "generate",
        "--people",
        "a,b,c,d,e,f,g,h,i,j,k,l",
        "--start",
        "2025-01-06",
        "--end",
        "2025-01-19",
        "--seed",
        "123",
    ];
    let first = cli().args(args).output().unwrap();
    let second = cli().args(args).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn underfilled_shift_exits_with_warning_code() {
    cli()
        .args([
            "generate",
            "--shift",
            "Pair | 09:00-17:00 | 2 | WFH",
            "--people",
            "solo",
            "--start",
            "2025-01-06",
            "--end",
            "2025-01-06",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("under-filled (1/2)"));
}

#[test]
fn generate_without_people_fails() {
    cli()
        .args(["generate", "--start", "2025-01-06", "--end", "2025-01-06"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no people given"));
}

#[test]
fn generate_from_request_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("request.json");
    fs::write(
        &path,
        r#"{"shifts": "Desk | 08:00-16:00 | 1 | WFO", "start": "2025-02-03", "end": "2025-02-04", "people": ["ana", "ben"], "seed": 1}"#,
    )
    .unwrap();

    cli()
        .arg("generate")
        .arg("--request")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-02-04 | Desk (08:00-16:00)"));
}

#[test]
fn validate_reports_each_bad_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shifts.txt");
    fs::write(&path, "Ok | 09-17 | 1 | WFO\nbad\nAlso | 09-17 | many | WFH\n").unwrap();

    cli()
        .arg("validate")
        .arg("--shifts-file")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error parsing line 2: 'bad'"))
        .stderr(predicate::str::contains("line 3:"));
}

#[test]
fn validate_default_catalog() {
    cli()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: 4 shift(s)"));
}

#[test]
fn validate_missing_file_names_the_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.txt");

    cli()
        .arg("validate")
        .arg("--shifts-file")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.txt"));
}
