mod common;

use common::{SAMPLE_CSV, mvl_isolated, write_file};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_count_files() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "a.csv", "x");
    write_file(dir.path(), "b.csv", "y");
    fs::create_dir(dir.path().join("nested")).unwrap();

    mvl_isolated(dir.path())
        .args(["count", "."])
        .assert()
        .success()
        .stdout(contains("Files found: 2"));
}

#[test]
fn test_count_missing_directory_prints_zero() {
    let dir = tempdir().unwrap();

    mvl_isolated(dir.path())
        .args(["count", "does_not_exist"])
        .assert()
        .success()
        .stdout(contains("Files found: 0"));
}

#[test]
fn test_report_text() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "movements.csv", SAMPLE_CSV);

    mvl_isolated(dir.path())
        .args(["report", "movements.csv", "--dir", ".", "--limit", "2"])
        .assert()
        .success()
        .stdout(contains("Files found: 1"))
        .stdout(contains("Latest 2 movements (by date):"))
        .stdout(contains("Workplace movements:     2"))
        .stdout(contains("2024-01-01 10:00:00").not());
}

#[test]
fn test_report_json() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "movements.csv", SAMPLE_CSV);

    let output = mvl_isolated(dir.path())
        .args(["report", "movements.csv", "--json"])
        .output()
        .expect("run movelog");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json report");
    assert_eq!(json["total"], 3);
    assert_eq!(json["workplace"], 2);
    assert_eq!(json["recent"][0]["id"], 2);
}

#[test]
fn test_report_missing_file_fails() {
    let dir = tempdir().unwrap();

    mvl_isolated(dir.path())
        .args(["report", "ghost.csv"])
        .assert()
        .failure()
        .stderr(contains("CSV file not found"));
}

#[test]
fn test_export_writes_both_files() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "movements.csv", SAMPLE_CSV);

    mvl_isolated(dir.path())
        .args(["export", "movements.csv", "--prefix", "out"])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let all = fs::read_to_string(dir.path().join("out_all.csv")).unwrap();
    let work = fs::read_to_string(dir.path().join("out_work.csv")).unwrap();
    assert_eq!(all.lines().count(), 4);
    assert_eq!(work.lines().count(), 3);
    assert!(work.starts_with("id,timestamp,room\n"));
}

#[test]
fn test_export_refuses_overwrite_without_confirmation() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "movements.csv", SAMPLE_CSV);
    write_file(dir.path(), "result_all.csv", "keep me");

    mvl_isolated(dir.path())
        .args(["export", "movements.csv"])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));

    let kept = fs::read_to_string(dir.path().join("result_all.csv")).unwrap();
    assert_eq!(kept, "keep me");

    mvl_isolated(dir.path())
        .args(["export", "movements.csv", "--force"])
        .assert()
        .success();

    let replaced = fs::read_to_string(dir.path().join("result_all.csv")).unwrap();
    assert!(replaced.starts_with("id,timestamp,is_workplace,room\n"));
}

#[test]
fn test_init_and_custom_columns() {
    let dir = tempdir().unwrap();

    mvl_isolated(dir.path()).arg("init").assert().success();
    let conf = dir.path().join("movelog.conf");
    assert!(conf.is_file());

    fs::write(
        &conf,
        "columns:\n  id: \"№\"\n  timestamp: \"Дата и время\"\n  workplace: \"Рабочее место\"\n  room: \"Комната\"\nreport_limit: 1\n",
    )
    .unwrap();
    write_file(
        dir.path(),
        "ru.csv",
        "№,Дата и время,Рабочее место,Комната\n1,2024-01-01 10:00:00,True,5\n2,2024-01-02 10:00:00,False,4\n",
    );

    mvl_isolated(dir.path())
        .args(["report", "ru.csv", "--json"])
        .assert()
        .success()
        .stdout(contains("\"total\": 2"));

    mvl_isolated(dir.path())
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("report_limit: 1"))
        .stdout(contains("export_prefix: result"));
}

#[test]
fn test_shell_is_default_command() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "movements.csv", SAMPLE_CSV);

    mvl_isolated(dir.path())
        .write_stdin("\n\ny\n")
        .assert()
        .success()
        .stdout(contains("Files found: 1"))
        .stdout(contains("Non-workplace movements: 1"))
        .stdout(contains("Results saved to result_all.csv and result_work.csv"));

    assert!(dir.path().join("result_work.csv").is_file());
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "movelog.conf", "report_limit: [not a number\n");

    mvl_isolated(dir.path())
        .args(["count"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}
