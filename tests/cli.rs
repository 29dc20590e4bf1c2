#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FAJR_IN_CONGREGATION: &str = r#"{
  "date": "2024-03-11",
  "prayers": {
    "fajr": { "performed": true, "in_congregation": true, "presence": 2 }
  }
}"#;

fn ibadah(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ibadah").expect("binary should compile");
    cmd.arg("--config").arg(config);
    cmd
}

fn write_record(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).expect("record should write");
    path
}

#[test]
fn score_prints_total_against_target() {
    let dir = TempDir::new().expect("temp dir should be created");
    let record = write_record(dir.path(), "day.json", FAJR_IN_CONGREGATION);

    ibadah(&dir.path().join("config.toml"))
        .arg("score")
        .arg(&record)
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 2700 / 15000"))
        .stdout(predicate::str::contains("18%"));
}

#[test]
fn score_json_applies_burden() {
    let dir = TempDir::new().expect("temp dir should be created");
    let record = write_record(
        dir.path(),
        "day.json",
        r#"{
  "date": "2024-03-11",
  "prayers": { "fajr": { "performed": true, "in_congregation": true, "presence": 2 } },
  "struggle": 1.1,
  "has_burden": true
}"#,
    );

    ibadah(&dir.path().join("config.toml"))
        .arg("score")
        .arg(&record)
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"score\": 1890"))
        .stdout(predicate::str::contains("\"modifier\": \"burden\""));
}

#[test]
fn score_rejects_unknown_struggle_factor() {
    let dir = TempDir::new().expect("temp dir should be created");
    let record = write_record(
        dir.path(),
        "day.json",
        r#"{ "date": "2024-03-11", "struggle": 2.0 }"#,
    );

    ibadah(&dir.path().join("config.toml"))
        .arg("score")
        .arg(&record)
        .assert()
        .failure()
        .stderr(predicate::str::contains("parsing record"));
}

#[test]
fn custom_deed_counts_until_removed() {
    let dir = TempDir::new().expect("temp dir should be created");
    let config = dir.path().join("config.toml");
    let record = write_record(
        dir.path(),
        "day.json",
        r#"{ "date": "2024-03-11", "custom_deed_ids": ["charity"] }"#,
    );

    ibadah(&config)
        .args(["deed", "add", "charity", "Gave charity", "300"])
        .assert()
        .success();
    ibadah(&config)
        .args(["score", "--json"])
        .arg(&record)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"score\": 300"));

    ibadah(&config)
        .args(["deed", "remove", "charity"])
        .assert()
        .success();
    ibadah(&config)
        .args(["score", "--json"])
        .arg(&record)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"score\": 0"));

    ibadah(&config)
        .args(["deed", "remove", "charity"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn history_reports_streak_and_badges() {
    let dir = TempDir::new().expect("temp dir should be created");
    let config = dir.path().join("config.toml");
    let records = dir.path().join("records");
    fs::create_dir(&records).unwrap();
    for day in 11..=13 {
        write_record(
            &records,
            &format!("2024-03-{}.json", day),
            &format!(r#"{{ "date": "2024-03-{}", "voluntary": {{ "fasting": true }} }}"#, day),
        );
    }

    ibadah(&config).args(["target", "1000"]).assert().success();

    ibadah(&config)
        .arg("history")
        .arg(&records)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 days current"))
        .stdout(predicate::str::contains("Fasting Day"));

    ibadah(&config)
        .arg("history")
        .arg(&records)
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"days_meeting_target\": 3"));
}

#[test]
fn template_prints_empty_record() {
    let dir = TempDir::new().expect("temp dir should be created");
    ibadah(&dir.path().join("config.toml"))
        .args(["template", "--date", "2024-03-11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"date\": \"2024-03-11\""))
        .stdout(predicate::str::contains("\"struggle\": 1.0"));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let dir = TempDir::new().expect("temp dir should be created");
    let config = dir.path().join("config.toml");

    ibadah(&config).args(["config", "init"]).assert().success();
    assert!(config.exists());

    ibadah(&config)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    ibadah(&config)
        .args(["config", "init", "--force"])
        .assert()
        .success();

    ibadah(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fard_congregation = 2700.0"));
}

#[test]
fn target_must_be_positive() {
    let dir = TempDir::new().expect("temp dir should be created");
    ibadah(&dir.path().join("config.toml"))
        .args(["target", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive"));
}
