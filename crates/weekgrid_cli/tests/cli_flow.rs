use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn weekgrid(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("weekgrid").unwrap();
    cmd.env("WEEKGRID_DATA_DIR", data_dir)
        .env("WEEKGRID_LOG", "warn");
    cmd
}

#[test]
fn schedule_changes_persist_between_runs() {
    let dir = tempfile::tempdir().unwrap();

    weekgrid(dir.path())
        .args(["activity", "add", "Write", "deep-work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("created Write (Deep Work)"));
    weekgrid(dir.path())
        .args(["slot", "set", "--day", "monday", "--at", "5:45 AM", "Write"])
        .assert()
        .success();

    weekgrid(dir.path())
        .arg("totals")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.25"))
        .stdout(predicate::str::contains("0.036"));
    weekgrid(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("5:45 AM  Write"));
}

#[test]
fn deleting_a_scheduled_activity_fails() {
    let dir = tempfile::tempdir().unwrap();

    weekgrid(dir.path())
        .args(["activity", "add", "Read", "Education"])
        .assert()
        .success();
    weekgrid(dir.path())
        .args(["slot", "set", "--day", "2", "--at", "0", "Read"])
        .assert()
        .success();

    weekgrid(dir.path())
        .args(["activity", "delete", "Read"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("still scheduled"));

    weekgrid(dir.path())
        .args(["slot", "clear", "--day", "wed", "--at", "0"])
        .assert()
        .success();
    weekgrid(dir.path())
        .args(["activity", "delete", "Read"])
        .assert()
        .success();
}

#[test]
fn export_writes_portable_snapshot_that_imports_elsewhere() {
    let source = tempfile::tempdir().unwrap();
    let target = tempfile::tempdir().unwrap();
    let file = source.path().join("week.json");

    weekgrid(source.path())
        .args(["activity", "add", "Chat", "Social"])
        .assert()
        .success();
    weekgrid(source.path())
        .args(["wake", "6:30 AM"])
        .assert()
        .success();
    weekgrid(source.path())
        .args(["export", "--output"])
        .arg(&file)
        .assert()
        .success();

    let text = std::fs::read_to_string(&file).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["optionsByName"]["Chat"], "Social");
    assert_eq!(value["wakeUpAt"], 26);

    weekgrid(target.path())
        .arg("import")
        .arg(&file)
        .assert()
        .success();
    weekgrid(target.path())
        .args(["activity", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chat\tSocial"));
}

#[test]
fn unknown_category_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    weekgrid(dir.path())
        .args(["activity", "add", "Nap", "Sleeping"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category"));
}
