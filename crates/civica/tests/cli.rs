use assert_cmd::prelude::*;

use predicates::prelude::*;
use predicates::str::contains;
use std::process::Command;

/// Helper to create a Command for the `civica` binary with a temporary database.
fn civica_cmd(dir: &assert_fs::TempDir) -> Command {
  let mut cmd = Command::cargo_bin("civica").expect("binary exists");
  cmd.env("CIVICA_DB", dir.path().join("civica.db"));
  cmd
}

#[test]
fn test_seed_list_events_and_categories() {
  let temp = assert_fs::TempDir::new().unwrap();

  civica_cmd(&temp)
    .args(["seed"])
    .assert()
    .success()
    .stdout(contains("Seeded 10 event(s) and 5 issue(s)"));

  // Seeding again must not duplicate anything
  civica_cmd(&temp)
    .args(["seed"])
    .assert()
    .success()
    .stdout(contains("Seeded 0 event(s) and 0 issue(s)"));

  civica_cmd(&temp)
    .args(["events"])
    .assert()
    .success()
    .stdout(contains("Heritage Festival").and(contains("Community Meeting")));

  civica_cmd(&temp)
    .args(["categories"])
    .assert()
    .success()
    .stdout(contains("Community").and(contains("Culture")).and(contains("Sports")));

  temp.close().unwrap();
}

#[test]
fn test_report_issue_and_listing() {
  let temp = assert_fs::TempDir::new().unwrap();

  civica_cmd(&temp)
    .args(["report-issue", "Main Street", "Roads", "Deep pothole near the crossing"])
    .assert()
    .success()
    .stdout(contains("Issue reported").and(contains("Total issues on record: 1")));

  civica_cmd(&temp)
    .args(["issues"])
    .assert()
    .success()
    .stdout(contains("Main Street").and(contains("Deep pothole")));

  temp.close().unwrap();
}

#[test]
fn test_report_issue_rejects_missing_fields() {
  let temp = assert_fs::TempDir::new().unwrap();

  civica_cmd(&temp)
    .args(["report-issue", "", "Roads", "Pothole"])
    .assert()
    .failure()
    .stderr(contains("location"));

  // Nothing was persisted
  civica_cmd(&temp).args(["issues"]).assert().success().stdout(contains("No issues reported"));

  temp.close().unwrap();
}

#[test]
fn test_report_issue_rejects_disallowed_attachment() {
  let temp = assert_fs::TempDir::new().unwrap();

  let attachment = temp.path().join("payload.exe");
  std::fs::write(&attachment, b"binary").unwrap();

  civica_cmd(&temp)
    .args([
      "report-issue",
      "Main Street",
      "Roads",
      "Pothole",
      "--attachment",
      attachment.to_str().unwrap(),
    ])
    .assert()
    .failure()
    .stderr(contains("not allowed"));

  temp.close().unwrap();
}

#[test]
fn test_search_feeds_analytics_and_recommendations() {
  let temp = assert_fs::TempDir::new().unwrap();

  civica_cmd(&temp).args(["seed"]).assert().success();

  civica_cmd(&temp)
    .args(["search", "--category", "Environment"])
    .assert()
    .success()
    .stdout(contains("Clean-up").and(contains("Water Conservation")));

  civica_cmd(&temp)
    .args(["search", "--keyword", "heritage"])
    .assert()
    .success()
    .stdout(contains("Heritage Festival"));

  civica_cmd(&temp)
    .args(["analytics"])
    .assert()
    .success()
    .stdout(
      contains("Total searches:      2")
        .and(contains("Success rate:        100.0%"))
        .and(contains("environment")),
    );

  // The Environment search should bias recommendations toward that category
  civica_cmd(&temp)
    .args(["recommend"])
    .assert()
    .success()
    .stdout(contains("Clean-up"));

  temp.close().unwrap();
}

#[test]
fn test_add_event_and_search_by_date_range() {
  let temp = assert_fs::TempDir::new().unwrap();

  civica_cmd(&temp)
    .args(["add-event", "Lantern Parade", "2031-03-15", "Culture", "Evening lantern parade"])
    .assert()
    .success()
    .stdout(contains("Added event"));

  civica_cmd(&temp)
    .args(["search", "--from", "2031-03-01", "--to", "2031-03-31"])
    .assert()
    .success()
    .stdout(contains("Lantern Parade"));

  civica_cmd(&temp)
    .args(["search", "--from", "2031-04-01"])
    .assert()
    .success()
    .stdout(contains("No events found"));

  temp.close().unwrap();
}

#[test]
fn test_search_with_no_results_reports_gracefully() {
  let temp = assert_fs::TempDir::new().unwrap();

  civica_cmd(&temp)
    .args(["search", "--keyword", "nonexistent"])
    .assert()
    .success()
    .stdout(contains("No events found matching your search criteria"));

  temp.close().unwrap();
}
