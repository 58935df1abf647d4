mod common;

use predicates::prelude::*;

#[test]
fn simulated_401_exits_nonzero_with_no_artifacts() {
  let dir = common::workdir();

  common::base_cmd(dir.path())
    .env("JAR_TEST_FAIL_STATUS", "401")
    .assert()
    .failure()
    .stderr(predicate::str::contains("HTTP 401"));

  assert!(!dir.path().join("jira_issues_summary.json").exists());
  assert!(!dir.path().join("reports").exists());
}

#[test]
fn missing_identity_config_is_fatal_at_startup() {
  let dir = common::workdir();

  let mut cmd = assert_cmd::Command::cargo_bin("jira-activity-report").unwrap();
  cmd
    .current_dir(dir.path())
    .env_clear()
    .env("JIRA_BASE_URL", "https://example.atlassian.net")
    .env("JAR_TEST_ISSUES_JSON", "{}")
    .assert()
    .failure()
    .stderr(predicate::str::contains("JIRA_EMAIL"));

  assert!(!dir.path().join("jira_issues_summary.json").exists());
}

#[test]
fn missing_template_fails_after_summary_dump() {
  // No report_template.html seeded in this working directory.
  let dir = tempfile::TempDir::new().unwrap();

  common::base_cmd(dir.path())
    .env("JAR_TEST_ISSUES_JSON", "{}")
    .assert()
    .failure()
    .stderr(predicate::str::contains("report_template.html"));

  // The inspection dump is written before the template is read.
  assert!(dir.path().join("jira_issues_summary.json").exists());
  assert!(!dir.path().join("reports").exists());
}

#[test]
fn template_without_markers_is_an_error() {
  let dir = tempfile::TempDir::new().unwrap();
  std::fs::write(dir.path().join("report_template.html"), "<html>static</html>").unwrap();

  common::base_cmd(dir.path())
    .env("JAR_TEST_ISSUES_JSON", "{}")
    .assert()
    .failure()
    .stderr(predicate::str::contains("__CHART_DATA__"));

  assert!(!dir.path().join("reports").exists());
}
