use std::path::Path;

use assert_cmd::Command;

pub const TEMPLATE: &str = "<html><script>\nconst chartData = __CHART_DATA__;\nconst userName = __USER_NAME__;\n</script></html>";

/// Working directory for one run, seeded with a usable template.
#[allow(dead_code)]
pub fn workdir() -> tempfile::TempDir {
  let dir = tempfile::TempDir::new().unwrap();
  std::fs::write(dir.path().join("report_template.html"), TEMPLATE).unwrap();
  dir
}

/// Binary invocation with a clean environment and the usual identity config.
/// Fixture variables (JAR_TEST_*) are layered on by each test.
pub fn base_cmd(workdir: &Path) -> Command {
  let mut cmd = Command::cargo_bin("jira-activity-report").unwrap();

  cmd
    .current_dir(workdir)
    .env_clear()
    .env("JIRA_BASE_URL", "https://example.atlassian.net")
    .env("JIRA_EMAIL", "a.b@example.com")
    .env("JIRA_API_TOKEN", "t0ken")
    .env("JIRA_QA_ENGINEER_FIELD", "customfield_10234")
    .env("JIRA_USER", "Jane Doe");

  cmd
}

#[allow(dead_code)]
pub fn summary_json(workdir: &Path) -> serde_json::Value {
  let raw = std::fs::read_to_string(workdir.join("jira_issues_summary.json")).unwrap();
  serde_json::from_str(&raw).unwrap()
}
