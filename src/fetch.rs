use anyhow::Result;

use crate::jira_api::JiraApi;
use crate::model::IssueRecord;

/// Fixed page size for the search endpoint.
pub const PAGE_SIZE: i64 = 50;

/// Retrieve every issue matching `jql`, page by page.
///
/// The offset advances by the number of records actually returned and the
/// reported total is re-read from each response. A response without an
/// `issues` array means end-of-data; so does an empty page, which otherwise
/// could never satisfy the total.
pub fn fetch_issues(api: &dyn JiraApi, jql: &str, fields: &[String]) -> Result<Vec<IssueRecord>> {
  let field_list = fields.join(",");
  let mut all: Vec<IssueRecord> = Vec::new();
  let mut start_at: i64 = 0;
  let mut total: i64 = 0;

  loop {
    let page = api.search(jql, start_at, PAGE_SIZE, &field_list)?;

    let Some(issues) = page.issues else { break };

    total = page.total.unwrap_or(total);
    start_at += issues.len() as i64;
    let got = issues.len();
    all.extend(issues);

    eprintln!("[jira] fetched {}/{} issues", all.len(), total);

    if got == 0 || (all.len() as i64) >= total {
      break;
    }
  }

  Ok(all)
}
