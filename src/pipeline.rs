// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Orchestrate the run: define the three saved searches, drive fetch→aggregate per query, render once
// role: processing/orchestrator
// inputs: Config (identity, project, QA field), JiraApi handle
// outputs: Summary JSON and HTML report in the working directory; progress lines on stderr
// side_effects: Network via the fetcher; file writes via the renderer
// invariants:
// - Queries run strictly in definition order; a query's pagination completes before the next starts
// - Sections reach the renderer in query-definition order
// - First failure aborts the whole run; no partial retry
// errors: Propagated to main, which exits nonzero
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::path::Path;

use anyhow::{Context, Result};

use crate::aggregate::aggregate;
use crate::config::Config;
use crate::fetch::fetch_issues;
use crate::jira_api::JiraApi;
use crate::model::{Query, SectionSummary};
use crate::render;

const TEMPLATE_PATH: &str = "report_template.html";
const SUMMARY_PATH: &str = "jira_issues_summary.json";
const REPORTS_DIR: &str = "reports";

/// The three saved searches, bound to the configured project and identity.
pub fn queries(cfg: &Config) -> Vec<Query> {
  vec![
    Query {
      title: "Tickets created".to_string(),
      jql: format!(r#"project = {} AND reporter in ("{}")"#, cfg.project, cfg.email),
    },
    Query {
      title: "Bugs created".to_string(),
      jql: format!(
        r#"project = {} AND issuetype in (Bug, "Acceptance bug") AND reporter in ("{}")"#,
        cfg.project, cfg.email
      ),
    },
    Query {
      title: "Worked as QA".to_string(),
      jql: format!(r#"project = {} AND "QA Engineer" in ("{}")"#, cfg.project, cfg.email),
    },
  ]
}

pub fn run(cfg: &Config, api: &dyn JiraApi) -> Result<()> {
  let fields = cfg.search_fields();
  let mut sections: Vec<SectionSummary> = Vec::new();

  for query in queries(cfg) {
    eprintln!("[jira] query: {}", query.title);
    let issues = fetch_issues(api, &query.jql, &fields)?;
    sections.push(aggregate(&query.title, &issues));
  }

  // Dump the aggregate before rendering so it survives a template failure.
  render::write_summary(&sections, Path::new(SUMMARY_PATH))?;

  let template = std::fs::read_to_string(TEMPLATE_PATH)
    .with_context(|| format!("reading template {}", TEMPLATE_PATH))?;
  let html = render::render_report(&template, &sections, &cfg.user_name)?;
  render::write_report(&html, Path::new(REPORTS_DIR), &cfg.email)?;

  Ok(())
}
