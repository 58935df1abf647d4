// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Isolated Jira REST helpers behind a trait seam (basic-auth search calls, env-backed fixtures)
// role: api/jira
// inputs: Config (base URL, identity email + API token); env JAR_TEST_* fixtures for offline runs
// outputs: Typed SearchPage values for the fetcher
// side_effects: Network calls to the configured Jira instance
// invariants:
// - One fixed credential pair per run; no session or token refresh
// - Non-2xx responses surface the server's errorMessages when the body is JSON
// - Env fixtures slice per startAt/maxResults so pagination is exercised for real
// errors: Fatal; propagated to the orchestrator, never handled here
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::{Context, Result, bail};
use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::config::Config;
use crate::ext::serde_json::JsonFetch;
use crate::model::SearchPage;

// --- Trait seam for the Jira search endpoint ---
pub trait JiraApi {
  fn search(&self, jql: &str, start_at: i64, max_results: i64, fields: &str) -> Result<SearchPage>;
}

/// Pull a human-readable detail out of a Jira error body. Jira wraps errors as
/// `{"errorMessages": [...], "errors": {...}}`; fall back to the raw body.
fn error_detail(body: &str) -> String {
  if let Ok(v) = serde_json::from_str::<serde_json::Value>(body) {
    let messages: Vec<String> = v.fetch("errorMessages").to_or_default();

    if !messages.is_empty() {
      return messages.join("; ");
    }
  }

  let trimmed = body.trim();

  if trimmed.is_empty() {
    "(no error body)".to_string()
  } else {
    trimmed.to_string()
  }
}

pub struct JiraHttpApi {
  agent: ureq::Agent,
  base_url: String,
  email: String,
  api_token: String,
}

impl JiraHttpApi {
  pub fn new(cfg: &Config) -> Self {
    Self {
      agent: ureq::AgentBuilder::new().build(),
      base_url: cfg.base_url.clone(),
      email: cfg.email.clone(),
      api_token: cfg.api_token.clone(),
    }
  }

  fn basic_credentials(&self) -> String {
    STANDARD.encode(format!("{}:{}", self.email, self.api_token))
  }
}

impl JiraApi for JiraHttpApi {
  fn search(&self, jql: &str, start_at: i64, max_results: i64, fields: &str) -> Result<SearchPage> {
    let url = format!("{}/rest/api/2/search", self.base_url);

    let resp = self
      .agent
      .get(&url)
      .query("jql", jql)
      .query("startAt", &start_at.to_string())
      .query("maxResults", &max_results.to_string())
      .query("fields", fields)
      .set("Authorization", &format!("Basic {}", self.basic_credentials()))
      .set("Accept", "application/json")
      .call();

    match resp {
      Ok(r) => r
        .into_json::<SearchPage>()
        .context("decoding Jira search response"),
      Err(ureq::Error::Status(code, r)) => {
        let body = r.into_string().unwrap_or_default();
        bail!("Jira API error: HTTP {}: {}", code, error_detail(&body))
      }
      Err(e) => Err(e).with_context(|| format!("requesting {}", url)),
    }
  }
}

/// Env-backed stand-in used by integration tests: issue fixtures come from
/// `JAR_TEST_ISSUES_JSON` (a map of JQL → full issue array, or one flat array
/// served for every query) and `JAR_TEST_FAIL_STATUS` forces an API failure.
pub struct JiraEnvApi;

impl JiraEnvApi {
  fn fixture_issues(jql: &str) -> Result<Vec<serde_json::Value>> {
    let raw = std::env::var("JAR_TEST_ISSUES_JSON").unwrap_or_else(|_| "[]".to_string());
    let v: serde_json::Value = serde_json::from_str(&raw).context("parsing JAR_TEST_ISSUES_JSON")?;

    let arr = match &v {
      serde_json::Value::Object(map) => map.get(jql).and_then(|a| a.as_array()).cloned().unwrap_or_default(),
      serde_json::Value::Array(a) => a.clone(),
      _ => bail!("JAR_TEST_ISSUES_JSON must be a JSON array or an object keyed by JQL"),
    };

    Ok(arr)
  }
}

impl JiraApi for JiraEnvApi {
  fn search(&self, jql: &str, start_at: i64, max_results: i64, _fields: &str) -> Result<SearchPage> {
    if let Ok(status) = std::env::var("JAR_TEST_FAIL_STATUS") {
      bail!("Jira API error: HTTP {}: {}", status, error_detail(r#"{"errorMessages":["simulated failure"]}"#));
    }

    let all = Self::fixture_issues(jql)?;
    let total = all.len() as i64;
    let from = start_at.max(0).min(total) as usize;
    let to = (start_at + max_results).max(0).min(total) as usize;

    let issues = all[from..to]
      .iter()
      .map(|v| serde_json::from_value(v.clone()).context("decoding fixture issue"))
      .collect::<Result<Vec<_>>>()?;

    Ok(SearchPage {
      issues: Some(issues),
      total: Some(total),
    })
  }
}

fn env_wants_mock() -> bool {
  std::env::var("JAR_TEST_ISSUES_JSON").is_ok() || std::env::var("JAR_TEST_FAIL_STATUS").is_ok()
}

pub fn make_api(cfg: &Config) -> Box<dyn JiraApi> {
  if env_wants_mock() {
    Box::new(JiraEnvApi)
  } else {
    Box::new(JiraHttpApi::new(cfg))
  }
}
