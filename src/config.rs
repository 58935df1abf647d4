use anyhow::{Result, bail};

/// Base field list requested for every search; the QA-engineer custom field
/// is appended when configured.
const BASE_FIELDS: [&str; 5] = ["issuetype", "status", "created", "resolutiondate", "summary"];

/// Resolved once at startup and passed by reference into the fetcher and
/// renderer; nothing reads the environment after this point.
#[derive(Debug, Clone)]
pub struct Config {
  pub base_url: String,
  pub email: String,
  pub api_token: String,
  /// Jira custom field id recording the QA engineer, e.g. "customfield_10234".
  pub qa_engineer_field: Option<String>,
  /// Display name spliced into the report; defaults to empty.
  pub user_name: String,
  /// Project key the three saved searches are scoped to.
  pub project: String,
}

impl Config {
  pub fn from_env() -> Result<Config> {
    let base_url = required("JIRA_BASE_URL")?;
    let email = required("JIRA_EMAIL")?;
    let api_token = required("JIRA_API_TOKEN")?;
    let qa_engineer_field = optional("JIRA_QA_ENGINEER_FIELD");
    let user_name = optional("JIRA_USER").unwrap_or_default();
    let project = optional("JIRA_PROJECT").unwrap_or_else(|| "APP".to_string());

    Ok(Config {
      base_url: base_url.trim_end_matches('/').to_string(),
      email,
      api_token,
      qa_engineer_field,
      user_name,
      project,
    })
  }

  /// Comma-joinable field names for the search endpoint.
  pub fn search_fields(&self) -> Vec<String> {
    let mut fields: Vec<String> = BASE_FIELDS.iter().map(|f| f.to_string()).collect();

    if let Some(qa) = &self.qa_engineer_field {
      if !qa.is_empty() {
        fields.push(qa.clone());
      }
    }

    fields
  }
}

fn required(name: &str) -> Result<String> {
  match optional(name) {
    Some(v) => Ok(v),
    None => bail!("missing required environment variable {name}; check your environment or .env"),
  }
}

fn optional(name: &str) -> Option<String> {
  match std::env::var(name) {
    Ok(v) if !v.trim().is_empty() => Some(v),
    _ => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  fn clear_jira_env() {
    for key in [
      "JIRA_BASE_URL",
      "JIRA_EMAIL",
      "JIRA_API_TOKEN",
      "JIRA_QA_ENGINEER_FIELD",
      "JIRA_USER",
      "JIRA_PROJECT",
    ] {
      std::env::remove_var(key);
    }
  }

  #[test]
  #[serial]
  fn missing_required_var_is_fatal() {
    clear_jira_env();
    std::env::set_var("JIRA_BASE_URL", "https://example.atlassian.net");

    let err = Config::from_env().unwrap_err();
    assert!(format!("{err:#}").contains("JIRA_EMAIL"));
  }

  #[test]
  #[serial]
  fn full_env_resolves_with_defaults() {
    clear_jira_env();
    std::env::set_var("JIRA_BASE_URL", "https://example.atlassian.net/");
    std::env::set_var("JIRA_EMAIL", "qa@example.com");
    std::env::set_var("JIRA_API_TOKEN", "t0ken");

    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg.base_url, "https://example.atlassian.net");
    assert_eq!(cfg.user_name, "");
    assert_eq!(cfg.project, "APP");
    assert_eq!(cfg.search_fields().len(), 5);
  }

  #[test]
  #[serial]
  fn qa_field_extends_search_fields() {
    clear_jira_env();
    std::env::set_var("JIRA_BASE_URL", "https://example.atlassian.net");
    std::env::set_var("JIRA_EMAIL", "qa@example.com");
    std::env::set_var("JIRA_API_TOKEN", "t0ken");
    std::env::set_var("JIRA_QA_ENGINEER_FIELD", "customfield_10234");

    let cfg = Config::from_env().unwrap();
    let fields = cfg.search_fields();
    assert_eq!(fields.last().map(String::as_str), Some("customfield_10234"));
    assert_eq!(fields.len(), 6);
  }
}
