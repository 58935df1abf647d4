// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Define the JSON model (queries, issue records, report sections) shared by fetching, aggregation and rendering
// role: model/types
// outputs: Serializable structs whose field names match the report's wire shape exactly
// invariants: Section maps preserve first-seen insertion order; per-section totals stay consistent with tableRows length
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One saved search: a human-readable label plus the JQL that selects it.
#[derive(Debug, Clone)]
pub struct Query {
  pub title: String,
  pub jql: String,
}

/// An entity Jira represents as `{ "name": ... }` (status, issue type).
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct NamedEntity {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
}

/// The subset of `fields` we request; anything else in the payload
/// (including the QA custom field) is ignored on deserialization.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct IssueFields {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub summary: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub status: Option<NamedEntity>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub issuetype: Option<NamedEntity>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub created: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub resolutiondate: Option<String>,
}

/// One issue as returned by the search endpoint, taken verbatim.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct IssueRecord {
  pub key: String,
  #[serde(default)]
  pub fields: IssueFields,
}

/// One page of the search endpoint. A page with no `issues` array marks
/// end-of-data, not an error.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct SearchPage {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub issues: Option<Vec<IssueRecord>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub total: Option<i64>,
}

/// One flattened display row of the report table.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
  pub key: String,
  pub summary: String,
  pub status: String,
  pub issue_type: String,
  pub created: String,
  pub resolved: String,
}

/// Per-query aggregate embedded in both output artifacts. Map fields use
/// IndexMap so iteration (and therefore serialization) follows first-seen
/// order, keeping the rendered report deterministic.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SectionSummary {
  pub title: String,
  pub total_issues: usize,
  pub monthly_volume: IndexMap<String, u64>,
  pub issue_type_counts: IndexMap<String, u64>,
  pub status_counts: IndexMap<String, u64>,
  pub table_rows: Vec<TableRow>,
}
