use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;

use crate::model::{IssueRecord, NamedEntity, SectionSummary, TableRow};

const UNKNOWN: &str = "Unknown";

/// Jira timestamps come back as "2024-03-14T10:00:00.000+0000"; accept plain
/// RFC 3339 as well. Unparseable values are treated the same as absent ones.
fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
  DateTime::parse_from_rfc3339(raw)
    .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.3f%z"))
    .ok()
}

fn day_string(raw: Option<&str>) -> String {
  raw
    .and_then(parse_timestamp)
    .map(|dt| dt.format("%Y-%m-%d").to_string())
    .unwrap_or_default()
}

fn entity_name(entity: Option<&NamedEntity>) -> String {
  entity
    .and_then(|e| e.name.clone())
    .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Bucket a flat issue list into the per-query summary. Pure; row order
/// follows input order and every map keeps first-seen key order, so repeated
/// runs over the same input produce byte-identical JSON.
pub fn aggregate(title: &str, issues: &[IssueRecord]) -> SectionSummary {
  let mut monthly_volume: IndexMap<String, u64> = IndexMap::new();
  let mut issue_type_counts: IndexMap<String, u64> = IndexMap::new();
  let mut status_counts: IndexMap<String, u64> = IndexMap::new();
  let mut table_rows: Vec<TableRow> = Vec::new();

  for issue in issues {
    let fields = &issue.fields;

    let created = fields.created.as_deref().and_then(parse_timestamp);
    let month = created
      .map(|dt| dt.format("%Y-%m").to_string())
      .unwrap_or_else(|| UNKNOWN.to_string());
    *monthly_volume.entry(month).or_insert(0) += 1;

    let issue_type = entity_name(fields.issuetype.as_ref());
    *issue_type_counts.entry(issue_type.clone()).or_insert(0) += 1;

    let status = entity_name(fields.status.as_ref());
    *status_counts.entry(status.clone()).or_insert(0) += 1;

    table_rows.push(TableRow {
      key: issue.key.clone(),
      summary: fields.summary.clone().unwrap_or_default(),
      status,
      issue_type,
      created: created.map(|dt| dt.format("%Y-%m-%d").to_string()).unwrap_or_default(),
      resolved: day_string(fields.resolutiondate.as_deref()),
    });
  }

  SectionSummary {
    title: title.to_string(),
    total_issues: issues.len(),
    monthly_volume,
    issue_type_counts,
    status_counts,
    table_rows,
  }
}
