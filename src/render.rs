// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Turn aggregated sections into the two output artifacts (summary JSON dump, rendered HTML report)
// role: render/artifacts
// inputs: Ordered SectionSummary list, display user name, identity email, template text
// outputs: jira_issues_summary.json and reports/jira_report.<token>.html on disk
// side_effects: Creates the reports directory; overwrites existing artifacts of the same name
// invariants:
// - Exactly two literal marker substitutions; a missing marker is a hard error, never silent partial output
// - File token derivation replaces every '@' and '.' in the email with '_'
// errors: IO errors bubble with file path context
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::model::SectionSummary;

const CHART_DATA_MARKER: &str = "const chartData = __CHART_DATA__;";
const USER_NAME_MARKER: &str = "const userName = __USER_NAME__;";

/// Filesystem-safe token derived from an email address.
pub fn safe_token(email: &str) -> String {
  email
    .chars()
    .map(|c| if c == '@' || c == '.' { '_' } else { c })
    .collect()
}

/// Splice the section data and display name into the static template.
///
/// Substitution is literal marker replacement, not a template language; a
/// template without one of the markers would otherwise ship a broken report,
/// so that case fails loudly.
pub fn render_report(template: &str, sections: &[SectionSummary], user_name: &str) -> Result<String> {
  for marker in [CHART_DATA_MARKER, USER_NAME_MARKER] {
    if !template.contains(marker) {
      bail!("template is missing the marker line {:?}", marker);
    }
  }

  let chart_data = serde_json::to_string_pretty(sections)?;
  let name_json = serde_json::to_string(user_name)?;

  Ok(
    template
      .replacen(CHART_DATA_MARKER, &format!("const chartData = {};", chart_data), 1)
      .replacen(USER_NAME_MARKER, &format!("const userName = {};", name_json), 1),
  )
}

/// Unconditional pretty-printed dump of all sections, for inspection.
pub fn write_summary(sections: &[SectionSummary], path: &Path) -> Result<()> {
  std::fs::write(path, serde_json::to_vec_pretty(sections)?)
    .with_context(|| format!("writing {}", path.display()))
}

/// Write the rendered HTML under `reports_dir`, creating the directory when
/// needed. Returns the path of the written report.
pub fn write_report(html: &str, reports_dir: &Path, email: &str) -> Result<PathBuf> {
  std::fs::create_dir_all(reports_dir)
    .with_context(|| format!("creating {}", reports_dir.display()))?;

  let file_name = format!("jira_report.{}.html", safe_token(email));
  let path = reports_dir.join(file_name);

  std::fs::write(&path, html).with_context(|| format!("writing {}", path.display()))?;
  println!("[jira] report generated: {}", path.display());

  Ok(path)
}
