use anyhow::Result;

mod aggregate;
mod config;
mod ext;
mod fetch;
mod jira_api;
mod model;
mod pipeline;
mod render;

use crate::config::Config;

fn main() -> Result<()> {
  // Phase 1: resolve configuration from the environment (fatal if incomplete)
  let cfg = Config::from_env()?;

  // Phase 2: pick the API backend (env-mock fixtures take precedence over HTTP)
  let api = jira_api::make_api(&cfg);

  // Phase 3: fetch → aggregate → render, strictly in sequence
  pipeline::run(&cfg, api.as_ref())
}
