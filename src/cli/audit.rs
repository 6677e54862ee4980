//! Audit command - run the full scoring pass and render a report

use crate::benchmarks;
use crate::config::load_config;
use crate::input::AuditInput;
use crate::reporters;
use crate::scorers::run_quiet_audit_with;
use anyhow::{Context, Result};
use console::style;
use std::path::Path;
use tracing::info;

pub fn run(
    input_path: &Path,
    format: Option<&str>,
    output: Option<&Path>,
    with_summary: bool,
) -> Result<()> {
    let config = load_config(Path::new("."));
    let format = format
        .or(config.defaults.format.as_deref())
        .unwrap_or("text");

    let input = AuditInput::from_json_file(input_path)
        .with_context(|| format!("Failed to load snapshot: {}", input_path.display()))?;

    let venue = input.venue_type();
    let mut bench = benchmarks::for_venue(venue);
    if let Some(overrides) = config.benchmark_override(venue.key()) {
        info!(venue = venue.key(), "applying benchmark overrides");
        overrides.apply(&mut bench);
    }

    let result = run_quiet_audit_with(&input, &bench);

    let mut rendered = reporters::report(&result, format)?;
    if with_summary {
        rendered.push_str(&reporters::report_summary(&result, format)?);
    }

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write report: {}", path.display()))?;
            println!(
                "{} Report written to {}",
                style("✓").green(),
                style(path.display()).cyan()
            );
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
