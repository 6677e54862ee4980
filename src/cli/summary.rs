//! Summary command - recovery plan without the full report

use crate::benchmarks;
use crate::config::load_config;
use crate::input::AuditInput;
use crate::reporters;
use crate::scorers::run_quiet_audit_with;
use anyhow::{Context, Result};
use std::path::Path;

pub fn run(input_path: &Path, format: Option<&str>) -> Result<()> {
    let config = load_config(Path::new("."));
    let format = format
        .or(config.defaults.format.as_deref())
        .unwrap_or("text");

    let input = AuditInput::from_json_file(input_path)
        .with_context(|| format!("Failed to load snapshot: {}", input_path.display()))?;

    let venue = input.venue_type();
    let mut bench = benchmarks::for_venue(venue);
    if let Some(overrides) = config.benchmark_override(venue.key()) {
        overrides.apply(&mut bench);
    }

    let result = run_quiet_audit_with(&input, &bench);
    print!("{}", reporters::report_summary(&result, format)?);
    Ok(())
}
