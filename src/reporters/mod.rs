//! Output reporters for audit results
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors
//! - `json` - Machine-readable JSON
//! - `markdown` - GitHub-flavored Markdown with the full action plan

mod json;
mod markdown;
mod text;

use crate::models::AuditResult;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Render an audit result in the specified format
pub fn report(result: &AuditResult, format: &str) -> Result<String> {
    let fmt = OutputFormat::from_str(format)?;
    report_with_format(result, fmt)
}

/// Render an audit result using an OutputFormat enum
pub fn report_with_format(result: &AuditResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(result),
        OutputFormat::Json => json::render(result),
        OutputFormat::Markdown => markdown::render(result),
    }
}

/// Render a recovery summary in the specified format
pub fn report_summary(result: &AuditResult, format: &str) -> Result<String> {
    let summary = crate::summary::build_recovery_summary(result);
    match OutputFormat::from_str(format)? {
        OutputFormat::Text => text::render_summary(&summary),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&summary)?),
        OutputFormat::Markdown => markdown::render_summary(&summary),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::input::AuditInput;
    use crate::scorers::run_quiet_audit;

    /// An audit result with a bit of everything: high-priority savings,
    /// a liability, an investment, and a red line.
    pub(crate) fn test_result() -> AuditResult {
        let mut input = AuditInput::default();
        input.venue_type = Some("casual_dining".into());
        input.food.actual_food_cost_pct = Some(38.0);
        input.labour.award_compliant = Some(false);
        input.marketing.campaigns_per_month = Some(0.0);
        run_quiet_audit(&input)
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("md").unwrap(), OutputFormat::Markdown);
        assert!(OutputFormat::from_str("sarif").is_err());
    }

    #[test]
    fn test_all_formats_render() {
        let result = test_result();
        for fmt in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown] {
            let out = report_with_format(&result, fmt).unwrap();
            assert!(!out.is_empty(), "{} output empty", fmt);
        }
    }

    #[test]
    fn test_summary_renders_in_all_formats() {
        let result = test_result();
        for fmt in ["text", "json", "markdown"] {
            let out = report_summary(&result, fmt).unwrap();
            assert!(!out.is_empty());
        }
    }
}
