//! Text (terminal) reporter with colors and formatting

use crate::models::{AuditResult, Band, Priority, RecoverySummary, Trend};
use anyhow::Result;

/// Band colors (ANSI escape codes)
fn band_color(band: Band) -> &'static str {
    match band {
        Band::Excellent => "\x1b[32m", // Green
        Band::Good => "\x1b[92m",      // Light green
        Band::Fair => "\x1b[33m",      // Yellow
        Band::Poor => "\x1b[91m",      // Light red
        Band::Critical => "\x1b[31m",  // Red
    }
}

/// Priority colors
fn priority_color(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "\x1b[91m",   // Light red
        Priority::Medium => "\x1b[33m", // Yellow
        Priority::Low => "\x1b[34m",    // Blue
    }
}

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

fn trend_arrow(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "↑",
        Trend::Down => "↓",
        Trend::Stable => "→",
    }
}

fn priority_tag(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "[H]",
        Priority::Medium => "[M]",
        Priority::Low => "[L]",
    }
}

/// Render result as formatted terminal output
pub fn render(result: &AuditResult) -> Result<String> {
    let mut out = String::new();

    // Header
    let band_c = band_color(result.overall_band);
    out.push_str(&format!("\n{BOLD}QuietAudit — {}{RESET}\n", result.venue_type));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Score: {BOLD}{:.0}/100{RESET}  Band: {band_c}{BOLD}{}{RESET}  \
         Confidence: {}  Data: {:.0}%\n\n",
        result.overall_score,
        result.overall_band,
        result.confidence,
        result.data_completeness * 100.0
    ));

    // Red lines first; nothing else matters while these stand
    if !result.compliance_red_lines.is_empty() {
        out.push_str(&format!("\x1b[31m{BOLD}RED LINES{RESET}\n"));
        for line in &result.compliance_red_lines {
            out.push_str(&format!("  \x1b[31m▌{RESET} {}\n", line));
        }
        out.push('\n');
    }

    // Module table
    out.push_str(&format!("{BOLD}MODULES{RESET}\n"));
    for m in &result.modules {
        let c = band_color(m.band);
        out.push_str(&format!(
            "  {} {:<26} {c}{:>3.0}{RESET} {DIM}{}{RESET} {:<9} {DIM}w {:.2}{RESET}\n",
            m.icon,
            m.label,
            m.score,
            trend_arrow(m.trend),
            m.band.to_string(),
            m.weight
        ));
    }
    out.push('\n');

    // Money
    out.push_str(&format!("{BOLD}RECOVERABLE{RESET}\n"));
    out.push_str(&format!(
        "  Annual savings: {BOLD}${:.0}{RESET}  One-off liabilities: {BOLD}${:.0}{RESET}\n\n",
        result.total_annual_savings, result.total_liabilities
    ));

    // Top recommendations
    if !result.recommendations.is_empty() {
        out.push_str(&format!(
            "{BOLD}RECOMMENDATIONS{RESET} ({} total)\n",
            result.recommendations.len()
        ));
        for (i, rec) in result.recommendations.iter().take(10).enumerate() {
            let pc = priority_color(rec.priority);
            let money = if rec.savings_monthly < 0.0 {
                format!("invest ${:.0}/mo", -rec.savings_monthly)
            } else if rec.savings_monthly > 0.0 {
                format!("${:.0}/mo", rec.savings_monthly)
            } else if let Some(liability) = rec.liability_reduction {
                format!("${:.0} exposure", liability)
            } else {
                String::new()
            };
            out.push_str(&format!(
                "  {DIM}{:>3}{RESET}  {pc}{}{RESET}  {:<52} {DIM}{}{RESET}\n",
                i + 1,
                priority_tag(rec.priority),
                truncate(&rec.action, 52),
                money
            ));
        }
        let remaining = result.recommendations.len().saturating_sub(10);
        if remaining > 0 {
            out.push_str(&format!(
                "\n  {DIM}...and {} more (use --format markdown for the full plan){RESET}\n",
                remaining
            ));
        }
        out.push('\n');
    }

    Ok(out)
}

/// Render a recovery summary as terminal output
pub fn render_summary(summary: &RecoverySummary) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!("\n{BOLD}Recovery Plan{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Found money: {BOLD}${:.0}{RESET}  \
         {DIM}(${:.0}/yr savings + ${:.0} liabilities){RESET}\n\n",
        summary.found_money, summary.total_annual_savings, summary.total_liabilities
    ));

    let buckets = [
        ("IMMEDIATE (this week)", &summary.immediate_actions),
        ("SHORT TERM (this quarter)", &summary.short_term_actions),
        ("MEDIUM TERM (this year)", &summary.medium_term_actions),
    ];
    for (title, actions) in buckets {
        if actions.is_empty() {
            continue;
        }
        out.push_str(&format!("{BOLD}{}{RESET}\n", title));
        for rec in actions.iter() {
            out.push_str(&format!(
                "  • {} {DIM}({}, {}){RESET}\n",
                rec.action, rec.module, rec.time_to_effect
            ));
        }
        out.push('\n');
    }

    Ok(out)
}

/// Truncate on char boundaries to avoid UTF-8 panics
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_result;
    use crate::summary::build_recovery_summary;

    #[test]
    fn test_text_contains_key_sections() {
        let result = test_result();
        let out = render(&result).unwrap();
        assert!(out.contains("MODULES"));
        assert!(out.contains("RECOMMENDATIONS"));
        assert!(out.contains("Food & Kitchen"));
    }

    #[test]
    fn test_investments_labelled_not_counted_as_savings() {
        let result = test_result();
        let out = render(&result).unwrap();
        assert!(out.contains("invest $"), "investment entries get labelled");
    }

    #[test]
    fn test_summary_shows_found_money() {
        let result = test_result();
        let summary = build_recovery_summary(&result);
        let out = render_summary(&summary).unwrap();
        assert!(out.contains("Found money"));
        assert!(out.contains("IMMEDIATE"));
    }

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("short", 10), "short");
        let long = "日本語のとても長いタイトルでパニックしないこと";
        let t = truncate(long, 10);
        assert!(t.ends_with("..."));
        assert!(t.chars().count() <= 10);
    }
}
