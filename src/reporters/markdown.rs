//! Markdown reporter for documentation and sharing

use crate::models::{AuditResult, Band, Recommendation, RecoverySummary, Trend};
use anyhow::Result;

fn band_emoji(band: Band) -> &'static str {
    match band {
        Band::Excellent => "🟢",
        Band::Good => "🟢",
        Band::Fair => "🟡",
        Band::Poor => "🟠",
        Band::Critical => "🔴",
    }
}

fn trend_label(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "improving",
        Trend::Down => "declining",
        Trend::Stable => "stable",
    }
}

fn money_cell(rec: &Recommendation) -> String {
    if rec.savings_monthly < 0.0 {
        format!("invest ${:.0}/mo", -rec.savings_monthly)
    } else if rec.savings_monthly > 0.0 {
        format!("${:.0}/mo", rec.savings_monthly)
    } else if let Some(liability) = rec.liability_reduction {
        format!("${:.0} exposure", liability)
    } else {
        "—".to_string()
    }
}

/// Render result as Markdown
pub fn render(result: &AuditResult) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!("# QuietAudit Report — {}\n\n", result.venue_type));
    out.push_str(&format!(
        "**Score: {:.0}/100** {} **{}** · Confidence: {} · Data completeness: {:.0}%\n\n",
        result.overall_score,
        band_emoji(result.overall_band),
        result.overall_band,
        result.confidence,
        result.data_completeness * 100.0
    ));
    out.push_str(&format!(
        "_Generated: {}_\n\n",
        result.generated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    if !result.compliance_red_lines.is_empty() {
        out.push_str("## 🔴 Red Lines\n\n");
        for line in &result.compliance_red_lines {
            out.push_str(&format!("> ⚠️ {}\n>\n", line));
        }
        out.push('\n');
    }

    out.push_str("## Modules\n\n");
    out.push_str("| Module | Score | Band | Trend | Weight | Data |\n");
    out.push_str("|--------|-------|------|-------|--------|------|\n");
    for m in &result.modules {
        out.push_str(&format!(
            "| {} {} | {:.0} | {} {} | {} | {:.0}% | {:.0}% |\n",
            m.icon,
            m.label,
            m.score,
            band_emoji(m.band),
            m.band,
            trend_label(m.trend),
            m.weight * 100.0,
            m.data_completeness * 100.0
        ));
    }
    out.push('\n');

    out.push_str("## Recoverable Money\n\n");
    out.push_str(&format!(
        "- **Annual savings:** ${:.0}\n- **One-off liability exposure:** ${:.0}\n\n",
        result.total_annual_savings, result.total_liabilities
    ));

    if !result.recommendations.is_empty() {
        out.push_str(&format!(
            "## Action Plan ({} items)\n\n",
            result.recommendations.len()
        ));
        out.push_str("| # | Priority | Action | Module | Impact | Effort | Timeframe |\n");
        out.push_str("|---|----------|--------|--------|--------|--------|----------|\n");
        for (i, rec) in result.recommendations.iter().enumerate() {
            out.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} |\n",
                i + 1,
                rec.priority,
                rec.action,
                rec.module,
                money_cell(rec),
                rec.difficulty,
                rec.time_to_effect
            ));
        }
        out.push('\n');

        out.push_str("### How\n\n");
        for rec in &result.recommendations {
            out.push_str(&format!("- **{}** — {}\n", rec.action, rec.how));
        }
        out.push('\n');
    }

    out.push_str("## Module Detail\n\n");
    for m in &result.modules {
        out.push_str(&format!(
            "### {} {} ({:.0}/100)\n\n",
            m.icon, m.label, m.score
        ));
        out.push_str("| Check | Value | Target | Status | Source |\n");
        out.push_str("|-------|-------|--------|--------|--------|\n");
        for s in &m.sub_scores {
            out.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                s.name, s.value, s.target, s.status, s.data_source
            ));
        }
        out.push('\n');
    }

    out.push_str("---\n*Generated by quietaudit*\n");

    Ok(out)
}

/// Render a recovery summary as Markdown
pub fn render_summary(summary: &RecoverySummary) -> Result<String> {
    let mut out = String::new();

    out.push_str("# Recovery Plan\n\n");
    out.push_str(&format!(
        "**Found money: ${:.0}** (${:.0}/yr savings + ${:.0} liability exposure)\n\n",
        summary.found_money, summary.total_annual_savings, summary.total_liabilities
    ));

    let buckets = [
        ("## Immediate (this week)", &summary.immediate_actions),
        ("## Short term (this quarter)", &summary.short_term_actions),
        ("## Medium term (this year)", &summary.medium_term_actions),
    ];
    for (title, actions) in buckets {
        out.push_str(title);
        out.push_str("\n\n");
        if actions.is_empty() {
            out.push_str("_Nothing scheduled._\n\n");
            continue;
        }
        for rec in actions.iter() {
            out.push_str(&format!(
                "- [ ] **{}** ({}, {}) — {}\n",
                rec.action,
                rec.module,
                rec.time_to_effect,
                money_cell(rec)
            ));
        }
        out.push('\n');
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_result;
    use crate::summary::build_recovery_summary;

    #[test]
    fn test_markdown_structure() {
        let result = test_result();
        let md = render(&result).unwrap();
        assert!(md.starts_with("# QuietAudit Report"));
        assert!(md.contains("## Modules"));
        assert!(md.contains("## Action Plan"));
        assert!(md.contains("## Module Detail"));
    }

    #[test]
    fn test_red_lines_rendered_as_blockquotes() {
        let result = test_result();
        assert!(!result.compliance_red_lines.is_empty());
        let md = render(&result).unwrap();
        assert!(md.contains("## 🔴 Red Lines"));
        assert!(md.contains("> ⚠️"));
    }

    #[test]
    fn test_full_action_plan_listed() {
        let result = test_result();
        let md = render(&result).unwrap();
        // every recommendation appears in the table
        for rec in &result.recommendations {
            assert!(md.contains(&rec.action), "missing action: {}", rec.action);
        }
    }

    #[test]
    fn test_summary_markdown_buckets() {
        let result = test_result();
        let summary = build_recovery_summary(&result);
        let md = render_summary(&summary).unwrap();
        assert!(md.contains("# Recovery Plan"));
        assert!(md.contains("## Immediate (this week)"));
        assert!(md.contains("Found money"));
    }
}
