//! Audit engine
//!
//! Runs the seven module scorers against one snapshot and aggregates:
//! weighted overall score, stable priority-sorted recommendations,
//! savings and liability totals, completeness, confidence, and the
//! compliance red-line headlines. Pure and synchronous: no I/O, no shared
//! state, nothing to cancel.

use crate::benchmarks::{self, score_band, VenueBenchmarks};
use crate::input::{AuditInput, Source};
use crate::models::{AuditResult, Confidence};
use crate::scorers::{all_scorers, red_lines};
use chrono::Utc;
use tracing::{debug, info};

/// Mean module completeness below which an external snapshot drops
/// overall confidence to LOW
const LOW_CONFIDENCE_COMPLETENESS: f64 = 0.7;

/// Run the full audit against the registry benchmarks for the snapshot's
/// venue type. The sole computation entry point; never fails.
pub fn run_quiet_audit(input: &AuditInput) -> AuditResult {
    let bench = benchmarks::for_venue(input.venue_type());
    run_quiet_audit_with(input, &bench)
}

/// Run the full audit against an explicit benchmark set (callers may apply
/// config overrides before invoking).
pub fn run_quiet_audit_with(input: &AuditInput, bench: &VenueBenchmarks) -> AuditResult {
    let venue_type = input.venue_type();
    debug!("running audit for venue type {}", venue_type);

    // Scorers are independent; canonical order fixes recommendation
    // collection order, not correctness.
    let modules: Vec<_> = all_scorers()
        .iter()
        .map(|s| s.score(input, bench))
        .collect();

    // Overall score: weighted average of module scores using the fixed
    // module weights, guarded the same way as the module-level average.
    let total_weight: f64 = modules.iter().map(|m| m.weight).sum();
    let overall_score = if total_weight > 0.0 {
        (modules.iter().map(|m| m.score * m.weight).sum::<f64>() / total_weight).round()
    } else {
        0.0
    };

    // Collect recommendations in generation order, then stable-sort by
    // priority so ties keep module then sub-score order.
    let mut recommendations: Vec<_> = modules
        .iter()
        .flat_map(|m| m.sub_scores.iter())
        .filter_map(|s| s.recommendation.clone())
        .collect();
    recommendations.sort_by_key(|r| r.priority);

    // Recurring savings exclude investments (negative entries); one-off
    // liability reductions are totalled separately.
    let total_annual_savings: f64 = recommendations
        .iter()
        .map(|r| 12.0 * r.savings_monthly.max(0.0))
        .sum();
    let total_liabilities: f64 = recommendations
        .iter()
        .map(|r| r.liability_reduction.unwrap_or(0.0))
        .sum();

    let data_completeness =
        modules.iter().map(|m| m.data_completeness).sum::<f64>() / modules.len() as f64;

    let confidence = match input.source {
        Source::Internal => Confidence::High,
        Source::External => {
            if data_completeness > LOW_CONFIDENCE_COMPLETENESS {
                Confidence::Medium
            } else {
                Confidence::Low
            }
        }
    };

    // Red-line headlines keyed off the (already capped) compliance score,
    // followed by the individual violations.
    let mut compliance_red_lines = Vec::new();
    if let Some(compliance) = modules.iter().find(|m| m.module == "compliance") {
        let headline = if compliance.score <= 39.0 {
            Some("CRITICAL compliance violations detected")
        } else if compliance.score <= 59.0 {
            Some("Significant compliance issues detected")
        } else {
            None
        };
        if let Some(headline) = headline {
            compliance_red_lines.push(headline.to_string());
            compliance_red_lines.extend(red_lines(input).into_iter().map(|l| l.message));
        }
    }

    info!(
        "audit complete: overall {} ({}), {} recommendations, ${:.0}/yr recoverable",
        overall_score,
        score_band(overall_score),
        recommendations.len(),
        total_annual_savings
    );

    AuditResult {
        overall_score,
        overall_band: score_band(overall_score),
        venue_type: venue_type.to_string(),
        generated_at: Utc::now(),
        modules,
        recommendations,
        total_annual_savings,
        total_liabilities,
        data_completeness,
        confidence,
        compliance_red_lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Band, Priority};

    #[test]
    fn test_empty_input_produces_full_result() {
        let result = run_quiet_audit(&AuditInput::default());
        assert_eq!(result.modules.len(), 7);
        assert!((0.0..=100.0).contains(&result.overall_score));
        for m in &result.modules {
            assert!((0.0..=100.0).contains(&m.score), "{} out of range", m.module);
            for s in &m.sub_scores {
                assert!((0.0..=100.0).contains(&s.score));
                assert!((0.0..=1.0).contains(&s.weight));
            }
        }
        assert!(result.compliance_red_lines.is_empty());
    }

    #[test]
    fn test_module_weights_sum_to_one() {
        let result = run_quiet_audit(&AuditInput::default());
        let total: f64 = result.modules.iter().map(|m| m.weight).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_priority_sort_is_stable_and_ordered() {
        let mut input = AuditInput::default();
        // Stack violations across priorities
        input.food.actual_food_cost_pct = Some(45.0);
        input.service.discount_pct = Some(6.0);
        input.marketing.campaigns_per_month = Some(0.0);
        input.food.stocktakes_per_month = Some(0.0);
        let result = run_quiet_audit(&input);

        let priorities: Vec<Priority> =
            result.recommendations.iter().map(|r| r.priority).collect();
        let mut sorted = priorities.clone();
        sorted.sort();
        assert_eq!(priorities, sorted, "recommendations must be priority-ordered");
        assert!(priorities.contains(&Priority::High));
        assert!(priorities.contains(&Priority::Low));
    }

    #[test]
    fn test_negative_savings_excluded_from_total() {
        let mut input = AuditInput::default();
        input.marketing.campaigns_per_month = Some(0.0);
        input.marketing.quiet_nights_per_week = Some(4.0);
        let result = run_quiet_audit(&input);

        let has_investment = result
            .recommendations
            .iter()
            .any(|r| r.savings_monthly < 0.0);
        assert!(has_investment, "scenario must produce investment entries");

        let positive_only: f64 = result
            .recommendations
            .iter()
            .filter(|r| r.savings_monthly > 0.0)
            .map(|r| 12.0 * r.savings_monthly)
            .sum();
        assert!((result.total_annual_savings - positive_only).abs() < 1e-6);
    }

    #[test]
    fn test_compliance_red_line_headline() {
        let mut input = AuditInput::default();
        input.compliance.liquor_license_current = Some(false);
        let result = run_quiet_audit(&input);

        let compliance = result
            .modules
            .iter()
            .find(|m| m.module == "compliance")
            .unwrap();
        assert!(compliance.score <= 39.0);
        assert_eq!(
            result.compliance_red_lines[0],
            "CRITICAL compliance violations detected"
        );
        assert!(result.compliance_red_lines.len() >= 2);
    }

    #[test]
    fn test_confidence_tiers() {
        let internal = AuditInput {
            source: Source::Internal,
            ..Default::default()
        };
        assert_eq!(run_quiet_audit(&internal).confidence, Confidence::High);

        // External empty snapshot: counted modules are all estimated, mean
        // completeness sits under the 0.7 bar
        let external = AuditInput::default();
        let result = run_quiet_audit(&external);
        assert!(result.data_completeness < LOW_CONFIDENCE_COMPLETENESS);
        assert_eq!(result.confidence, Confidence::Low);
    }

    #[test]
    fn test_unknown_venue_type_does_not_throw() {
        let input = AuditInput {
            venue_type: Some("dark_kitchen".into()),
            ..Default::default()
        };
        let result = run_quiet_audit(&input);
        assert_eq!(result.venue_type, "casual_dining");
        assert!(matches!(
            result.overall_band,
            Band::Excellent | Band::Good | Band::Fair | Band::Poor | Band::Critical
        ));
    }
}
