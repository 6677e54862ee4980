//! Recovery summary post-processor
//!
//! Buckets an audit's recommendations into action horizons and computes the
//! single "found money" figure for executive views. Found money is written
//! as its own reduction over the recommendation list so it can be
//! cross-checked against the aggregator's annual-savings total; the two
//! must agree whenever the same sign filter is applied, and a test pins
//! that equality.

use crate::models::{AuditResult, Difficulty, Priority, RecoverySummary};

/// Partition recommendations into immediate / short-term / medium-term
/// horizons and total the recoverable money.
///
/// Every recommendation lands in exactly one bucket:
/// - immediate: HIGH priority that is not HIGH difficulty
/// - short-term: HIGH priority + HIGH difficulty, or MEDIUM priority
/// - medium-term: LOW priority
pub fn build_recovery_summary(result: &AuditResult) -> RecoverySummary {
    let mut immediate_actions = Vec::new();
    let mut short_term_actions = Vec::new();
    let mut medium_term_actions = Vec::new();

    for rec in &result.recommendations {
        match (rec.priority, rec.difficulty) {
            (Priority::High, Difficulty::High) => short_term_actions.push(rec.clone()),
            (Priority::High, _) => immediate_actions.push(rec.clone()),
            (Priority::Medium, _) => short_term_actions.push(rec.clone()),
            (Priority::Low, _) => medium_term_actions.push(rec.clone()),
        }
    }

    let found_money = result
        .recommendations
        .iter()
        .filter(|r| r.savings_monthly > 0.0)
        .map(|r| 12.0 * r.savings_monthly)
        .sum::<f64>()
        + result.total_liabilities;

    RecoverySummary {
        total_annual_savings: result.total_annual_savings,
        total_liabilities: result.total_liabilities,
        immediate_actions,
        short_term_actions,
        medium_term_actions,
        found_money,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::AuditInput;
    use crate::scorers::run_quiet_audit;

    fn loaded_input() -> AuditInput {
        let mut input = AuditInput::default();
        input.food.actual_food_cost_pct = Some(42.0);
        input.service.cash_variance_pct = Some(1.8);
        input.labour.award_compliant = Some(false);
        input.overhead.occupancy_cost_pct = Some(12.0);
        input.marketing.campaigns_per_month = Some(0.0);
        input
    }

    #[test]
    fn test_partition_is_complete_and_disjoint() {
        let result = run_quiet_audit(&loaded_input());
        let summary = build_recovery_summary(&result);

        assert_eq!(
            summary.immediate_actions.len()
                + summary.short_term_actions.len()
                + summary.medium_term_actions.len(),
            result.recommendations.len()
        );
        for rec in &summary.immediate_actions {
            assert_eq!(rec.priority, Priority::High);
            assert_ne!(rec.difficulty, Difficulty::High);
        }
        for rec in &summary.medium_term_actions {
            assert_eq!(rec.priority, Priority::Low);
        }
        for rec in &summary.short_term_actions {
            assert!(
                rec.priority == Priority::Medium
                    || (rec.priority == Priority::High && rec.difficulty == Difficulty::High)
            );
        }
    }

    #[test]
    fn test_hard_high_priority_work_is_short_term() {
        // Occupancy blowouts are LOW priority; prime-cost blowouts are
        // HIGH priority and HIGH difficulty -> short-term bucket
        let mut input = AuditInput::default();
        input.overhead.prime_cost_pct = Some(72.0);
        let result = run_quiet_audit(&input);
        let summary = build_recovery_summary(&result);
        assert!(summary
            .short_term_actions
            .iter()
            .any(|r| r.module == "Overhead & Profit" && r.priority == Priority::High));
        assert!(!summary
            .immediate_actions
            .iter()
            .any(|r| r.difficulty == Difficulty::High));
    }

    #[test]
    fn found_money_matches_annual_savings_plus_liabilities() {
        let result = run_quiet_audit(&loaded_input());
        let summary = build_recovery_summary(&result);
        // Two independently written reductions over the same filter
        assert!(
            (summary.found_money - (result.total_annual_savings + result.total_liabilities)).abs()
                < 1e-6,
            "found_money {} != savings {} + liabilities {}",
            summary.found_money,
            result.total_annual_savings,
            result.total_liabilities
        );
    }

    #[test]
    fn test_empty_result_summary() {
        let result = run_quiet_audit(&AuditInput {
            source: crate::input::Source::Internal,
            food: crate::input::FoodInput {
                stocktakes_per_month: Some(4.0),
                ..Default::default()
            },
            ..Default::default()
        });
        let summary = build_recovery_summary(&result);
        assert_eq!(
            summary.immediate_actions.len()
                + summary.short_term_actions.len()
                + summary.medium_term_actions.len(),
            result.recommendations.len()
        );
        assert!(summary.found_money >= 0.0);
    }
}
