//! Service & front-of-house scorer
//!
//! Cash variance and discount control savings are sized against monthly
//! revenue, not a cost base: leakage at the till is revenue already earned.

use crate::benchmarks::{score_from_thresholds, t, ThresholdEntry, VenueBenchmarks};
use crate::input::AuditInput;
use crate::models::{Difficulty, ModuleResult, Priority, Recommendation, SubScore};
use crate::scorers::{
    confidence_for, finish_module, monthly_revenue, resolve, status_for, ModuleScorer,
};

pub const LABEL: &str = "Service & Front of House";

const DEFAULT_REVIEW_SCORE: f64 = 4.2;
const DEFAULT_RESPONSE_RATE_PCT: f64 = 40.0;
const DEFAULT_CASH_VARIANCE_PCT: f64 = 0.5;
const DEFAULT_DISCOUNT_PCT: f64 = 3.0;

/// Acceptable discounting level, % of revenue
const DISCOUNT_TARGET_PCT: f64 = 2.0;

/// Till variance as % of cash takings
const CASH_VARIANCE_TABLE: &[ThresholdEntry] = &[
    t(0.3, 95.0),
    t(0.5, 80.0),
    t(1.0, 60.0),
    t(2.0, 40.0),
    t(f64::INFINITY, 20.0),
];

/// Discounts + comps as % of revenue
const DISCOUNT_TABLE: &[ThresholdEntry] = &[
    t(2.0, 95.0),
    t(3.0, 80.0),
    t(5.0, 60.0),
    t(8.0, 40.0),
    t(f64::INFINITY, 20.0),
];

/// Table-turn shortfall vs the venue benchmark
const TURNOVER_DEFICIT_TABLE: &[ThresholdEntry] = &[
    t(0.2, 90.0),
    t(0.5, 70.0),
    t(f64::INFINITY, 50.0),
];

pub struct ServiceScorer;

impl ModuleScorer for ServiceScorer {
    fn key(&self) -> &'static str {
        "service"
    }

    fn label(&self) -> &'static str {
        LABEL
    }

    fn icon(&self) -> &'static str {
        "🛎"
    }

    fn weight(&self) -> f64 {
        0.15
    }

    fn score(&self, input: &AuditInput, bench: &VenueBenchmarks) -> ModuleResult {
        let src = input.source;
        let revenue = monthly_revenue(input);
        let mut subs = Vec::with_capacity(5);

        // Review score
        let (review, rds) = resolve(input.service.avg_review_score, DEFAULT_REVIEW_SCORE, src);
        let score = if review >= 4.6 {
            95.0
        } else if review >= 4.3 {
            85.0
        } else if review >= 4.0 {
            70.0
        } else if review >= 3.5 {
            50.0
        } else {
            30.0
        };
        let recommendation = (review < 4.3).then(|| Recommendation {
            action: format!("Lift the average review score from {:.1}", review),
            how: "Read every sub-4-star review with the team weekly and fix the top \
                  recurring complaint each month"
                .into(),
            savings_monthly: revenue * 0.005,
            liability_reduction: None,
            difficulty: Difficulty::Medium,
            time_to_effect: "2-3 months".into(),
            priority: Priority::Medium,
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "Review Score".into(),
            weight: 0.25,
            score,
            value: format!("{:.1}★", review),
            target: "≥ 4.3★".into(),
            status: status_for(score),
            data_source: rds,
            recommendation,
        });

        // Review response rate
        let (response, resp_ds) = resolve(
            input.service.review_response_rate_pct,
            DEFAULT_RESPONSE_RATE_PCT,
            src,
        );
        let score = if response >= 80.0 {
            95.0
        } else if response >= 50.0 {
            75.0
        } else if response >= 20.0 {
            55.0
        } else {
            30.0
        };
        let recommendation = (response < 50.0).then(|| Recommendation {
            action: "Answer reviews, good and bad".into(),
            how: "Fifteen minutes each morning; templates for the common cases, a phone \
                  call for the bad ones"
                .into(),
            savings_monthly: 0.0,
            liability_reduction: None,
            difficulty: Difficulty::Low,
            time_to_effect: "immediate".into(),
            priority: Priority::Low,
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "Review Response Rate".into(),
            weight: 0.10,
            score,
            value: format!("{:.0}%", response),
            target: "≥ 50%".into(),
            status: status_for(score),
            data_source: resp_ds,
            recommendation,
        });

        // Cash variance: savings proportional to revenue
        let (variance, vds) = resolve(
            input.service.cash_variance_pct,
            DEFAULT_CASH_VARIANCE_PCT,
            src,
        );
        let score = score_from_thresholds(variance, CASH_VARIANCE_TABLE);
        let recommendation = (variance > 0.5).then(|| Recommendation {
            action: format!("Till variance is running at {:.1}% of takings", variance),
            how: "Blind counts at changeover, one float owner per shift, and a variance \
                  log reviewed daily"
                .into(),
            savings_monthly: revenue * variance / 100.0,
            liability_reduction: None,
            difficulty: Difficulty::Low,
            time_to_effect: "1-2 weeks".into(),
            priority: if variance > 1.0 {
                Priority::High
            } else {
                Priority::Medium
            },
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "Cash Variance".into(),
            weight: 0.25,
            score,
            value: format!("{:.1}%", variance),
            target: "≤ 0.5%".into(),
            status: status_for(score),
            data_source: vds,
            recommendation,
        });

        // Discount control: savings proportional to revenue
        let (discount, dds) = resolve(input.service.discount_pct, DEFAULT_DISCOUNT_PCT, src);
        let score = score_from_thresholds(discount, DISCOUNT_TABLE);
        let recommendation = (discount > 3.0).then(|| Recommendation {
            action: format!(
                "Discounts and comps are {:.1}% of revenue; hold them at {:.1}%",
                discount, DISCOUNT_TARGET_PCT
            ),
            how: "Manager PIN on every discount over 10%, reason codes in the POS, and a \
                  weekly report by staff member"
                .into(),
            savings_monthly: revenue * (discount - DISCOUNT_TARGET_PCT) / 100.0,
            liability_reduction: None,
            difficulty: Difficulty::Low,
            time_to_effect: "1 week".into(),
            priority: if discount > 5.0 {
                Priority::High
            } else {
                Priority::Medium
            },
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "Discount Control".into(),
            weight: 0.25,
            score,
            value: format!("{:.1}%", discount),
            target: format!("≤ {:.1}%", DISCOUNT_TARGET_PCT),
            status: status_for(score),
            data_source: dds,
            recommendation,
        });

        // Table turnover
        let (turns, tds) = resolve(
            input.service.table_turns_per_service,
            bench.table_turns_per_service,
            src,
        );
        let deficit = (bench.table_turns_per_service - turns).max(0.0);
        let score = score_from_thresholds(deficit, TURNOVER_DEFICIT_TABLE);
        let recommendation = (deficit > 0.2).then(|| Recommendation {
            action: "Turn tables closer to the venue benchmark".into(),
            how: "Tighten the booking grid to realistic sitting lengths and clear courses \
                  on a standard pace"
                .into(),
            savings_monthly: revenue * 0.01,
            liability_reduction: None,
            difficulty: Difficulty::Medium,
            time_to_effect: "4 weeks".into(),
            priority: Priority::Low,
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "Table Turnover".into(),
            weight: 0.15,
            score,
            value: format!("{:.1}/service", turns),
            target: format!("≥ {:.1}/service", bench.table_turns_per_service),
            status: status_for(score),
            data_source: tds,
            recommendation,
        });

        finish_module(
            self.key(),
            LABEL,
            self.icon(),
            self.weight(),
            subs,
            input,
            None,
            confidence_for(src),
        )
    }
}
