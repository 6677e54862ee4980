//! Beverage program scorer
//!
//! Pour cost and revenue mix are both judged against the venue-type
//! benchmark rather than fixed cutoffs: a 22% pour cost is fine in a cafe
//! and a problem in a pub.

use crate::benchmarks::{score_from_thresholds, t, ThresholdEntry, VenueBenchmarks};
use crate::input::AuditInput;
use crate::models::{Difficulty, ModuleResult, Priority, Recommendation, SubScore};
use crate::scorers::{
    confidence_for, finish_module, monthly_revenue, resolve, resolve_bool, status_for, ModuleScorer,
};

pub const LABEL: &str = "Beverage";

const DEFAULT_POUR_COST_PCT: f64 = 22.0;
const DEFAULT_DEAD_STOCK_PCT: f64 = 10.0;
const DEFAULT_STOCKTAKES_PER_MONTH: f64 = 2.0;

/// Percentage points of pour cost above the venue benchmark
const POUR_COST_OVER_TABLE: &[ThresholdEntry] = &[
    t(1.0, 100.0),
    t(2.0, 85.0),
    t(3.0, 70.0),
    t(5.0, 50.0),
    t(f64::INFINITY, 25.0),
];

/// % of SKUs with no movement in the review window
const DEAD_STOCK_TABLE: &[ThresholdEntry] = &[
    t(5.0, 95.0),
    t(10.0, 80.0),
    t(15.0, 60.0),
    t(20.0, 45.0),
    t(f64::INFINITY, 25.0),
];

pub struct BeverageScorer;

impl ModuleScorer for BeverageScorer {
    fn key(&self) -> &'static str {
        "beverage"
    }

    fn label(&self) -> &'static str {
        LABEL
    }

    fn icon(&self) -> &'static str {
        "🍷"
    }

    fn weight(&self) -> f64 {
        0.10
    }

    fn score(&self, input: &AuditInput, bench: &VenueBenchmarks) -> ModuleResult {
        let src = input.source;
        let revenue = monthly_revenue(input);
        let mut subs = Vec::with_capacity(5);

        // Beverage mix drives the revenue base for beverage savings
        let (mix, mix_ds) = resolve(
            input.beverage.bev_revenue_mix_pct,
            bench.bev_revenue_mix_pct,
            src,
        );
        let bev_revenue = revenue * mix / 100.0;

        // Pour cost vs benchmark
        let (pour, pds) = resolve(input.beverage.pour_cost_pct, DEFAULT_POUR_COST_PCT, src);
        let over = (pour - bench.pour_cost_pct).max(0.0);
        let score = score_from_thresholds(over, POUR_COST_OVER_TABLE);
        let recommendation = (over > 1.0).then(|| Recommendation {
            action: format!(
                "Pull pour cost from {:.1}% back to {:.1}%",
                pour, bench.pour_cost_pct
            ),
            how: "Audit pour sizes against spec, re-price outliers, and lock the cellar \
                  between deliveries"
                .into(),
            savings_monthly: bev_revenue * over / 100.0,
            liability_reduction: None,
            difficulty: Difficulty::Medium,
            time_to_effect: "2-4 weeks".into(),
            priority: if over > 3.0 {
                Priority::High
            } else {
                Priority::Medium
            },
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "Pour Cost vs Benchmark".into(),
            weight: 0.30,
            score,
            value: format!("{:.1}%", pour),
            target: format!("≤ {:.1}%", bench.pour_cost_pct),
            status: status_for(score),
            data_source: pds,
            recommendation,
        });

        // Revenue mix, benchmark-relative bands (not a fixed table)
        let target = bench.bev_revenue_mix_pct;
        let score = if mix >= target {
            95.0
        } else if mix >= target - 5.0 {
            75.0
        } else if mix >= target - 10.0 {
            55.0
        } else {
            35.0
        };
        let recommendation = (mix < target - 5.0).then(|| Recommendation {
            action: format!(
                "Lift beverage mix from {:.0}% toward the {:.0}% benchmark",
                mix, target
            ),
            how: "Train suggestive selling on matched drinks, add a by-the-glass feature \
                  list, and put dessert cocktails on the bill fold"
                .into(),
            savings_monthly: revenue * (target - mix) / 100.0 * 0.5,
            liability_reduction: None,
            difficulty: Difficulty::Medium,
            time_to_effect: "6-8 weeks".into(),
            priority: Priority::Medium,
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "Bev Revenue Mix".into(),
            weight: 0.20,
            score,
            value: format!("{:.0}%", mix),
            target: format!("≥ {:.0}%", target),
            status: status_for(score),
            data_source: mix_ds,
            recommendation,
        });

        // Dead stock
        let (dead, dds) = resolve(input.beverage.dead_stock_pct, DEFAULT_DEAD_STOCK_PCT, src);
        let score = score_from_thresholds(dead, DEAD_STOCK_TABLE);
        let recommendation = (dead > bench.dead_stock_pct).then(|| Recommendation {
            action: format!("Clear the {:.0}% of stock that is not moving", dead),
            how: "Run it through specials and staff picks, then delist and stop reordering".into(),
            savings_monthly: bev_revenue * 0.01,
            liability_reduction: None,
            difficulty: Difficulty::Low,
            time_to_effect: "4 weeks".into(),
            priority: Priority::Low,
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "Dead Stock".into(),
            weight: 0.15,
            score,
            value: format!("{:.0}%", dead),
            target: format!("≤ {:.0}%", bench.dead_stock_pct),
            status: status_for(score),
            data_source: dds,
            recommendation,
        });

        // Free pour control
        let (jiggers, jds) = resolve_bool(input.beverage.uses_jiggers, true, src);
        let score = if jiggers { 90.0 } else { 40.0 };
        let recommendation = (!jiggers).then(|| Recommendation {
            action: "Stop free pouring".into(),
            how: "Jiggers or measured pourers on every spirit; spot-check with a weekly \
                  bottle count"
                .into(),
            savings_monthly: bev_revenue * 0.02,
            liability_reduction: None,
            difficulty: Difficulty::Low,
            time_to_effect: "immediate".into(),
            priority: Priority::High,
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "Free Pour Control".into(),
            weight: 0.15,
            score,
            value: if jiggers { "measured" } else { "free pour" }.into(),
            target: "measured pours".into(),
            status: status_for(score),
            data_source: jds,
            recommendation,
        });

        // Stocktake frequency
        let (stocktakes, sds) = resolve(
            input.beverage.stocktakes_per_month,
            DEFAULT_STOCKTAKES_PER_MONTH,
            src,
        );
        let score = if stocktakes >= 4.0 {
            95.0
        } else if stocktakes >= 2.0 {
            75.0
        } else if stocktakes >= 1.0 {
            55.0
        } else {
            30.0
        };
        let recommendation = (stocktakes < 2.0).then(|| Recommendation {
            action: "Count the bar fortnightly".into(),
            how: "Weekly count on spirits, fortnightly full count; variance report to the \
                  venue manager"
                .into(),
            savings_monthly: bev_revenue * 0.01,
            liability_reduction: None,
            difficulty: Difficulty::Low,
            time_to_effect: "immediate".into(),
            priority: Priority::Low,
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "Stocktake Frequency".into(),
            weight: 0.20,
            score,
            value: format!("{:.0}/month", stocktakes),
            target: "≥ 2/month".into(),
            status: status_for(score),
            data_source: sds,
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
