//! Overhead & profitability scorer
//!
//! Prime cost and net profit are the two highest-leverage metrics in the
//! whole audit: prime cost is the single number that decides whether a
//! venue can make money, and net profit is what is left after it has.
//! Prime cost uses a six-band table on the overrun vs the venue benchmark;
//! net profit uses the registry's inverse step function (the one metric
//! where more is better).

use crate::benchmarks::{score_from_thresholds, score_net_profit, t, ThresholdEntry, VenueBenchmarks};
use crate::input::AuditInput;
use crate::models::{Difficulty, ModuleResult, Priority, Recommendation, SubScore};
use crate::scorers::{confidence_for, finish_module, monthly_revenue, resolve, status_for, ModuleScorer};

pub const LABEL: &str = "Overhead & Profit";

const DEFAULT_NET_PROFIT_PCT: f64 = 8.0;
const DEFAULT_UTILITIES_PCT: f64 = 4.0;
const DEFAULT_ADMIN_PCT: f64 = 3.0;
const DEFAULT_FOOD_COST_PCT: f64 = 30.0;
const DEFAULT_LABOUR_COST_PCT: f64 = 30.0;

/// Overhead inputs come from accountant statements rather than live
/// systems, so completeness is a fixed proxy instead of a field count.
const COMPLETENESS_PROXY: f64 = 0.75;

/// Percentage points of prime cost above the venue benchmark, 6 bands
const PRIME_COST_OVER_TABLE: &[ThresholdEntry] = &[
    t(0.0, 95.0),
    t(3.0, 85.0),
    t(6.0, 70.0),
    t(10.0, 55.0),
    t(15.0, 35.0),
    t(f64::INFINITY, 15.0),
];

/// Occupancy cost overrun vs benchmark
const OCCUPANCY_OVER_TABLE: &[ThresholdEntry] = &[
    t(1.0, 90.0),
    t(2.0, 75.0),
    t(4.0, 55.0),
    t(f64::INFINITY, 35.0),
];

const UTILITIES_TABLE: &[ThresholdEntry] = &[
    t(3.0, 95.0),
    t(4.0, 80.0),
    t(5.0, 65.0),
    t(7.0, 45.0),
    t(f64::INFINITY, 25.0),
];

const ADMIN_TABLE: &[ThresholdEntry] = &[
    t(2.0, 95.0),
    t(3.0, 80.0),
    t(4.0, 60.0),
    t(f64::INFINITY, 40.0),
];

pub struct OverheadScorer;

impl ModuleScorer for OverheadScorer {
    fn key(&self) -> &'static str {
        "overhead"
    }

    fn label(&self) -> &'static str {
        LABEL
    }

    fn icon(&self) -> &'static str {
        "🏢"
    }

    fn weight(&self) -> f64 {
        0.20
    }

    fn score(&self, input: &AuditInput, bench: &VenueBenchmarks) -> ModuleResult {
        let src = input.source;
        let revenue = monthly_revenue(input);
        let mut subs = Vec::with_capacity(5);

        // Prime cost: supplied directly, or derived from the food and
        // labour records when absent
        let derived = input
            .food
            .actual_food_cost_pct
            .unwrap_or(DEFAULT_FOOD_COST_PCT)
            + input
                .labour
                .labour_cost_pct
                .unwrap_or(DEFAULT_LABOUR_COST_PCT);
        let (prime, pds) = resolve(input.overhead.prime_cost_pct, derived, src);
        let over = (prime - bench.prime_cost_pct).max(0.0);
        let score = score_from_thresholds(over, PRIME_COST_OVER_TABLE);
        let recommendation = (over > 3.0).then(|| Recommendation {
            action: format!(
                "Prime cost is {:.1}%; target {:.1}%",
                prime, bench.prime_cost_pct
            ),
            how: "Work the food and labour recommendations together; a point off each side \
                  of prime cost is worth more than everything else on this report"
                .into(),
            savings_monthly: revenue * over / 100.0 * 0.5,
            liability_reduction: None,
            difficulty: Difficulty::High,
            time_to_effect: "one quarter".into(),
            priority: Priority::High,
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "Prime Cost %".into(),
            weight: 0.30,
            score,
            value: format!("{:.1}%", prime),
            target: format!("≤ {:.1}%", bench.prime_cost_pct),
            status: status_for(score),
            data_source: pds,
            recommendation,
        });

        // Net profit, inverse direction
        let (net, nds) = resolve(input.overhead.net_profit_pct, DEFAULT_NET_PROFIT_PCT, src);
        let score = score_net_profit(net);
        let recommendation = (net < 7.0).then(|| Recommendation {
            action: format!("Net profit at {:.1}% is below a sustainable floor", net),
            how: "Rebuild the P&L from the prime-cost line down; agree a monthly profit \
                  target with the bookkeeper and review against it"
                .into(),
            savings_monthly: revenue * (7.0 - net).max(0.0) / 100.0 * 0.3,
            liability_reduction: None,
            difficulty: Difficulty::High,
            time_to_effect: "one quarter".into(),
            priority: Priority::High,
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "Net Profit %".into(),
            weight: 0.25,
            score,
            value: format!("{:.1}%", net),
            target: format!("≥ {:.1}%", bench.net_profit_pct),
            status: status_for(score),
            data_source: nds,
            recommendation,
        });

        // Occupancy cost
        let (occupancy, ods) = resolve(
            input.overhead.occupancy_cost_pct,
            bench.occupancy_cost_pct,
            src,
        );
        let over = (occupancy - bench.occupancy_cost_pct).max(0.0);
        let score = score_from_thresholds(over, OCCUPANCY_OVER_TABLE);
        let recommendation = (over > 2.0).then(|| Recommendation {
            action: format!("Occupancy is {:.1}% of revenue", occupancy),
            how: "Benchmark the rent per square metre before the next option date and \
                  negotiate from trading figures"
                .into(),
            savings_monthly: revenue * over / 100.0 * 0.25,
            liability_reduction: None,
            difficulty: Difficulty::High,
            time_to_effect: "next lease event".into(),
            priority: Priority::Low,
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "Occupancy Cost %".into(),
            weight: 0.15,
            score,
            value: format!("{:.1}%", occupancy),
            target: format!("≤ {:.1}%", bench.occupancy_cost_pct),
            status: status_for(score),
            data_source: ods,
            recommendation,
        });

        // Utilities & energy
        let (utilities, uds) = resolve(input.overhead.utilities_pct, DEFAULT_UTILITIES_PCT, src);
        let score = score_from_thresholds(utilities, UTILITIES_TABLE);
        let recommendation = (utilities > 4.0).then(|| Recommendation {
            action: "Pull utilities back under 4% of revenue".into(),
            how: "Re-tender electricity and gas, fix door seals on coolrooms, and put \
                  extraction on timers"
                .into(),
            savings_monthly: revenue * (utilities - 4.0) / 100.0 * 0.5,
            liability_reduction: None,
            difficulty: Difficulty::Low,
            time_to_effect: "4-8 weeks".into(),
            priority: Priority::Low,
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "Utilities & Energy".into(),
            weight: 0.15,
            score,
            value: format!("{:.1}%", utilities),
            target: "≤ 4.0%".into(),
            status: status_for(score),
            data_source: uds,
            recommendation,
        });

        // Subscriptions & admin
        let (admin, admin_ds) = resolve(input.overhead.admin_pct, DEFAULT_ADMIN_PCT, src);
        let score = score_from_thresholds(admin, ADMIN_TABLE);
        let recommendation = (admin > 3.0).then(|| Recommendation {
            action: "Audit subscriptions and admin spend".into(),
            how: "Export twelve months of direct debits and cancel anything nobody has \
                  logged into this quarter"
                .into(),
            savings_monthly: revenue * (admin - 3.0) / 100.0 * 0.6,
            liability_reduction: None,
            difficulty: Difficulty::Low,
            time_to_effect: "1-2 weeks".into(),
            priority: Priority::Low,
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "Subscriptions & Admin".into(),
            weight: 0.15,
            score,
            value: format!("{:.1}%", admin),
            target: "≤ 3.0%".into(),
            status: status_for(score),
            data_source: admin_ds,
            recommendation,
        });

        finish_module(
            self.key(),
            LABEL,
            self.icon(),
            self.weight(),
            subs,
            input,
            Some(COMPLETENESS_PROXY),
            confidence_for(src),
        )
    }
}
