//! Labour & rostering scorer
//!
//! Cost-side metrics are continuous; award and super compliance are binary
//! gates. Non-compliance attaches a one-off liability figure to the
//! recommendation (back-pay / SGC exposure) with zero monthly savings, so
//! liabilities stay out of the recurring-savings totals.

use crate::benchmarks::{score_from_thresholds, t, ThresholdEntry, VenueBenchmarks};
use crate::input::AuditInput;
use crate::models::{Difficulty, ModuleResult, Priority, Recommendation, SubScore};
use crate::scorers::{
    confidence_for, finish_module, monthly_revenue, resolve, resolve_bool, status_for, ModuleScorer,
};

pub const LABEL: &str = "Labour & Rostering";

const DEFAULT_LABOUR_COST_PCT: f64 = 30.0;
const DEFAULT_ROSTER_VARIANCE_PCT: f64 = 5.0;
const DEFAULT_OVERTIME_PCT: f64 = 3.0;
const DEFAULT_HEADCOUNT: f64 = 12.0;
const DEFAULT_SUPER_RATE_PCT: f64 = 11.5;

/// Statutory super guarantee rate, %
const SUPER_GUARANTEE_PCT: f64 = 11.5;

/// Estimated back-pay exposure per employee for award breaches
const AWARD_LIABILITY_PER_HEAD: f64 = 1500.0;
/// Estimated SGC exposure per employee for unpaid or underpaid super
const SUPER_LIABILITY_PER_HEAD: f64 = 1200.0;

const COMPLIANT_SCORE: f64 = 95.0;
const AWARD_BREACH_SCORE: f64 = 20.0;
const SUPER_BREACH_SCORE: f64 = 15.0;

/// Percentage points of labour cost above the venue benchmark
const LABOUR_COST_OVER_TABLE: &[ThresholdEntry] = &[
    t(1.0, 95.0),
    t(2.0, 85.0),
    t(3.0, 70.0),
    t(5.0, 50.0),
    t(7.0, 35.0),
    t(f64::INFINITY, 15.0),
];

/// Covers-per-labour-hour shortfall vs benchmark
const PRODUCTIVITY_DEFICIT_TABLE: &[ThresholdEntry] = &[
    t(0.5, 90.0),
    t(1.0, 75.0),
    t(2.0, 55.0),
    t(f64::INFINITY, 35.0),
];

/// |rostered - actual| as % of rostered hours
const ROSTER_VARIANCE_TABLE: &[ThresholdEntry] = &[
    t(2.0, 95.0),
    t(5.0, 75.0),
    t(10.0, 55.0),
    t(f64::INFINITY, 30.0),
];

/// Overtime hours as % of total hours
const OVERTIME_TABLE: &[ThresholdEntry] = &[
    t(2.0, 95.0),
    t(5.0, 75.0),
    t(8.0, 55.0),
    t(f64::INFINITY, 30.0),
];

pub struct LabourScorer;

impl ModuleScorer for LabourScorer {
    fn key(&self) -> &'static str {
        "labour"
    }

    fn label(&self) -> &'static str {
        LABEL
    }

    fn icon(&self) -> &'static str {
        "👥"
    }

    fn weight(&self) -> f64 {
        0.20
    }

    fn score(&self, input: &AuditInput, bench: &VenueBenchmarks) -> ModuleResult {
        let src = input.source;
        let revenue = monthly_revenue(input);
        let (headcount, _) = resolve(input.labour.headcount, DEFAULT_HEADCOUNT, src);
        let mut subs = Vec::with_capacity(6);

        // Labour cost vs benchmark
        let (labour, lds) = resolve(input.labour.labour_cost_pct, DEFAULT_LABOUR_COST_PCT, src);
        let over = (labour - bench.labour_cost_pct).max(0.0);
        let score = score_from_thresholds(over, LABOUR_COST_OVER_TABLE);
        let recommendation = (over > 1.5).then(|| Recommendation {
            action: format!(
                "Bring labour from {:.1}% of revenue back to {:.1}%",
                labour, bench.labour_cost_pct
            ),
            how: "Roster to forecast covers, stagger starts around service peaks, and cap \
                  weekly hours per section"
                .into(),
            savings_monthly: revenue * over / 100.0,
            liability_reduction: None,
            difficulty: Difficulty::Medium,
            time_to_effect: "2-4 roster cycles".into(),
            priority: if over > 4.0 {
                Priority::High
            } else {
                Priority::Medium
            },
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "Labour Cost % vs Benchmark".into(),
            weight: 0.25,
            score,
            value: format!("{:.1}%", labour),
            target: format!("≤ {:.1}%", bench.labour_cost_pct),
            status: status_for(score),
            data_source: lds,
            recommendation,
        });

        // Productivity: covers per labour hour
        let (covers, cds) = resolve(
            input.labour.covers_per_labour_hour,
            bench.covers_per_labour_hour,
            src,
        );
        let deficit = (bench.covers_per_labour_hour - covers).max(0.0);
        let score = score_from_thresholds(deficit, PRODUCTIVITY_DEFICIT_TABLE);
        let recommendation = (deficit > 1.0).then(|| Recommendation {
            action: "Lift covers per labour hour".into(),
            how: "Cross-train floor staff to cover two sections off-peak and cut dead hours \
                  from the open shift"
                .into(),
            savings_monthly: revenue * 0.01,
            liability_reduction: None,
            difficulty: Difficulty::Medium,
            time_to_effect: "4-6 weeks".into(),
            priority: Priority::Medium,
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "Covers per Labour Hour".into(),
            weight: 0.15,
            score,
            value: format!("{:.1}", covers),
            target: format!("≥ {:.1}", bench.covers_per_labour_hour),
            status: status_for(score),
            data_source: cds,
            recommendation,
        });

        // Roster vs actual variance
        let (variance, vds) = resolve(
            input.labour.roster_variance_pct,
            DEFAULT_ROSTER_VARIANCE_PCT,
            src,
        );
        let score = score_from_thresholds(variance, ROSTER_VARIANCE_TABLE);
        let recommendation = (variance > 5.0).then(|| Recommendation {
            action: "Close the roster-to-actual gap".into(),
            how: "Manager sign-off on every shift extension; compare rostered vs clocked \
                  hours at the weekly WIP"
                .into(),
            savings_monthly: revenue * bench.labour_cost_pct / 100.0 * variance / 100.0,
            liability_reduction: None,
            difficulty: Difficulty::Low,
            time_to_effect: "1-2 roster cycles".into(),
            priority: Priority::Medium,
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "Roster vs Actual Variance".into(),
            weight: 0.15,
            score,
            value: format!("{:.1}%", variance),
            target: "≤ 5.0%".into(),
            status: status_for(score),
            data_source: vds,
            recommendation,
        });

        // Overtime
        let (overtime, ods) = resolve(input.labour.overtime_pct, DEFAULT_OVERTIME_PCT, src);
        let score = score_from_thresholds(overtime, OVERTIME_TABLE);
        let recommendation = (overtime > 5.0).then(|| Recommendation {
            action: format!("Cut overtime from {:.1}% of hours", overtime),
            how: "Flag anyone heading past 38 hours by Thursday and backfill from the \
                  casual pool"
                .into(),
            savings_monthly: revenue * bench.labour_cost_pct / 100.0 * overtime / 100.0 * 0.5,
            liability_reduction: None,
            difficulty: Difficulty::Low,
            time_to_effect: "next roster".into(),
            priority: Priority::Medium,
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "Overtime %".into(),
            weight: 0.10,
            score,
            value: format!("{:.1}%", overtime),
            target: "≤ 5.0%".into(),
            status: status_for(score),
            data_source: ods,
            recommendation,
        });

        // Award compliance: binary gate, liability not savings
        let (award_ok, ads) = resolve_bool(input.labour.award_compliant, true, src);
        let score = if award_ok {
            COMPLIANT_SCORE
        } else {
            AWARD_BREACH_SCORE
        };
        let recommendation = (!award_ok).then(|| Recommendation {
            action: "Rectify award non-compliance".into(),
            how: "Reconcile classifications and penalty rates against the award for the \
                  last six months and back-pay shortfalls before they surface"
                .into(),
            savings_monthly: 0.0,
            liability_reduction: Some(headcount * AWARD_LIABILITY_PER_HEAD),
            difficulty: Difficulty::Medium,
            time_to_effect: "2-4 weeks".into(),
            priority: Priority::High,
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "Award Compliance".into(),
            weight: 0.20,
            score,
            value: if award_ok { "compliant" } else { "non-compliant" }.into(),
            target: "compliant".into(),
            status: status_for(score),
            data_source: ads,
            recommendation,
        });

        // Super compliance: rate and payment timing together
        let (super_rate, _) = resolve(input.labour.super_rate_pct, DEFAULT_SUPER_RATE_PCT, src);
        let (on_time, sds) = resolve_bool(input.labour.super_paid_on_time, true, src);
        let super_ok = on_time && super_rate >= SUPER_GUARANTEE_PCT;
        let score = if super_ok {
            COMPLIANT_SCORE
        } else {
            SUPER_BREACH_SCORE
        };
        let recommendation = (!super_ok).then(|| Recommendation {
            action: "Bring super up to the guarantee rate and on schedule".into(),
            how: "Lodge a catch-up through the clearing house this quarter; late super \
                  compounds into SGC charges and loses deductibility"
                .into(),
            savings_monthly: 0.0,
            liability_reduction: Some(headcount * SUPER_LIABILITY_PER_HEAD),
            difficulty: Difficulty::Low,
            time_to_effect: "this quarter".into(),
            priority: Priority::High,
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "Super Compliance".into(),
            weight: 0.15,
            score,
            value: format!(
                "{:.1}% {}",
                super_rate,
                if on_time { "on time" } else { "late" }
            ),
            target: format!("≥ {:.1}% on time", SUPER_GUARANTEE_PCT),
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
