//! Compliance scorer and red-line override
//!
//! Unique among the seven modules: after the normal weighted average, a
//! fixed set of violation flags can force a ceiling on the score. A
//! CRITICAL red line caps the module at 39 (critical band); a MAJOR one
//! caps it at 59. The cap is a ceiling, never a replacement — a score
//! already below the ceiling is left alone — and it runs exactly once,
//! after the weighted average.

use crate::benchmarks::VenueBenchmarks;
use crate::input::AuditInput;
use crate::models::{Difficulty, ModuleResult, Priority, Recommendation, SubScore};
use crate::scorers::{
    confidence_for, finish_module, resolve, resolve_bool, status_for, trend_for, ModuleScorer,
    PREV_SCORE_OFFSET,
};
use tracing::debug;

pub const LABEL: &str = "Compliance";

const DEFAULT_HEADCOUNT: f64 = 12.0;
const DEFAULT_RETENTION_MONTHS: f64 = 24.0;
const DEFAULT_SUPER_RATE_PCT: f64 = 11.5;

/// Statutory minimum record retention, months
const MIN_RETENTION_MONTHS: f64 = 12.0;

/// Ceiling when any CRITICAL red line is raised
const CRITICAL_CEILING: f64 = 39.0;
/// Ceiling when only MAJOR red lines are raised
const MAJOR_CEILING: f64 = 59.0;

/// Completeness proxy: compliance answers are yes/no and easy to collect
const COMPLETENESS_PROXY: f64 = 0.9;

const LIQUOR_LIABILITY: f64 = 25_000.0;
const FOOD_SAFETY_LIABILITY: f64 = 8_000.0;
const INSURANCE_RECORDS_LIABILITY: f64 = 12_000.0;
const AWARD_LIABILITY_PER_HEAD: f64 = 1500.0;
const SUPER_LIABILITY_PER_HEAD: f64 = 1200.0;

/// Severity of a red-line violation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedLineSeverity {
    /// Caps the compliance score at 39
    Critical,
    /// Caps the compliance score at 59
    Major,
}

/// A single red-line violation
#[derive(Debug, Clone)]
pub struct RedLine {
    pub severity: RedLineSeverity,
    pub message: String,
}

/// Evaluate the fixed set of red-line flags against the snapshot.
///
/// Award and super flags live in the labour record; the rest in the
/// compliance record. Missing flags default to compliant, so an empty
/// snapshot raises nothing.
pub fn red_lines(input: &AuditInput) -> Vec<RedLine> {
    let mut lines = Vec::new();
    let c = &input.compliance;
    let l = &input.labour;

    let mut critical = |message: &str| {
        lines.push(RedLine {
            severity: RedLineSeverity::Critical,
            message: message.to_string(),
        })
    };

    if l.award_compliant == Some(false) {
        critical("Award non-compliance: active underpayment exposure");
    }
    if l.super_rate_pct == Some(0.0) {
        critical("Superannuation not being paid");
    }
    if c.liquor_license_current == Some(false) {
        critical("Liquor license expired: trading unlicensed");
    }
    if c.workers_comp_current == Some(false) {
        critical("No current workers compensation policy");
    }
    if c.record_retention_months
        .map(|m| m < MIN_RETENTION_MONTHS)
        .unwrap_or(false)
    {
        critical("Employment records kept under 12 months");
    }

    let mut major = |message: &str| {
        lines.push(RedLine {
            severity: RedLineSeverity::Major,
            message: message.to_string(),
        })
    };

    if c.stp_compliant == Some(false) {
        major("Single Touch Payroll not being reported");
    }
    if c.rsa_current == Some(false) {
        major("RSA certificates expired");
    }
    if c.food_safety_cert_current == Some(false) {
        major("Food safety certification expired");
    }
    if c.written_contracts == Some(false) {
        major("Staff working without written contracts");
    }

    lines
}

/// Clamp a computed score under the red-line ceiling.
///
/// A ceiling, not a replacement: scores already below it are untouched.
pub fn apply_red_line_ceiling(score: f64, lines: &[RedLine]) -> f64 {
    let has_critical = lines
        .iter()
        .any(|l| l.severity == RedLineSeverity::Critical);
    let has_major = lines.iter().any(|l| l.severity == RedLineSeverity::Major);

    if has_critical {
        score.min(CRITICAL_CEILING)
    } else if has_major {
        score.min(MAJOR_CEILING)
    } else {
        score
    }
}

pub struct ComplianceScorer;

impl ModuleScorer for ComplianceScorer {
    fn key(&self) -> &'static str {
        "compliance"
    }

    fn label(&self) -> &'static str {
        LABEL
    }

    fn icon(&self) -> &'static str {
        "⚖"
    }

    fn weight(&self) -> f64 {
        0.10
    }

    fn score(&self, input: &AuditInput, _bench: &VenueBenchmarks) -> ModuleResult {
        let src = input.source;
        let (headcount, _) = resolve(input.labour.headcount, DEFAULT_HEADCOUNT, src);
        let mut subs = Vec::with_capacity(5);

        // Liquor licensing
        let (liquor_ok, lds) = resolve_bool(input.compliance.liquor_license_current, true, src);
        let score = if liquor_ok { 95.0 } else { 10.0 };
        let recommendation = (!liquor_ok).then(|| Recommendation {
            action: "Renew the liquor license before another day of trade".into(),
            how: "Lodge the renewal with the state regulator today; keep the receipt on \
                  premises until the license arrives"
                .into(),
            savings_monthly: 0.0,
            liability_reduction: Some(LIQUOR_LIABILITY),
            difficulty: Difficulty::Low,
            time_to_effect: "immediate".into(),
            priority: Priority::High,
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "Liquor Licensing".into(),
            weight: 0.20,
            score,
            value: if liquor_ok { "current" } else { "expired" }.into(),
            target: "current".into(),
            status: status_for(score),
            data_source: lds,
            recommendation,
        });

        // Food safety
        let (food_ok, fds) = resolve_bool(input.compliance.food_safety_cert_current, true, src);
        let score = if food_ok { 95.0 } else { 25.0 };
        let recommendation = (!food_ok).then(|| Recommendation {
            action: "Recertify the food safety supervisor".into(),
            how: "Book the accredited course this week; display the certificate and update \
                  the food safety plan"
                .into(),
            savings_monthly: 0.0,
            liability_reduction: Some(FOOD_SAFETY_LIABILITY),
            difficulty: Difficulty::Low,
            time_to_effect: "1-2 weeks".into(),
            priority: Priority::High,
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "Food Safety".into(),
            weight: 0.20,
            score,
            value: if food_ok { "certified" } else { "expired" }.into(),
            target: "certified".into(),
            status: status_for(score),
            data_source: fds,
            recommendation,
        });

        // Workplace obligations: award plus contracts
        let (award_ok, ads) = resolve_bool(input.labour.award_compliant, true, src);
        let (contracts_ok, _) = resolve_bool(input.compliance.written_contracts, true, src);
        let score = if award_ok && contracts_ok {
            95.0
        } else if award_ok {
            60.0
        } else {
            15.0
        };
        let recommendation = (!award_ok || !contracts_ok).then(|| Recommendation {
            action: if award_ok {
                "Put written contracts in place for all staff".into()
            } else {
                "Rectify award classification and rates".into()
            },
            how: "Audit every employee against the award; issue contracts and back-pay \
                  any shortfall before it becomes a claim"
                .into(),
            savings_monthly: 0.0,
            liability_reduction: Some(headcount * AWARD_LIABILITY_PER_HEAD),
            difficulty: Difficulty::Medium,
            time_to_effect: "2-4 weeks".into(),
            priority: if award_ok {
                Priority::Medium
            } else {
                Priority::High
            },
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "Workplace Obligations".into(),
            weight: 0.25,
            score,
            value: match (award_ok, contracts_ok) {
                (true, true) => "compliant".into(),
                (true, false) => "no written contracts".into(),
                _ => "award breach".into(),
            },
            target: "award + contracts".into(),
            status: status_for(score),
            data_source: ads,
            recommendation,
        });

        // Superannuation & STP
        let (super_rate, _) = resolve(input.labour.super_rate_pct, DEFAULT_SUPER_RATE_PCT, src);
        let (stp_ok, sds) = resolve_bool(input.compliance.stp_compliant, true, src);
        let super_ok = super_rate > 0.0;
        let score = if super_ok && stp_ok {
            95.0
        } else if super_ok {
            55.0
        } else {
            15.0
        };
        let recommendation = (!super_ok || !stp_ok).then(|| Recommendation {
            action: if super_ok {
                "Start Single Touch Payroll reporting".into()
            } else {
                "Start paying superannuation immediately".into()
            },
            how: "Move payroll onto STP-enabled software and lodge outstanding super \
                  through the clearing house"
                .into(),
            savings_monthly: 0.0,
            liability_reduction: Some(headcount * SUPER_LIABILITY_PER_HEAD),
            difficulty: Difficulty::Low,
            time_to_effect: "this quarter".into(),
            priority: Priority::High,
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "Superannuation & STP".into(),
            weight: 0.20,
            score,
            value: match (super_ok, stp_ok) {
                (true, true) => "compliant".into(),
                (true, false) => "STP missing".into(),
                _ => "super unpaid".into(),
            },
            target: "super paid + STP".into(),
            status: status_for(score),
            data_source: sds,
            recommendation,
        });

        // Insurance & records
        let (wc_ok, wds) = resolve_bool(input.compliance.workers_comp_current, true, src);
        let (retention, _) = resolve(
            input.compliance.record_retention_months,
            DEFAULT_RETENTION_MONTHS,
            src,
        );
        let retention_ok = retention >= MIN_RETENTION_MONTHS;
        let score = if wc_ok && retention_ok {
            95.0
        } else if wc_ok || retention_ok {
            45.0
        } else {
            15.0
        };
        let recommendation = (!wc_ok || !retention_ok).then(|| Recommendation {
            action: if wc_ok {
                "Extend employment record retention to 7 years".into()
            } else {
                "Reinstate workers compensation cover".into()
            },
            how: "Bind cover through the broker today; archive rosters, timesheets and \
                  payslips to cloud storage with retention rules"
                .into(),
            savings_monthly: 0.0,
            liability_reduction: Some(INSURANCE_RECORDS_LIABILITY),
            difficulty: Difficulty::Low,
            time_to_effect: "1 week".into(),
            priority: if wc_ok { Priority::Medium } else { Priority::High },
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "Insurance & Records".into(),
            weight: 0.15,
            score,
            value: match (wc_ok, retention_ok) {
                (true, true) => "covered".into(),
                (true, false) => format!("records {:.0} months", retention),
                (false, _) => "no workers comp".into(),
            },
            target: "covered + 12 months records".into(),
            status: status_for(score),
            data_source: wds,
            recommendation,
        });

        let mut result = finish_module(
            self.key(),
            LABEL,
            self.icon(),
            self.weight(),
            subs,
            input,
            Some(COMPLETENESS_PROXY),
            confidence_for(src),
        );

        // Red-line override: once, after the weighted average
        let lines = red_lines(input);
        if !lines.is_empty() {
            let capped = apply_red_line_ceiling(result.score, &lines);
            if capped < result.score {
                debug!(
                    "compliance score capped {} -> {} by {} red line(s)",
                    result.score,
                    capped,
                    lines.len()
                );
                result.score = capped;
                result.band = crate::benchmarks::score_band(capped);
                // Keep the cosmetic fields consistent with the capped score.
                // A real previous score from the snapshot stays as-is; only
                // the invented default is re-derived.
                if !input.prev_scores.contains_key(self.key()) {
                    result.prev_score = capped - PREV_SCORE_OFFSET;
                }
                result.trend = trend_for(capped, result.prev_score);
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmarks;
    use crate::models::Band;

    #[test]
    fn test_ceiling_caps_but_never_raises() {
        let critical = vec![RedLine {
            severity: RedLineSeverity::Critical,
            message: "x".into(),
        }];
        let major = vec![RedLine {
            severity: RedLineSeverity::Major,
            message: "x".into(),
        }];

        assert_eq!(apply_red_line_ceiling(80.0, &critical), 39.0);
        assert_eq!(apply_red_line_ceiling(80.0, &major), 59.0);
        // Already below the ceiling: untouched
        assert_eq!(apply_red_line_ceiling(20.0, &critical), 20.0);
        assert_eq!(apply_red_line_ceiling(50.0, &major), 50.0);
        // No lines: identity
        assert_eq!(apply_red_line_ceiling(80.0, &[]), 80.0);
        // Critical wins over major
        let both = [critical[0].clone(), major[0].clone()];
        assert_eq!(apply_red_line_ceiling(80.0, &both), 39.0);
    }

    #[test]
    fn test_expired_liquor_license_forces_critical_band() {
        // Everything else compliant: unclamped average would be well above 39
        let mut input = AuditInput::default();
        input.compliance.liquor_license_current = Some(false);
        let bench = benchmarks::for_venue(input.venue_type());
        let result = ComplianceScorer.score(&input, &bench);

        assert!(result.score <= 39.0, "score {} not capped", result.score);
        assert_eq!(result.band, Band::Critical);
        let lines = red_lines(&input);
        assert!(lines
            .iter()
            .any(|l| l.severity == RedLineSeverity::Critical));
    }

    #[test]
    fn test_major_only_caps_at_59() {
        let mut input = AuditInput::default();
        input.compliance.rsa_current = Some(false);
        let bench = benchmarks::for_venue(input.venue_type());
        let result = ComplianceScorer.score(&input, &bench);
        assert!(result.score <= 59.0);
        assert!(result.score > 39.0, "RSA alone must not hit the critical cap");
    }

    #[test]
    fn test_empty_snapshot_raises_nothing() {
        let input = AuditInput::default();
        assert!(red_lines(&input).is_empty());
        let bench = benchmarks::for_venue(input.venue_type());
        let result = ComplianceScorer.score(&input, &bench);
        assert_eq!(result.score, 95.0);
        assert_eq!(result.band, Band::Excellent);
    }

    #[test]
    fn test_zero_super_rate_is_critical() {
        let mut input = AuditInput::default();
        input.labour.super_rate_pct = Some(0.0);
        let lines = red_lines(&input);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].severity, RedLineSeverity::Critical);
        // A low-but-nonzero rate is a labour problem, not a red line
        input.labour.super_rate_pct = Some(9.0);
        assert!(red_lines(&input).is_empty());
    }

    #[test]
    fn test_capped_score_keeps_trend_fields_consistent() {
        use crate::models::Trend;

        // No previous score: the invented default must track the capped
        // score, not the uncapped average
        let mut input = AuditInput::default();
        input.compliance.liquor_license_current = Some(false);
        let bench = benchmarks::for_venue(input.venue_type());
        let result = ComplianceScorer.score(&input, &bench);
        assert!(result.score <= 39.0);
        assert_eq!(result.prev_score, result.score - 3.0);
        assert_eq!(result.trend, Trend::Up);

        // A real previous score survives the cap and drives the arrow
        input.prev_scores.insert("compliance".into(), 80.0);
        let result = ComplianceScorer.score(&input, &bench);
        assert_eq!(result.prev_score, 80.0);
        assert_eq!(result.trend, Trend::Down);
    }

    #[test]
    fn test_short_retention_is_critical() {
        let mut input = AuditInput::default();
        input.compliance.record_retention_months = Some(6.0);
        let lines = red_lines(&input);
        assert!(lines
            .iter()
            .any(|l| l.severity == RedLineSeverity::Critical));
    }
}
