//! Marketing scorer
//!
//! The least verifiable module: inputs are self-reported, so completeness
//! is a fixed proxy and external snapshots drop confidence to LOW.
//!
//! Two recommendations here carry negative `savings_monthly`: campaign
//! frequency and demand filling propose marketing spend, not cost savings.
//! The sign keeps them out of the savings totals while still sizing the
//! investment for display.

use crate::benchmarks::VenueBenchmarks;
use crate::input::{AuditInput, Source};
use crate::models::{Confidence, Difficulty, ModuleResult, Priority, Recommendation, SubScore};
use crate::scorers::{finish_module, resolve, status_for, ModuleScorer};

pub const LABEL: &str = "Marketing";

const DEFAULT_DATABASE_SIZE: f64 = 800.0;
const DEFAULT_CAMPAIGNS_PER_MONTH: f64 = 1.0;
const DEFAULT_QUIET_NIGHTS: f64 = 2.0;
const DEFAULT_POSTS_PER_WEEK: f64 = 1.0;

/// Self-reported inputs: fixed completeness proxy
const COMPLETENESS_PROXY: f64 = 0.6;

/// Proposed monthly spend for a regular campaign calendar (investment)
const CAMPAIGN_INVESTMENT_MONTHLY: f64 = 1500.0;
/// Proposed monthly spend on quiet-period offers (investment)
const DEMAND_FILL_INVESTMENT_MONTHLY: f64 = 2000.0;

pub struct MarketingScorer;

impl ModuleScorer for MarketingScorer {
    fn key(&self) -> &'static str {
        "marketing"
    }

    fn label(&self) -> &'static str {
        LABEL
    }

    fn icon(&self) -> &'static str {
        "📣"
    }

    fn weight(&self) -> f64 {
        0.10
    }

    fn score(&self, input: &AuditInput, bench: &VenueBenchmarks) -> ModuleResult {
        let src = input.source;
        let mut subs = Vec::with_capacity(5);

        // Database size
        let (db, dds) = resolve(input.marketing.database_size, DEFAULT_DATABASE_SIZE, src);
        let score = if db >= 5000.0 {
            95.0
        } else if db >= 2000.0 {
            80.0
        } else if db >= 500.0 {
            60.0
        } else if db > 0.0 {
            40.0
        } else {
            20.0
        };
        let recommendation = (db < 2000.0).then(|| Recommendation {
            action: "Grow the contactable database".into(),
            how: "Wifi sign-in, booking opt-ins, and a monthly prize draw; aim for 200 new \
                  contacts a month"
                .into(),
            savings_monthly: 0.0,
            liability_reduction: None,
            difficulty: Difficulty::Low,
            time_to_effect: "ongoing".into(),
            priority: Priority::Low,
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "Database Size".into(),
            weight: 0.20,
            score,
            value: format!("{:.0} contacts", db),
            target: "≥ 2,000 contacts".into(),
            status: status_for(score),
            data_source: dds,
            recommendation,
        });

        // Campaign frequency — investment, not savings
        let (campaigns, cds) = resolve(
            input.marketing.campaigns_per_month,
            DEFAULT_CAMPAIGNS_PER_MONTH,
            src,
        );
        let score = if campaigns >= 4.0 {
            90.0
        } else if campaigns >= 2.0 {
            75.0
        } else if campaigns >= 1.0 {
            60.0
        } else {
            30.0
        };
        let recommendation = (campaigns < 2.0).then(|| Recommendation {
            action: "Run at least two campaigns a month".into(),
            how: "A fixed calendar: one database send and one paid social burst per \
                  fortnight, each with a bookable offer"
                .into(),
            savings_monthly: -CAMPAIGN_INVESTMENT_MONTHLY,
            liability_reduction: None,
            difficulty: Difficulty::Low,
            time_to_effect: "2 weeks".into(),
            priority: Priority::Medium,
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "Campaign Frequency".into(),
            weight: 0.25,
            score,
            value: format!("{:.0}/month", campaigns),
            target: "≥ 2/month".into(),
            status: status_for(score),
            data_source: cds,
            recommendation,
        });

        // Demand filling — investment, not savings
        let (quiet, qds) = resolve(
            input.marketing.quiet_nights_per_week,
            DEFAULT_QUIET_NIGHTS,
            src,
        );
        let score = if quiet <= 0.0 {
            95.0
        } else if quiet <= 1.0 {
            80.0
        } else if quiet <= 2.0 {
            60.0
        } else {
            35.0
        };
        let recommendation = (quiet >= 2.0).then(|| Recommendation {
            action: format!("Fill the {:.0} quiet nights a week", quiet),
            how: "Off-peak offers targeted at the database: industry night, early-bird set \
                  menu, local partnerships"
                .into(),
            savings_monthly: -DEMAND_FILL_INVESTMENT_MONTHLY,
            liability_reduction: None,
            difficulty: Difficulty::Medium,
            time_to_effect: "4-6 weeks".into(),
            priority: Priority::Medium,
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "Demand Filling".into(),
            weight: 0.25,
            score,
            value: format!("{:.0} quiet nights/week", quiet),
            target: "≤ 1 quiet night/week".into(),
            status: status_for(score),
            data_source: qds,
            recommendation,
        });

        // Social presence
        let (posts, pds) = resolve(
            input.marketing.social_posts_per_week,
            DEFAULT_POSTS_PER_WEEK,
            src,
        );
        let score = if posts >= 5.0 {
            90.0
        } else if posts >= 2.0 {
            70.0
        } else if posts >= 1.0 {
            50.0
        } else {
            30.0
        };
        let recommendation = (posts < 2.0).then(|| Recommendation {
            action: "Post consistently".into(),
            how: "Batch-shoot a month of content in one afternoon; schedule three posts a \
                  week"
                .into(),
            savings_monthly: 0.0,
            liability_reduction: None,
            difficulty: Difficulty::Low,
            time_to_effect: "immediate".into(),
            priority: Priority::Low,
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "Social Presence".into(),
            weight: 0.15,
            score,
            value: format!("{:.0} posts/week", posts),
            target: "≥ 2 posts/week".into(),
            status: status_for(score),
            data_source: pds,
            recommendation,
        });

        // Marketing spend vs benchmark: both under- and over-spending score down
        let (spend, sds) = resolve(
            input.marketing.marketing_spend_pct,
            bench.marketing_spend_pct,
            src,
        );
        let target = bench.marketing_spend_pct;
        let under = spend < target - 1.0;
        let score = if under {
            55.0
        } else if spend > target + 2.0 {
            50.0
        } else {
            90.0
        };
        let recommendation = under.then(|| Recommendation {
            action: format!(
                "Marketing spend at {:.1}% of revenue is under-investing",
                spend
            ),
            how: format!(
                "Venues of this type sustain roughly {:.0}% of revenue in marketing; \
                 ramp toward it against measured campaign returns",
                target
            ),
            savings_monthly: 0.0,
            liability_reduction: None,
            difficulty: Difficulty::Low,
            time_to_effect: "next budget".into(),
            priority: Priority::Low,
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "Marketing Spend %".into(),
            weight: 0.15,
            score,
            value: format!("{:.1}%", spend),
            target: format!("≈ {:.1}%", target),
            status: status_for(score),
            data_source: sds,
            recommendation,
        });

        let confidence = match src {
            Source::Internal => Confidence::High,
            // Marketing inputs are the hardest to verify from outside
            Source::External => Confidence::Low,
        };

        finish_module(
            self.key(),
            LABEL,
            self.icon(),
            self.weight(),
            subs,
            input,
            Some(COMPLETENESS_PROXY),
            confidence,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmarks;

    #[test]
    fn test_investment_recommendations_are_negative() {
        let mut input = AuditInput::default();
        input.marketing.campaigns_per_month = Some(0.0);
        input.marketing.quiet_nights_per_week = Some(3.0);
        let bench = benchmarks::for_venue(input.venue_type());
        let result = MarketingScorer.score(&input, &bench);

        for name in ["Campaign Frequency", "Demand Filling"] {
            let sub = result.sub_scores.iter().find(|s| s.name == name).unwrap();
            let rec = sub.recommendation.as_ref().unwrap();
            assert!(
                rec.savings_monthly < 0.0,
                "{} must be an investment, got {}",
                name,
                rec.savings_monthly
            );
            assert!(rec.liability_reduction.is_none());
        }
    }

    #[test]
    fn test_external_source_means_low_confidence() {
        let input = AuditInput::default();
        let bench = benchmarks::for_venue(input.venue_type());
        let result = MarketingScorer.score(&input, &bench);
        assert_eq!(result.confidence, Confidence::Low);
        assert_eq!(result.data_completeness, COMPLETENESS_PROXY);
    }

    #[test]
    fn test_internal_source_means_high_confidence() {
        let input = AuditInput {
            source: Source::Internal,
            ..Default::default()
        };
        let bench = benchmarks::for_venue(input.venue_type());
        let result = MarketingScorer.score(&input, &bench);
        assert_eq!(result.confidence, Confidence::High);
    }

    #[test]
    fn test_sub_weights_sum_to_one() {
        let input = AuditInput::default();
        let bench = benchmarks::for_venue(input.venue_type());
        let result = MarketingScorer.score(&input, &bench);
        let total: f64 = result.sub_scores.iter().map(|s| s.weight).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }
}
