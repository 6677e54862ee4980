//! Food & kitchen scorer
//!
//! Six sub-scores covering cost control, recipe discipline, menu mix, and
//! kitchen process. The food cost and AvT metrics carry most of the weight
//! because they move real money every month.

use crate::benchmarks::{score_from_thresholds, t, ThresholdEntry, VenueBenchmarks};
use crate::input::AuditInput;
use crate::models::{Difficulty, ModuleResult, Priority, Recommendation, SubScore};
use crate::scorers::{
    confidence_for, finish_module, monthly_revenue, resolve, resolve_bool, status_for, ModuleScorer,
};

pub const LABEL: &str = "Food & Kitchen";

const DEFAULT_FOOD_COST_PCT: f64 = 30.0;
const DEFAULT_THEORETICAL_PCT: f64 = 28.0;
const DEFAULT_STARS_PCT: f64 = 25.0;
const DEFAULT_PLOWHORSES_PCT: f64 = 30.0;
const DEFAULT_WASTE_PCT: f64 = 3.0;
const DEFAULT_PREP_COMPLETION_PCT: f64 = 80.0;
const DEFAULT_STOCKTAKES_PER_MONTH: f64 = 1.0;

/// Percentage points of food cost above the venue benchmark
const FOOD_COST_OVER_TABLE: &[ThresholdEntry] = &[
    t(1.0, 100.0),
    t(2.0, 85.0),
    t(3.0, 70.0),
    t(4.0, 55.0),
    t(6.0, 35.0),
    t(f64::INFINITY, 10.0),
];

/// |actual - theoretical| food cost, percentage points
const AVT_VARIANCE_TABLE: &[ThresholdEntry] = &[
    t(0.5, 100.0),
    t(1.0, 90.0),
    t(2.0, 75.0),
    t(3.0, 60.0),
    t(4.0, 45.0),
    t(f64::INFINITY, 25.0),
];

/// Recorded waste as % of purchases
const WASTE_TABLE: &[ThresholdEntry] = &[
    t(1.0, 95.0),
    t(2.0, 80.0),
    t(3.0, 65.0),
    t(5.0, 45.0),
    t(f64::INFINITY, 25.0),
];

/// Fixed score when prep lists are not used at all, regardless of any
/// reported completion rate
const NO_PREP_LISTS_SCORE: f64 = 30.0;

pub struct FoodScorer;

impl ModuleScorer for FoodScorer {
    fn key(&self) -> &'static str {
        "food"
    }

    fn label(&self) -> &'static str {
        LABEL
    }

    fn icon(&self) -> &'static str {
        "🍽"
    }

    fn weight(&self) -> f64 {
        0.15
    }

    fn score(&self, input: &AuditInput, bench: &VenueBenchmarks) -> ModuleResult {
        let src = input.source;
        let revenue = monthly_revenue(input);
        let mut subs = Vec::with_capacity(6);

        // Food cost vs benchmark
        let (actual, ds) = resolve(input.food.actual_food_cost_pct, DEFAULT_FOOD_COST_PCT, src);
        let over = (actual - bench.food_cost_pct).max(0.0);
        let score = score_from_thresholds(over, FOOD_COST_OVER_TABLE);
        let recommendation = (over > 1.5).then(|| Recommendation {
            action: format!(
                "Bring food cost from {:.1}% back to the {:.1}% benchmark",
                actual, bench.food_cost_pct
            ),
            how: "Re-cost the top 20 menu items, tighten portion specs, and tender the five \
                  biggest supplier lines"
                .into(),
            savings_monthly: revenue * over / 100.0,
            liability_reduction: None,
            difficulty: Difficulty::Medium,
            time_to_effect: "4-8 weeks".into(),
            priority: if over > 3.0 {
                Priority::High
            } else {
                Priority::Medium
            },
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "Food Cost % vs Benchmark".into(),
            weight: 0.30,
            score,
            value: format!("{:.1}%", actual),
            target: format!("≤ {:.1}%", bench.food_cost_pct),
            status: status_for(score),
            data_source: ds,
            recommendation,
        });

        // AvT variance: gap between measured and recipe-theoretical cost
        let (theoretical, tds) = resolve(
            input.food.theoretical_food_cost_pct,
            DEFAULT_THEORETICAL_PCT,
            src,
        );
        let variance = (actual - theoretical).abs();
        let score = score_from_thresholds(variance, AVT_VARIANCE_TABLE);
        let food_purchases = revenue * actual / 100.0;
        let recommendation = (variance > 2.0).then(|| Recommendation {
            action: format!(
                "Close the {:.1}pt gap between actual and theoretical food cost",
                variance
            ),
            how: "Run weekly AvT reports, audit portioning and waste logs, and chase the \
                  variance line by line"
                .into(),
            savings_monthly: food_purchases * variance / 100.0,
            liability_reduction: None,
            difficulty: Difficulty::Medium,
            time_to_effect: "2-4 weeks".into(),
            priority: Priority::Medium,
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "AvT Variance".into(),
            weight: 0.20,
            score,
            value: format!("{:.1}pt", variance),
            target: "≤ 1.0pt".into(),
            status: status_for(score),
            data_source: tds,
            recommendation,
        });

        // Menu engineering: stars and plowhorses combined into one banded score
        let (stars, sds) = resolve(input.food.stars_pct, DEFAULT_STARS_PCT, src);
        let (plowhorses, _) = resolve(input.food.plowhorses_pct, DEFAULT_PLOWHORSES_PCT, src);
        let combined = stars + 0.5 * plowhorses;
        let score = if combined >= 40.0 {
            95.0
        } else if combined >= 30.0 {
            80.0
        } else if combined >= 20.0 {
            65.0
        } else if combined >= 10.0 {
            50.0
        } else {
            30.0
        };
        let recommendation = (score < 60.0).then(|| Recommendation {
            action: "Re-engineer the menu around stars".into(),
            how: "Promote high-margin movers, re-price or re-plate plowhorses, and cut dogs \
                  at the next menu print"
                .into(),
            savings_monthly: revenue * 0.01,
            liability_reduction: None,
            difficulty: Difficulty::Low,
            time_to_effect: "next menu cycle".into(),
            priority: Priority::Medium,
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "Menu Engineering".into(),
            weight: 0.15,
            score,
            value: format!("{:.0}% stars / {:.0}% plowhorses", stars, plowhorses),
            target: "≥ 30% stars".into(),
            status: status_for(score),
            data_source: sds,
            recommendation,
        });

        // Waste tracking
        let (tracks_waste, wds) = resolve_bool(input.food.tracks_waste, true, src);
        let (waste, waste_ds) = resolve(input.food.waste_pct, DEFAULT_WASTE_PCT, src);
        let (score, value, recommendation) = if !tracks_waste {
            (
                35.0,
                "not tracked".to_string(),
                Some(Recommendation {
                    action: "Start a daily waste log".into(),
                    how: "One clipboard per section; weigh and record every bin at close for \
                          two weeks, then review with the head chef"
                        .into(),
                    savings_monthly: food_purchases * 0.02,
                    liability_reduction: None,
                    difficulty: Difficulty::Low,
                    time_to_effect: "1-2 weeks".into(),
                    priority: Priority::Medium,
                    module: LABEL.into(),
                }),
            )
        } else {
            let score = score_from_thresholds(waste, WASTE_TABLE);
            let rec = (waste > bench.waste_pct).then(|| Recommendation {
                action: format!(
                    "Cut waste from {:.1}% to the {:.1}% benchmark",
                    waste, bench.waste_pct
                ),
                how: "Tighten prep quantities against forecast covers and repurpose trim into \
                      specials"
                    .into(),
                savings_monthly: food_purchases * (waste - bench.waste_pct) / 100.0,
                liability_reduction: None,
                difficulty: Difficulty::Low,
                time_to_effect: "2-4 weeks".into(),
                priority: Priority::Medium,
                module: LABEL.into(),
            });
            (score, format!("{:.1}%", waste), rec)
        };
        subs.push(SubScore {
            name: "Waste Tracking".into(),
            weight: 0.15,
            score,
            value,
            target: format!("≤ {:.1}%", bench.waste_pct),
            status: status_for(score),
            data_source: if tracks_waste { waste_ds } else { wds },
            recommendation,
        });

        // Prep accuracy. Not using prep lists at all pins the score low,
        // independent of any completion rate.
        let (uses_prep, pds) = resolve_bool(input.food.uses_prep_lists, true, src);
        let (completion, cds) = resolve(
            input.food.prep_completion_pct,
            DEFAULT_PREP_COMPLETION_PCT,
            src,
        );
        let (score, value) = if !uses_prep {
            (NO_PREP_LISTS_SCORE, "no prep lists".to_string())
        } else {
            let score = if completion >= 95.0 {
                95.0
            } else if completion >= 85.0 {
                80.0
            } else if completion >= 75.0 {
                65.0
            } else if completion >= 60.0 {
                50.0
            } else {
                35.0
            };
            (score, format!("{:.0}% complete", completion))
        };
        let recommendation = (score < 60.0).then(|| Recommendation {
            action: "Put daily prep lists in front of every section".into(),
            how: "Par-level prep sheets per station, signed off by the opening chef".into(),
            savings_monthly: food_purchases * 0.015,
            liability_reduction: None,
            difficulty: Difficulty::Low,
            time_to_effect: "1 week".into(),
            priority: Priority::Medium,
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "Prep Accuracy".into(),
            weight: 0.10,
            score,
            value,
            target: "≥ 85% completion".into(),
            status: status_for(score),
            data_source: if uses_prep { cds } else { pds },
            recommendation,
        });

        // Stocktake frequency
        let (stocktakes, stds) = resolve(
            input.food.stocktakes_per_month,
            DEFAULT_STOCKTAKES_PER_MONTH,
            src,
        );
        let score = if stocktakes >= 4.0 {
            95.0
        } else if stocktakes >= 2.0 {
            80.0
        } else if stocktakes >= 1.0 {
            60.0
        } else {
            30.0
        };
        let recommendation = (stocktakes < 2.0).then(|| Recommendation {
            action: "Move to fortnightly food stocktakes".into(),
            how: "Count the ten highest-value lines weekly and the full store fortnightly".into(),
            savings_monthly: food_purchases * 0.01,
            liability_reduction: None,
            difficulty: Difficulty::Low,
            time_to_effect: "immediate".into(),
            priority: Priority::Low,
            module: LABEL.into(),
        });
        subs.push(SubScore {
            name: "Stocktake Frequency".into(),
            weight: 0.10,
            score,
            value: format!("{:.0}/month", stocktakes),
            target: "≥ 2/month".into(),
            status: status_for(score),
            data_source: stds,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmarks;
    use crate::input::{Source, VenueType};
    use crate::models::{DataSource, Priority, Status};

    fn fast_casual_input(food_cost: f64) -> AuditInput {
        AuditInput {
            venue_type: Some("fast_casual".into()),
            source: Source::Internal,
            food: crate::input::FoodInput {
                actual_food_cost_pct: Some(food_cost),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_food_cost_blowout_hits_bottom_band() {
        // fast_casual benchmark is 25; actual 40 -> 15pt over -> score 10
        let input = fast_casual_input(40.0);
        let bench = benchmarks::for_venue(VenueType::FastCasual);
        let result = FoodScorer.score(&input, &bench);

        let sub = &result.sub_scores[0];
        assert_eq!(sub.name, "Food Cost % vs Benchmark");
        assert_eq!(sub.score, 10.0);
        assert_eq!(sub.status, Status::Poor);
        let rec = sub.recommendation.as_ref().expect("blowout must recommend");
        assert_eq!(rec.priority, Priority::High);
        assert!(rec.savings_monthly > 0.0);
    }

    #[test]
    fn test_food_cost_at_benchmark_scores_top() {
        let input = fast_casual_input(25.0);
        let bench = benchmarks::for_venue(VenueType::FastCasual);
        let result = FoodScorer.score(&input, &bench);
        let sub = &result.sub_scores[0];
        assert_eq!(sub.score, 100.0);
        assert!(sub.recommendation.is_none());
        // Provided + internal snapshot
        assert_eq!(sub.data_source, DataSource::Internal);
    }

    #[test]
    fn test_no_prep_lists_pins_score() {
        let mut input = fast_casual_input(25.0);
        input.food.uses_prep_lists = Some(false);
        // A perfect completion rate must not rescue the score
        input.food.prep_completion_pct = Some(100.0);
        let bench = benchmarks::for_venue(VenueType::FastCasual);
        let result = FoodScorer.score(&input, &bench);
        let prep = result
            .sub_scores
            .iter()
            .find(|s| s.name == "Prep Accuracy")
            .unwrap();
        assert_eq!(prep.score, NO_PREP_LISTS_SCORE);
        assert!(prep.recommendation.is_some());
    }

    #[test]
    fn test_empty_input_scores_without_panic() {
        let input = AuditInput::default();
        let bench = benchmarks::for_venue(input.venue_type());
        let result = FoodScorer.score(&input, &bench);
        assert!((0.0..=100.0).contains(&result.score));
        assert_eq!(result.sub_scores.len(), 6);
        // Everything was defaulted
        assert_eq!(result.data_completeness, 0.0);
        for s in &result.sub_scores {
            assert_eq!(s.data_source, DataSource::Estimated);
        }
    }

    #[test]
    fn test_sub_weights_sum_to_one() {
        let input = AuditInput::default();
        let bench = benchmarks::for_venue(input.venue_type());
        let result = FoodScorer.score(&input, &bench);
        let total: f64 = result.sub_scores.iter().map(|s| s.weight).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }
}
