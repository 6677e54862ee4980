//! Module scorers
//!
//! Seven independent scorers, one per functional area of a venue. Each
//! consumes the full input snapshot plus the venue's benchmark set and
//! produces a `ModuleResult` with weighted sub-scores and zero or more
//! recommendations. No scorer reads another scorer's output.

mod beverage;
mod compliance;
pub(crate) mod engine;
mod food;
mod labour;
mod marketing;
mod overhead;
mod service;

pub use compliance::{apply_red_line_ceiling, red_lines, RedLine, RedLineSeverity};
pub use engine::{run_quiet_audit, run_quiet_audit_with};

use crate::benchmarks::VenueBenchmarks;
use crate::input::{AuditInput, Source};
use crate::models::{Confidence, DataSource, ModuleResult, Status, SubScore, Trend};
use crate::benchmarks::score_band;

/// A scorer for one functional module
pub trait ModuleScorer: Send + Sync {
    /// Stable module key, e.g. "food"
    fn key(&self) -> &'static str;

    /// Display label, e.g. "Food & Kitchen"
    fn label(&self) -> &'static str;

    /// Display icon
    fn icon(&self) -> &'static str;

    /// This module's share of the overall score
    fn weight(&self) -> f64;

    /// Score the module from the snapshot. Infallible: every missing field
    /// has a documented default inside the scorer.
    fn score(&self, input: &AuditInput, bench: &VenueBenchmarks) -> ModuleResult;
}

/// All scorers in canonical order. The aggregator relies on this order for
/// stable recommendation collection; scoring itself is order-insensitive.
pub fn all_scorers() -> Vec<Box<dyn ModuleScorer>> {
    vec![
        Box::new(food::FoodScorer),
        Box::new(beverage::BeverageScorer),
        Box::new(labour::LabourScorer),
        Box::new(overhead::OverheadScorer),
        Box::new(service::ServiceScorer),
        Box::new(marketing::MarketingScorer),
        Box::new(compliance::ComplianceScorer),
    ]
}

/// Fallback revenue base for savings estimates when the snapshot carries none
pub(crate) const DEFAULT_MONTHLY_REVENUE: f64 = 120_000.0;

/// Revenue base for savings estimates
pub(crate) fn monthly_revenue(input: &AuditInput) -> f64 {
    input.monthly_revenue.unwrap_or(DEFAULT_MONTHLY_REVENUE)
}

/// Offset applied when inventing a previous score for the trend arrow.
/// Cosmetic only; never feeds back into scoring.
pub(crate) const PREV_SCORE_OFFSET: f64 = 3.0;

/// Dead zone around the previous score before an arrow flips
const TREND_DEAD_ZONE: f64 = 2.0;

/// Σ(score·weight) / Σ(weight), rounded to the nearest integer.
/// Zero total weight scores 0, never a division error.
pub fn weighted_average(sub_scores: &[SubScore]) -> f64 {
    let total_weight: f64 = sub_scores.iter().map(|s| s.weight).sum();
    if total_weight <= 0.0 {
        return 0.0;
    }
    let weighted: f64 = sub_scores.iter().map(|s| s.score * s.weight).sum();
    (weighted / total_weight).round()
}

/// GOOD ≥ 75, FAIR ≥ 60, else POOR
pub fn status_for(score: f64) -> Status {
    if score >= 75.0 {
        Status::Good
    } else if score >= 60.0 {
        Status::Fair
    } else {
        Status::Poor
    }
}

/// Resolve an optional numeric field against its documented default.
/// Returns the value plus where it came from.
pub(crate) fn resolve(field: Option<f64>, default: f64, source: Source) -> (f64, DataSource) {
    match field {
        Some(v) => (v, provided_source(source)),
        None => (default, DataSource::Estimated),
    }
}

/// Resolve an optional boolean field the same way
pub(crate) fn resolve_bool(field: Option<bool>, default: bool, source: Source) -> (bool, DataSource) {
    match field {
        Some(v) => (v, provided_source(source)),
        None => (default, DataSource::Estimated),
    }
}

fn provided_source(source: Source) -> DataSource {
    match source {
        Source::Internal => DataSource::Internal,
        Source::External => DataSource::Questionnaire,
    }
}

/// Fraction of sub-scores backed by real (non-estimated) data
pub(crate) fn counted_completeness(sub_scores: &[SubScore]) -> f64 {
    if sub_scores.is_empty() {
        return 0.0;
    }
    let real = sub_scores
        .iter()
        .filter(|s| s.data_source != DataSource::Estimated)
        .count();
    real as f64 / sub_scores.len() as f64
}

/// HIGH when the snapshot came from the venue's own systems
pub(crate) fn confidence_for(source: Source) -> Confidence {
    match source {
        Source::Internal => Confidence::High,
        Source::External => Confidence::Medium,
    }
}

pub(crate) fn trend_for(score: f64, prev: f64) -> Trend {
    if score > prev + TREND_DEAD_ZONE {
        Trend::Up
    } else if score < prev - TREND_DEAD_ZONE {
        Trend::Down
    } else {
        Trend::Stable
    }
}

/// Assemble a `ModuleResult` from finished sub-scores.
///
/// `completeness` overrides the counted value for modules whose inputs are
/// too indirect to count per metric (overhead, marketing, compliance).
pub(crate) fn finish_module(
    key: &'static str,
    label: &'static str,
    icon: &'static str,
    weight: f64,
    sub_scores: Vec<SubScore>,
    input: &AuditInput,
    completeness: Option<f64>,
    confidence: Confidence,
) -> ModuleResult {
    let score = weighted_average(&sub_scores);
    let prev_score = input
        .prev_scores
        .get(key)
        .copied()
        .unwrap_or(score - PREV_SCORE_OFFSET);
    let data_completeness = completeness.unwrap_or_else(|| counted_completeness(&sub_scores));

    ModuleResult {
        module: key.to_string(),
        label: label.to_string(),
        icon: icon.to_string(),
        weight,
        score,
        prev_score,
        band: score_band(score),
        trend: trend_for(score, prev_score),
        sub_scores,
        data_completeness,
        confidence,
    }
}
