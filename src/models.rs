//! Core data models for QuietAudit
//!
//! These models are used throughout the crate for representing
//! module scores, recommendations, and audit results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Score band derived from a 0-100 score via fixed cutoffs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Band::Excellent => write!(f, "excellent"),
            Band::Good => write!(f, "good"),
            Band::Fair => write!(f, "fair"),
            Band::Poor => write!(f, "poor"),
            Band::Critical => write!(f, "critical"),
        }
    }
}

/// Status of a single sub-score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Good,
    Fair,
    Poor,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Good => write!(f, "GOOD"),
            Status::Fair => write!(f, "FAIR"),
            Status::Poor => write!(f, "POOR"),
        }
    }
}

/// Recommendation priority
///
/// Variant order matters: the aggregator stable-sorts recommendations
/// by this ordering (HIGH first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "HIGH"),
            Priority::Medium => write!(f, "MEDIUM"),
            Priority::Low => write!(f, "LOW"),
        }
    }
}

/// Implementation difficulty of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Low => write!(f, "LOW"),
            Difficulty::Medium => write!(f, "MEDIUM"),
            Difficulty::High => write!(f, "HIGH"),
        }
    }
}

/// Where a sub-score's underlying metric came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataSource {
    Internal,
    Document,
    Questionnaire,
    Estimated,
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Internal => write!(f, "internal"),
            DataSource::Document => write!(f, "document"),
            DataSource::Questionnaire => write!(f, "questionnaire"),
            DataSource::Estimated => write!(f, "estimated"),
        }
    }
}

/// Confidence in a module result or the overall audit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::High => write!(f, "HIGH"),
            Confidence::Medium => write!(f, "MEDIUM"),
            Confidence::Low => write!(f, "LOW"),
        }
    }
}

/// Trend arrow versus the previous audit (cosmetic only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// A costed corrective action attached to a sub-score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    /// What to do
    pub action: String,
    /// How to do it
    pub how: String,
    /// Estimated monthly impact. Negative values are proposed spend
    /// (an investment expected to lift revenue), not a cost saving.
    pub savings_monthly: f64,
    /// One-off exposure removed by acting (fines, back-pay). Not monthly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liability_reduction: Option<f64>,
    pub difficulty: Difficulty,
    /// Display string, e.g. "2-4 weeks"
    pub time_to_effect: String,
    pub priority: Priority,
    /// Display name of the owning module
    pub module: String,
}

/// One scored metric inside a module
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubScore {
    pub name: String,
    /// Share of this sub-score within its module (0-1)
    pub weight: f64,
    /// 0-100
    pub score: f64,
    /// Current value, formatted for display
    pub value: String,
    /// Target value, formatted for display
    pub target: String,
    pub status: Status,
    pub data_source: DataSource,
    /// Present only when this sub-score's violation predicate held
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<Recommendation>,
}

/// Result for one of the seven functional modules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleResult {
    /// Stable key, e.g. "food"
    pub module: String,
    /// Display label, e.g. "Food & Kitchen"
    pub label: String,
    /// Display icon
    pub icon: String,
    /// This module's share of the overall score
    pub weight: f64,
    /// 0-100, weighted average of sub-scores
    pub score: f64,
    pub prev_score: f64,
    pub band: Band,
    pub trend: Trend,
    pub sub_scores: Vec<SubScore>,
    /// 0-1: how much of the module was scored from real data
    pub data_completeness: f64,
    pub confidence: Confidence,
}

/// Full result of one audit run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditResult {
    pub overall_score: f64,
    pub overall_band: Band,
    pub venue_type: String,
    pub generated_at: DateTime<Utc>,
    pub modules: Vec<ModuleResult>,
    /// All recommendations across all modules, priority-sorted
    pub recommendations: Vec<Recommendation>,
    /// 12 × Σ max(0, savings_monthly); investments excluded
    pub total_annual_savings: f64,
    /// Σ liability_reduction across recommendations
    pub total_liabilities: f64,
    /// Mean of the seven modules' completeness
    pub data_completeness: f64,
    pub confidence: Confidence,
    pub compliance_red_lines: Vec<String>,
}

/// Executive summary built from an AuditResult
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoverySummary {
    pub total_annual_savings: f64,
    pub total_liabilities: f64,
    /// HIGH priority, not HIGH difficulty
    pub immediate_actions: Vec<Recommendation>,
    /// HIGH priority + HIGH difficulty, or MEDIUM priority
    pub short_term_actions: Vec<Recommendation>,
    /// LOW priority
    pub medium_term_actions: Vec<Recommendation>,
    /// Annualized recoverable savings plus one-off liability reductions
    pub found_money: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::High < Priority::Medium);
        assert!(Priority::Medium < Priority::Low);
    }

    #[test]
    fn test_enum_wire_format() {
        assert_eq!(serde_json::to_string(&Status::Good).unwrap(), "\"GOOD\"");
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"HIGH\"");
        assert_eq!(
            serde_json::to_string(&Band::Critical).unwrap(),
            "\"critical\""
        );
        assert_eq!(serde_json::to_string(&Trend::Up).unwrap(), "\"up\"");
        assert_eq!(
            serde_json::to_string(&DataSource::Questionnaire).unwrap(),
            "\"QUESTIONNAIRE\""
        );
    }

    #[test]
    fn test_recommendation_roundtrip() {
        let rec = Recommendation {
            action: "Renegotiate supplier pricing".into(),
            how: "Tender the top 10 SKUs across three suppliers".into(),
            savings_monthly: 1800.0,
            liability_reduction: None,
            difficulty: Difficulty::Medium,
            time_to_effect: "4-6 weeks".into(),
            priority: Priority::High,
            module: "Food & Kitchen".into(),
        };
        let json = serde_json::to_string(&rec).unwrap();
        assert!(!json.contains("liability_reduction"));
        let back: Recommendation = serde_json::from_str(&json).unwrap();
        assert_eq!(back.priority, Priority::High);
        assert_eq!(back.savings_monthly, 1800.0);
    }
}
