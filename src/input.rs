//! Audit input snapshot
//!
//! One flat JSON document per audit run, split into one optional sub-record
//! per functional module. Every field is optional: each scorer substitutes a
//! documented default for anything missing, so an empty object is a valid
//! (fully estimated) snapshot.
//!
//! The engine never validates these values; malformed upstream data is the
//! caller's problem before the snapshot is built.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Venue categories with distinct benchmark sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VenueType {
    FineDining,
    #[default]
    CasualDining,
    Cafe,
    BarPub,
    FastCasual,
}

impl VenueType {
    /// Parse a venue type string. Unknown values fall back to casual dining
    /// rather than erroring; the registry must always resolve.
    pub fn parse_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "fine_dining" => VenueType::FineDining,
            "casual_dining" => VenueType::CasualDining,
            "cafe" => VenueType::Cafe,
            "bar_pub" => VenueType::BarPub,
            "fast_casual" => VenueType::FastCasual,
            _ => VenueType::CasualDining,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            VenueType::FineDining => "fine_dining",
            VenueType::CasualDining => "casual_dining",
            VenueType::Cafe => "cafe",
            VenueType::BarPub => "bar_pub",
            VenueType::FastCasual => "fast_casual",
        }
    }
}

impl std::fmt::Display for VenueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// How the snapshot was sourced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Source {
    /// Pulled from the venue's own POS / payroll / accounting systems
    Internal,
    /// Assembled from questionnaires and documents
    #[default]
    External,
}

/// Errors loading a snapshot file
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("snapshot file '{path}' is not valid JSON: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Food & kitchen metrics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodInput {
    /// Measured food cost as % of food revenue
    pub actual_food_cost_pct: Option<f64>,
    /// Recipe-theoretical food cost %
    pub theoretical_food_cost_pct: Option<f64>,
    /// Menu engineering: % of items that are stars (high margin, high volume)
    pub stars_pct: Option<f64>,
    /// Menu engineering: % of items that are plowhorses (low margin, high volume)
    pub plowhorses_pct: Option<f64>,
    pub tracks_waste: Option<bool>,
    /// Recorded waste as % of food purchases
    pub waste_pct: Option<f64>,
    pub uses_prep_lists: Option<bool>,
    /// % of prep list items completed on time
    pub prep_completion_pct: Option<f64>,
    pub stocktakes_per_month: Option<f64>,
}

/// Beverage program metrics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BeverageInput {
    /// Beverage cost as % of beverage revenue
    pub pour_cost_pct: Option<f64>,
    /// Beverage share of total revenue, %
    pub bev_revenue_mix_pct: Option<f64>,
    /// % of beverage SKUs with no movement inside the review window
    pub dead_stock_pct: Option<f64>,
    /// Jiggers, measured pourers, or guns in use
    pub uses_jiggers: Option<bool>,
    pub stocktakes_per_month: Option<f64>,
}

/// Labour and rostering metrics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LabourInput {
    /// Total labour cost as % of revenue
    pub labour_cost_pct: Option<f64>,
    pub covers_per_labour_hour: Option<f64>,
    /// |rostered hours - actual hours| as % of rostered
    pub roster_variance_pct: Option<f64>,
    /// Overtime hours as % of total hours
    pub overtime_pct: Option<f64>,
    pub headcount: Option<f64>,
    pub award_compliant: Option<bool>,
    pub super_rate_pct: Option<f64>,
    pub super_paid_on_time: Option<bool>,
}

/// Occupancy and fixed-cost metrics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OverheadInput {
    /// Food + labour as % of revenue; computed from the food/labour
    /// records when absent
    pub prime_cost_pct: Option<f64>,
    pub net_profit_pct: Option<f64>,
    /// Rent + outgoings as % of revenue
    pub occupancy_cost_pct: Option<f64>,
    pub utilities_pct: Option<f64>,
    /// Software, subscriptions, admin as % of revenue
    pub admin_pct: Option<f64>,
}

/// Front-of-house and cash-control metrics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceInput {
    /// Average public review score, 0-5
    pub avg_review_score: Option<f64>,
    /// % of reviews that get a response
    pub review_response_rate_pct: Option<f64>,
    /// Till variance as % of cash takings
    pub cash_variance_pct: Option<f64>,
    /// Discounts + comps as % of revenue
    pub discount_pct: Option<f64>,
    pub table_turns_per_service: Option<f64>,
}

/// Marketing metrics — hardest to verify externally
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketingInput {
    /// Contactable email/SMS database size
    pub database_size: Option<f64>,
    pub campaigns_per_month: Option<f64>,
    /// Nights per week trading below half capacity
    pub quiet_nights_per_week: Option<f64>,
    pub social_posts_per_week: Option<f64>,
    pub marketing_spend_pct: Option<f64>,
}

/// Regulatory and statutory flags
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplianceInput {
    pub liquor_license_current: Option<bool>,
    pub food_safety_cert_current: Option<bool>,
    pub workers_comp_current: Option<bool>,
    pub written_contracts: Option<bool>,
    pub stp_compliant: Option<bool>,
    pub rsa_current: Option<bool>,
    pub record_retention_months: Option<f64>,
}

/// The full input snapshot for one audit run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditInput {
    /// Venue type key; unknown values resolve to casual_dining
    pub venue_type: Option<String>,
    pub source: Source,
    /// Average monthly revenue, used as the base for savings estimates
    pub monthly_revenue: Option<f64>,
    pub food: FoodInput,
    pub beverage: BeverageInput,
    pub labour: LabourInput,
    pub overhead: OverheadInput,
    pub service: ServiceInput,
    pub marketing: MarketingInput,
    pub compliance: ComplianceInput,
    /// Previous audit's module scores, keyed by module key.
    /// Used only for trend arrows, never for scoring.
    pub prev_scores: HashMap<String, f64>,
}

impl AuditInput {
    /// Resolved venue type (with fallback)
    pub fn venue_type(&self) -> VenueType {
        self.venue_type
            .as_deref()
            .map(VenueType::parse_or_default)
            .unwrap_or_default()
    }

    /// Load a snapshot from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self, SnapshotError> {
        let text = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| SnapshotError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_valid_snapshot() {
        let input: AuditInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input.source, Source::External);
        assert_eq!(input.venue_type(), VenueType::CasualDining);
        assert!(input.food.actual_food_cost_pct.is_none());
    }

    #[test]
    fn test_unknown_venue_type_falls_back() {
        assert_eq!(
            VenueType::parse_or_default("ghost_kitchen"),
            VenueType::CasualDining
        );
        assert_eq!(
            VenueType::parse_or_default("fast_casual"),
            VenueType::FastCasual
        );
        assert_eq!(VenueType::parse_or_default(""), VenueType::CasualDining);
    }

    #[test]
    fn test_partial_snapshot_parses() {
        let json = r#"{
            "venue_type": "fast_casual",
            "source": "INTERNAL",
            "food": { "actual_food_cost_pct": 40.0 },
            "prev_scores": { "food": 62.0 }
        }"#;
        let input: AuditInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.source, Source::Internal);
        assert_eq!(input.food.actual_food_cost_pct, Some(40.0));
        assert!(input.food.theoretical_food_cost_pct.is_none());
        assert_eq!(input.prev_scores.get("food"), Some(&62.0));
    }
}
