//! Benchmark registry
//!
//! Per-venue-type target values plus the shared threshold-table lookup that
//! every scorer builds on. Pure lookup; no I/O and no failure modes — an
//! unknown venue type resolves to the casual-dining set.

use crate::input::VenueType;
use crate::models::Band;
use serde::{Deserialize, Serialize};

/// Target values for one venue type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VenueBenchmarks {
    pub food_cost_pct: f64,
    pub pour_cost_pct: f64,
    pub labour_cost_pct: f64,
    pub occupancy_cost_pct: f64,
    pub prime_cost_pct: f64,
    pub net_profit_pct: f64,
    pub bev_revenue_mix_pct: f64,
    pub marketing_spend_pct: f64,
    pub waste_pct: f64,
    pub dead_stock_pct: f64,
    pub covers_per_labour_hour: f64,
    pub table_turns_per_service: f64,
}

const FINE_DINING: VenueBenchmarks = VenueBenchmarks {
    food_cost_pct: 32.0,
    pour_cost_pct: 22.0,
    labour_cost_pct: 33.0,
    occupancy_cost_pct: 9.0,
    prime_cost_pct: 65.0,
    net_profit_pct: 10.0,
    bev_revenue_mix_pct: 30.0,
    marketing_spend_pct: 3.0,
    waste_pct: 2.0,
    dead_stock_pct: 8.0,
    covers_per_labour_hour: 2.5,
    table_turns_per_service: 1.2,
};

const CASUAL_DINING: VenueBenchmarks = VenueBenchmarks {
    food_cost_pct: 30.0,
    pour_cost_pct: 20.0,
    labour_cost_pct: 30.0,
    occupancy_cost_pct: 8.0,
    prime_cost_pct: 60.0,
    net_profit_pct: 12.0,
    bev_revenue_mix_pct: 25.0,
    marketing_spend_pct: 4.0,
    waste_pct: 3.0,
    dead_stock_pct: 10.0,
    covers_per_labour_hour: 4.0,
    table_turns_per_service: 1.8,
};

const CAFE: VenueBenchmarks = VenueBenchmarks {
    food_cost_pct: 28.0,
    pour_cost_pct: 25.0,
    labour_cost_pct: 32.0,
    occupancy_cost_pct: 11.0,
    prime_cost_pct: 60.0,
    net_profit_pct: 12.0,
    bev_revenue_mix_pct: 15.0,
    marketing_spend_pct: 3.0,
    waste_pct: 4.0,
    dead_stock_pct: 10.0,
    covers_per_labour_hour: 5.0,
    table_turns_per_service: 2.5,
};

const BAR_PUB: VenueBenchmarks = VenueBenchmarks {
    food_cost_pct: 28.0,
    pour_cost_pct: 18.0,
    labour_cost_pct: 28.0,
    occupancy_cost_pct: 8.0,
    prime_cost_pct: 56.0,
    net_profit_pct: 15.0,
    bev_revenue_mix_pct: 55.0,
    marketing_spend_pct: 4.0,
    waste_pct: 2.0,
    dead_stock_pct: 12.0,
    covers_per_labour_hour: 4.5,
    table_turns_per_service: 1.5,
};

const FAST_CASUAL: VenueBenchmarks = VenueBenchmarks {
    food_cost_pct: 25.0,
    pour_cost_pct: 22.0,
    labour_cost_pct: 26.0,
    occupancy_cost_pct: 10.0,
    prime_cost_pct: 51.0,
    net_profit_pct: 15.0,
    bev_revenue_mix_pct: 15.0,
    marketing_spend_pct: 5.0,
    waste_pct: 3.0,
    dead_stock_pct: 8.0,
    covers_per_labour_hour: 6.0,
    table_turns_per_service: 3.0,
};

/// Look up the benchmark set for a venue type. Never fails.
pub fn for_venue(venue_type: VenueType) -> VenueBenchmarks {
    match venue_type {
        VenueType::FineDining => FINE_DINING,
        VenueType::CasualDining => CASUAL_DINING,
        VenueType::Cafe => CAFE,
        VenueType::BarPub => BAR_PUB,
        VenueType::FastCasual => FAST_CASUAL,
    }
}

/// One band of a threshold table: values up to and including `bound`
/// score `score`.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdEntry {
    pub bound: f64,
    pub score: f64,
}

/// Shorthand for table literals
pub const fn t(bound: f64, score: f64) -> ThresholdEntry {
    ThresholdEntry { bound, score }
}

/// First-match scan over an ascending-by-bound table.
///
/// Tables end in an `f64::INFINITY` sentinel, so the trailing fallback is
/// normally unreachable; an empty table scores 0 rather than panicking.
pub fn score_from_thresholds(value: f64, table: &[ThresholdEntry]) -> f64 {
    for entry in table {
        if value <= entry.bound {
            return entry.score;
        }
    }
    table.last().map(|e| e.score).unwrap_or(0.0)
}

/// Band cutoffs shared by module and overall scores
pub fn score_band(score: f64) -> Band {
    if score >= 90.0 {
        Band::Excellent
    } else if score >= 75.0 {
        Band::Good
    } else if score >= 60.0 {
        Band::Fair
    } else if score >= 40.0 {
        Band::Poor
    } else {
        Band::Critical
    }
}

/// Inverse-direction step function for net profit, the one metric where
/// more is better.
pub fn score_net_profit(pct: f64) -> f64 {
    if pct >= 15.0 {
        100.0
    } else if pct >= 10.0 {
        85.0
    } else if pct >= 7.0 {
        70.0
    } else if pct >= 4.0 {
        55.0
    } else if pct >= 1.0 {
        40.0
    } else if pct >= 0.0 {
        25.0
    } else {
        10.0
    }
}
