//! Project configuration
//!
//! Loads optional settings from a `quietaudit.toml` next to the snapshot
//! (or the working directory). Supports CLI defaults and partial per-venue
//! benchmark overrides:
//!
//! ```toml
//! # quietaudit.toml
//!
//! [defaults]
//! format = "text"
//!
//! [benchmarks.casual_dining]
//! food_cost_pct = 31.0
//! labour_cost_pct = 29.0
//! ```
//!
//! Overrides are applied at the CLI seam before the engine runs; the core
//! registry itself is never mutated. A malformed file warns and falls back
//! to defaults rather than failing the audit.

use crate::benchmarks::VenueBenchmarks;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

pub const CONFIG_FILE: &str = "quietaudit.toml";

/// CLI defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CliDefaults {
    /// Default output format when --format is not given
    pub format: Option<String>,
}

/// Partial benchmark override for one venue type: only set fields replace
/// the registry values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BenchmarkOverride {
    pub food_cost_pct: Option<f64>,
    pub pour_cost_pct: Option<f64>,
    pub labour_cost_pct: Option<f64>,
    pub occupancy_cost_pct: Option<f64>,
    pub prime_cost_pct: Option<f64>,
    pub net_profit_pct: Option<f64>,
    pub bev_revenue_mix_pct: Option<f64>,
    pub marketing_spend_pct: Option<f64>,
    pub waste_pct: Option<f64>,
    pub dead_stock_pct: Option<f64>,
    pub covers_per_labour_hour: Option<f64>,
    pub table_turns_per_service: Option<f64>,
}

impl BenchmarkOverride {
    /// Apply the set fields on top of a registry benchmark set
    pub fn apply(&self, bench: &mut VenueBenchmarks) {
        macro_rules! set {
            ($field:ident) => {
                if let Some(v) = self.$field {
                    bench.$field = v;
                }
            };
        }
        set!(food_cost_pct);
        set!(pour_cost_pct);
        set!(labour_cost_pct);
        set!(occupancy_cost_pct);
        set!(prime_cost_pct);
        set!(net_profit_pct);
        set!(bev_revenue_mix_pct);
        set!(marketing_spend_pct);
        set!(waste_pct);
        set!(dead_stock_pct);
        set!(covers_per_labour_hour);
        set!(table_turns_per_service);
    }
}

/// Parsed quietaudit.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub defaults: CliDefaults,
    /// Keyed by venue type key, e.g. "casual_dining"
    pub benchmarks: HashMap<String, BenchmarkOverride>,
}

impl ProjectConfig {
    /// Benchmark override for a venue type key, if configured
    pub fn benchmark_override(&self, venue_key: &str) -> Option<&BenchmarkOverride> {
        self.benchmarks.get(venue_key)
    }
}

/// Load config from a directory, falling back to defaults when the file is
/// missing or malformed.
pub fn load_config(dir: &Path) -> ProjectConfig {
    let path = dir.join(CONFIG_FILE);
    let Ok(text) = std::fs::read_to_string(&path) else {
        debug!("no {} found in {}", CONFIG_FILE, dir.display());
        return ProjectConfig::default();
    };
    match toml::from_str(&text) {
        Ok(config) => {
            debug!("loaded config from {}", path.display());
            config
        }
        Err(e) => {
            warn!("ignoring malformed {}: {}", path.display(), e);
            ProjectConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmarks;
    use crate::input::VenueType;

    #[test]
    fn test_override_applies_only_set_fields() {
        let config: ProjectConfig = toml::from_str(
            r#"
            [defaults]
            format = "json"

            [benchmarks.casual_dining]
            food_cost_pct = 31.0
            "#,
        )
        .unwrap();

        assert_eq!(config.defaults.format.as_deref(), Some("json"));
        let mut bench = benchmarks::for_venue(VenueType::CasualDining);
        let labour_before = bench.labour_cost_pct;
        config
            .benchmark_override("casual_dining")
            .unwrap()
            .apply(&mut bench);
        assert_eq!(bench.food_cost_pct, 31.0);
        assert_eq!(bench.labour_cost_pct, labour_before);
    }

    #[test]
    fn test_missing_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path());
        assert!(config.benchmarks.is_empty());
        assert!(config.defaults.format.is_none());
    }

    #[test]
    fn test_malformed_file_warns_and_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "not [valid toml").unwrap();
        let config = load_config(dir.path());
        assert!(config.benchmarks.is_empty());
    }
}
