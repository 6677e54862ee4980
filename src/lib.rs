//! QuietAudit - operations audit engine for hospitality venues
//!
//! Scores a venue across seven operational modules against venue-type
//! benchmarks, flags compliance red lines, and turns the gaps into a
//! priced recovery plan.

pub mod benchmarks;
pub mod cli;
pub mod config;
pub mod input;
pub mod models;
pub mod reporters;
pub mod scorers;
pub mod summary;
