//! Benchmarks command - print the targets for a venue type

use crate::benchmarks::for_venue;
use crate::input::VenueType;
use anyhow::Result;
use console::style;

pub fn run(venue_type: &str) -> Result<()> {
    let venue = VenueType::parse_or_default(venue_type);
    if venue.key() != venue_type {
        println!(
            "{} Unknown venue type '{}', showing {}",
            style("!").yellow(),
            venue_type,
            style(venue.key()).cyan()
        );
    }
    let b = for_venue(venue);

    println!("\n{} Benchmarks — {}\n", style("📊").bold(), style(venue.key()).bold());
    let rows = [
        ("Food cost", b.food_cost_pct, "% of food revenue"),
        ("Pour cost", b.pour_cost_pct, "% of beverage revenue"),
        ("Labour cost", b.labour_cost_pct, "% of revenue"),
        ("Occupancy cost", b.occupancy_cost_pct, "% of revenue"),
        ("Prime cost", b.prime_cost_pct, "% of revenue"),
        ("Net profit", b.net_profit_pct, "% of revenue"),
        ("Beverage mix", b.bev_revenue_mix_pct, "% of revenue"),
        ("Marketing spend", b.marketing_spend_pct, "% of revenue"),
        ("Food waste", b.waste_pct, "% of purchases"),
        ("Dead stock", b.dead_stock_pct, "% of beverage SKUs"),
        ("Covers / labour hour", b.covers_per_labour_hour, ""),
        ("Table turns / service", b.table_turns_per_service, ""),
    ];
    for (label, value, unit) in rows {
        println!("  {:<24} {:>6.1}  {}", label, value, style(unit).dim());
    }
    println!();

    Ok(())
}
