//! Basic usage example for restcountries-rs
//!
//! This example demonstrates how to:
//! - Load the bundled country catalogue
//! - Look countries up by code and by name
//! - Run attribute searches and arbitrary predicates

use restcountries_core::{CountryIndex, CountryQuery, CountrySearch, Result};

fn main() -> Result<()> {
    println!("=== restcountries-rs Basic Usage Example ===\n");

    let index = CountryIndex::bundled()?;
    let stats = index.stats();
    println!(
        "Loaded {} countries ({} independent, {} UN members, {} regions)\n",
        stats.countries, stats.independent, stats.un_members, stats.regions
    );

    println!("--- Example 1: List all countries ---");
    for country in index.get_all() {
        println!("{} {} ({})", country.cca3(), country.common_name(), country.cca2());
    }
    println!();

    println!("--- Example 2: Lookup by code ---");
    for code in ["de", "DEU", "276", "GER", "ZZ1"] {
        match index.get_by_code(code)? {
            Some(c) => println!(
                "{code:>4} -> {} (capital: {}, area: {} km²)",
                c.common_name(),
                c.capital().unwrap_or("-"),
                c.area().map_or_else(|| "-".to_string(), |km2| format!("{km2:.0}")),
            ),
            None => println!("{code:>4} -> not found"),
        }
    }
    println!();

    println!("--- Example 3: Lookup by a code list ---");
    for c in index.get_by_codes("us,FRA;840") {
        println!("- {}", c.official_name());
    }
    println!();

    println!("--- Example 4: Names ---");
    if let Some(c) = index.get_by_name("united-states") {
        println!("Best match for 'united-states': {}", c.official_name());
    }
    if let Some(c) = index.get_by_name("Schweiz") {
        println!("Native name 'Schweiz' belongs to: {}", c.common_name());
    }
    let united = index.search_by_name_part("united");
    println!("Names containing 'united': {}", united.len());
    for c in united {
        println!("- {}", c.common_name());
    }
    println!();

    println!("--- Example 5: Attribute queries ---");
    let euro = index.search_query(&CountryQuery::Currency("EUR".into()));
    println!(
        "Using the euro: {}",
        euro.iter().map(|c| c.common_name()).collect::<Vec<_>>().join(", ")
    );
    let western = index.search_query(&CountryQuery::Subregion("Western Europe".into()));
    println!("Western Europe: {}", western.len());
    println!();

    println!("--- Example 6: Custom predicate ---");
    let big = index.search(|c| c.population().is_some_and(|p| p > 100_000_000));
    for c in big {
        println!("- {} ({} people)", c.common_name(), c.population().unwrap_or_default());
    }

    Ok(())
}
