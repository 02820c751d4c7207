//! Field projection example for restcountries-rs
//!
//! Shows how query results are reduced to the fields a client asks for,
//! the way a `?fields=` request parameter would drive it.

use restcountries_core::{
    project, project_with, CountryIndex, CountrySearch, DefaultBackend, FieldSelection, Projected,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let index = CountryIndex::bundled()?;

    let Some(japan) = index.get_by_code("JP")? else {
        return Err("bundled dataset lacks Japan".into());
    };

    println!("--- Default projection (derived common/official hidden) ---");
    let full: Projected<'_, DefaultBackend> = project(japan, &[] as &[&str]);
    println!("{}\n", serde_json::to_string_pretty(&full)?);

    println!("--- fields=name,cca3 ---");
    let narrow: Projected<'_, DefaultBackend> = project(japan, &["name", "cca3"]);
    println!("{}\n", serde_json::to_string(&narrow)?);

    // Tokens match inside field names: "cap" keeps capital and capitalInfo.
    println!("--- fields=cap over Europe ---");
    let europe = index.search(|c| c.region() == "Europe");
    let selection = FieldSelection::parse("cca3;cap");
    let projected: Projected<'_, DefaultBackend> = project_with(europe, &selection);
    println!("{}", serde_json::to_string_pretty(&projected)?);

    Ok(())
}
