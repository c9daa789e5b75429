use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

pub fn run(path: Option<&Path>) -> Result<(), String> {
    let catalog = super::load_catalog(path)?;

    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Name", "Usage", "When", "Effect", "Text"]);
    for card in catalog.cards() {
        table.add_row(vec![
            card.id.clone(),
            card.name.clone(),
            card.usage.to_string(),
            card.precondition.as_str().to_string(),
            card.postcondition.as_str().to_string(),
            card.description.clone(),
        ]);
    }

    println!("{table}");
    println!(
        "  {} {}",
        format!("{} cards", catalog.len()).bold(),
        "all expressions valid".dimmed()
    );
    Ok(())
}
