use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

pub fn run(content: Option<&Path>) -> Result<(), String> {
    let content = super::load_content(content)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Table", "Entries"]);
    for (name, count) in [
        ("Rooms", content.rooms().count()),
        ("Objects", content.objects().count()),
        ("Vocabulary", content.vocabulary_len()),
        ("Travel edges", content.travel_len()),
        ("Messages", content.messages_len()),
        ("Dwarf slots", content.threat().slots),
        ("Dwarf schedule", content.threat().schedule.len()),
    ] {
        table.add_row(vec![name.to_string(), count.to_string()]);
    }

    println!(
        "  {} for '{}'.",
        "All checks passed".green().bold(),
        content.title()
    );
    println!("{table}");

    Ok(())
}
