//! FAQ pack listing.

use anyhow::Result;
use comfy_table::{presets, Cell, ContentArrangement, Table};

use helpdesk_types::faq::FaqSummary;

use crate::state::AppState;

/// Print the questions of the loaded pack as a table (or JSON).
pub fn list_faqs(state: &AppState, json: bool) -> Result<()> {
    let summaries = FaqSummary::from_pack(&state.pack);

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Question"]);

    for summary in &summaries {
        table.add_row(vec![
            Cell::new(summary.id),
            Cell::new(&summary.question),
        ]);
    }

    println!("{table}");
    println!(
        "  {} entries (built {})",
        summaries.len(),
        state.pack.built_at.format("%Y-%m-%d")
    );

    Ok(())
}
