use std::path::PathBuf;

use agenda_core::export::{PdfExporter, card_document};
use agenda_core::views;
use anyhow::Result;
use owo_colors::OwoColorize;

use crate::pdf::PdfWriter;
use crate::render::meeting_block;

pub fn run(
    name: Option<String>,
    month: Option<u32>,
    year: Option<i32>,
    pdf: Option<PathBuf>,
) -> Result<()> {
    let (_, store) = super::open_store()?;

    let Some(name) = name else {
        let officers = views::distinct_officers(store.meetings());
        if officers.is_empty() {
            println!("{}", "No active meetings to consult".dimmed());
            return Ok(());
        }
        println!("{}", "Officers:".bold());
        for officer in officers {
            println!("  {officer}");
        }
        let years = views::available_years(store.meetings());
        let years: Vec<String> = years.iter().map(|y| y.to_string()).collect();
        println!("{}", format!("Years: {}", years.join(", ")).dimmed());
        return Ok(());
    };

    if let Some(month) = month
        && !(1..=12).contains(&month)
    {
        anyhow::bail!("Invalid month {month}. Expected 1-12");
    }

    let meetings = views::consult(store.meetings(), &name, month, year);

    if let Some(path) = pdf {
        let doc = card_document(&name, &meetings);
        let bytes = PdfWriter.render_cards(&doc)?;
        std::fs::write(&path, bytes)?;
        println!("{}", format!("Wrote {}", path.display()).green());
        return Ok(());
    }

    println!("{}", format!("Meetings of {name}").bold());
    if meetings.is_empty() {
        println!("{}", "  None found".dimmed());
        return Ok(());
    }
    for meeting in meetings {
        println!("{}", meeting_block(meeting, "%d/%m/%Y %H:%M"));
    }
    Ok(())
}
