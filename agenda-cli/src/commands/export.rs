use std::path::PathBuf;

use agenda_core::export::{PdfExporter, table_document, to_csv};
use anyhow::Result;
use owo_colors::OwoColorize;

use crate::pdf::PdfWriter;

pub fn run_csv(output: Option<PathBuf>) -> Result<()> {
    let (_, store) = super::open_store()?;
    let path = output.unwrap_or_else(|| PathBuf::from("todas_reunioes.csv"));

    std::fs::write(&path, to_csv(store.meetings()))?;
    println!(
        "{}",
        format!("Wrote {} ({} records)", path.display(), store.meetings().len()).green()
    );
    Ok(())
}

pub fn run_pdf(output: Option<PathBuf>) -> Result<()> {
    let (_, store) = super::open_store()?;
    let path = output.unwrap_or_else(|| PathBuf::from("todas_reunioes.pdf"));

    let bytes = PdfWriter.render_table(&table_document(store.meetings()))?;
    std::fs::write(&path, bytes)?;
    println!(
        "{}",
        format!("Wrote {} ({} records)", path.display(), store.meetings().len()).green()
    );
    Ok(())
}
