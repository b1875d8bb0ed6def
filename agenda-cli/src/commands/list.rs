use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render::{status_badge, truncate};

pub fn run() -> Result<()> {
    let (_, store) = super::open_store()?;

    if store.meetings().is_empty() {
        println!("{}", "No meetings recorded".dimmed());
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "{:<36}  {:<16}  {:<30}  {:<20}  {}",
            "ID", "Data/Hora", "Assunto", "Oficial", "Status"
        )
        .bold()
    );
    for meeting in store.meetings() {
        let row = format!(
            "{:<36}  {:<16}  {:<30}  {:<20}  ",
            meeting.id,
            meeting.date_time.format("%d/%m/%Y %H:%M"),
            truncate(&meeting.subject, 30),
            truncate(&meeting.officer, 20),
        );
        if meeting.is_deleted {
            println!("{}{}", row.dimmed(), status_badge(meeting));
        } else {
            println!("{}{}", row, status_badge(meeting));
        }
    }

    let active = store.active().count();
    let total = store.meetings().len();
    println!();
    println!("{}", format!("{active} active, {total} total").dimmed());
    Ok(())
}
