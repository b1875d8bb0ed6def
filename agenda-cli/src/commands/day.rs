use agenda_core::views;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use owo_colors::OwoColorize;

use crate::render::meeting_block;

pub fn run(date: Option<&str>) -> Result<()> {
    let date = match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| anyhow::anyhow!("Invalid date format '{s}'. Expected YYYY-MM-DD"))?,
        None => Local::now().date_naive(),
    };

    let (_, store) = super::open_store()?;
    let meetings = views::on_day(store.meetings(), date);

    println!("{}", format!("Meetings for {}", date.format("%d/%m/%Y")).bold());
    if meetings.is_empty() {
        println!("{}", "  No meetings scheduled".dimmed());
        return Ok(());
    }
    for meeting in meetings {
        println!("{}", meeting_block(meeting, "%H:%M"));
    }
    Ok(())
}
