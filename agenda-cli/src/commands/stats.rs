use agenda_core::date_range::DateRange;
use agenda_core::export::ChartRenderer;
use agenda_core::views::RangeStats;
use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render::TermChart;

pub fn run(from: Option<&str>, to: Option<&str>) -> Result<()> {
    let range = DateRange::from_args(from, to).map_err(|e| anyhow::anyhow!(e))?;

    let (_, store) = super::open_store()?;
    let stats = RangeStats::compute(store.meetings(), &range);

    println!(
        "{}",
        format!(
            "Statistics {} to {}",
            range.from.format("%d/%m/%Y"),
            range.to.format("%d/%m/%Y")
        )
        .bold()
    );
    println!("  Meetings: {}", stats.total.to_string().bold());
    match stats.top_officer() {
        Some((officer, count)) => {
            println!("  Top officer: {} ({count})", officer.bold());
        }
        None => println!("  Top officer: {}", "N/A".dimmed()),
    }

    let data = stats.chart_data();
    if !data.is_empty() {
        println!();
        print!("{}", TermChart::default().render("Meetings per officer", &data));
    }
    Ok(())
}
