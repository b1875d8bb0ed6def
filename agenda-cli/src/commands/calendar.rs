use agenda_core::views;
use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use owo_colors::OwoColorize;

const DAY_HEADER: &str = "Su Mo Tu We Th Fr Sa";

pub fn run(month: Option<&str>) -> Result<()> {
    let today = Local::now().date_naive();
    let (year, month) = match month {
        Some(s) => parse_month(s)?,
        None => (today.year(), today.month()),
    };

    let (_, store) = super::open_store()?;
    let marked = views::meeting_days(store.meetings(), year, month);

    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| anyhow::anyhow!("Invalid month"))?;

    println!("{}", first.format("%B %Y").to_string().bold());
    println!("{}", DAY_HEADER.dimmed());

    let mut week: Vec<String> = Vec::new();
    for _ in 0..first.weekday().num_days_from_sunday() {
        week.push("  ".to_string());
    }
    for day in 1..=days_in_month(year, month) {
        let cell = format!("{day:>2}");
        let is_today = year == today.year() && month == today.month() && day == today.day();
        let cell = if is_today {
            cell.reversed().to_string()
        } else if marked.contains(&day) {
            cell.green().bold().to_string()
        } else {
            cell
        };
        week.push(cell);
        if week.len() == 7 {
            println!("{}", week.join(" "));
            week.clear();
        }
    }
    if !week.is_empty() {
        println!("{}", week.join(" "));
    }

    if !marked.is_empty() {
        let days: Vec<String> = marked.iter().map(|d| d.to_string()).collect();
        println!();
        println!("{}", format!("Meetings on: {}", days.join(", ")).dimmed());
    }
    Ok(())
}

fn parse_month(s: &str) -> Result<(i32, u32)> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() == 2
        && let (Ok(year), Ok(month)) = (parts[0].parse::<i32>(), parts[1].parse::<u32>())
        && (1..=12).contains(&month)
    {
        return Ok((year, month));
    }
    anyhow::bail!("Invalid month '{}'. Expected YYYY-MM", s)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next_month
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_year_month_pairs() {
        assert_eq!(parse_month("2024-03").unwrap(), (2024, 3));
        assert!(parse_month("2024-13").is_err());
        assert!(parse_month("march").is_err());
    }

    #[test]
    fn knows_month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 4), 30);
    }
}
