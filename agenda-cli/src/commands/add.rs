use std::time::Duration;

use agenda_core::meeting::NewMeeting;
use agenda_core::sync::SheetsSync;
use agenda_core::toast::ToastQueue;
use anyhow::Result;
use chrono::NaiveDateTime;
use dialoguer::Input;
use indicatif::ProgressBar;
use owo_colors::OwoColorize;

use crate::render::render_toast;

pub async fn run(
    subject: Option<String>,
    officer: Option<String>,
    location: Option<String>,
    when: Option<String>,
    notes: Option<String>,
) -> Result<()> {
    let interactive =
        subject.is_none() || officer.is_none() || location.is_none() || when.is_none();

    let subject = prompt_if_missing(subject, "  Subject")?;
    let officer = prompt_if_missing(officer, "  Officer")?;
    let location = prompt_if_missing(location, "  Location")?;

    let date_time = match when {
        Some(s) => parse_datetime(&s)?,
        None => prompt_with_retry("  When?", parse_datetime)?,
    };

    let notes = match notes {
        Some(n) => n,
        None if interactive => Input::new()
            .with_prompt("  Notes (skip)")
            .default(String::new())
            .show_default(false)
            .interact_text()?,
        None => String::new(),
    };

    let data = NewMeeting { date_time, subject, officer, location, notes }.normalized();
    let errors = data.validate();
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("  {}", format!("{}: {}", error.field, error.message).red());
        }
        anyhow::bail!("Meeting not saved");
    }

    let (config, mut store) = super::open_store()?;
    let meeting = store.add(data);

    if interactive {
        println!();
    }
    println!(
        "{}",
        format!(
            "  Created: {} ({})",
            meeting.subject,
            meeting.date_time.format("%d/%m/%Y %H:%M")
        )
        .green()
    );

    // The local create is already done; the sync channel's outcome only ever
    // produces a toast.
    let sync = SheetsSync::new(config.script_url);
    if sync.is_configured() {
        let spinner = ProgressBar::new_spinner();
        spinner.set_message("Mirroring to spreadsheet...");
        spinner.enable_steady_tick(Duration::from_millis(80));
        let toast = sync.append(&meeting).await;
        spinner.finish_and_clear();

        let mut toasts = ToastQueue::default();
        if let Some(toast) = toast {
            toasts.push(toast);
        }
        for toast in toasts.drain_live() {
            println!("  {}", render_toast(&toast));
        }
    }

    Ok(())
}

fn prompt_if_missing(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::<String>::new().with_prompt(prompt).interact_text()?),
    }
}

/// Prompt the user with retry on parse errors.
fn prompt_with_retry<F>(prompt: &str, parse: F) -> Result<NaiveDateTime>
where
    F: Fn(&str) -> Result<NaiveDateTime>,
{
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse(&input) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

/// Parse a date/time: the strict form the collection stores first, natural
/// language ("tomorrow 3pm") as a fallback.
pub(crate) fn parse_datetime(input: &str) -> Result<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M") {
        return Ok(dt);
    }
    fuzzydate::parse(input)
        .map_err(|_| anyhow::anyhow!("Could not parse date/time: \"{input}\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_format_parses_without_fuzzing() {
        let dt = parse_datetime("2025-03-20T15:00").unwrap();
        assert_eq!(dt.format("%Y-%m-%dT%H:%M").to_string(), "2025-03-20T15:00");
    }

    #[test]
    fn nonsense_input_is_rejected() {
        assert!(parse_datetime("not a date").is_err());
    }
}
