use anyhow::Result;
use owo_colors::OwoColorize;

pub fn run(
    id: &str,
    subject: Option<String>,
    officer: Option<String>,
    location: Option<String>,
    when: Option<String>,
    notes: Option<String>,
    restore: bool,
) -> Result<()> {
    let (_, mut store) = super::open_store()?;

    let Some(existing) = store.get(id) else {
        anyhow::bail!("No meeting with id {id}");
    };
    let mut meeting = existing.clone();

    if let Some(subject) = subject {
        meeting.subject = subject.trim().to_string();
    }
    if let Some(officer) = officer {
        meeting.officer = officer.trim().to_string();
    }
    if let Some(location) = location {
        meeting.location = location.trim().to_string();
    }
    if let Some(when) = when {
        meeting.date_time = super::add::parse_datetime(&when)?;
    }
    if let Some(notes) = notes {
        meeting.notes = notes.trim().to_string();
    }
    if restore {
        meeting.is_deleted = false;
    }

    for (field, value) in [
        ("subject", &meeting.subject),
        ("officer", &meeting.officer),
        ("location", &meeting.location),
    ] {
        if value.is_empty() {
            anyhow::bail!("{field} cannot be emptied");
        }
    }

    store.update(meeting.clone());
    println!(
        "{}",
        format!(
            "Updated: {} ({})",
            meeting.subject,
            meeting.date_time.format("%d/%m/%Y %H:%M")
        )
        .green()
    );
    if restore {
        println!("{}", "Restored to the active views".green());
    }
    Ok(())
}
