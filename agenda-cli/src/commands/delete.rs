use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

pub fn run(id: &str, yes: bool) -> Result<()> {
    let (_, mut store) = super::open_store()?;

    let Some(subject) = store.get(id).map(|m| m.subject.clone()) else {
        anyhow::bail!("No meeting with id {id}");
    };

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Permanently delete \"{subject}\"? This cannot be undone"))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "Nothing deleted".dimmed());
            return Ok(());
        }
    }

    store.delete_permanently(id);
    println!("{}", format!("Deleted: {subject}").red());
    Ok(())
}
