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
            .with_prompt(format!("Archive \"{subject}\"?"))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "Nothing archived".dimmed());
            return Ok(());
        }
    }

    store.archive(id);
    println!("{}", format!("Archived: {subject}").green());
    println!("{}", "It stays listed under `agenda list` and in exports".dimmed());
    Ok(())
}
