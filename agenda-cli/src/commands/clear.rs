use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

pub fn run(yes: bool) -> Result<()> {
    let (_, mut store) = super::open_store()?;
    let total = store.meetings().len();

    if total == 0 {
        println!("{}", "The collection is already empty".dimmed());
        return Ok(());
    }

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete all {total} meetings? This cannot be undone"))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "Nothing deleted".dimmed());
            return Ok(());
        }
    }

    store.clear_all();
    println!("{}", format!("Deleted {total} meetings").red());
    Ok(())
}
