use agenda_core::config::AgendaConfig;
use agenda_core::toast::{Toast, ToastQueue};
use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render::render_toast;

pub fn run(set_url: Option<String>, clear_url: bool) -> Result<()> {
    let mut config = AgendaConfig::load()?;

    if set_url.is_some() || clear_url {
        config.script_url = set_url.unwrap_or_default().trim().to_string();
        config.save()?;

        let mut toasts = ToastQueue::default();
        toasts.push(Toast::success("Settings saved"));
        for toast in toasts.drain_live() {
            println!("{}", render_toast(&toast));
        }
        return Ok(());
    }

    println!("{}", "Paths".bold());
    println!("  Config:   {}", AgendaConfig::config_path()?.display());
    println!("  Data:     {}", config.data_path().display());
    println!("  Meetings: {}", config.meetings_file().display());
    println!();
    println!("{}", "Sync".bold());
    if config.script_url.is_empty() {
        println!("  Webhook:  {}", "not configured".dimmed());
    } else {
        println!("  Webhook:  {}", config.script_url);
    }
    Ok(())
}
