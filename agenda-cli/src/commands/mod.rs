pub mod add;
pub mod archive;
pub mod calendar;
pub mod clear;
pub mod config;
pub mod day;
pub mod delete;
pub mod edit;
pub mod export;
pub mod list;
pub mod officer;
pub mod stats;

use agenda_core::config::AgendaConfig;
use agenda_core::store::MeetingStore;
use anyhow::Result;

/// Load the config and open the store at its data path. The store must exist
/// before any view touches it, so every command goes through here.
pub fn open_store() -> Result<(AgendaConfig, MeetingStore)> {
    let config = AgendaConfig::load()?;
    let store = MeetingStore::load(config.meetings_file());
    Ok((config, store))
}
