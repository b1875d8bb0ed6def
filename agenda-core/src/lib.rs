//! Core types for the agenda meeting scheduler.
//!
//! This crate provides everything the CLI builds on:
//! - `Meeting` and the persisted `MeetingStore` (a JSON-backed collection)
//! - `sync` for mirroring new meetings to a spreadsheet webhook
//! - `views` for the day/statistics/consultation derivations
//! - `export` for CSV text and the PDF/chart capability traits

pub mod config;
pub mod constants;
pub mod date_range;
pub mod error;
pub mod export;
pub mod meeting;
pub mod store;
pub mod sync;
pub mod toast;
pub mod views;

pub use error::{AgendaError, AgendaResult};
pub use meeting::{Meeting, NewMeeting};
pub use store::MeetingStore;
