//! The persisted meeting collection.
//!
//! `MeetingStore` is the sole authority over the collection: every mutation
//! goes through it, keeps the list sorted ascending by date/time and writes
//! the full collection back to disk. Persistence is best-effort: a failed
//! write is logged and the in-memory state stands, so callers stay
//! responsive at the cost of durability.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{AgendaError, AgendaResult};
use crate::meeting::{Meeting, NewMeeting};

pub struct MeetingStore {
    path: PathBuf,
    meetings: Vec<Meeting>,
}

impl MeetingStore {
    /// Open the collection at `path`. A missing file or a malformed payload
    /// yields an empty collection, never an error.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let meetings = read_collection(&path);
        let mut store = MeetingStore { path, meetings };
        store.sort();
        store
    }

    /// The full collection, archived records included, sorted ascending by
    /// date/time.
    pub fn meetings(&self) -> &[Meeting] {
        &self.meetings
    }

    /// Records that have not been archived.
    pub fn active(&self) -> impl Iterator<Item = &Meeting> {
        self.meetings.iter().filter(|m| !m.is_deleted)
    }

    pub fn get(&self, id: &str) -> Option<&Meeting> {
        self.meetings.iter().find(|m| m.id == id)
    }

    /// Create a meeting: fresh unique id, not archived. Returns the created
    /// record. This never fires the spreadsheet sync channel: a caller that
    /// wants the record mirrored must invoke [`crate::sync::SheetsSync`]
    /// itself after a successful add, and the channel's outcome must never
    /// affect this operation.
    pub fn add(&mut self, data: NewMeeting) -> Meeting {
        let meeting = Meeting {
            id: Uuid::new_v4().to_string(),
            date_time: data.date_time,
            subject: data.subject,
            officer: data.officer,
            location: data.location,
            notes: data.notes,
            is_deleted: false,
        };
        self.meetings.push(meeting.clone());
        self.sort();
        self.persist();
        meeting
    }

    /// Replace the record matching `meeting.id` wholesale; every field except
    /// the id may change, including the archived flag. Unknown ids are
    /// silently ignored.
    pub fn update(&mut self, meeting: Meeting) {
        if let Some(existing) = self.meetings.iter_mut().find(|m| m.id == meeting.id) {
            *existing = meeting;
        }
        self.sort();
        self.persist();
    }

    /// Soft-delete: the record stays in the collection but leaves the active
    /// views. Unknown ids are silently ignored.
    pub fn archive(&mut self, id: &str) {
        if let Some(meeting) = self.meetings.iter_mut().find(|m| m.id == id) {
            meeting.is_deleted = true;
        }
        self.sort();
        self.persist();
    }

    /// Remove the record entirely. Irreversible; unknown ids are silently
    /// ignored, so repeating the call is a no-op.
    pub fn delete_permanently(&mut self, id: &str) {
        self.meetings.retain(|m| m.id != id);
        self.persist();
    }

    /// Reset the collection to empty in one step.
    pub fn clear_all(&mut self) {
        self.meetings.clear();
        self.persist();
    }

    // Stable sort: records with identical timestamps keep their
    // insertion-relative order.
    fn sort(&mut self) {
        self.meetings.sort_by_key(|m| m.date_time);
    }

    fn persist(&self) {
        if let Err(e) = self.try_persist() {
            warn!(path = %self.path.display(), error = %e, "failed to persist meetings");
        }
    }

    fn try_persist(&self) -> AgendaResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.meetings)
            .map_err(|e| AgendaError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, json)?;
        debug!(count = self.meetings.len(), "persisted meetings");
        Ok(())
    }
}

/// Read the collection file. Malformed or unreadable data is treated as
/// "no data", never as a fatal error.
fn read_collection(path: &Path) -> Vec<Meeting> {
    if !path.exists() {
        return Vec::new();
    }
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read meetings file");
            return Vec::new();
        }
    };
    match serde_json::from_str(&content) {
        Ok(meetings) => meetings,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "malformed meetings file, starting empty");
            Vec::new()
        }
    }
}
