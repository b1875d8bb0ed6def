//! Best-effort mirroring of newly created meetings to a spreadsheet webhook.
//!
//! The expected endpoint is a Google Apps Script web app bound to a
//! spreadsheet, but the channel only depends on the request/response
//! contract: a single POST of JSON text, answered with
//! `{"status":"success"}` or `{"status":"error","message":...}`.
//!
//! The channel never mutates store state, never retries, and its outcome is
//! only ever a toast.

use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::constants::STATUS_ACTIVE;
use crate::meeting::Meeting;
use crate::toast::Toast;

pub struct SheetsSync {
    script_url: String,
    client: reqwest::Client,
}

/// Result of one sync attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Saved,
    Failed(String),
}

impl SheetsSync {
    pub fn new(script_url: impl Into<String>) -> Self {
        SheetsSync {
            script_url: script_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// An empty URL disables the channel entirely.
    pub fn is_configured(&self) -> bool {
        !self.script_url.trim().is_empty()
    }

    /// Mirror a newly created meeting. Returns `None` when no endpoint is
    /// configured (a silent no-op), otherwise a toast describing the outcome.
    /// The caller's own state is never affected.
    pub async fn append(&self, meeting: &Meeting) -> Option<Toast> {
        if !self.is_configured() {
            return None;
        }
        let outcome = self.post(meeting).await;
        if let SyncOutcome::Failed(message) = &outcome {
            warn!(error = %message, "spreadsheet sync failed");
        }
        Some(outcome_toast(outcome))
    }

    async fn post(&self, meeting: &Meeting) -> SyncOutcome {
        let body = build_payload(meeting).to_string();

        // The Apps Script contract wants the JSON as a text/plain body.
        let response = self
            .client
            .post(&self.script_url)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(body)
            .send()
            .await;

        match response {
            Ok(resp) => match resp.text().await {
                Ok(text) => parse_response(&text),
                Err(e) => SyncOutcome::Failed(e.to_string()),
            },
            Err(e) => SyncOutcome::Failed(e.to_string()),
        }
    }
}

/// Row payload the spreadsheet script expects. `dateTime` is the pt-BR
/// localized form; the raw record keeps the machine format.
pub fn build_payload(meeting: &Meeting) -> serde_json::Value {
    json!({
        "dateTime": meeting.date_time.format("%d/%m/%Y, %H:%M:%S").to_string(),
        "subject": meeting.subject,
        "officer": meeting.officer,
        "location": meeting.location,
        "notes": meeting.notes,
        "status": STATUS_ACTIVE,
        "id": meeting.id,
    })
}

#[derive(Deserialize)]
struct ScriptResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
}

/// Classify the script's response body. Anything that is not a JSON object
/// with `status: "success"` counts as a failure.
pub fn parse_response(body: &str) -> SyncOutcome {
    match serde_json::from_str::<ScriptResponse>(body) {
        Ok(resp) if resp.status == "success" => SyncOutcome::Saved,
        Ok(resp) => SyncOutcome::Failed(
            resp.message.unwrap_or_else(|| "Unknown script error".to_string()),
        ),
        Err(_) => SyncOutcome::Failed(format!(
            "Unexpected response from script: {}",
            body.trim().chars().take(120).collect::<String>()
        )),
    }
}

/// The user-facing toast for a sync outcome.
pub fn outcome_toast(outcome: SyncOutcome) -> Toast {
    match outcome {
        SyncOutcome::Saved => Toast::success("Meeting saved to the spreadsheet"),
        SyncOutcome::Failed(message) => {
            Toast::error(format!("Failed to save to the spreadsheet: {message}"))
        }
    }
}
