//! Terminal rendering helpers for agenda types.
//!
//! The colored output plays the role the toast/badge components play in a
//! graphical front end.

use agenda_core::export::ChartRenderer;
use agenda_core::meeting::Meeting;
use agenda_core::toast::{Toast, ToastKind};
use owo_colors::OwoColorize;

/// Colored status label for a record.
pub fn status_badge(meeting: &Meeting) -> String {
    if meeting.is_deleted {
        meeting.status_label().red().to_string()
    } else {
        meeting.status_label().green().to_string()
    }
}

/// Render a toast the way the web app would flash it.
pub fn render_toast(toast: &Toast) -> String {
    match toast.kind {
        ToastKind::Success => format!("{} {}", "✓".green(), toast.message),
        ToastKind::Error => format!("{} {}", "✗".red(), toast.message.red()),
    }
}

/// One meeting as an indented detail block (day and consultation views).
pub fn meeting_block(meeting: &Meeting, time_format: &str) -> String {
    let mut out = format!(
        "  {} {}\n        {}  {}",
        meeting.date_time.format(time_format).to_string().bold(),
        meeting.subject,
        meeting.location.dimmed(),
        format!("({})", meeting.officer).dimmed(),
    );
    if !meeting.notes.is_empty() {
        out.push_str(&format!(
            "\n        {}",
            format!("\"{}\"", meeting.notes).italic().dimmed()
        ));
    }
    out
}

/// Horizontal bar chart for the statistics view.
pub struct TermChart {
    pub width: usize,
}

impl Default for TermChart {
    fn default() -> Self {
        TermChart { width: 40 }
    }
}

impl ChartRenderer for TermChart {
    fn render(&self, title: &str, data: &[(String, usize)]) -> String {
        let mut out = format!("{}\n", title.bold());
        let max = data.iter().map(|(_, n)| *n).max().unwrap_or(0);
        let label_width = data.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);

        for (label, count) in data {
            let bar_len = if max == 0 { 0 } else { (*count * self.width).div_ceil(max) };
            out.push_str(&format!(
                "  {:<label_width$}  {} {}\n",
                label,
                "█".repeat(bar_len).blue(),
                count,
            ));
        }
        out
    }
}

/// Truncate to `max` characters, appending an ellipsis when something was
/// cut.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}
