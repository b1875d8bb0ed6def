//! Export documents: CSV text plus the models consumed by the injected
//! PDF/chart backends.
//!
//! The PDF bytes and chart output themselves are produced by whatever
//! implements [`PdfExporter`] and [`ChartRenderer`]; this module only builds
//! the documents, so the formatting rules stay testable without a backend.

use crate::constants::CSV_HEADER;
use crate::error::AgendaResult;
use crate::meeting::Meeting;

/// CSV export of the full collection, archived rows included. UTF-8 with a
/// byte-order mark so spreadsheet imports pick up accented characters.
pub fn to_csv(meetings: &[Meeting]) -> String {
    let mut out = String::from("\u{feff}");
    out.push_str(CSV_HEADER);
    out.push('\n');

    for m in meetings {
        let row = [
            m.date_time.format("%d/%m/%Y").to_string(),
            m.date_time.format("%H:%M:%S").to_string(),
            m.subject.clone(),
            m.officer.clone(),
            m.location.clone(),
            m.notes.clone(),
            m.export_status().to_string(),
        ];
        let quoted: Vec<String> = row.iter().map(|v| quote(v)).collect();
        out.push_str(&quoted.join(","));
        out.push('\n');
    }

    out
}

/// Double-quote a field, escaping embedded quotes by doubling them.
fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// A tabular export document: one row per record.
pub struct TableDocument {
    pub title: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// A per-record "card" export document (one officer's meetings).
pub struct CardDocument {
    pub title: String,
    pub cards: Vec<Card>,
}

pub struct Card {
    pub subject: String,
    pub lines: Vec<String>,
}

/// Table layout of the full collection, archived rows included.
pub fn table_document(meetings: &[Meeting]) -> TableDocument {
    TableDocument {
        title: "Todas as Reuniões".to_string(),
        header: vec![
            "Data/Hora".into(),
            "Assunto".into(),
            "Oficial".into(),
            "Local".into(),
            "Obs".into(),
            "Status".into(),
        ],
        rows: meetings
            .iter()
            .map(|m| {
                vec![
                    m.date_time.format("%d/%m/%Y, %H:%M:%S").to_string(),
                    m.subject.clone(),
                    m.officer.clone(),
                    m.location.clone(),
                    m.notes.clone(),
                    m.export_status().to_string(),
                ]
            })
            .collect(),
    }
}

/// Card layout for one officer's filtered meetings. Notes get a line only
/// when present.
pub fn card_document(officer: &str, meetings: &[&Meeting]) -> CardDocument {
    CardDocument {
        title: format!("Reuniões de {officer}"),
        cards: meetings
            .iter()
            .map(|m| {
                let mut lines = vec![
                    format!(
                        "Data: {} | Horário: {}",
                        m.date_time.format("%d/%m/%Y"),
                        m.date_time.format("%H:%M")
                    ),
                    format!("Local: {}", m.location),
                ];
                if !m.notes.is_empty() {
                    lines.push(format!("Obs: {}", m.notes));
                }
                Card { subject: m.subject.clone(), lines }
            })
            .collect(),
    }
}

/// Injected PDF backend; the CLI provides the concrete writer.
pub trait PdfExporter {
    fn render_table(&self, doc: &TableDocument) -> AgendaResult<Vec<u8>>;
    fn render_cards(&self, doc: &CardDocument) -> AgendaResult<Vec<u8>>;
}

/// Injected chart backend for the per-officer meeting counts.
pub trait ChartRenderer {
    fn render(&self, title: &str, data: &[(String, usize)]) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn meeting(notes: &str, archived: bool) -> Meeting {
        Meeting {
            id: "id-1".to_string(),
            date_time: NaiveDate::from_ymd_opt(2024, 3, 5)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
            subject: "Revisão \"Q1\"".to_string(),
            officer: "Silva".to_string(),
            location: "Sala 2".to_string(),
            notes: notes.to_string(),
            is_deleted: archived,
        }
    }

    #[test]
    fn csv_starts_with_bom_and_header() {
        let csv = to_csv(&[]);
        assert!(csv.starts_with('\u{feff}'));
        assert!(csv.contains("Data,Hora,Assunto,Oficial,Local,Obs,Status"));
    }

    #[test]
    fn csv_quotes_every_field_and_escapes_embedded_quotes() {
        let csv = to_csv(&[meeting("", false)]);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(
            row,
            r#""05/03/2024","10:30:00","Revisão ""Q1""","Silva","Sala 2","","Ativa""#
        );
    }

    #[test]
    fn csv_includes_archived_rows_with_deleted_status() {
        let csv = to_csv(&[meeting("", true)]);
        assert!(csv.contains("\"Excluída\""));
    }

    #[test]
    fn table_document_has_one_row_per_record() {
        let meetings = vec![meeting("", false), meeting("x", true)];
        let doc = table_document(&meetings);
        assert_eq!(doc.header.len(), 6);
        assert_eq!(doc.rows.len(), 2);
        assert_eq!(doc.rows[0][0], "05/03/2024, 10:30:00");
        assert_eq!(doc.rows[1][5], "Excluída");
    }

    #[test]
    fn card_document_skips_empty_notes() {
        let with_notes = meeting("trazer relatório", false);
        let without_notes = meeting("", false);
        let doc = card_document("Silva", &[&with_notes, &without_notes]);

        assert_eq!(doc.title, "Reuniões de Silva");
        assert_eq!(doc.cards[0].lines.len(), 3);
        assert_eq!(doc.cards[1].lines.len(), 2);
        assert!(doc.cards[0].lines[2].contains("trazer relatório"));
    }
}
