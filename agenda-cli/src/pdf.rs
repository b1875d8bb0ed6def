//! Minimal PDF writer backing the export commands.
//!
//! Implements [`PdfExporter`] with just what the table and card documents
//! need: Helvetica text in two weights, manual layout and automatic page
//! breaks, written as plain PDF 1.4. The base fonts use WinAnsi encoding, so
//! text is emitted as Latin-1; anything outside that range degrades to `?`.

use agenda_core::error::AgendaResult;
use agenda_core::export::{CardDocument, PdfExporter, TableDocument};

// A4 portrait, in points.
const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 40.0;

/// One positioned piece of text on a page.
struct TextOp {
    x: f32,
    y: f32,
    size: f32,
    bold: bool,
    text: String,
}

struct PageBuilder {
    pages: Vec<Vec<TextOp>>,
    cursor: f32,
}

impl PageBuilder {
    fn new() -> Self {
        PageBuilder { pages: vec![Vec::new()], cursor: PAGE_HEIGHT - MARGIN }
    }

    fn text(&mut self, x: f32, size: f32, bold: bool, text: &str) {
        let y = self.cursor;
        if let Some(page) = self.pages.last_mut() {
            page.push(TextOp { x, y, size, bold, text: text.to_string() });
        }
    }

    /// Move the cursor down, breaking to a new page when the bottom margin
    /// would be crossed.
    fn advance(&mut self, dy: f32) {
        if self.cursor - dy < MARGIN {
            self.break_page();
        } else {
            self.cursor -= dy;
        }
    }

    /// Break early when the next `height` points would not fit, so blocks
    /// that belong together stay on one page.
    fn ensure_room(&mut self, height: f32) {
        if self.cursor - height < MARGIN {
            self.break_page();
        }
    }

    fn break_page(&mut self) {
        self.pages.push(Vec::new());
        self.cursor = PAGE_HEIGHT - MARGIN;
    }
}

#[derive(Default)]
pub struct PdfWriter;

impl PdfExporter for PdfWriter {
    fn render_table(&self, doc: &TableDocument) -> AgendaResult<Vec<u8>> {
        let mut b = PageBuilder::new();
        b.text(MARGIN, 16.0, true, &doc.title);
        b.advance(26.0);

        // Column positions tuned for the six export columns.
        let columns: [f32; 6] = [MARGIN, 150.0, 270.0, 370.0, 450.0, 525.0];

        for (i, heading) in doc.header.iter().enumerate() {
            let x = columns.get(i).copied().unwrap_or(MARGIN);
            b.text(x, 9.0, true, heading);
        }
        b.advance(14.0);

        for row in &doc.rows {
            for (i, cell) in row.iter().enumerate() {
                let x = columns.get(i).copied().unwrap_or(MARGIN);
                b.text(x, 8.0, false, &fit(cell, 26));
            }
            b.advance(12.0);
        }

        Ok(write_pdf(&b.pages))
    }

    fn render_cards(&self, doc: &CardDocument) -> AgendaResult<Vec<u8>> {
        let mut b = PageBuilder::new();
        b.text(MARGIN, 18.0, true, &doc.title);
        b.advance(30.0);

        for card in &doc.cards {
            let height = 18.0 + card.lines.len() as f32 * 14.0 + 16.0;
            b.ensure_room(height);

            b.text(MARGIN, 13.0, true, &card.subject);
            b.advance(18.0);
            for line in &card.lines {
                b.text(MARGIN + 10.0, 10.0, false, line);
                b.advance(14.0);
            }
            b.advance(16.0);
        }

        Ok(write_pdf(&b.pages))
    }
}

/// Assemble pages into a PDF 1.4 byte stream.
///
/// Object numbering: 1 catalog, 2 page tree, 3 regular font, 4 bold font,
/// then one (page, contents) pair per page.
fn write_pdf(pages: &[Vec<TextOp>]) -> Vec<u8> {
    let page_count = pages.len() as u32;
    let kids: Vec<String> = (0..page_count).map(|i| format!("{} 0 R", 5 + i * 2)).collect();

    let mut objects: Vec<(u32, Vec<u8>)> = vec![
        (1, b"<< /Type /Catalog /Pages 2 0 R >>".to_vec()),
        (
            2,
            format!(
                "<< /Type /Pages /Kids [{}] /Count {} >>",
                kids.join(" "),
                page_count
            )
            .into_bytes(),
        ),
        (
            3,
            b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                .to_vec(),
        ),
        (
            4,
            b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>"
                .to_vec(),
        ),
    ];

    for (i, ops) in pages.iter().enumerate() {
        let page_obj = 5 + i as u32 * 2;
        let content_obj = page_obj + 1;

        objects.push((
            page_obj,
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH} {PAGE_HEIGHT}] \
                 /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> /Contents {content_obj} 0 R >>"
            )
            .into_bytes(),
        ));

        let mut stream: Vec<u8> = Vec::new();
        for op in ops {
            let font = if op.bold { "F2" } else { "F1" };
            stream.extend_from_slice(
                format!("BT /{} {} Tf {} {} Td (", font, op.size, op.x, op.y).as_bytes(),
            );
            stream.extend_from_slice(&encode_text(&op.text));
            stream.extend_from_slice(b") Tj ET\n");
        }

        let mut content = format!("<< /Length {} >>\nstream\n", stream.len()).into_bytes();
        content.extend_from_slice(&stream);
        content.extend_from_slice(b"endstream");
        objects.push((content_obj, content));
    }

    let mut out: Vec<u8> = b"%PDF-1.4\n".to_vec();
    let mut offsets: Vec<usize> = Vec::with_capacity(objects.len());
    for (num, body) in &objects {
        offsets.push(out.len());
        out.extend_from_slice(format!("{num} 0 obj\n").as_bytes());
        out.extend_from_slice(body);
        out.extend_from_slice(b"\nendobj\n");
    }

    let xref_pos = out.len();
    out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for offset in &offsets {
        out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_pos
        )
        .as_bytes(),
    );
    out
}

/// Encode a string literal as Latin-1, escaping PDF delimiters.
fn encode_text(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '(' | ')' | '\\' => {
                out.push(b'\\');
                out.push(c as u8);
            }
            c if (c as u32) < 256 => out.push(c as u32 as u8),
            _ => out.push(b'?'),
        }
    }
    out
}

/// Truncate a cell to fit its column.
fn fit(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agenda_core::export::{Card, CardDocument, TableDocument};

    fn table(rows: usize) -> TableDocument {
        TableDocument {
            title: "Todas as Reuniões".to_string(),
            header: vec!["Data/Hora".into(), "Assunto".into()],
            rows: (0..rows)
                .map(|i| vec![format!("05/03/2024, 10:{i:02}:00"), format!("Reunião {i}")])
                .collect(),
        }
    }

    #[test]
    fn output_is_a_pdf_with_trailer() {
        let bytes = PdfWriter.render_table(&table(3)).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4"));
        assert!(bytes.ends_with(b"%%EOF\n"));
    }

    #[test]
    fn long_tables_break_onto_multiple_pages() {
        let bytes = PdfWriter.render_table(&table(120)).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(!text.contains("/Count 1 "), "expected more than one page");
        assert!(text.contains("/Count "));
    }

    #[test]
    fn cards_render_subject_and_lines() {
        let doc = CardDocument {
            title: "Reuniões de Silva".to_string(),
            cards: vec![Card {
                subject: "Planejamento".to_string(),
                lines: vec!["Local: Sala 2".to_string()],
            }],
        };
        let bytes = PdfWriter.render_cards(&doc).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("Planejamento"));
        assert!(text.contains("Local: Sala 2"));
    }

    #[test]
    fn delimiters_are_escaped_and_non_latin1_degrades() {
        assert_eq!(encode_text("a(b)c"), b"a\\(b\\)c".to_vec());
        assert_eq!(encode_text("café"), vec![b'c', b'a', b'f', 0xe9]);
        assert_eq!(encode_text("日"), vec![b'?']);
    }
}
