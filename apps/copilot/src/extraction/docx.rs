//! DOCX text, best effort.
//!
//! Paragraphs are read from the document body first. If the container cannot
//! be read, the bytes are decoded as UTF-8 text (this only succeeds for files
//! that are really plain text). When both come back empty the caller gets a
//! fixed notice recommending a PDF instead of an error.

use docx_rs::{
    DocumentChild, Paragraph, ParagraphChild, RunChild, Table, TableCellContent, TableChild,
    TableRowChild,
};

use crate::extraction::logger::ExtractLogger;
use crate::models::TextSource;

pub const DOCX_NOTICE: &str = "DOCX format is not fully supported. Please upload a PDF version of your CV for a complete analysis. / Le format DOCX n'est pas entièrement pris en charge. Veuillez téléverser une version PDF de votre CV pour une analyse complète.";

pub(crate) fn extract_docx(bytes: &[u8], logger: &dyn ExtractLogger) -> (String, TextSource) {
    match read_paragraphs(bytes) {
        Ok(text) if !text.trim().is_empty() => {
            logger.debug("docx_paragraphs_read", &format!("{} characters", text.len()));
            return (text, TextSource::DocxText);
        }
        Ok(_) => logger.debug("docx_paragraphs_empty", "document body has no text"),
        Err(e) => logger.warn("docx_read_failed", &e),
    }

    let raw = raw_decode(bytes);
    if !raw.trim().is_empty() {
        logger.debug("docx_raw_decoded", &format!("{} characters", raw.len()));
        return (raw, TextSource::DocxRawText);
    }

    logger.warn("docx_notice_returned", "no text could be decoded from DOCX");
    (DOCX_NOTICE.to_string(), TextSource::DocxNotice)
}

fn read_paragraphs(bytes: &[u8]) -> Result<String, String> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| e.to_string())?;

    let mut paragraphs = Vec::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(para) => paragraphs.push(paragraph_text(para)),
            DocumentChild::Table(table) => table_paragraphs(table, &mut paragraphs),
            _ => {}
        }
    }
    paragraphs.retain(|p| !p.trim().is_empty());

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(para: &Paragraph) -> String {
    para.children
        .iter()
        .filter_map(|pc| match pc {
            ParagraphChild::Run(run) => Some(
                run.children
                    .iter()
                    .filter_map(|rc| match rc {
                        RunChild::Text(t) => Some(t.text.as_str()),
                        _ => None,
                    })
                    .collect::<String>(),
            ),
            _ => None,
        })
        .collect()
}

/// Layout tables are common in CV templates; cells are read row by row,
/// nested tables included.
fn table_paragraphs(table: &Table, out: &mut Vec<String>) {
    for TableChild::TableRow(row) in &table.rows {
        for TableRowChild::TableCell(cell) in &row.cells {
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(para) => out.push(paragraph_text(para)),
                    TableCellContent::Table(nested) => table_paragraphs(nested, out),
                    _ => {}
                }
            }
        }
    }
}

/// Strict UTF-8 decode with control characters (other than line breaks and
/// tabs) removed. Compressed DOCX containers are not valid UTF-8 and decode to "".
fn raw_decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text
            .chars()
            .filter(|c| !c.is_control() || matches!(c, '\n' | '\t'))
            .collect(),
        Err(_) => String::new(),
    }
}
