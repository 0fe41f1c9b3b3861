//! PDF text strategies.
//!
//! Primary: decode each page's content stream and collect the positioned text
//! runs (`Tj`, `TJ`, `'`, `"`), joined by single spaces; pages joined by newlines.
//! A page that fails to decode is reported and skipped.
//!
//! Secondary: whole-document text layout via `pdf-extract`, used only when the
//! primary strategy produced nothing but whitespace.

use std::panic::{self, AssertUnwindSafe};

use lopdf::content::Content;
use lopdf::{Document, Object, ObjectId};

use crate::errors::AnalysisError;
use crate::extraction::logger::ExtractLogger;

/// A `TJ` kerning adjustment below this (thousandths of an em) is treated as a word gap.
const TJ_SPACE_THRESHOLD: f64 = -250.0;

pub(crate) fn load_document(
    bytes: &[u8],
    logger: &dyn ExtractLogger,
) -> Result<Document, AnalysisError> {
    let mut document = Document::load_mem(bytes).map_err(|e| {
        logger.error("pdf_decode_failed", &e.to_string());
        AnalysisError::ExtractionFailure(format!("Failed to decode PDF: {e}"))
    })?;

    if document.is_encrypted() && document.decrypt("").is_err() {
        logger.error("pdf_encrypted", "document is password protected");
        return Err(AnalysisError::ExtractionFailure(
            "PDF is password protected".to_string(),
        ));
    }

    logger.debug(
        "pdf_loaded",
        &format!("{} pages", document.get_pages().len()),
    );
    Ok(document)
}

/// Primary strategy: positioned text runs, page by page.
pub(crate) fn extract_page_runs(document: &Document, logger: &dyn ExtractLogger) -> String {
    let pages = document
        .get_pages()
        .into_iter()
        .map(|(number, id)| {
            let runs = page_text_runs(document, id).map_err(|e| e.to_string());
            (number, runs)
        })
        .collect();
    assemble_pages(pages, logger)
}

/// Secondary strategy: `pdf-extract`'s whole-document text output.
/// Its decoder can panic on malformed fonts, so a panic counts as "no text".
pub(crate) fn extract_whole_document(bytes: &[u8], logger: &dyn ExtractLogger) -> String {
    match panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem(bytes)
    })) {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            logger.warn("secondary_strategy_failed", &e.to_string());
            String::new()
        }
        Err(_) => {
            logger.warn("secondary_strategy_failed", "pdf-extract panicked");
            String::new()
        }
    }
}

/// Joins per-page results, skipping failed pages.
pub(crate) fn assemble_pages(
    pages: Vec<(u32, Result<Vec<String>, String>)>,
    logger: &dyn ExtractLogger,
) -> String {
    let mut texts = Vec::with_capacity(pages.len());
    for (number, result) in pages {
        match result {
            Ok(runs) => texts.push(runs.join(" ")),
            Err(e) => logger.warn("page_skipped", &format!("page {number}: {e}")),
        }
    }
    texts.join("\n")
}

fn page_text_runs(document: &Document, page_id: ObjectId) -> Result<Vec<String>, lopdf::Error> {
    let data = document.get_page_content(page_id)?;
    let content = Content::decode(&data)?;

    let mut runs = Vec::new();
    for operation in &content.operations {
        let run = match operation.operator.as_str() {
            "Tj" | "'" | "\"" => operation
                .operands
                .last()
                .map(string_operand)
                .unwrap_or_default(),
            "TJ" => match operation.operands.first() {
                Some(Object::Array(items)) => array_operand(items),
                _ => String::new(),
            },
            _ => continue,
        };
        let run = run.trim();
        if !run.is_empty() {
            runs.push(run.to_string());
        }
    }
    Ok(runs)
}

fn string_operand(object: &Object) -> String {
    match object {
        Object::String(bytes, _) => decode_pdf_string(bytes),
        _ => String::new(),
    }
}

fn array_operand(items: &[Object]) -> String {
    let mut out = String::new();
    for item in items {
        match item {
            Object::String(bytes, _) => out.push_str(&decode_pdf_string(bytes)),
            Object::Integer(n) if (*n as f64) < TJ_SPACE_THRESHOLD => out.push(' '),
            Object::Real(r) if (*r as f64) < TJ_SPACE_THRESHOLD => out.push(' '),
            _ => {}
        }
    }
    out
}

/// UTF-16BE when the string carries a byte-order mark, otherwise one char per
/// byte (PDFDocEncoding is Latin-1 compatible for printable text). Control
/// characters, typical of CID glyph ids, are dropped.
fn decode_pdf_string(bytes: &[u8]) -> String {
    let decoded = if let Some(rest) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = rest
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        bytes.iter().map(|&b| b as char).collect()
    };
    decoded.chars().filter(|c| !c.is_control()).collect()
}
