// Text extraction: file bytes + declared media type -> raw CV text.
// Per-page and per-strategy problems are logged and absorbed; only the
// aggregate outcomes in `AnalysisError` end an extraction.

pub mod docx;
pub mod logger;
pub mod pdf;
pub mod placeholder;

use std::sync::Arc;

use crate::errors::AnalysisError;
use crate::models::TextSource;

pub use docx::DOCX_NOTICE;
pub use logger::{ExtractLogger, LogLevel, LogRecord, RecordingLogger, TracingLogger};
pub use placeholder::{classify_file_name, placeholder_text, PlaceholderKind};

/// Extracted text shorter than this (in characters, after trimming) is rejected.
pub const MIN_TEXT_CHARS: usize = 20;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";
pub const DOCX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const MSWORD_MEDIA_TYPE: &str = "application/msword";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Pdf,
    WordProcessing,
}

impl MediaType {
    /// Parses a declared MIME type, ignoring case and parameters such as `; charset=`.
    pub fn from_declared(declared: &str) -> Result<Self, AnalysisError> {
        let essence = declared
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        match essence.as_str() {
            PDF_MEDIA_TYPE => Ok(MediaType::Pdf),
            DOCX_MEDIA_TYPE | MSWORD_MEDIA_TYPE => Ok(MediaType::WordProcessing),
            _ => Err(AnalysisError::UnsupportedFormat(declared.to_string())),
        }
    }

    /// Best guess from a file extension; unknown extensions map to a type the
    /// extractor rejects.
    pub fn guess_from_file_name(file_name: &str) -> &'static str {
        let extension = std::path::Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|s| s.to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "pdf" => PDF_MEDIA_TYPE,
            "docx" => DOCX_MEDIA_TYPE,
            "doc" => MSWORD_MEDIA_TYPE,
            _ => "application/octet-stream",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    pub source: TextSource,
}

/// Stateless across calls; holds only the injected logger.
#[derive(Clone)]
pub struct TextExtractor {
    logger: Arc<dyn ExtractLogger>,
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new(Arc::new(TracingLogger))
    }
}

impl TextExtractor {
    pub fn new(logger: Arc<dyn ExtractLogger>) -> Self {
        Self { logger }
    }

    pub fn extract(
        &self,
        bytes: &[u8],
        declared_media_type: &str,
        file_name: &str,
    ) -> Result<ExtractedText, AnalysisError> {
        let media_type = MediaType::from_declared(declared_media_type)?;
        self.extract_as(bytes, media_type, file_name)
    }

    pub fn extract_as(
        &self,
        bytes: &[u8],
        media_type: MediaType,
        file_name: &str,
    ) -> Result<ExtractedText, AnalysisError> {
        let logger = self.logger.as_ref();
        let (text, source) = match media_type {
            MediaType::Pdf => self.extract_pdf(bytes, file_name)?,
            MediaType::WordProcessing => docx::extract_docx(bytes, logger),
        };

        let chars = text.trim().chars().count();
        if chars < MIN_TEXT_CHARS {
            logger.warn(
                "insufficient_text",
                &format!("{chars} characters from {file_name}"),
            );
            return Err(AnalysisError::InsufficientText { chars });
        }

        logger.debug(
            "extraction_completed",
            &format!("{chars} characters via {source:?}"),
        );
        Ok(ExtractedText { text, source })
    }

    fn extract_pdf(
        &self,
        bytes: &[u8],
        file_name: &str,
    ) -> Result<(String, TextSource), AnalysisError> {
        let logger = self.logger.as_ref();
        let document = pdf::load_document(bytes, logger)?;

        let text = pdf::extract_page_runs(&document, logger);
        if !text.trim().is_empty() {
            return Ok((text, TextSource::PdfText));
        }

        logger.debug("secondary_strategy", "primary strategy found no text");
        let text = pdf::extract_whole_document(bytes, logger);
        if !text.trim().is_empty() {
            return Ok((text, TextSource::PdfFallbackText));
        }

        let kind = classify_file_name(file_name);
        logger.warn(
            "placeholder_used",
            &format!("no text layer in {file_name}; using {kind:?} placeholder"),
        );
        Ok((placeholder_text(kind).to_string(), TextSource::Placeholder))
    }
}
