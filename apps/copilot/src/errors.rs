use thiserror::Error;

use crate::models::Locale;

/// Failure of the extraction stage of an analysis.
/// Field heuristics and advisors never fail; only these outcomes terminate an upload.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Insufficient text: extracted {chars} characters, need at least {min}", min = crate::extraction::MIN_TEXT_CHARS)]
    InsufficientText { chars: usize },

    #[error("Extraction failure: {0}")]
    ExtractionFailure(String),
}

impl AnalysisError {
    /// Stable machine-readable code for the presentation layer.
    pub fn code(&self) -> &'static str {
        match self {
            AnalysisError::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            AnalysisError::InsufficientText { .. } => "INSUFFICIENT_TEXT",
            AnalysisError::ExtractionFailure(_) => "EXTRACTION_FAILURE",
        }
    }

    /// Only an unsupported format requires picking a different kind of file.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AnalysisError::UnsupportedFormat(_))
    }

    /// Localized message shown to the user for this failure kind.
    pub fn user_message(&self, locale: Locale) -> &'static str {
        match self {
            AnalysisError::UnsupportedFormat(_) => locale.pick(
                "Format de fichier non pris en charge. Veuillez téléverser un fichier PDF ou DOCX.",
                "Unsupported file format. Please upload a PDF or DOCX file.",
            ),
            AnalysisError::InsufficientText { .. } => locale.pick(
                "Nous n'avons pas pu lire suffisamment de texte dans ce fichier. Essayez avec un autre fichier, idéalement un PDF contenant du texte sélectionnable.",
                "We could not read enough text from this file. Please try another file, ideally a PDF with selectable text.",
            ),
            AnalysisError::ExtractionFailure(_) => locale.pick(
                "Une erreur est survenue lors de la lecture du fichier. Veuillez réessayer ou utiliser un autre format.",
                "An error occurred while reading the file. Please try again or use a different format.",
            ),
        }
    }
}
