//! CV analysis core: text extraction from PDF/DOCX uploads, heuristic field
//! extraction into a `CvProfile`, and locale-aware advice over that profile.

pub mod advice;
pub mod analysis;
pub mod config;
pub mod errors;
pub mod extraction;
pub mod models;
pub mod pipeline;

pub use errors::AnalysisError;
pub use models::{AnalysisReport, CvProfile, Locale};
pub use pipeline::{AnalysisSession, Analyzer, Outcome, Ticket};
