//! Upload analysis entry points and the stale-result guard.
//!
//! `Analyzer::analyze_upload` is the single call the presentation layer makes
//! per upload. `AnalysisSession` tags each analysis with a monotonically
//! increasing request id so a late result from a superseded upload is
//! discarded instead of overwriting the newer one.

use std::future::Future;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use bytes::Bytes;
use tracing::{debug, info, warn};

use crate::analysis::ProfileBuilder;
use crate::errors::AnalysisError;
use crate::extraction::{MediaType, TextExtractor};
use crate::models::CvProfile;

// ────────────────────────────────────────────────────────────────────────────
// Analyzer
// ────────────────────────────────────────────────────────────────────────────

/// Extraction followed by profile building. Holds no per-upload state, so one
/// instance serves every upload.
#[derive(Clone, Default)]
pub struct Analyzer {
    extractor: TextExtractor,
    builder: ProfileBuilder,
}

impl Analyzer {
    pub fn new(extractor: TextExtractor, builder: ProfileBuilder) -> Self {
        Self { extractor, builder }
    }

    /// Synchronous core of an analysis. The media type is checked before any
    /// byte is decoded.
    pub fn analyze(
        &self,
        bytes: &[u8],
        media_type: &str,
        file_name: &str,
    ) -> Result<CvProfile, AnalysisError> {
        let media_type = MediaType::from_declared(media_type)?;
        let extracted = self.extractor.extract_as(bytes, media_type, file_name)?;
        Ok(self.builder.build(&extracted.text, extracted.source))
    }

    pub async fn analyze_upload(
        &self,
        bytes: Bytes,
        media_type: &str,
        file_name: &str,
    ) -> Result<CvProfile, AnalysisError> {
        info!(file_name, media_type, size = bytes.len(), "analysis started");

        match self.analyze(&bytes, media_type, file_name) {
            Ok(profile) => {
                info!(
                    file_name,
                    source = ?profile.text_source(),
                    skills = profile.skills().len(),
                    "analysis completed"
                );
                Ok(profile)
            }
            Err(e) => {
                warn!(file_name, code = e.code(), "analysis failed: {e}");
                Err(e)
            }
        }
    }

    /// Reads `path` and analyses it. Without an explicit media type, one is
    /// guessed from the file extension.
    pub async fn analyze_file(
        &self,
        path: &Path,
        media_type: Option<&str>,
    ) -> Result<CvProfile, AnalysisError> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let media_type = media_type
            .unwrap_or_else(|| MediaType::guess_from_file_name(&file_name))
            .to_string();

        // Reject before touching the file system.
        MediaType::from_declared(&media_type)?;

        let bytes = tokio::fs::read(path).await.map_err(|e| {
            AnalysisError::ExtractionFailure(format!("cannot read {}: {e}", path.display()))
        })?;
        self.analyze_upload(Bytes::from(bytes), &media_type, &file_name)
            .await
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Session
// ────────────────────────────────────────────────────────────────────────────

/// Request id handed out by `AnalysisSession::begin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The result belongs to the latest request.
    Accepted(T),
    /// A newer request was started while this one was in flight.
    Stale,
}

impl<T> Outcome<T> {
    pub fn into_accepted(self) -> Option<T> {
        match self {
            Outcome::Accepted(value) => Some(value),
            Outcome::Stale => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct AnalysisSession {
    latest: AtomicU64,
}

impl AnalysisSession {
    /// Starts a new request, superseding every earlier one.
    pub fn begin(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    pub fn accept<T>(&self, ticket: Ticket, value: T) -> Outcome<T> {
        if self.is_current(ticket) {
            Outcome::Accepted(value)
        } else {
            debug!(
                ticket = ticket.0,
                latest = self.latest.load(Ordering::SeqCst),
                "stale analysis discarded"
            );
            Outcome::Stale
        }
    }

    /// Takes a ticket when first polled, awaits `work`, then applies `accept`.
    pub async fn run<F, T>(&self, work: F) -> Outcome<T>
    where
        F: Future<Output = T>,
    {
        let ticket = self.begin();
        let value = work.await;
        self.accept(ticket, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    use crate::extraction::pdf::test_support::build_pdf;
    use crate::extraction::{DOCX_MEDIA_TYPE, PDF_MEDIA_TYPE};
    use crate::models::TextSource;

    const CV_TEXT: &str = "Marketing Manager with 6 years of experience in Montreal, SEO and social media";

    #[tokio::test]
    async fn test_analyze_upload_builds_profile() {
        let analyzer = Analyzer::default();
        let bytes = Bytes::from(build_pdf(&[CV_TEXT]));
        let profile = analyzer
            .analyze_upload(bytes, PDF_MEDIA_TYPE, "cv.pdf")
            .await
            .unwrap();

        assert!(!profile.raw_text().is_empty());
        assert_eq!(profile.text_source(), TextSource::PdfText);
        assert_eq!(profile.years_of_experience(), 6);
        assert!(profile.skills().contains(&"seo".to_string()));
    }

    #[tokio::test]
    async fn test_unsupported_format_fails_first() {
        let analyzer = Analyzer::default();
        let err = analyzer
            .analyze_upload(Bytes::from_static(b"GIF89a"), "image/gif", "cv.gif")
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::UnsupportedFormat(_)));
    }

    #[tokio::test]
    async fn test_short_pdf_is_insufficient_text() {
        let analyzer = Analyzer::default();
        let bytes = Bytes::from(build_pdf(&["Hi there"]));
        let err = analyzer
            .analyze_upload(bytes, PDF_MEDIA_TYPE, "cv.pdf")
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::InsufficientText { chars: 8 }));
    }

    #[tokio::test]
    async fn test_analyze_file_guesses_media_type() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(&build_pdf(&[CV_TEXT])).unwrap();

        let profile = Analyzer::default()
            .analyze_file(file.path(), None)
            .await
            .unwrap();
        assert!(profile.raw_text().contains("Marketing Manager"));
    }

    #[tokio::test]
    async fn test_analyze_file_rejects_unknown_extension_before_reading() {
        let err = Analyzer::default()
            .analyze_file(Path::new("/nonexistent/cv.txt"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::UnsupportedFormat(_)));
    }

    #[tokio::test]
    async fn test_analyze_file_missing_file_is_extraction_failure() {
        let err = Analyzer::default()
            .analyze_file(Path::new("/nonexistent/cv.docx"), Some(DOCX_MEDIA_TYPE))
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::ExtractionFailure(_)));
    }

    #[test]
    fn test_tickets_increase_and_only_latest_is_accepted() {
        let session = AnalysisSession::default();
        let first = session.begin();
        let second = session.begin();

        assert!(second > first);
        assert_eq!(session.accept(first, "old"), Outcome::Stale);
        assert_eq!(session.accept(second, "new"), Outcome::Accepted("new"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_late_result_does_not_overwrite_newer_one() {
        let session = AnalysisSession::default();

        let slow = session.run(async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            "first upload"
        });
        let fast = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            session.run(async { "second upload" }).await
        };

        let (slow, fast) = tokio::join!(slow, fast);
        assert_eq!(slow, Outcome::Stale);
        assert_eq!(fast.into_accepted(), Some("second upload"));
    }
}
