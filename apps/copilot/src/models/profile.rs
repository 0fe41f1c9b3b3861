use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Which extraction path produced the text a profile was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSource {
    /// Positioned text runs read page by page.
    PdfText,
    /// Whole-document text from the secondary PDF strategy.
    PdfFallbackText,
    /// Paragraph text read from the DOCX document body.
    DocxText,
    /// Raw decode of the DOCX byte stream.
    DocxRawText,
    /// Fixed "prefer PDF" notice returned when DOCX decoding found nothing.
    DocxNotice,
    /// Templated placeholder body used when no PDF text could be read.
    Placeholder,
}

impl TextSource {
    /// Degraded sources describe a template, not the uploaded CV.
    pub fn is_degraded(self) -> bool {
        matches!(self, TextSource::Placeholder | TextSource::DocxNotice)
    }
}

/// Contact fields. Every field is optional; absence is a normal outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

/// Structured view of one uploaded CV.
///
/// Built once per upload by `analysis::ProfileBuilder` and only read afterwards:
/// there are no mutating methods, and the advisors take it by shared reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CvProfile {
    pub(crate) raw_text: String,
    pub(crate) text_source: TextSource,
    pub(crate) skills: Vec<String>,
    pub(crate) experience_snippets: Vec<String>,
    pub(crate) education_snippets: Vec<String>,
    pub(crate) languages: BTreeSet<String>,
    pub(crate) certifications: Vec<String>,
    pub(crate) job_titles: Vec<String>,
    pub(crate) companies: Vec<String>,
    pub(crate) degrees: Vec<String>,
    pub(crate) institutions: Vec<String>,
    pub(crate) personal_info: PersonalInfo,
    pub(crate) years_of_experience: u32,
    pub(crate) summary: String,
}

impl CvProfile {
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn text_source(&self) -> TextSource {
        self.text_source
    }

    /// True when the profile was built from placeholder or notice text.
    pub fn is_degraded(&self) -> bool {
        self.text_source.is_degraded()
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn experience_snippets(&self) -> &[String] {
        &self.experience_snippets
    }

    pub fn education_snippets(&self) -> &[String] {
        &self.education_snippets
    }

    /// Lowercase language names.
    pub fn languages(&self) -> &BTreeSet<String> {
        &self.languages
    }

    pub fn has_language(&self, name: &str) -> bool {
        self.languages.contains(&name.to_lowercase())
    }

    pub fn certifications(&self) -> &[String] {
        &self.certifications
    }

    pub fn job_titles(&self) -> &[String] {
        &self.job_titles
    }

    pub fn companies(&self) -> &[String] {
        &self.companies
    }

    pub fn degrees(&self) -> &[String] {
        &self.degrees
    }

    pub fn institutions(&self) -> &[String] {
        &self.institutions
    }

    pub fn personal_info(&self) -> &PersonalInfo {
        &self.personal_info
    }

    pub fn years_of_experience(&self) -> u32 {
        self.years_of_experience
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }
}
