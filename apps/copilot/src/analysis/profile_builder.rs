//! Assembles a `CvProfile` from raw text: fields, experience estimate, summary.

use crate::analysis::experience::estimate_years;
use crate::analysis::fields::{ExtractedFields, FieldExtractor};
use crate::models::{CvProfile, TextSource};

/// Skills named in the summary sentence.
const SUMMARY_SKILLS: usize = 5;
const SUMMARY_SKILLS_FALLBACK: &str = "a broad range of professional skills";
const SUMMARY_BACKGROUND_FALLBACK: &str = "various professional roles";

#[derive(Clone, Default)]
pub struct ProfileBuilder {
    fields: FieldExtractor,
}

impl ProfileBuilder {
    pub fn new(fields: FieldExtractor) -> Self {
        Self { fields }
    }

    pub fn build(&self, text: &str, source: TextSource) -> CvProfile {
        let ExtractedFields {
            skills,
            experience_snippets,
            education_snippets,
            languages,
            certifications,
            job_titles,
            companies,
            degrees,
            institutions,
            personal_info,
        } = self.fields.extract_fields(text);
        let years_of_experience = estimate_years(text);
        let summary = summarize(years_of_experience, &skills, &experience_snippets);

        CvProfile {
            raw_text: text.to_string(),
            text_source: source,
            skills,
            experience_snippets,
            education_snippets,
            languages,
            certifications,
            job_titles,
            companies,
            degrees,
            institutions,
            personal_info,
            years_of_experience,
            summary,
        }
    }
}

fn summarize(years: u32, skills: &[String], experience: &[String]) -> String {
    let specialties = if skills.is_empty() {
        SUMMARY_SKILLS_FALLBACK.to_string()
    } else {
        skills
            .iter()
            .take(SUMMARY_SKILLS)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };
    let background = experience
        .first()
        .map(String::as_str)
        .unwrap_or(SUMMARY_BACKGROUND_FALLBACK);

    format!(
        "Professional with {years} years of experience specializing in {specialties}. \
         Strong background in {background}."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_template() {
        let profile = ProfileBuilder::default().build(
            "Worked as a marketing coordinator for Ubisoft. 6 years of experience with SEO, \
             social media, google analytics, excel, agile and canva.",
            TextSource::PdfText,
        );
        assert_eq!(profile.years_of_experience(), 6);
        assert_eq!(
            profile.summary(),
            "Professional with 6 years of experience specializing in marketing, social media, \
             seo, google analytics, analytics. Strong background in marketing coordinator for Ubisoft."
        );
    }

    #[test]
    fn test_summary_fallbacks_when_nothing_detected() {
        let profile = ProfileBuilder::default().build(
            "lorem ipsum dolor sit amet consectetur adipiscing elit",
            TextSource::DocxText,
        );
        assert!(profile.skills().is_empty());
        assert!(profile.experience_snippets().is_empty());
        assert!(profile.education_snippets().is_empty());
        assert_eq!(profile.years_of_experience(), 3);
        assert_eq!(
            profile.summary(),
            "Professional with 3 years of experience specializing in a broad range of \
             professional skills. Strong background in various professional roles."
        );
    }

    #[test]
    fn test_profile_keeps_raw_text_and_source() {
        let text = "Placeholder body for a marketing coordinator in Montreal";
        let profile = ProfileBuilder::default().build(text, TextSource::Placeholder);
        assert_eq!(profile.raw_text(), text);
        assert_eq!(profile.text_source(), TextSource::Placeholder);
        assert!(profile.is_degraded());
    }

    #[test]
    fn test_build_is_deterministic() {
        let text = "Senior Data Analyst, Python, SQL, Tableau. Bilingual French / English.";
        let builder = ProfileBuilder::default();
        assert_eq!(
            builder.build(text, TextSource::PdfText),
            builder.build(text, TextSource::PdfText)
        );
    }
}
