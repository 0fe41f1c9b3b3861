//! Placeholder CV bodies for PDFs whose text layer is empty (scans, images).
//!
//! The body is chosen from the file name only, so the same upload always gets
//! the same text. Profiles built from it are flagged `TextSource::Placeholder`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    Marketing,
    Technology,
    Generic,
}

const MARKETING_HINTS: &[&str] = &["marketing", "communication", "social"];
const TECHNOLOGY_HINTS: &[&str] = &["developer", "engineer", "software", "data", "dev"];

/// Coarse classification of an uploaded file name.
pub fn classify_file_name(file_name: &str) -> PlaceholderKind {
    let name = file_name.to_lowercase();
    if MARKETING_HINTS.iter().any(|h| name.contains(h)) {
        PlaceholderKind::Marketing
    } else if TECHNOLOGY_HINTS.iter().any(|h| name.contains(h)) {
        PlaceholderKind::Technology
    } else {
        PlaceholderKind::Generic
    }
}

pub fn placeholder_text(kind: PlaceholderKind) -> &'static str {
    match kind {
        PlaceholderKind::Marketing => MARKETING_CV,
        PlaceholderKind::Technology => TECHNOLOGY_CV,
        PlaceholderKind::Generic => GENERIC_CV,
    }
}

const MARKETING_CV: &str = "PROFESSIONAL EXPERIENCE
Marketing Project Manager with 5 years of experience
Coordinated advertising campaigns to increase sales
Worked with international teams on digital marketing and social media

SKILLS
Digital marketing, content creation, SEO, analytics, project management, communication

EDUCATION
Bachelor's degree in Marketing, University of Montreal

LANGUAGES
French (native), English (fluent)";

const TECHNOLOGY_CV: &str = "PROFESSIONAL EXPERIENCE
Software Developer with 4 years of experience
Worked as a full stack developer building web applications
Improved deployment pipelines with Git and agile practices

SKILLS
JavaScript, Python, React, Node.js, SQL, Git, Agile, Scrum

EDUCATION
Bachelor of Science in Computer Science, Concordia University

LANGUAGES
English (fluent), French (intermediate)";

const GENERIC_CV: &str = "PROFESSIONAL EXPERIENCE
Project Coordinator with 3 years of experience
Responsible for planning and customer service
Helped teams deliver projects on time

SKILLS
Communication, leadership, planning, Excel, PowerPoint

EDUCATION
Diploma in Business Administration, Dawson College

LANGUAGES
English, French";
