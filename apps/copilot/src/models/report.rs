use serde::{Deserialize, Serialize};

use crate::advice::{analyze, recommend, suggest};
use crate::models::{CvProfile, Locale};

/// A job archetype the profile overlaps with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecommendation {
    pub title: String,
    pub reason: String,
    pub match_score: u8, // 0 – 100
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// One completeness or quality finding about a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub category: String,
    pub title: String,
    pub description: String,
    pub suggestion: String,
    pub priority: Priority,
}

/// Rewrite advice for a single CV fragment selected by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancementSuggestion {
    pub original_text: String,
    pub suggestion: String,
    pub reason: String,
    pub impact: String,
}

/// Everything the presentation layer renders for one analysed upload.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub locale: Locale,
    pub profile: CvProfile,
    pub recommendations: Vec<JobRecommendation>,
    pub insights: Vec<Insight>,
    pub enhancements: Vec<EnhancementSuggestion>,
}

impl AnalysisReport {
    /// Runs every query over `profile`. Query results are recomputed, never cached.
    pub fn build(profile: CvProfile, locale: Locale, fragments: &[String]) -> Self {
        let recommendations = recommend(&profile, locale);
        let insights = analyze(&profile, locale);
        let enhancements = fragments
            .iter()
            .map(|f| suggest(&profile, f, locale))
            .collect();

        AnalysisReport {
            locale,
            profile,
            recommendations,
            insights,
            enhancements,
        }
    }
}
