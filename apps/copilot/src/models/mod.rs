pub mod locale;
pub mod profile;
pub mod report;

pub use locale::Locale;
pub use profile::{CvProfile, PersonalInfo, TextSource};
pub use report::{AnalysisReport, EnhancementSuggestion, Insight, JobRecommendation, Priority};
