// Advice queries over a built profile: job recommendations, completeness
// insights and rewrite suggestions. Pure, locale-aware and infallible.

pub mod enhancement;
pub mod insights;
pub mod recommendations;

pub use enhancement::suggest;
pub use insights::{analyze, general_insights, regional_insights};
pub use recommendations::{recommend, Archetype, CATALOG, MAX_RECOMMENDATIONS};
