//! Years-of-experience estimation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::matching::contains_word;
use crate::analysis::vocabulary::SENIORITY_KEYWORDS;

/// Estimate when the text names a seniority keyword but no explicit figure.
pub const SENIOR_ESTIMATE_YEARS: u32 = 5;
/// Estimate when nothing in the text hints at tenure.
pub const DEFAULT_ESTIMATE_YEARS: u32 = 3;

// Tried in order; the first match wins.
static EXPLICIT_YEARS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\b(\d+)\+?\s*years?\s*of\s*experience",
        r"(?i)\b(\d+)\+?\s*years?\s*in\s*the\s*field",
        r"(?i)\bexperience\s*:\s*(\d+)\+?\s*years?",
        r"(?i)\b(\d+)\+?\s*ans\s*d['’]\s*expérience",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("experience pattern must compile"))
    .collect()
});

pub fn estimate_years(text: &str) -> u32 {
    for pattern in EXPLICIT_YEARS.iter() {
        let explicit = pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(1)?.as_str().parse::<u32>().ok())
            .next();
        if let Some(years) = explicit {
            return years;
        }
    }

    let lower = text.to_lowercase();
    if SENIORITY_KEYWORDS.iter().any(|k| contains_word(&lower, k)) {
        SENIOR_ESTIMATE_YEARS
    } else {
        DEFAULT_ESTIMATE_YEARS
    }
}
