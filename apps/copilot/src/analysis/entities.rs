//! Entity recognition capabilities used by the field extractor.
//!
//! The extractor only depends on `EntityRecognizer`, so a model-backed
//! recognizer can replace the regex one without touching the heuristics.

use std::cmp::Reverse;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::matching::{collapse_whitespace, push_unique};
use crate::analysis::vocabulary::{
    NAME_STOPWORDS, PLACE_NAMES, ROLE_NOUNS, SENIORITY_KEYWORDS, SKILL_VOCABULARY,
};

pub trait EntityRecognizer: Send + Sync {
    fn extract_emails(&self, text: &str) -> Vec<String>;
    fn extract_phones(&self, text: &str) -> Vec<String>;
    fn extract_person_names(&self, text: &str) -> Vec<String>;
    fn extract_place_names(&self, text: &str) -> Vec<String>;

    /// All matches of `pattern` in text order: capture group 1 when the pattern
    /// has one, otherwise the whole match. Whitespace is collapsed.
    fn extract_matches(&self, text: &str, pattern: &Regex) -> Vec<String> {
        pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(1).or_else(|| caps.get(0)))
            .map(|m| collapse_whitespace(m.as_str()))
            .filter(|s| !s.is_empty())
            .collect()
    }
}

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid email regex")
});

// North American numbers, then French national and international forms.
static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:^|[^\w+])((?:\+?1[\s.-]?)?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}|\+33[\s.]?\d(?:[\s.]?\d{2}){4}|0\d(?:[\s.]?\d{2}){4})\b",
    )
    .expect("valid phone regex")
});

static NAME_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^\s*(?:name|nom)\s*:\s*(\p{Lu}[\p{L}'’-]+(?:\s+\p{Lu}[\p{L}'’-]+){1,3})\s*$")
        .expect("valid name label regex")
});

static PLACE: Lazy<Regex> = Lazy::new(|| {
    let alternatives = PLACE_NAMES
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{alternatives})\b")).expect("valid place regex")
});

static CITY_REGION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b\p{Lu}[\p{L}'-]+(?:[ -]\p{Lu}[\p{L}'-]+)?,\s*(?:QC|ON|BC|AB|MB|NB|NS|SK|PE|NL|Québec|Quebec|Ontario|Canada|France)\b",
    )
    .expect("valid city regex")
});

/// Lines inspected for a leading person name.
const NAME_SCAN_LINES: usize = 5;
const MAX_NAME_WORDS: usize = 3;

/// Regex and gazetteer backed recognizer. Deterministic and stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexEntityRecognizer;

impl EntityRecognizer for RegexEntityRecognizer {
    fn extract_emails(&self, text: &str) -> Vec<String> {
        let mut emails = Vec::new();
        for m in EMAIL.find_iter(text) {
            push_unique(&mut emails, m.as_str(), usize::MAX);
        }
        emails
    }

    fn extract_phones(&self, text: &str) -> Vec<String> {
        let mut phones = Vec::new();
        for m in self.extract_matches(text, &PHONE) {
            push_unique(&mut phones, &m, usize::MAX);
        }
        phones
    }

    fn extract_person_names(&self, text: &str) -> Vec<String> {
        let mut names = Vec::new();
        for label in self.extract_matches(text, &NAME_LABEL) {
            push_unique(&mut names, &label, usize::MAX);
        }
        for line in text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .take(NAME_SCAN_LINES)
        {
            if let Some(name) = leading_name(line) {
                push_unique(&mut names, &name, usize::MAX);
            }
        }
        names
    }

    fn extract_place_names(&self, text: &str) -> Vec<String> {
        let mut spans: Vec<(usize, usize)> = PLACE
            .find_iter(text)
            .chain(CITY_REGION.find_iter(text))
            .map(|m| (m.start(), m.end()))
            .collect();
        // Earliest first; at the same start the longer span ("Montreal, QC") wins.
        spans.sort_by_key(|&(start, end)| (start, Reverse(end)));
        spans.dedup_by_key(|&mut (start, _)| start);

        let mut places = Vec::new();
        for (start, end) in spans {
            push_unique(&mut places, &text[start..end], usize::MAX);
        }
        places
    }
}

/// Leading run of capitalized words that looks like a person's name.
fn leading_name(line: &str) -> Option<String> {
    if line.contains('@') || line.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    let mut words = Vec::new();
    for raw in line.split_whitespace() {
        let ends_clause = raw.ends_with([',', '.', '|', ':', ';']);
        let word = raw.trim_end_matches([',', '.', '|', ':', ';']);
        if !is_name_word(word) || is_heading_word(word) {
            break;
        }
        words.push(word);
        if ends_clause || words.len() == MAX_NAME_WORDS {
            break;
        }
    }

    (words.len() >= 2).then(|| words.join(" "))
}

/// "Marie", "Jean-François", "O'Neil": capitalized, not shouted in all caps.
fn is_name_word(word: &str) -> bool {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let rest: Vec<char> = chars.collect();
    first.is_uppercase()
        && rest.iter().any(|c| c.is_lowercase())
        && rest
            .iter()
            .all(|c| c.is_alphabetic() || matches!(c, '-' | '\'' | '’'))
}

fn is_heading_word(word: &str) -> bool {
    let lower = word.to_lowercase();
    NAME_STOPWORDS.contains(&lower.as_str())
        || ROLE_NOUNS.contains(&lower.as_str())
        || SENIORITY_KEYWORDS.contains(&lower.as_str())
        || SKILL_VOCABULARY.contains(&lower.as_str())
        || PLACE_NAMES.iter().any(|p| p.to_lowercase() == lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CV: &str = "Marie-Ève Tremblay
Marketing Manager
marie.tremblay@example.com | (514) 555-0199
Montréal, QC

Worked as a marketing coordinator at Ubisoft in Montreal.";

    #[test]
    fn test_extracts_email() {
        let r = RegexEntityRecognizer;
        assert_eq!(r.extract_emails(CV), vec!["marie.tremblay@example.com"]);
    }

    #[test]
    fn test_extracts_north_american_phone() {
        let r = RegexEntityRecognizer;
        assert_eq!(r.extract_phones(CV), vec!["(514) 555-0199"]);
    }

    #[test]
    fn test_extracts_french_phone() {
        let r = RegexEntityRecognizer;
        let phones = r.extract_phones("Tél : 06 12 34 56 78");
        assert_eq!(phones, vec!["06 12 34 56 78"]);
    }

    #[test]
    fn test_person_name_from_first_line() {
        let r = RegexEntityRecognizer;
        assert_eq!(r.extract_person_names(CV)[0], "Marie-Ève Tremblay");
    }

    #[test]
    fn test_person_name_stops_before_title_on_same_line() {
        let r = RegexEntityRecognizer;
        let names = r.extract_person_names("Jane Doe Marketing Manager with agile experience");
        assert_eq!(names, vec!["Jane Doe"]);
    }

    #[test]
    fn test_headings_are_not_names() {
        let r = RegexEntityRecognizer;
        assert!(r
            .extract_person_names("PROFESSIONAL EXPERIENCE\nCurriculum Vitae\nSenior Analyst")
            .is_empty());
    }

    #[test]
    fn test_labelled_name_comes_first() {
        let r = RegexEntityRecognizer;
        let names = r.extract_person_names("Profile\nNom : Karim Haddad\n");
        assert_eq!(names[0], "Karim Haddad");
    }

    #[test]
    fn test_place_names_in_text_order_prefer_city_region() {
        let r = RegexEntityRecognizer;
        let places = r.extract_place_names(CV);
        assert_eq!(places[0], "Montréal, QC");
        assert!(places.contains(&"Montreal".to_string()));
    }

    #[test]
    fn test_extract_matches_prefers_first_group() {
        let r = RegexEntityRecognizer;
        let pattern = Regex::new(r"worked as (?:an? )?([a-z ]+?) at").unwrap();
        assert_eq!(
            r.extract_matches("I worked as a  sales  lead at Acme", &pattern),
            vec!["sales lead"]
        );
    }

    #[test]
    fn test_missing_entities_yield_empty_lists() {
        let r = RegexEntityRecognizer;
        let text = "no contact details here at all";
        assert!(r.extract_emails(text).is_empty());
        assert!(r.extract_phones(text).is_empty());
        assert!(r.extract_person_names(text).is_empty());
        assert!(r.extract_place_names(text).is_empty());
    }
}
