//! Field extraction: keyword dictionaries and ordered regex sets over raw CV text.
//!
//! Pure and deterministic: the same text always yields the same fields. Nothing
//! here can fail; a field with no evidence is simply empty.

use std::collections::BTreeSet;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::analysis::entities::{EntityRecognizer, RegexEntityRecognizer};
use crate::analysis::matching::{
    char_len_in, collapse_whitespace, contains_term, contains_word, context_window, push_unique,
    tidy,
};
use crate::analysis::vocabulary::{
    CERTIFICATION_VOCABULARY, LANGUAGE_VOCABULARY, PLACE_NAMES, PROFICIENCY_WORDS,
    QUALIFIED_LANGUAGE_NAMES, ROLE_NOUNS, SKILL_VOCABULARY,
};
use crate::models::PersonalInfo;

pub const MAX_SKILLS: usize = 20;
pub const MAX_EXPERIENCE: usize = 8;
pub const MAX_EDUCATION: usize = 5;
pub const MAX_CERTIFICATIONS: usize = 8;
pub const MAX_JOB_TITLES: usize = 10;
pub const MAX_COMPANIES: usize = 8;
pub const MAX_DEGREES: usize = 5;
pub const MAX_INSTITUTIONS: usize = 5;

/// Characters kept on each side of a certification keyword.
const CERTIFICATION_CONTEXT_CHARS: usize = 50;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedFields {
    pub skills: Vec<String>,
    pub experience_snippets: Vec<String>,
    pub education_snippets: Vec<String>,
    pub languages: BTreeSet<String>,
    pub certifications: Vec<String>,
    pub job_titles: Vec<String>,
    pub companies: Vec<String>,
    pub degrees: Vec<String>,
    pub institutions: Vec<String>,
    pub personal_info: PersonalInfo,
}

// ────────────────────────────────────────────────────────────────────────────
// Pattern sets
// ────────────────────────────────────────────────────────────────────────────

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("field pattern must compile")
}

fn role_noun_alternation() -> String {
    ROLE_NOUNS
        .iter()
        .map(|n| regex::escape(n))
        .collect::<Vec<_>>()
        .join("|")
}

static CATEGORY_SKILL: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?i)\b((?:digital|content|social media|project|product|data|business|web|mobile|software|graphic|brand|event|financial|market)\s+(?:marketing|management|analysis|development|design|strategy|creation|engineering|analytics|planning|research))\b",
    )
});

static EXPERIENCE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        compile(r"(?i)\b(?:worked|working|served|employed)\s+as\s+(?:an?\s+)?([^\n.;]{3,200})"),
        compile(r"(?i)\b(?:position|role|poste)\s*:\s*([^\n]{3,200})"),
        compile(r"(?i)\b(?:travaillée?|employée?)\s+(?:comme|en tant que)\s+([^\n.;]{3,200})"),
        compile(r"(?i)\b(?:experience|expérience)\s+(?:at|with|chez|avec)\s+([^\n.;]{3,200})"),
        compile(&format!(
            r"\b((?i:senior|junior|lead|principal|chief|head of|associate)[ \t]+(?:[\p{{L}}&/-]+[ \t]+){{0,3}}(?i:{})s?\b[^\n.;]{{0,120}})",
            role_noun_alternation()
        )),
    ]
});

static ROLE_NOUN_PHRASE: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"\b((?:\p{{Lu}}[\p{{L}}&-]*[ \t]+){{0,3}}(?i:{})s?)\b",
        role_noun_alternation()
    ))
});

static EDUCATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        compile(r"(?i)\b(?:graduated from|studied at|diplômée? de|diplômée? d'|études à|études en)\s+([^\n.;]{3,150})"),
        compile(r"(?i)\b((?:bachelor|master|doctorate|baccalauréat|maîtrise|doctorat|diplôme|diploma|mba|ph\.?d|b\.?sc|m\.?sc|dess)\b[^\n]{0,140})"),
        compile(r"\b((?:DEC|AEC)\b[^\n]{0,140})"),
        compile(r"(?i)\b((?:university|université|college|collège|cégep|cegep|école|school|institute|institut|polytechnique)\b[^\n]{0,120})"),
    ]
});

static LANGUAGE_BEFORE_LEVEL: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"(?i)\b(\p{{L}}+)\s*[(:,-]?\s*(?:{})\b",
        PROFICIENCY_WORDS
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|")
    ))
});

static LEVEL_IN_LANGUAGE: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?i)\b(?:fluent|proficient|native|courant|bilingue|bilingual|à l'aise)\s+(?:in|en)\s+(\p{L}+)")
});

static CERTIFICATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        compile(r"(?i)\b(certifi(?:ed|ée?)\s+(?:in|en)\s+[^\n,.;]{2,80})"),
        compile(r"\b((?:\p{Lu}[\w+-]*[ \t]+){1,3}(?i:certified|certifiée?)(?:[ \t]+\p{Lu}[\w-]*){0,4})"),
        compile(r"(?i)\b((?:certificat|certificate|certification)\s+(?:in|en|of|de)\s+[^\n,.;]{2,80})"),
    ]
});

static CERTIFICATION_KEYWORDS: Lazy<Vec<Regex>> = Lazy::new(|| {
    CERTIFICATION_VOCABULARY
        .iter()
        .map(|k| compile(&format!(r"(?i)\b{}\b", regex::escape(k))))
        .collect()
});

static JOB_TITLE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    let nouns = role_noun_alternation();
    vec![
        compile(r"(?i)\b(?:job title|title|titre|poste|position)\s*:\s*([^\n,;]{3,80})"),
        compile(&format!(
            r"\b((?i:senior|junior|lead|principal|chief|head of|associate|assistant)[ \t]+(?:\p{{Lu}}[\p{{L}}&/-]*[ \t]+){{0,3}}(?i:{nouns})s?)\b"
        )),
        compile(&format!(
            r"\b((?:\p{{Lu}}[\p{{L}}&/-]*[ \t]+){{1,3}}(?i:{nouns})s?)\b"
        )),
    ]
});

static COMPANY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        compile(r"(?:\bat|\bchez|\bfor|\bpour)[ \t]+(\p{Lu}[\w&'-]*(?:[ \t]+\p{Lu}[\w&'-]*){0,3})"),
        compile(r"\b((?:\p{Lu}[\w&'-]*[ \t]+){1,3}(?:Inc\.?|Ltd\.?|Ltée|LLC|Corp\.?|Corporation|Group|Groupe|Technologies|Solutions|Consulting|Agency|Agence|Labs))"),
    ]
});

static DEGREE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        compile(r"(?i)\b((?:bachelor|master|doctor|associate)(?:'s|’s)?(?:\s+degree)?\s+(?:of|in)\s+\p{L}[\p{L} &-]{1,60})"),
        compile(r"(?i)\b((?:baccalauréat|maîtrise|doctorat|dess|diplôme d'études \p{L}+)\s+(?:en|de|du|d')\s*\p{L}[\p{L} &'-]{1,60})"),
        compile(r"\b((?:MBA|PhD|Ph\.D\.|B\.Sc\.|BSc|M\.Sc\.|MSc|B\.Eng\.|BEng|M\.Eng\.|DEC|AEC)(?:\s+(?:in|en)\s+\p{L}[\p{L} &-]{1,60})?)"),
    ]
});

static INSTITUTION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        compile(r"\b((?:University|Université|College|Collège|Cégep|CEGEP|Cegep|Institute|Institut|École|Ecole|School|Polytechnique|HEC)(?:[ \t]+(?:of|de|du|des|la|d')?[ \t]*\p{Lu}[\p{L}'-]*){1,4})"),
        compile(r"\b((?:\p{Lu}[\p{L}'-]*[ \t]+){1,3}(?:University|College|Institute|School))\b"),
    ]
});

// ────────────────────────────────────────────────────────────────────────────
// Extractor
// ────────────────────────────────────────────────────────────────────────────

/// Applies the keyword dictionaries and pattern sets through an `EntityRecognizer`.
#[derive(Clone)]
pub struct FieldExtractor {
    recognizer: Arc<dyn EntityRecognizer>,
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new(Arc::new(RegexEntityRecognizer))
    }
}

impl FieldExtractor {
    pub fn new(recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self { recognizer }
    }

    pub fn extract_fields(&self, text: &str) -> ExtractedFields {
        let lower = text.to_lowercase();
        ExtractedFields {
            skills: self.skills(text, &lower),
            experience_snippets: self.experience_snippets(text),
            education_snippets: self.education_snippets(text),
            languages: self.languages(text, &lower),
            certifications: self.certifications(text),
            job_titles: self.collect(text, &JOB_TITLE_PATTERNS, 3, 80, MAX_JOB_TITLES),
            companies: self.companies(text),
            degrees: self.collect(text, &DEGREE_PATTERNS, 3, 100, MAX_DEGREES),
            institutions: self.collect(text, &INSTITUTION_PATTERNS, 4, 100, MAX_INSTITUTIONS),
            personal_info: self.personal_info(text),
        }
    }

    /// Vocabulary hits in vocabulary order, then category phrases in text order.
    fn skills(&self, text: &str, lower: &str) -> Vec<String> {
        let mut skills = Vec::new();
        for term in SKILL_VOCABULARY {
            if contains_term(lower, term) {
                push_unique(&mut skills, term, MAX_SKILLS);
            }
        }
        for phrase in self.recognizer.extract_matches(text, &CATEGORY_SKILL) {
            push_unique(&mut skills, &phrase.to_lowercase(), MAX_SKILLS);
        }
        skills
    }

    fn experience_snippets(&self, text: &str) -> Vec<String> {
        let mut snippets = self.collect(text, &EXPERIENCE_PATTERNS, 10, 200, MAX_EXPERIENCE);
        for phrase in self.recognizer.extract_matches(text, &ROLE_NOUN_PHRASE) {
            let phrase = tidy(&phrase);
            if phrase.chars().count() >= 4 {
                push_unique(&mut snippets, &phrase, MAX_EXPERIENCE);
            }
        }
        snippets
    }

    fn education_snippets(&self, text: &str) -> Vec<String> {
        self.collect(text, &EDUCATION_PATTERNS, 5, 150, MAX_EDUCATION)
    }

    fn languages(&self, text: &str, lower: &str) -> BTreeSet<String> {
        let mut languages = BTreeSet::new();
        for (canonical, spellings) in LANGUAGE_VOCABULARY {
            if spellings.iter().any(|s| contains_word(lower, s)) {
                languages.insert(canonical.to_string());
            }
        }

        let qualified = self
            .recognizer
            .extract_matches(text, &LANGUAGE_BEFORE_LEVEL)
            .into_iter()
            .chain(self.recognizer.extract_matches(text, &LEVEL_IN_LANGUAGE));
        for word in qualified {
            if let Some(name) = language_name(&word) {
                languages.insert(name);
            }
        }
        languages
    }

    fn certifications(&self, text: &str) -> Vec<String> {
        let mut certifications =
            self.collect(text, &CERTIFICATION_PATTERNS, 3, 120, MAX_CERTIFICATIONS);
        for keyword in CERTIFICATION_KEYWORDS.iter() {
            if let Some(m) = keyword.find(text) {
                let window = context_window(
                    text,
                    m.start(),
                    m.end(),
                    CERTIFICATION_CONTEXT_CHARS,
                );
                push_unique(
                    &mut certifications,
                    &collapse_whitespace(window),
                    MAX_CERTIFICATIONS,
                );
            }
        }
        certifications
    }

    fn companies(&self, text: &str) -> Vec<String> {
        let mut companies = Vec::new();
        for pattern in COMPANY_PATTERNS.iter() {
            for candidate in self.recognizer.extract_matches(text, pattern) {
                let candidate = tidy(&candidate);
                let is_place = PLACE_NAMES.iter().any(|p| p.eq_ignore_ascii_case(&candidate));
                if char_len_in(&candidate, 2, 80) && !is_place {
                    push_unique(&mut companies, &candidate, MAX_COMPANIES);
                }
            }
        }
        companies
    }

    /// Runs an ordered pattern set, keeping tidied matches within `[min, max]` characters.
    fn collect(
        &self,
        text: &str,
        patterns: &[Regex],
        min: usize,
        max: usize,
        cap: usize,
    ) -> Vec<String> {
        let mut out = Vec::new();
        for pattern in patterns {
            for candidate in self.recognizer.extract_matches(text, pattern) {
                let candidate = tidy(&candidate);
                if char_len_in(&candidate, min, max) {
                    push_unique(&mut out, &candidate, cap);
                }
            }
        }
        out
    }

    fn personal_info(&self, text: &str) -> PersonalInfo {
        PersonalInfo {
            name: self.recognizer.extract_person_names(text).into_iter().next(),
            email: self.recognizer.extract_emails(text).into_iter().next(),
            phone: self.recognizer.extract_phones(text).into_iter().next(),
            location: self.recognizer.extract_place_names(text).into_iter().next(),
        }
    }
}

/// Canonical name for a word found next to a proficiency marker, if it is one.
fn language_name(word: &str) -> Option<String> {
    let lower = word.to_lowercase();
    if let Some((canonical, _)) = LANGUAGE_VOCABULARY
        .iter()
        .find(|(_, spellings)| spellings.contains(&lower.as_str()))
    {
        return Some(canonical.to_string());
    }
    QUALIFIED_LANGUAGE_NAMES
        .contains(&lower.as_str())
        .then_some(lower)
}

/// Convenience wrapper over the default extractor.
pub fn extract_fields(text: &str) -> ExtractedFields {
    FieldExtractor::default().extract_fields(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKETING_CV: &str = "Marie-Ève Tremblay
Digital Marketing Specialist
marie.tremblay@example.com | 514-555-0199
Montréal, QC

PROFESSIONAL EXPERIENCE
Worked as a marketing coordinator at Ubisoft, managing social media campaigns.
Senior Marketing Manager at Desjardins Group (2019-2023)
Position: Content Strategist

EDUCATION
Bachelor's degree in Marketing, Université de Montréal
Graduated from McGill University in 2015

CERTIFICATIONS
Google Analytics Certification, HubSpot Certified Inbound Marketer
PMP obtained in 2021

LANGUAGES
French (native), English (fluent), Swahili fluent";

    #[test]
    fn test_skills_follow_vocabulary_order_without_duplicates() {
        let fields = extract_fields(MARKETING_CV);
        assert!(fields.skills.contains(&"marketing".to_string()));
        assert!(fields.skills.contains(&"digital marketing".to_string()));
        assert!(fields.skills.contains(&"social media".to_string()));
        assert!(fields.skills.contains(&"google analytics".to_string()));
        let marketing = fields.skills.iter().position(|s| s == "marketing").unwrap();
        let social = fields.skills.iter().position(|s| s == "social media").unwrap();
        assert!(marketing < social);

        let mut lowered: Vec<_> = fields.skills.iter().map(|s| s.to_lowercase()).collect();
        lowered.sort();
        lowered.dedup();
        assert_eq!(lowered.len(), fields.skills.len());
    }

    #[test]
    fn test_category_phrases_are_added_as_skills() {
        let fields = extract_fields("Led software development and event planning for clients.");
        assert!(fields.skills.contains(&"software development".to_string()));
        assert!(fields.skills.contains(&"event planning".to_string()));
    }

    #[test]
    fn test_skills_are_capped() {
        let text = SKILL_VOCABULARY.join(", ");
        let fields = extract_fields(&text);
        assert_eq!(fields.skills.len(), MAX_SKILLS);
        assert_eq!(fields.skills[0], SKILL_VOCABULARY[0]);
    }

    #[test]
    fn test_experience_snippets_strip_cue_and_respect_length() {
        let fields = extract_fields(MARKETING_CV);
        assert!(fields
            .experience_snippets
            .iter()
            .any(|s| s.starts_with("marketing coordinator at Ubisoft")));
        assert!(fields
            .experience_snippets
            .contains(&"Content Strategist".to_string()));
        assert!(fields
            .experience_snippets
            .iter()
            .all(|s| s.chars().count() >= 4 && s.chars().count() <= 200));
        assert!(fields.experience_snippets.len() <= MAX_EXPERIENCE);
    }

    #[test]
    fn test_role_nouns_count_as_experience() {
        let fields = extract_fields("Analyst");
        assert_eq!(fields.experience_snippets, vec!["Analyst"]);
    }

    #[test]
    fn test_education_snippets() {
        let fields = extract_fields(MARKETING_CV);
        assert!(fields
            .education_snippets
            .iter()
            .any(|s| s.starts_with("Bachelor's degree in Marketing")));
        assert!(fields
            .education_snippets
            .iter()
            .any(|s| s.starts_with("McGill University")));
        assert!(fields.education_snippets.len() <= MAX_EDUCATION);
    }

    #[test]
    fn test_languages_from_vocabulary_and_proficiency_patterns() {
        let fields = extract_fields(MARKETING_CV);
        assert!(fields.languages.contains("french"));
        assert!(fields.languages.contains("english"));
        assert!(fields.languages.contains("swahili"));
    }

    #[test]
    fn test_language_proficiency_pattern_adds_unlisted_language() {
        let fields = extract_fields("Fluent in Amharic and conversational Spanish.");
        assert!(fields.languages.contains("amharic"));
        assert!(fields.languages.contains("spanish"));
    }

    #[test]
    fn test_proficiency_words_beside_non_languages_add_nothing() {
        let fields = extract_fields(
            "Skills: strategic, advanced Excel. Proficient in public speaking and graphic design. Canadian native.",
        );
        assert!(fields.languages.is_empty(), "{:?}", fields.languages);
    }

    #[test]
    fn test_french_language_names_map_to_canonical() {
        let fields = extract_fields("Langues : français (langue maternelle), anglais courant");
        let langs: Vec<_> = fields.languages.iter().cloned().collect();
        assert_eq!(langs, vec!["english", "french"]);
    }

    #[test]
    fn test_polished_is_not_polish() {
        let fields = extract_fields("Polished client presentations every quarter.");
        assert!(!fields.languages.contains("polish"));
    }

    #[test]
    fn test_certifications_include_patterns_and_context_windows() {
        let fields = extract_fields(MARKETING_CV);
        assert!(fields
            .certifications
            .iter()
            .any(|c| c.contains("HubSpot Certified")));
        assert!(fields
            .certifications
            .iter()
            .any(|c| c.contains("PMP obtained in 2021")));
        assert!(fields.certifications.len() <= MAX_CERTIFICATIONS);
    }

    #[test]
    fn test_job_titles_companies_degrees_institutions() {
        let fields = extract_fields(MARKETING_CV);
        assert!(fields
            .job_titles
            .iter()
            .any(|t| t == "Senior Marketing Manager"));
        assert!(fields.companies.contains(&"Ubisoft".to_string()));
        assert!(fields.companies.contains(&"Desjardins Group".to_string()));
        assert!(fields
            .degrees
            .iter()
            .any(|d| d.starts_with("Bachelor's degree in Marketing")));
        assert!(fields
            .institutions
            .iter()
            .any(|i| i == "Université de Montréal"));
        assert!(fields.institutions.iter().any(|i| i == "McGill University"));
    }

    #[test]
    fn test_places_are_not_companies() {
        let fields = extract_fields("Project lead at Montreal headquarters");
        assert!(!fields.companies.iter().any(|c| c == "Montreal"));
    }

    #[test]
    fn test_personal_info() {
        let info = extract_fields(MARKETING_CV).personal_info;
        assert_eq!(info.name.as_deref(), Some("Marie-Ève Tremblay"));
        assert_eq!(info.email.as_deref(), Some("marie.tremblay@example.com"));
        assert_eq!(info.phone.as_deref(), Some("514-555-0199"));
        assert_eq!(info.location.as_deref(), Some("Montréal, QC"));
    }

    #[test]
    fn test_text_without_signals_yields_empty_fields() {
        let fields = extract_fields("lorem ipsum dolor sit amet consectetur adipiscing elit");
        assert!(fields.skills.is_empty());
        assert!(fields.experience_snippets.is_empty());
        assert!(fields.education_snippets.is_empty());
        assert!(fields.languages.is_empty());
        assert!(fields.certifications.is_empty());
        assert_eq!(fields.personal_info, PersonalInfo::default());
    }

    #[test]
    fn test_every_collection_respects_its_cap() {
        let noisy = MARKETING_CV.repeat(6);
        let fields = extract_fields(&noisy);
        assert!(fields.skills.len() <= MAX_SKILLS);
        assert!(fields.experience_snippets.len() <= MAX_EXPERIENCE);
        assert!(fields.education_snippets.len() <= MAX_EDUCATION);
        assert!(fields.certifications.len() <= MAX_CERTIFICATIONS);
        assert!(fields.job_titles.len() <= MAX_JOB_TITLES);
        assert!(fields.companies.len() <= MAX_COMPANIES);
        assert!(fields.degrees.len() <= MAX_DEGREES);
        assert!(fields.institutions.len() <= MAX_INSTITUTIONS);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        assert_eq!(extract_fields(MARKETING_CV), extract_fields(MARKETING_CV));
    }

    struct FixedRecognizer;

    impl EntityRecognizer for FixedRecognizer {
        fn extract_emails(&self, _text: &str) -> Vec<String> {
            vec!["fixed@example.com".to_string()]
        }
        fn extract_phones(&self, _text: &str) -> Vec<String> {
            vec![]
        }
        fn extract_person_names(&self, _text: &str) -> Vec<String> {
            vec!["Fixed Person".to_string()]
        }
        fn extract_place_names(&self, _text: &str) -> Vec<String> {
            vec![]
        }
    }

    #[test]
    fn test_recognizer_is_swappable() {
        let extractor = FieldExtractor::new(Arc::new(FixedRecognizer));
        let info = extractor.extract_fields("anything").personal_info;
        assert_eq!(info.email.as_deref(), Some("fixed@example.com"));
        assert_eq!(info.name.as_deref(), Some("Fixed Person"));
        assert!(info.phone.is_none());
    }
}
