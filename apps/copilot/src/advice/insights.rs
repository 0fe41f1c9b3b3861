//! Completeness insights.
//!
//! Two fixed batteries of independent checks. Each check appends at most one
//! insight and never looks at what the others produced; the locale only picks
//! the rendered strings.

use crate::analysis::vocabulary::REGIONAL_KEYWORDS;
use crate::models::{CvProfile, Insight, Locale, Priority};

/// Below this many detected skills the profile gets a "limited skills" insight.
pub const MIN_SKILLS: usize = 5;

fn insight(
    locale: Locale,
    category: &str,
    title: (&str, &str),
    description: (String, String),
    suggestion: (&str, &str),
    priority: Priority,
) -> Insight {
    let (description_fr, description_en) = description;
    Insight {
        category: category.to_string(),
        title: locale.pick(title.0, title.1).to_string(),
        description: locale.pick(&description_fr, &description_en).to_string(),
        suggestion: locale.pick(suggestion.0, suggestion.1).to_string(),
        priority,
    }
}

/// Skills, languages, experience and education checks, in that order.
pub fn general_insights(profile: &CvProfile, locale: Locale) -> Vec<Insight> {
    let mut insights = Vec::new();

    let skill_count = profile.skills().len();
    if skill_count < MIN_SKILLS {
        insights.push(insight(
            locale,
            "skills",
            ("Compétences limitées", "Limited Skills"),
            (
                format!("Votre CV mentionne seulement {skill_count} compétences spécifiques."),
                format!("Your CV mentions only {skill_count} specific skills."),
            ),
            (
                "Ajoutez plus de compétences techniques et soft skills pertinentes pour le marché québécois.",
                "Add more technical and soft skills relevant to the Quebec market.",
            ),
            Priority::High,
        ));
    }

    if !profile.has_language("french") && !profile.has_language("english") {
        insights.push(insight(
            locale,
            "languages",
            ("Langues non spécifiées", "Languages Not Specified"),
            (
                "Aucune compétence linguistique n'est mentionnée dans votre CV.".to_string(),
                "No language skills are mentioned in your CV.".to_string(),
            ),
            (
                "Spécifiez clairement vos compétences en français et en anglais avec votre niveau de maîtrise.",
                "Clearly specify your French and English skills with your proficiency level.",
            ),
            Priority::High,
        ));
    }

    if profile.experience_snippets().is_empty() {
        insights.push(insight(
            locale,
            "experience",
            ("Expérience professionnelle manquante", "Missing Professional Experience"),
            (
                "Aucune expérience professionnelle n'a été détectée dans votre CV.".to_string(),
                "No professional experience was detected in your CV.".to_string(),
            ),
            (
                "Ajoutez vos expériences professionnelles avec des descriptions détaillées et des réalisations quantifiées.",
                "Add your professional experiences with detailed descriptions and quantified achievements.",
            ),
            Priority::High,
        ));
    }

    if profile.education_snippets().is_empty() {
        insights.push(insight(
            locale,
            "education",
            ("Formation académique manquante", "Missing Academic Background"),
            (
                "Aucune formation académique n'a été détectée dans votre CV.".to_string(),
                "No academic background was detected in your CV.".to_string(),
            ),
            (
                "Incluez votre formation académique avec les diplômes obtenus et les institutions fréquentées.",
                "Include your academic background with degrees obtained and institutions attended.",
            ),
            Priority::Medium,
        ));
    }

    insights
}

/// Quebec market checks: regional experience in the raw text, then French.
pub fn regional_insights(profile: &CvProfile, locale: Locale) -> Vec<Insight> {
    let mut insights = Vec::new();

    let raw = profile.raw_text().to_lowercase();
    if !REGIONAL_KEYWORDS.iter().any(|k| raw.contains(k)) {
        insights.push(insight(
            locale,
            "quebec",
            ("Expérience québécoise manquante", "Missing Quebec Experience"),
            (
                "Aucune expérience au Québec ou au Canada n'est mentionnée.".to_string(),
                "No experience in Quebec or Canada is mentioned.".to_string(),
            ),
            (
                "Si vous avez de l'expérience au Québec, mentionnez-la. Sinon, mettez l'accent sur votre adaptabilité et votre intérêt pour le marché québécois.",
                "If you have experience in Quebec, mention it. Otherwise, emphasize your adaptability and interest in the Quebec market.",
            ),
            Priority::Medium,
        ));
    }

    if !profile.has_language("french") {
        insights.push(insight(
            locale,
            "french",
            ("Compétences en français", "French Language Skills"),
            (
                "Le français est essentiel pour la plupart des emplois au Québec.".to_string(),
                "French is essential for most jobs in Quebec.".to_string(),
            ),
            (
                "Indiquez votre niveau de français et vos efforts pour l'améliorer.",
                "Indicate your French level and efforts to improve it.",
            ),
            Priority::High,
        ));
    }

    insights
}

/// General battery followed by the regional one.
pub fn analyze(profile: &CvProfile, locale: Locale) -> Vec<Insight> {
    let mut insights = general_insights(profile, locale);
    insights.extend(regional_insights(profile, locale));
    insights
}
