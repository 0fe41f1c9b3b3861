//! Job recommendations from keyword overlap between profile skills and a fixed
//! catalog of archetypes for the Quebec job market.
//!
//! A skill counts toward an archetype when it contains any of the archetype's
//! keywords, so "email marketing" supports an archetype keyed on "marketing".

use crate::models::{CvProfile, JobRecommendation, Locale};

pub const MAX_RECOMMENDATIONS: usize = 5;

/// A named job category with the keywords used to score it.
#[derive(Debug, Clone, Copy)]
pub struct Archetype {
    pub title_fr: &'static str,
    pub title_en: &'static str,
    pub keywords: &'static [&'static str],
    pub reason_fr: &'static str,
    pub reason_en: &'static str,
}

impl Archetype {
    pub fn title(&self, locale: Locale) -> &'static str {
        locale.pick(self.title_fr, self.title_en)
    }

    pub fn reason(&self, locale: Locale) -> &'static str {
        locale.pick(self.reason_fr, self.reason_en)
    }

    /// Profile skills backing this archetype.
    fn matching_skills<'a>(&self, skills: &'a [String]) -> Vec<&'a String> {
        skills
            .iter()
            .filter(|skill| {
                let skill = skill.to_lowercase();
                self.keywords.iter().any(|k| skill.contains(k))
            })
            .collect()
    }

    /// 0 – 100; several skills may back the same keyword, hence the clamp.
    fn match_score(&self, matching: usize) -> u8 {
        let ratio = matching as f64 / self.keywords.len() as f64;
        (ratio * 100.0).min(100.0).round() as u8
    }
}

/// Declaration order breaks score ties.
pub const CATALOG: &[Archetype] = &[
    Archetype {
        title_fr: "Gestionnaire marketing",
        title_en: "Marketing Manager",
        keywords: &["marketing", "digital marketing", "social media", "content creation", "seo"],
        reason_fr: "Vos compétences en marketing digital et gestion de contenu correspondent parfaitement aux besoins du marché québécois.",
        reason_en: "Your digital marketing and content management skills perfectly match Quebec market needs.",
    },
    Archetype {
        title_fr: "Spécialiste en marketing numérique",
        title_en: "Digital Marketing Specialist",
        keywords: &["digital marketing", "social media", "seo", "analytics", "content creation"],
        reason_fr: "Le marché québécois recherche activement des spécialistes en marketing digital avec vos compétences.",
        reason_en: "The Quebec market is actively seeking digital marketing specialists with your skills.",
    },
    Archetype {
        title_fr: "Chargé de projet",
        title_en: "Project Manager",
        keywords: &["project management", "leadership", "planning", "agile", "scrum"],
        reason_fr: "Votre expérience en gestion de projet est très recherchée dans les entreprises québécoises.",
        reason_en: "Your project management experience is highly sought after in Quebec companies.",
    },
    Archetype {
        title_fr: "Analyste d'affaires",
        title_en: "Business Analyst",
        keywords: &["analytics", "data analysis", "strategy", "planning", "excel"],
        reason_fr: "Les entreprises québécoises ont besoin d'analystes d'affaires avec vos compétences analytiques.",
        reason_en: "Quebec companies need business analysts with your analytical skills.",
    },
    Archetype {
        title_fr: "Créateur de contenu",
        title_en: "Content Creator",
        keywords: &["content creation", "social media", "writing", "communication", "creativity"],
        reason_fr: "Le secteur créatif québécois recherche des créateurs de contenu bilingues comme vous.",
        reason_en: "The Quebec creative sector is seeking bilingual content creators like you.",
    },
];

/// Most relevant first. Archetypes with no supporting skill are left out.
pub fn recommend(profile: &CvProfile, locale: Locale) -> Vec<JobRecommendation> {
    let mut recommendations: Vec<JobRecommendation> = CATALOG
        .iter()
        .filter_map(|archetype| {
            let matching = archetype.matching_skills(profile.skills()).len();
            (matching > 0).then(|| JobRecommendation {
                title: archetype.title(locale).to_string(),
                reason: archetype.reason(locale).to_string(),
                match_score: archetype.match_score(matching),
            })
        })
        .collect();

    // `sort_by` is stable, so equal scores keep catalog order.
    recommendations.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}
