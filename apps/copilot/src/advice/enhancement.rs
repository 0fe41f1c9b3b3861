//! Rewrite advice for a fragment of CV text the user selected.

use crate::models::{CvProfile, EnhancementSuggestion, Locale};

struct RewriteTemplate {
    markers: &'static [&'static str],
    suggestion: (&'static str, &'static str),
    reason: (&'static str, &'static str),
    impact: (&'static str, &'static str),
}

const HIGH: (&str, &str) = ("Élevé", "High");
const MEDIUM: (&str, &str) = ("Moyen", "Medium");

// Weak-phrasing markers, in priority order. Pairs are (fr, en).
const TEMPLATES: &[RewriteTemplate] = &[
    RewriteTemplate {
        markers: &["responsible for", "responsable de"],
        suggestion: (
            "Remplacez \"responsable de\" par des verbes d'action plus forts comme \"dirigé\", \"géré\", \"développé\"",
            "Replace \"responsible for\" with stronger action verbs like \"led\", \"managed\", \"developed\"",
        ),
        reason: (
            "Les verbes d'action sont plus impactants et montrent mieux vos réalisations.",
            "Action verbs are more impactful and better showcase your achievements.",
        ),
        impact: HIGH,
    },
    RewriteTemplate {
        markers: &["helped", "aidé"],
        suggestion: (
            "Quantifiez votre impact avec des chiffres concrets (ex: \"augmenté les ventes de 25%\")",
            "Quantify your impact with concrete numbers (e.g., \"increased sales by 25%\")",
        ),
        reason: (
            "Les employeurs québécois recherchent des résultats mesurables et quantifiables.",
            "Quebec employers look for measurable and quantifiable results.",
        ),
        impact: HIGH,
    },
    RewriteTemplate {
        markers: &["worked on", "travaillé sur"],
        suggestion: (
            "Spécifiez votre rôle exact et les technologies utilisées",
            "Specify your exact role and technologies used",
        ),
        reason: (
            "Plus de détails techniques montrent votre expertise spécifique.",
            "More technical details show your specific expertise.",
        ),
        impact: MEDIUM,
    },
];

const DEFAULT_TEMPLATE: RewriteTemplate = RewriteTemplate {
    markers: &[],
    suggestion: (
        "Ajoutez des chiffres concrets et des résultats mesurables pour renforcer cette affirmation",
        "Add concrete numbers and measurable results to strengthen this statement",
    ),
    reason: (
        "Les employeurs québécois privilégient les candidats qui peuvent démontrer leur impact quantifiable.",
        "Quebec employers prefer candidates who can demonstrate their quantifiable impact.",
    ),
    impact: MEDIUM,
};

/// The first marker found in the lowercased fragment selects the template.
///
/// `profile` is not consulted yet; it stays in the signature so advice can
/// later take the rest of the CV into account.
pub fn suggest(_profile: &CvProfile, fragment: &str, locale: Locale) -> EnhancementSuggestion {
    let lower = fragment.to_lowercase();
    let template = TEMPLATES
        .iter()
        .find(|t| t.markers.iter().any(|m| lower.contains(m)))
        .unwrap_or(&DEFAULT_TEMPLATE);

    let pick = |(fr, en): (&'static str, &'static str)| locale.pick(fr, en).to_string();
    EnhancementSuggestion {
        original_text: fragment.to_string(),
        suggestion: pick(template.suggestion),
        reason: pick(template.reason),
        impact: pick(template.impact),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ProfileBuilder;
    use crate::models::TextSource;

    fn profile() -> CvProfile {
        ProfileBuilder::default().build("Responsible for managing campaigns", TextSource::PdfText)
    }

    #[test]
    fn test_responsible_for_gets_action_verbs() {
        let profile = profile();
        let en = suggest(&profile, "Responsible for managing campaigns", Locale::En);
        assert_eq!(en.impact, "High");
        assert!(en.suggestion.contains("stronger action verbs"));
        assert_eq!(en.original_text, "Responsible for managing campaigns");

        let fr = suggest(&profile, "Responsible for managing campaigns", Locale::Fr);
        assert_eq!(fr.impact, "Élevé");
    }

    #[test]
    fn test_french_markers() {
        let profile = profile();
        let s = suggest(&profile, "J'ai aidé l'équipe des ventes", Locale::Fr);
        assert!(s.suggestion.starts_with("Quantifiez"));
        assert_eq!(s.impact, "Élevé");

        let s = suggest(&profile, "Travaillé sur le site web", Locale::En);
        assert_eq!(s.suggestion, "Specify your exact role and technologies used");
        assert_eq!(s.impact, "Medium");
    }

    #[test]
    fn test_marker_priority_order() {
        let profile = profile();
        let s = suggest(&profile, "Helped and worked on reports; responsible for QA", Locale::En);
        assert!(s.suggestion.starts_with("Replace \"responsible for\""));
    }

    #[test]
    fn test_default_suggestion() {
        let profile = profile();
        let s = suggest(&profile, "Increased revenue", Locale::En);
        assert_eq!(
            s.suggestion,
            "Add concrete numbers and measurable results to strengthen this statement"
        );
        assert_eq!(s.impact, "Medium");
        assert_eq!(suggest(&profile, "", Locale::Fr).impact, "Moyen");
    }

    #[test]
    fn test_suggest_is_idempotent() {
        let profile = profile();
        let first = suggest(&profile, "Helped launch the app", Locale::Fr);
        let second = suggest(&profile, "Helped launch the app", Locale::Fr);
        assert_eq!(first, second);
    }
}
