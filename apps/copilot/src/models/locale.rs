use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Display language for every user-facing string the advisors render.
/// Never influences extraction or scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fr,
    En,
}

impl Locale {
    /// Picks the variant of a bilingual string pair.
    pub fn pick<'a>(self, fr: &'a str, en: &'a str) -> &'a str {
        match self {
            Locale::Fr => fr,
            Locale::En => en,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::Fr => "fr",
            Locale::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fr" | "fr-ca" | "fr_ca" | "french" | "français" => Ok(Locale::Fr),
            "en" | "en-ca" | "en_ca" | "en-us" | "english" => Ok(Locale::En),
            other => Err(format!("unknown locale '{other}' (expected 'fr' or 'en')")),
        }
    }
}
