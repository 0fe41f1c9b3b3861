//! Fixed keyword dictionaries used by the field heuristics.
//! All entries are lowercase; order matters, it is the detection order.

pub const SKILL_VOCABULARY: &[&str] = &[
    // technical
    "javascript",
    "typescript",
    "python",
    "java",
    "c++",
    "c#",
    "php",
    "ruby",
    "go",
    "rust",
    "react",
    "angular",
    "vue.js",
    "node.js",
    "sql",
    "nosql",
    "html",
    "css",
    "git",
    "docker",
    "kubernetes",
    "linux",
    "aws",
    "azure",
    "google cloud",
    "rest api",
    "devops",
    // marketing
    "marketing",
    "digital marketing",
    "social media",
    "content creation",
    "seo",
    "sem",
    "google analytics",
    "google ads",
    "email marketing",
    "copywriting",
    "branding",
    "public relations",
    "crm",
    "hubspot",
    "salesforce",
    // business
    "project management",
    "leadership",
    "communication",
    "analytics",
    "data analysis",
    "customer service",
    "sales",
    "business development",
    "strategy",
    "planning",
    "budgeting",
    "negotiation",
    "accounting",
    "finance",
    "human resources",
    "recruitment",
    "logistics",
    "supply chain",
    "operations",
    "writing",
    "creativity",
    "teamwork",
    "problem solving",
    // design
    "photoshop",
    "illustrator",
    "indesign",
    "figma",
    "sketch",
    "canva",
    "ux",
    "ui",
    "graphic design",
    "wordpress",
    "shopify",
    // office and collaboration
    "excel",
    "powerpoint",
    "word",
    "outlook",
    "teams",
    "slack",
    "zoom",
    "trello",
    "jira",
    "power bi",
    "tableau",
    // methodologies
    "agile",
    "scrum",
    "kanban",
    "lean",
    "six sigma",
    "quality assurance",
    "testing",
    // data and machine learning
    "machine learning",
    "ai",
    "artificial intelligence",
    "data science",
    "statistics",
    "deep learning",
    "tensorflow",
    "pandas",
    // languages as skills
    "french",
    "english",
    "spanish",
    "bilingual",
];

/// (canonical lowercase name, spellings matched in text)
pub const LANGUAGE_VOCABULARY: &[(&str, &[&str])] = &[
    ("french", &["french", "français", "francais"]),
    ("english", &["english", "anglais"]),
    ("spanish", &["spanish", "espagnol", "español"]),
    ("arabic", &["arabic", "arabe"]),
    ("mandarin", &["mandarin"]),
    ("cantonese", &["cantonese", "cantonais"]),
    ("chinese", &["chinese", "chinois"]),
    ("german", &["german", "allemand"]),
    ("italian", &["italian", "italien"]),
    ("portuguese", &["portuguese", "portugais"]),
    ("russian", &["russian", "russe"]),
    ("japanese", &["japanese", "japonais"]),
    ("korean", &["korean", "coréen"]),
    ("hindi", &["hindi"]),
    ("bengali", &["bengali"]),
    ("urdu", &["urdu", "ourdou"]),
    ("punjabi", &["punjabi", "pendjabi"]),
    ("dutch", &["dutch", "néerlandais"]),
    ("polish", &["polish", "polonais"]),
    ("greek", &["greek", "grec"]),
    ("turkish", &["turkish", "turc"]),
    ("vietnamese", &["vietnamese", "vietnamien"]),
    ("persian", &["persian", "farsi", "persan"]),
    ("tagalog", &["tagalog", "filipino"]),
    ("creole", &["creole", "créole"]),
    ("swahili", &["swahili"]),
];

/// Words that qualify a language in "<language> <level>" / "<level> in <language>".
pub const PROFICIENCY_WORDS: &[&str] = &[
    "native",
    "fluent",
    "bilingual",
    "proficient",
    "advanced",
    "intermediate",
    "beginner",
    "basic",
    "conversational",
    "natif",
    "maternelle",
    "courant",
    "bilingue",
    "avancé",
    "intermédiaire",
    "débutant",
];

/// Languages only recognised beside a proficiency word ("fluent in Amharic"),
/// since several of them double as demonyms or common words.
pub const QUALIFIED_LANGUAGE_NAMES: &[&str] = &[
    "amharic",
    "tigrinya",
    "somali",
    "wolof",
    "lingala",
    "kinyarwanda",
    "yoruba",
    "igbo",
    "hausa",
    "berber",
    "kabyle",
    "hebrew",
    "ukrainian",
    "romanian",
    "bulgarian",
    "serbian",
    "croatian",
    "czech",
    "slovak",
    "hungarian",
    "swedish",
    "norwegian",
    "danish",
    "finnish",
    "catalan",
    "armenian",
    "georgian",
    "farsi",
    "pashto",
    "dari",
    "tamil",
    "telugu",
    "gujarati",
    "marathi",
    "nepali",
    "sinhala",
    "thai",
    "khmer",
    "lao",
    "malay",
    "indonesian",
    "cebuano",
    "inuktitut",
    "cree",
];

pub const CERTIFICATION_VOCABULARY: &[&str] = &[
    "pmp",
    "capm",
    "prince2",
    "scrum master",
    "csm",
    "psm",
    "safe",
    "six sigma",
    "itil",
    "togaf",
    "ccna",
    "comptia",
    "cissp",
    "aws certified",
    "azure fundamentals",
    "google analytics certification",
    "google ads certification",
    "hubspot certification",
    "cpa",
    "cfa",
    "chrp",
];

pub const ROLE_NOUNS: &[&str] = &[
    "manager",
    "analyst",
    "engineer",
    "developer",
    "designer",
    "consultant",
    "coordinator",
    "specialist",
    "director",
    "administrator",
    "assistant",
    "representative",
    "technician",
    "accountant",
    "gestionnaire",
    "analyste",
    "ingénieur",
    "développeur",
    "conseiller",
    "coordonnateur",
    "directeur",
    "technicien",
];

pub const SENIORITY_KEYWORDS: &[&str] = &["senior", "lead", "principal", "director", "manager"];

/// Cities commonly named on CVs, used for the location field.
pub const PLACE_NAMES: &[&str] = &[
    "Montréal",
    "Montreal",
    "Québec",
    "Quebec",
    "Laval",
    "Gatineau",
    "Longueuil",
    "Sherbrooke",
    "Trois-Rivières",
    "Saguenay",
    "Lévis",
    "Toronto",
    "Ottawa",
    "Vancouver",
    "Calgary",
    "Edmonton",
    "Winnipeg",
    "Halifax",
    "Moncton",
    "Paris",
    "Lyon",
    "Marseille",
    "Bruxelles",
    "Brussels",
    "Genève",
    "Geneva",
    "Casablanca",
    "Alger",
    "Tunis",
    "Dakar",
    "New York",
    "Boston",
    "London",
];

/// Place names whose presence in the raw text counts as regional experience.
pub const REGIONAL_KEYWORDS: &[&str] = &[
    "quebec",
    "québec",
    "montreal",
    "montréal",
    "canada",
    "canadian",
];

/// Leading words on a CV's first lines that are headings, not a person's name.
pub const NAME_STOPWORDS: &[&str] = &[
    "curriculum",
    "vitae",
    "resume",
    "résumé",
    "cv",
    "profile",
    "profil",
    "summary",
    "contact",
    "professional",
    "experience",
    "education",
    "skills",
];
