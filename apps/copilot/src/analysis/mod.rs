// Field heuristics: raw CV text -> CvProfile.
// Everything here is pure and deterministic; no operation can fail.

pub mod entities;
pub mod experience;
pub mod fields;
pub mod matching;
pub mod profile_builder;
pub mod vocabulary;

pub use entities::{EntityRecognizer, RegexEntityRecognizer};
pub use experience::estimate_years;
pub use fields::{extract_fields, ExtractedFields, FieldExtractor};
pub use profile_builder::ProfileBuilder;
