//! Small text helpers shared by the field heuristics.

/// Terms this short are matched as whole words only ("ai" must not hit "maintain").
const WHOLE_WORD_MAX_CHARS: usize = 4;

/// Case-sensitive search of an already-lowercased haystack for a lowercase term.
/// Short terms must sit on word boundaries; longer terms match as substrings.
pub fn contains_term(haystack_lower: &str, term: &str) -> bool {
    if term.chars().count() <= WHOLE_WORD_MAX_CHARS {
        contains_word(haystack_lower, term)
    } else {
        haystack_lower.contains(term)
    }
}

/// True when `word` occurs with no alphanumeric character directly on either side.
pub fn contains_word(haystack: &str, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    haystack.match_indices(word).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + word.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

/// Appends `item` unless the list is full or already holds it (case-insensitive).
/// Returns whether the item was added.
pub fn push_unique(list: &mut Vec<String>, item: &str, cap: usize) -> bool {
    if list.len() >= cap || item.is_empty() {
        return false;
    }
    let lowered = item.to_lowercase();
    if list.iter().any(|existing| existing.to_lowercase() == lowered) {
        return false;
    }
    list.push(item.to_string());
    true
}

/// Collapses every whitespace run (including newlines) into one space and trims.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `text` trimmed of surrounding whitespace and trailing punctuation.
pub fn tidy(text: &str) -> String {
    collapse_whitespace(text)
        .trim_end_matches(|c: char| matches!(c, ',' | ';' | ':' | '-' | '–' | '|' | '•'))
        .trim()
        .to_string()
}

pub fn char_len_in(text: &str, min: usize, max: usize) -> bool {
    let len = text.chars().count();
    len >= min && len <= max
}

/// Slice of `text` extending up to `radius` characters on each side of `start..end`.
pub fn context_window(text: &str, start: usize, end: usize, radius: usize) -> &str {
    let from = text[..start]
        .char_indices()
        .rev()
        .nth(radius.saturating_sub(1))
        .map(|(i, _)| i)
        .unwrap_or(0);
    let to = text[end..]
        .char_indices()
        .nth(radius)
        .map(|(i, _)| end + i)
        .unwrap_or(text.len());
    &text[from..to]
}
