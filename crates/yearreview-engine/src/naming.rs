use regex::Regex;
use std::sync::LazyLock;

/// Ordered name rules; the first rule whose pattern matches decides.
static NAME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(\w+)\s+(?:v2|v3|phase\s+\d+|kickoff|integration|implementation)",
        r"(?i)(?:kickoff|review|sync|meeting):\s*([A-Z][a-zA-Z\s]+)",
        r"(?i)([A-Z][a-zA-Z]+)\s+(?:project|initiative|effort)",
        r"(?i)([A-Z][a-zA-Z]+)\s+(?:by|from|with)",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// Title-case phrase: one or more capitalized words.
static CAPITALIZED_PHRASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)\b").unwrap());

const STOP_WORDS: [&str; 5] = ["the", "and", "for", "with", "from"];

/// Only the first few capitalized phrases are considered.
const PHRASE_CANDIDATES: usize = 3;

/// Heuristically pull a project name out of free text.
///
/// Pattern rules are tried in order and only their first match counts; a
/// capture of two characters or fewer falls through to the next rule. If no
/// rule produces a name, the first capitalized phrase longer than three
/// characters (and not a stop word) among the first three is used.
pub fn detect_project_name(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }

    for pattern in NAME_PATTERNS.iter() {
        let Some(captures) = pattern.captures(text) else {
            continue;
        };
        let name = captures.get(1).map_or("", |m| m.as_str()).trim();
        if name.chars().count() > 2 {
            return Some(name.to_string());
        }
    }

    CAPITALIZED_PHRASE
        .find_iter(text)
        .take(PHRASE_CANDIDATES)
        .map(|m| m.as_str())
        .find(|phrase| {
            phrase.chars().count() > 3 && !STOP_WORDS.contains(&phrase.to_lowercase().as_str())
        })
        .map(str::to_string)
}
