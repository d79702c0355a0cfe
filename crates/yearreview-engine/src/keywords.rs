use yearreview_types::{KeywordConfig, KeywordSet};

/// Categories with at least one keyword occurring in `text`.
///
/// Matching is a case-insensitive substring test; categories come back in
/// configuration order.
pub fn extract_keywords(text: &str, config: &KeywordConfig) -> KeywordSet {
    if text.is_empty() {
        return KeywordSet::new();
    }

    let haystack = text.to_lowercase();
    config
        .iter()
        .filter(|(_, keywords)| {
            keywords
                .iter()
                .any(|keyword| haystack.contains(&keyword.to_lowercase()))
        })
        .map(|(category, _)| category)
        .collect()
}
