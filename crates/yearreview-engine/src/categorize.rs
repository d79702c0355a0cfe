use yearreview_types::{Category, KeywordSet};

/// One step of the category cascade.
///
/// Matches when `keyword` was extracted from the project's text or the
/// project title contains any of `title_hints`.
struct CategoryRule {
    category: Category,
    keyword: &'static str,
    title_hints: &'static [&'static str],
}

impl CategoryRule {
    fn matches(&self, keywords: &KeywordSet, title_lower: &str) -> bool {
        keywords.contains(self.keyword)
            || self
                .title_hints
                .iter()
                .any(|hint| title_lower.contains(hint))
    }
}

/// Evaluated top to bottom; precedence is significant.
const CATEGORY_RULES: [CategoryRule; 6] = [
    CategoryRule {
        category: Category::Ai,
        keyword: "ai",
        title_hints: &["klaudia", "remediation"],
    },
    CategoryRule {
        category: Category::Security,
        keyword: "security",
        title_hints: &["rbac", "auth"],
    },
    CategoryRule {
        category: Category::Cost,
        keyword: "cost",
        title_hints: &["finops", "hpa"],
    },
    CategoryRule {
        category: Category::Perf,
        keyword: "performance",
        title_hints: &["perf", "optimize"],
    },
    CategoryRule {
        category: Category::Infra,
        keyword: "infrastructure",
        title_hints: &["infra", "deployment"],
    },
    CategoryRule {
        category: Category::Team,
        keyword: "team",
        title_hints: &["interview", "hiring"],
    },
];

/// Assign exactly one category from extracted keywords and the project title.
///
/// The first rule that matches wins; `Feature` when none do.
pub fn categorize(keywords: &KeywordSet, title: &str) -> Category {
    let title_lower = title.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|rule| rule.matches(keywords, &title_lower))
        .map_or(Category::Feature, |rule| rule.category)
}
