use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed project domain label.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Infra,
    #[default]
    Feature,
    Perf,
    Security,
    Ai,
    Cost,
    Team,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Infra,
        Category::Feature,
        Category::Perf,
        Category::Security,
        Category::Ai,
        Category::Cost,
        Category::Team,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Infra => "infra",
            Category::Feature => "feature",
            Category::Perf => "perf",
            Category::Security => "security",
            Category::Ai => "ai",
            Category::Cost => "cost",
            Category::Team => "team",
        }
    }

    /// CSS icon class used by the page templates.
    pub fn icon_class(self) -> &'static str {
        match self {
            Category::Infra => "icon-infra",
            Category::Feature => "icon-feature",
            Category::Perf => "icon-perf",
            Category::Security => "icon-security",
            Category::Ai => "icon-ai",
            Category::Cost => "icon-cost",
            Category::Team => "icon-team",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Category::Infra => "🏗️",
            Category::Feature => "⚓",
            Category::Perf => "⚡",
            Category::Security => "🔐",
            Category::Ai => "🧠",
            Category::Cost => "💰",
            Category::Team => "👥",
        }
    }

    /// Lenient lookup: unknown names fall back to `Feature`.
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidCategory(s.to_string()))
    }
}
