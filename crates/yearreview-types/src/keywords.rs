use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Category name → keyword substrings, in declaration order.
///
/// Order matters: the first matching category names `"<Category> Initiative"`
/// buckets and leads description fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordConfig {
    entries: Vec<(String, Vec<String>)>,
}

impl KeywordConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`KeywordConfig::insert`].
    pub fn with_category<I, S>(mut self, category: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(category, keywords);
        self
    }

    /// Add a category, replacing its keywords in place if it already exists.
    pub fn insert<I, S>(&mut self, category: impl Into<String>, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let category = category.into();
        let keywords: Vec<String> = keywords.into_iter().map(Into::into).collect();

        match self.entries.iter_mut().find(|(name, _)| *name == category) {
            Some((_, existing)) => *existing = keywords,
            None => self.entries.push((category, keywords)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, keywords)| (name.as_str(), keywords.as_slice()))
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<C, K, S> FromIterator<(C, K)> for KeywordConfig
where
    C: Into<String>,
    K: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (C, K)>>(iter: T) -> Self {
        let mut config = KeywordConfig::new();
        for (category, keywords) in iter {
            config.insert(category, keywords);
        }
        config
    }
}

impl Serialize for KeywordConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, keywords) in &self.entries {
            map.serialize_entry(category, keywords)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for KeywordConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = KeywordConfig;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of category name to keyword list")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut config = KeywordConfig::new();
                while let Some((category, keywords)) =
                    access.next_entry::<String, Vec<String>>()?
                {
                    config.insert(category, keywords);
                }
                Ok(config)
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

/// Categories whose keywords matched a text, in configuration order, no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordSet(Vec<String>);

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the category was already present.
    pub fn insert(&mut self, category: impl Into<String>) -> bool {
        let category = category.into();
        if self.contains(&category) {
            return false;
        }
        self.0.push(category);
        true
    }

    pub fn contains(&self, category: &str) -> bool {
        self.0.iter().any(|c| c == category)
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<S: Into<String>> FromIterator<S> for KeywordSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = KeywordSet::new();
        for category in iter {
            set.insert(category);
        }
        set
    }
}
