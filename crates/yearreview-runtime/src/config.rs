use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use yearreview_types::KeywordConfig;

pub const DEFAULT_YEAR: i32 = 2025;
pub const CONFIG_ENV: &str = "YEARREVIEW_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config/team_config.toml";

/// Resolve the team configuration path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. YEARREVIEW_CONFIG environment variable (with tilde expansion)
/// 3. `config/team_config.toml` relative to the working directory
pub fn resolve_config_path(explicit_path: Option<&str>) -> PathBuf {
    if let Some(path) = explicit_path {
        return expand_tilde(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return expand_tilde(&env_path);
    }

    PathBuf::from(DEFAULT_CONFIG_PATH)
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slack: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_file: Option<String>,
    #[serde(default)]
    pub has_calendar: bool,
}

impl Member {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            github: None,
            slack: None,
            calendar_file: None,
            has_calendar: false,
        }
    }

    pub fn with_github(mut self, handle: impl Into<String>) -> Self {
        self.github = Some(handle.into());
        self
    }

    /// File-name key: GitHub handle, else the lowercased name with `_` for spaces.
    pub fn key(&self) -> String {
        match self.github.as_deref().map(str::trim) {
            Some(handle) if !handle.is_empty() => handle.to_string(),
            _ => self.name.to_lowercase().replace(' ', "_"),
        }
    }
}

fn default_year() -> i32 {
    DEFAULT_YEAR
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamConfig {
    #[serde(default = "default_year")]
    pub year: i32,
    #[serde(default)]
    pub team_name: String,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub project_keywords: KeywordConfig,
}

impl Default for TeamConfig {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR,
            team_name: String::new(),
            members: Vec::new(),
            project_keywords: KeywordConfig::default(),
        }
    }
}

impl TeamConfig {
    pub fn parse(content: &str) -> Result<Self> {
        let config: TeamConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::NotFound(format!(
                "config file {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Like [`TeamConfig::load_from`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1970..=9999).contains(&self.year) {
            return Err(Error::Config(format!("year {} out of range", self.year)));
        }
        if let Some(member) = self.members.iter().find(|m| m.name.trim().is_empty()) {
            return Err(Error::Config(format!(
                "member without a name (github: {:?})",
                member.github
            )));
        }
        Ok(())
    }

    /// Look a member up by key or exact name.
    pub fn find_member(&self, key: &str) -> Option<&Member> {
        self.members
            .iter()
            .find(|member| member.key() == key || member.name == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
year = 2025
team_name = "Platform Team"

[[members]]
name = "Ada Lovelace"
github = "ada"
has_calendar = true
calendar_file = "ada.ics"

[[members]]
name = "Grace Hopper"

[project_keywords]
security = ["rbac", "auth"]
ai = ["llm"]
cost = ["finops"]
"#;

    #[test]
    fn test_parse_sample() -> Result<()> {
        let config = TeamConfig::parse(SAMPLE)?;
        assert_eq!(config.year, 2025);
        assert_eq!(config.members.len(), 2);
        assert!(config.members[0].has_calendar);

        let order: Vec<&str> = config.project_keywords.categories().collect();
        assert_eq!(order, vec!["security", "ai", "cost"]);
        Ok(())
    }

    #[test]
    fn test_defaults_when_fields_absent() -> Result<()> {
        let config = TeamConfig::parse("")?;
        assert_eq!(config, TeamConfig::default());
        assert_eq!(config.year, DEFAULT_YEAR);
        assert!(config.project_keywords.is_empty());
        Ok(())
    }

    #[test]
    fn test_rejects_bad_year() {
        assert!(matches!(
            TeamConfig::parse("year = 12"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(matches!(
            TeamConfig::parse("year = "),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_member_key() {
        assert_eq!(Member::new("Ada Lovelace").with_github("ada").key(), "ada");
        assert_eq!(Member::new("Grace Hopper").key(), "grace_hopper");
        assert_eq!(Member::new("Grace Hopper").with_github("  ").key(), "grace_hopper");
    }

    #[test]
    fn test_find_member_by_key_or_name() -> Result<()> {
        let config = TeamConfig::parse(SAMPLE)?;
        assert_eq!(config.find_member("ada").map(|m| m.name.as_str()), Some("Ada Lovelace"));
        assert!(config.find_member("grace_hopper").is_some());
        assert!(config.find_member("Grace Hopper").is_some());
        assert!(config.find_member("linus").is_none());
        Ok(())
    }

    #[test]
    fn test_load_missing() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("missing.toml");

        assert!(matches!(TeamConfig::load_from(&path), Err(Error::NotFound(_))));
        assert_eq!(TeamConfig::load_or_default(&path)?, TeamConfig::default());
        Ok(())
    }

    #[test]
    fn test_explicit_config_path_wins() {
        assert_eq!(
            resolve_config_path(Some("/etc/team.toml")),
            PathBuf::from("/etc/team.toml")
        );
    }
}
