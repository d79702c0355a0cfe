use crate::util::{parse_calendar_date, parse_timestamp};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where an activity record was collected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivitySource {
    PullRequest,
    CalendarEvent,
}

impl ActivitySource {
    /// Bucket for records that yield neither a project name nor keywords.
    ///
    /// `None` means such records are dropped instead of bucketed.
    pub fn fallback_project_name(self) -> Option<&'static str> {
        match self {
            ActivitySource::PullRequest => Some("Other Work"),
            ActivitySource::CalendarEvent => None,
        }
    }
}

/// Common read-only view over collected activity.
///
/// Absent text fields read as `""`.
pub trait ActivityRecord {
    const SOURCE: ActivitySource;

    fn title(&self) -> &str;

    /// PR body or event description.
    fn details(&self) -> &str;

    /// Creation time (PRs) or event date (calendar). `None` when absent or malformed.
    fn timestamp(&self) -> Option<DateTime<Utc>>;

    /// Raw timestamp string as collected, used for link dates.
    fn raw_timestamp(&self) -> &str;

    /// Title and details joined by a single space.
    fn combined_text(&self) -> String {
        format!("{} {}", self.title(), self.details())
    }
}

/// Authored pull request as produced by the GitHub collector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merged_at: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commits: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additions: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletions: Option<u64>,
}

impl PullRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = Some(created_at.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }
}

impl ActivityRecord for PullRequest {
    const SOURCE: ActivitySource = ActivitySource::PullRequest;

    fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    fn details(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }

    fn raw_timestamp(&self) -> &str {
        self.created_at.as_deref().unwrap_or("")
    }
}

/// Calendar event as produced by the ICS parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Bare `YYYY-MM-DD` date of the event start.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl CalendarEvent {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

impl ActivityRecord for CalendarEvent {
    const SOURCE: ActivitySource = ActivitySource::CalendarEvent;

    fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    fn details(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        // Dates are bare, but tolerate full timestamps from older exports.
        let raw = self.date.as_deref()?;
        parse_calendar_date(raw).or_else(|| parse_timestamp(raw))
    }

    fn raw_timestamp(&self) -> &str {
        self.date.as_deref().unwrap_or("")
    }
}
