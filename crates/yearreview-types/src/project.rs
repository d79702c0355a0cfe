use crate::{CalendarEvent, Category, PullRequest, Quarter};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Project name → records of one source, each list in collection order.
pub type ProjectBucket<R> = BTreeMap<String, Vec<R>>;

/// Project name → merged project.
pub type ProjectMap = BTreeMap<String, Project>;

/// Quarter → projects starting in it, sorted by start date.
pub type QuarterMap = BTreeMap<Quarter, Vec<Project>>;

/// Earliest and latest timestamp across a project's records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(rename = "start_date")]
    pub start: Option<DateTime<Utc>>,
    #[serde(rename = "end_date")]
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    /// Min/max over `timestamps`; both bounds `None` when empty.
    pub fn spanning<I>(timestamps: I) -> Self
    where
        I: IntoIterator<Item = DateTime<Utc>>,
    {
        timestamps
            .into_iter()
            .fold(DateRange::default(), |range, ts| DateRange {
                start: Some(range.start.map_or(ts, |s| s.min(ts))),
                end: Some(range.end.map_or(ts, |e| e.max(ts))),
            })
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none()
    }
}

/// Link-back entry shown next to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLink {
    pub text: String,
    pub url: String,
    /// `YYYY-MM-DD` of the record's timestamp in UTC, or its raw prefix when unparseable.
    pub date: String,
}

/// A named initiative synthesized from pull requests and calendar events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub category: Category,
    pub icon_class: String,
    pub icon_glyph: String,
    #[serde(flatten)]
    pub date_range: DateRange,
    pub quarter: Option<Quarter>,
    pub description: String,
    pub prs: Vec<PullRequest>,
    pub events: Vec<CalendarEvent>,
    pub github_links: Vec<ProjectLink>,
    pub calendar_links: Vec<ProjectLink>,
    pub tags: Vec<String>,
}

impl Project {
    pub fn start_date(&self) -> Option<DateTime<Utc>> {
        self.date_range.start
    }

    pub fn end_date(&self) -> Option<DateTime<Utc>> {
        self.date_range.end
    }

    /// Number of contributing records across both sources.
    pub fn activity_count(&self) -> usize {
        self.prs.len() + self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_date_range_spanning() {
        let a = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap();
        let c = Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap();

        let range = DateRange::spanning([a, b, c]);
        assert_eq!(range.start, Some(b));
        assert_eq!(range.end, Some(c));
    }

    #[test]
    fn test_date_range_empty() {
        let range = DateRange::spanning(std::iter::empty());
        assert!(range.is_empty());
        assert_eq!(range.end, None);
    }

    #[test]
    fn test_date_range_serializes_flat_fields() {
        let range = DateRange::spanning([Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap()]);
        let json = serde_json::to_value(range).unwrap();
        assert_eq!(json["start_date"], "2025-01-10T00:00:00Z");
        assert_eq!(json["end_date"], "2025-01-10T00:00:00Z");
    }
}
