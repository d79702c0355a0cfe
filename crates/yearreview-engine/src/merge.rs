use crate::categorize::categorize;
use crate::keywords::extract_keywords;
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use yearreview_types::{
    ActivityRecord, CalendarEvent, DateRange, KeywordConfig, Project, ProjectBucket, ProjectLink,
    ProjectMap, PullRequest, Quarter, ellipsize, truncate_chars,
};

const DESCRIPTION_MAX_CHARS: usize = 100;
const PR_TITLE_CANDIDATES: usize = 5;
const PR_TITLE_MIN_CHARS: usize = 20;
const EVENT_TITLE_CANDIDATES: usize = 3;
const EVENT_TITLE_MIN_CHARS: usize = 15;

/// Combine per-source buckets into one project per name.
///
/// Names present in either bucket become a project; a name whose records are
/// empty in both is skipped.
pub fn merge_projects(
    pr_projects: &ProjectBucket<PullRequest>,
    event_projects: &ProjectBucket<CalendarEvent>,
    config: &KeywordConfig,
) -> ProjectMap {
    let names: BTreeSet<&String> = pr_projects.keys().chain(event_projects.keys()).collect();

    let merged: ProjectMap = names
        .into_iter()
        .filter_map(|name| {
            let prs = pr_projects.get(name).map(Vec::as_slice).unwrap_or_default();
            let events = event_projects.get(name).map(Vec::as_slice).unwrap_or_default();
            build_project(name, prs, events, config).map(|project| (name.clone(), project))
        })
        .collect();

    tracing::debug!(projects = merged.len(), "merged project buckets");
    merged
}

/// Synthesize one project, or `None` if it has no records at all.
pub fn build_project(
    name: &str,
    prs: &[PullRequest],
    events: &[CalendarEvent],
    config: &KeywordConfig,
) -> Option<Project> {
    let sample_text = match (prs.first(), events.first()) {
        (Some(pr), _) => pr.combined_text(),
        (None, Some(event)) => event.combined_text(),
        (None, None) => return None,
    };

    let keywords = extract_keywords(&sample_text, config);
    let category = categorize(&keywords, name);

    let date_range = DateRange::spanning(
        prs.iter()
            .filter_map(|pr| record_timestamp(name, pr))
            .chain(events.iter().filter_map(|event| record_timestamp(name, event))),
    );
    let quarter = date_range.start.as_ref().map(Quarter::containing);

    let github_links = prs
        .iter()
        .filter(|pr| !pr.url().is_empty())
        .map(|pr| link_for(pr, pr.url()))
        .collect();
    let calendar_links = events
        .iter()
        .filter(|event| !event.title().is_empty())
        .map(|event| link_for(event, "#"))
        .collect();

    let tags = if keywords.is_empty() {
        vec![category.as_str().to_string()]
    } else {
        keywords.into_vec()
    };

    Some(Project {
        name: name.to_string(),
        category,
        icon_class: category.icon_class().to_string(),
        icon_glyph: category.glyph().to_string(),
        date_range,
        quarter,
        description: describe_project(prs, events, name, config),
        prs: prs.to_vec(),
        events: events.to_vec(),
        github_links,
        calendar_links,
        tags,
    })
}

/// Short summary text for a project.
///
/// Prefers the first substantial PR title (among the first five), then the
/// first substantial event title (among the first three), capped at 100
/// characters. Otherwise a sentence built from the name and its keywords.
pub fn describe_project(
    prs: &[PullRequest],
    events: &[CalendarEvent],
    name: &str,
    config: &KeywordConfig,
) -> String {
    let pr_title = prs
        .iter()
        .take(PR_TITLE_CANDIDATES)
        .map(|pr| pr.title())
        .find(|title| title.chars().count() > PR_TITLE_MIN_CHARS);
    let base = pr_title.or_else(|| {
        events
            .iter()
            .take(EVENT_TITLE_CANDIDATES)
            .map(|event| event.title())
            .find(|title| title.chars().count() > EVENT_TITLE_MIN_CHARS)
    });

    if let Some(base) = base {
        return ellipsize(base, DESCRIPTION_MAX_CHARS);
    }

    let keywords = extract_keywords(name, config);
    if keywords.is_empty() {
        format!("{} project work throughout the year.", name)
    } else {
        let focus: Vec<&str> = keywords.iter().take(2).collect();
        format!("{} initiative focusing on {}.", name, focus.join(", "))
    }
}

fn record_timestamp<R: ActivityRecord>(project: &str, record: &R) -> Option<DateTime<Utc>> {
    let raw = record.raw_timestamp();
    if raw.is_empty() {
        return None;
    }
    let parsed = record.timestamp();
    if parsed.is_none() {
        tracing::warn!(project, timestamp = raw, "skipping unparseable timestamp");
    }
    parsed
}

/// Link dates follow the UTC-normalized timestamp, like quarters do; an
/// unparseable timestamp keeps its raw date prefix.
fn link_for<R: ActivityRecord>(record: &R, url: &str) -> ProjectLink {
    let date = match record.timestamp() {
        Some(ts) => ts.format("%Y-%m-%d").to_string(),
        None => truncate_chars(record.raw_timestamp(), 10).to_string(),
    };
    ProjectLink {
        text: record.title().to_string(),
        url: url.to_string(),
        date,
    }
}
