//! Digests over merged projects and raw activity, consumed by the page renderer.

use crate::quarters::organize_by_quarter;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeMap;
use yearreview_types::{ActivityRecord, Category, MemberData, ProjectMap, PullRequest, Quarter, QuarterMap};

const MAX_TOPICS: usize = 3;
const MAX_PROJECTS_PER_TOPIC: usize = 4;
const MAX_TOPICS_PER_QUARTER: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberStats {
    pub prs_authored: usize,
    pub prs_reviewed: usize,
    pub slack_messages: u64,
    pub calendar_events: u64,
    pub projects: usize,
}

impl MemberStats {
    pub fn collect(data: &MemberData, projects: &ProjectMap) -> Self {
        Self {
            prs_authored: data.github.prs_authored.len(),
            prs_reviewed: data.github.prs_reviewed.len(),
            slack_messages: data.slack.total_messages,
            calendar_events: data.calendar.total_events,
            projects: projects.len(),
        }
    }
}

/// Two-line blurb plus headline topics for a member card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSummary {
    pub line1: String,
    pub line2: String,
    pub topics: Vec<String>,
}

pub fn summarize_member(projects: &ProjectMap, stats: &MemberStats, year: i32) -> MemberSummary {
    let mut topics: Vec<String> = Vec::new();
    for project in projects.values() {
        let labels = project
            .tags
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(project.category.as_str()));
        for label in labels {
            if !topics.iter().any(|t| t == label) {
                topics.push(label.to_string());
            }
        }
    }

    let mut bullets = Vec::new();
    if stats.prs_authored > 0 || stats.prs_reviewed > 0 {
        bullets.push(format!(
            "Authored {} PRs and reviewed {} in {}",
            stats.prs_authored, stats.prs_reviewed, year
        ));
    }
    if stats.calendar_events > 0 {
        let top_topic = topics.first().map_or("Meetings", String::as_str);
        bullets.push(format!(
            "Attended {} meetings focusing on {}",
            stats.calendar_events, top_topic
        ));
    }

    let mut bullets = bullets.into_iter();
    let line1 = bullets
        .next()
        .unwrap_or_else(|| "Active contributor throughout the year.".to_string());
    let line2 = bullets
        .next()
        .unwrap_or_else(|| "Focused on team collaboration and code quality.".to_string());

    topics.truncate(MAX_TOPICS);
    MemberSummary {
        line1,
        line2,
        topics,
    }
}

/// PR counts per `YYYY-MM`, with every month of `year` present.
pub fn monthly_pr_counts(prs: &[PullRequest], year: i32) -> BTreeMap<String, usize> {
    let mut monthly: BTreeMap<String, usize> = (1..=12)
        .map(|month| (format!("{year}-{month:02}"), 0))
        .collect();

    for created in prs.iter().filter_map(|pr| pr.timestamp()) {
        let key = format!("{}-{:02}", created.year(), created.month());
        *monthly.entry(key).or_insert(0) += 1;
    }

    monthly
}

/// Highest monthly count, 1 when there is no activity at all.
pub fn peak_month_count(monthly: &BTreeMap<String, usize>) -> usize {
    monthly.values().copied().max().unwrap_or(0).max(1)
}

/// PR counts per `Q1`..`Q4` by creation month, regardless of year.
pub fn quarterly_pr_counts(prs: &[PullRequest]) -> BTreeMap<String, usize> {
    let mut quarterly: BTreeMap<String, usize> =
        (1..=4).map(|n| (format!("Q{n}"), 0)).collect();

    for created in prs.iter().filter_map(|pr| pr.timestamp()) {
        let key = Quarter::containing(&created).short_label();
        *quarterly.entry(key).or_insert(0) += 1;
    }

    quarterly
}

/// Busiest projects of one category within a quarter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicDigest {
    pub category: Category,
    /// PRs plus events across the kept projects.
    pub activity: usize,
    pub projects: Vec<String>,
}

/// Per quarter: categories ranked by activity, each with its busiest projects.
pub fn digest_quarters(quarters: &QuarterMap) -> BTreeMap<Quarter, Vec<TopicDigest>> {
    quarters
        .iter()
        .map(|(quarter, projects)| {
            let mut by_topic: Vec<(Category, Vec<(usize, &str)>)> = Vec::new();
            for project in projects {
                let entry = (project.activity_count(), project.name.as_str());
                match by_topic.iter_mut().find(|(c, _)| *c == project.category) {
                    Some((_, members)) => members.push(entry),
                    None => by_topic.push((project.category, vec![entry])),
                }
            }

            let mut digests: Vec<TopicDigest> = by_topic
                .into_iter()
                .map(|(category, mut members)| {
                    members.sort_by_key(|(activity, _)| Reverse(*activity));
                    members.truncate(MAX_PROJECTS_PER_TOPIC);
                    TopicDigest {
                        category,
                        activity: members.iter().map(|(activity, _)| activity).sum(),
                        projects: members.into_iter().map(|(_, name)| name.to_string()).collect(),
                    }
                })
                .collect();

            digests.sort_by_key(|digest| Reverse(digest.activity));
            digests.truncate(MAX_TOPICS_PER_QUARTER);
            (*quarter, digests)
        })
        .collect()
}

/// Convenience: organize and digest in one step.
pub fn digest_projects(projects: &ProjectMap, year: i32) -> BTreeMap<Quarter, Vec<TopicDigest>> {
    digest_quarters(&organize_by_quarter(projects, year))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStats {
    pub total_prs: usize,
    pub total_reviews: usize,
    pub total_slack_messages: u64,
    pub total_projects: usize,
    pub team_size: usize,
}

impl TeamStats {
    pub fn from_members<'a>(members: impl IntoIterator<Item = &'a MemberStats>) -> Self {
        members
            .into_iter()
            .fold(TeamStats::default(), |mut team, member| {
                team.total_prs += member.prs_authored;
                team.total_reviews += member.prs_reviewed;
                team.total_slack_messages += member.slack_messages;
                team.total_projects += member.projects;
                team.team_size += 1;
                team
            })
    }
}

pub fn team_summary(team_name: &str, year: i32, stats: &TeamStats) -> String {
    format!(
        "The {} had an outstanding year in {}, with {} pull requests authored and {} reviews \
         completed across {} major projects. The team demonstrated exceptional collaboration \
         and technical excellence throughout the year.",
        team_name, year, stats.total_prs, stats.total_reviews, stats.total_projects
    )
}
