use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use yearreview_engine::{
    MemberStats, MemberSummary, TeamStats, TopicDigest, digest_quarters, monthly_pr_counts,
    organize_by_quarter, peak_month_count, quarterly_pr_counts, summarize_member, team_summary,
};
use yearreview_types::{MemberData, ProjectMap, Quarter, QuarterMap};

/// Everything the renderer needs for one member page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberReport {
    pub name: String,
    pub key: String,
    pub stats: MemberStats,
    pub summary: MemberSummary,
    pub projects: ProjectMap,
    pub quarters: QuarterMap,
    pub digest: BTreeMap<Quarter, Vec<TopicDigest>>,
    pub monthly_prs: BTreeMap<String, usize>,
    pub peak_month: usize,
    pub quarterly_prs: BTreeMap<String, usize>,
}

impl MemberReport {
    pub fn build(
        name: &str,
        key: &str,
        data: &MemberData,
        projects: ProjectMap,
        year: i32,
    ) -> Self {
        let stats = MemberStats::collect(data, &projects);
        let summary = summarize_member(&projects, &stats, year);
        let quarters = organize_by_quarter(&projects, year);
        let digest = digest_quarters(&quarters);
        let monthly_prs = monthly_pr_counts(&data.github.prs_authored, year);
        let peak_month = peak_month_count(&monthly_prs);
        let quarterly_prs = quarterly_pr_counts(&data.github.prs_authored);

        Self {
            name: name.to_string(),
            key: key.to_string(),
            stats,
            summary,
            projects,
            quarters,
            digest,
            monthly_prs,
            peak_month,
            quarterly_prs,
        }
    }
}

/// Team-wide roll-up over member reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamReport {
    pub team_name: String,
    pub year: i32,
    pub stats: TeamStats,
    pub summary: String,
    pub members: Vec<MemberReport>,
}

impl TeamReport {
    pub fn build(team_name: &str, year: i32, members: Vec<MemberReport>) -> Self {
        let stats = TeamStats::from_members(members.iter().map(|m| &m.stats));
        Self {
            team_name: team_name.to_string(),
            year,
            summary: team_summary(team_name, year, &stats),
            stats,
            members,
        }
    }
}
