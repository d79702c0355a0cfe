// Engine module - project synthesis over collected activity
// Sits between normalized records (types) and runtime orchestration.
// Every operation is pure: no I/O, no shared state, never fails.

pub mod categorize;
pub mod grouping;
pub mod keywords;
pub mod merge;
pub mod naming;
pub mod quarters;
pub mod report;

pub use categorize::categorize;
pub use grouping::{group_records, resolve_project_name};
pub use keywords::extract_keywords;
pub use merge::{build_project, describe_project, merge_projects};
pub use naming::detect_project_name;
pub use quarters::{organize_by_quarter, resolve_quarter};
pub use report::{
    MemberStats, MemberSummary, TeamStats, TopicDigest, digest_projects, digest_quarters,
    monthly_pr_counts, peak_month_count, quarterly_pr_counts, summarize_member, team_summary,
};

use yearreview_types::{CalendarEvent, KeywordConfig, ProjectBucket, ProjectMap, PullRequest};

// Façade API - stable entry points for the runtime layer

/// Keyword-driven project analyzer bound to one keyword configuration.
///
/// The configuration is read-only, so one analyzer can serve every member.
#[derive(Debug, Clone, Default)]
pub struct ProjectAnalyzer {
    keywords: KeywordConfig,
}

impl ProjectAnalyzer {
    pub fn new(keywords: KeywordConfig) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &KeywordConfig {
        &self.keywords
    }

    /// Group authored PRs by project; unnamed PRs land in "Other Work".
    pub fn analyze_prs(&self, prs: &[PullRequest]) -> ProjectBucket<PullRequest> {
        group_records(prs, &self.keywords)
    }

    /// Group calendar events by project; unnamed events are dropped.
    pub fn analyze_calendar_events(
        &self,
        events: &[CalendarEvent],
    ) -> ProjectBucket<CalendarEvent> {
        group_records(events, &self.keywords)
    }

    pub fn merge_projects(
        &self,
        pr_projects: &ProjectBucket<PullRequest>,
        event_projects: &ProjectBucket<CalendarEvent>,
    ) -> ProjectMap {
        merge_projects(pr_projects, event_projects, &self.keywords)
    }

    /// Full pipeline: group both sources, then merge.
    pub fn analyze(&self, prs: &[PullRequest], events: &[CalendarEvent]) -> ProjectMap {
        let pr_projects = self.analyze_prs(prs);
        let event_projects = self.analyze_calendar_events(events);
        self.merge_projects(&pr_projects, &event_projects)
    }
}
