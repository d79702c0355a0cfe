//! Sample records and configuration shared by engine and CLI tests.

use yearreview_types::{
    CalendarActivity, CalendarEvent, GithubActivity, KeywordConfig, MemberData, PullRequest,
    SlackActivity,
};

/// Pull request with the four fields the analyzer reads.
pub fn pr(title: &str, body: &str, created_at: &str, url: &str) -> PullRequest {
    PullRequest::new(title)
        .with_body(body)
        .with_created_at(created_at)
        .with_url(url)
}

/// Calendar event with a bare date and no description.
pub fn event(title: &str, date: &str) -> CalendarEvent {
    CalendarEvent::new(title).with_date(date)
}

/// Keyword table resembling a real team configuration.
pub fn sample_keywords() -> KeywordConfig {
    KeywordConfig::new()
        .with_category("ai", ["klaudia", "llm", "remediation"])
        .with_category("security", ["rbac", "role-based", "auth"])
        .with_category("cost", ["finops", "hpa", "cost"])
        .with_category("performance", ["latency", "perf"])
        .with_category("infrastructure", ["terraform", "helm", "k8s"])
        .with_category("team", ["interview", "onboarding"])
}

/// The PRs and events from the classic RBAC/Helm walkthrough.
pub fn sample_prs() -> Vec<PullRequest> {
    vec![
        pr(
            "RBAC V2 Implementation",
            "Role-based access control",
            "2025-01-15T10:00:00Z",
            "https://github.com/test/pr/1",
        ),
        pr(
            "Helm Drift Detection",
            "Helm comparison capabilities",
            "2025-02-20T10:00:00Z",
            "https://github.com/test/pr/2",
        ),
    ]
}

pub fn sample_events() -> Vec<CalendarEvent> {
    vec![
        event("RBAC kickoff meeting", "2025-01-10"),
        event("Helm sync", "2025-02-18"),
    ]
}

/// Member document built from [`sample_prs`] and [`sample_events`].
pub fn sample_member_data() -> MemberData {
    let events = sample_events();
    MemberData {
        github: GithubActivity {
            prs_authored: sample_prs(),
            prs_reviewed: vec![pr(
                "Bump chart version",
                "",
                "2025-03-02T09:00:00Z",
                "https://github.com/test/pr/3",
            )],
        },
        slack: SlackActivity {
            total_messages: 42,
        },
        calendar: CalendarActivity {
            total_events: events.len() as u64,
            events,
        },
    }
}
