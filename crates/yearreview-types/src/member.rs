use crate::{CalendarEvent, PullRequest};
use serde::{Deserialize, Serialize};

/// Everything collected for one team member, as written by the collectors.
///
/// Every section is optional; a member without GitHub or calendar access
/// simply has empty lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberData {
    #[serde(default)]
    pub github: GithubActivity,
    #[serde(default)]
    pub slack: SlackActivity,
    #[serde(default)]
    pub calendar: CalendarActivity,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubActivity {
    #[serde(default)]
    pub prs_authored: Vec<PullRequest>,
    #[serde(default)]
    pub prs_reviewed: Vec<PullRequest>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackActivity {
    #[serde(default)]
    pub total_messages: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarActivity {
    #[serde(default)]
    pub total_events: u64,
    #[serde(default)]
    pub events: Vec<CalendarEvent>,
}
