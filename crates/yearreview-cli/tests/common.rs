//! Shared setup for CLI integration tests.
#![allow(dead_code)]

use yearreview_testing::TestWorld;
use yearreview_testing::fixtures::sample_member_data;

pub const TEAM_CONFIG: &str = r#"
year = 2025
team_name = "Platform Team"

[[members]]
name = "Ada Lovelace"
github = "ada"

[[members]]
name = "Grace Hopper"

[project_keywords]
ai = ["klaudia", "llm", "remediation"]
security = ["rbac", "role-based", "auth"]
cost = ["finops", "hpa", "cost"]
performance = ["latency", "perf"]
infrastructure = ["terraform", "helm", "k8s"]
team = ["interview", "onboarding"]
"#;

/// Configured team where only Ada has collected data.
pub fn team_world() -> TestWorld {
    TestWorld::new()
        .with_config(TEAM_CONFIG)
        .with_member_data("ada", &sample_member_data())
}
