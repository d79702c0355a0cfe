use crate::keywords::extract_keywords;
use crate::naming::detect_project_name;
use yearreview_types::{ActivityRecord, KeywordConfig, KeywordSet, ProjectBucket, title_case};

/// Project name for one record, or `None` when the record should be dropped.
///
/// Resolution order: name detected in the title, then in the details, then
/// `"<First Category> Initiative"` from `keywords`, then the source's
/// fallback bucket.
pub fn resolve_project_name<R: ActivityRecord>(record: &R, keywords: &KeywordSet) -> Option<String> {
    detect_project_name(record.title())
        .or_else(|| detect_project_name(record.details()))
        .or_else(|| {
            keywords
                .first()
                .map(|category| format!("{} Initiative", title_case(category)))
        })
        .or_else(|| R::SOURCE.fallback_project_name().map(str::to_string))
}

/// Bucket records of one source by resolved project name, keeping arrival order.
pub fn group_records<R>(records: &[R], config: &KeywordConfig) -> ProjectBucket<R>
where
    R: ActivityRecord + Clone,
{
    let mut bucket = ProjectBucket::new();
    let mut dropped = 0usize;

    for record in records {
        let keywords = extract_keywords(&record.combined_text(), config);
        match resolve_project_name(record, &keywords) {
            Some(name) => bucket.entry(name).or_default().push(record.clone()),
            None => {
                tracing::trace!(title = record.title(), "dropping record without project signal");
                dropped += 1;
            }
        }
    }

    tracing::debug!(
        source = ?R::SOURCE,
        records = records.len(),
        projects = bucket.len(),
        dropped,
        "grouped activity"
    );

    bucket
}

#[cfg(test)]
mod tests {
    use super::*;
    use yearreview_types::{CalendarEvent, PullRequest};

    fn config() -> KeywordConfig {
        KeywordConfig::new()
            .with_category("infrastructure", ["terraform"])
            .with_category("security", ["rbac"])
    }

    #[test]
    fn test_name_from_details_when_title_has_none() {
        let pr = PullRequest::new("misc fixes").with_body("Part of the Atlas project");
        let name = resolve_project_name(&pr, &KeywordSet::new());
        assert_eq!(name.as_deref(), Some("Atlas"));
    }

    #[test]
    fn test_keyword_initiative_uses_first_category() {
        let pr = PullRequest::new("bump terraform, rbac rules");
        let keywords = extract_keywords(&pr.combined_text(), &config());
        let name = resolve_project_name(&pr, &keywords);
        assert_eq!(name.as_deref(), Some("Infrastructure Initiative"));
    }

    #[test]
    fn test_unnamed_pr_goes_to_other_work() {
        let prs = vec![PullRequest::new("fix typo"), PullRequest::new("bump deps")];
        let bucket = group_records(&prs, &KeywordConfig::new());
        assert_eq!(bucket.len(), 1);
        assert_eq!(bucket["Other Work"].len(), 2);
    }

    #[test]
    fn test_unnamed_event_is_dropped() {
        let events = vec![CalendarEvent::new("standup")];
        let bucket = group_records(&events, &KeywordConfig::new());
        assert!(bucket.is_empty());
    }

    #[test]
    fn test_event_name_from_description() {
        let events = vec![CalendarEvent::new("weekly").with_description("Part of the Atlas project")];
        let bucket = group_records(&events, &KeywordConfig::new());
        let names: Vec<&str> = bucket.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Atlas"]);
    }

    #[test]
    fn test_event_keyword_in_description_is_kept() {
        let events = vec![CalendarEvent::new("weekly").with_description("terraform plan review")];
        let bucket = group_records(&events, &config());
        assert_eq!(bucket["Infrastructure Initiative"].len(), 1);
    }

    #[test]
    fn test_bucket_preserves_arrival_order() {
        let prs = vec![
            PullRequest::new("RBAC v2 schema").with_url("https://x/1"),
            PullRequest::new("unrelated fix").with_url("https://x/2"),
            PullRequest::new("RBAC v2 rollout").with_url("https://x/3"),
        ];
        let bucket = group_records(&prs, &config());
        let urls: Vec<&str> = bucket["RBAC"].iter().map(|pr| pr.url()).collect();
        assert_eq!(urls, vec!["https://x/1", "https://x/3"]);
    }
}
