use yearreview_types::{Project, ProjectMap, Quarter, QuarterMap};

/// Bucket projects into the four quarters of `year`.
///
/// A project lands in its precomputed quarter when that belongs to `year`,
/// else in the quarter re-derived from its start date, else in Q1. All four
/// quarters are always present; each is sorted by start date with undated
/// projects first.
pub fn organize_by_quarter(projects: &ProjectMap, year: i32) -> QuarterMap {
    let mut quarters: QuarterMap = Quarter::all(year)
        .into_iter()
        .map(|quarter| (quarter, Vec::new()))
        .collect();

    for project in projects.values() {
        let quarter = resolve_quarter(project, year);
        quarters.entry(quarter).or_default().push(project.clone());
    }

    for bucket in quarters.values_mut() {
        bucket.sort_by_key(|project| project.start_date());
    }

    quarters
}

/// Target-year quarter for one project; Q1 when nothing else applies.
pub fn resolve_quarter(project: &Project, year: i32) -> Quarter {
    let in_year = |quarter: &Quarter| quarter.year() == year;

    project
        .quarter
        .filter(in_year)
        .or_else(|| {
            project
                .start_date()
                .map(|start| Quarter::containing(&start))
                .filter(in_year)
        })
        .unwrap_or_else(|| Quarter::from_month(year, 1))
}
