use crate::output::{self, ProjectsView, Style};
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use std::path::Path;
use yearreview_engine::ProjectAnalyzer;
use yearreview_runtime::{TeamConfig, read_member_data};
use yearreview_types::ProjectMap;

/// Identify projects in a standalone member data document.
pub(crate) fn analyze_file(config: &TeamConfig, input: &Path) -> Result<ProjectMap> {
    let data = read_member_data(input)
        .with_context(|| format!("reading member data {}", input.display()))?;
    let analyzer = ProjectAnalyzer::new(config.project_keywords.clone());
    Ok(analyzer.analyze(&data.github.prs_authored, &data.calendar.events))
}

pub fn handle(config: &TeamConfig, input: &Path, year: i32, format: OutputFormat) -> Result<()> {
    let projects = analyze_file(config, input)?;

    match format {
        OutputFormat::Json => println!("{}", output::to_json(&projects)?),
        OutputFormat::Plain => print!("{}", ProjectsView::new(&projects, year, Style::detect())),
    }

    Ok(())
}
