use crate::output::{self, Style, TeamView};
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use std::path::Path;
use yearreview_runtime::Workspace;

pub fn handle(
    workspace: &Workspace,
    refresh: bool,
    output_path: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let report = workspace.team_report(refresh)?;

    let Some(path) = output_path else {
        match format {
            OutputFormat::Json => println!("{}", output::to_json(&report)?),
            OutputFormat::Plain => print!("{}", TeamView::new(&report, Style::detect())),
        }
        return Ok(());
    };

    let content = match format {
        OutputFormat::Json => output::to_json(&report)?,
        OutputFormat::Plain => TeamView::new(&report, Style::plain()).to_string(),
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;

    tracing::info!(path = %path.display(), members = report.members.len(), "team report written");
    if format == OutputFormat::Plain {
        println!("Team report written to {}", path.display());
    }

    Ok(())
}
