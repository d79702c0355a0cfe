use crate::output::{self, MemberView, Style};
use crate::types::OutputFormat;
use anyhow::Result;
use yearreview_runtime::Workspace;

pub fn handle(workspace: &Workspace, key: &str, refresh: bool, format: OutputFormat) -> Result<()> {
    let report = workspace.member_report_by_key(key, refresh)?;

    match format {
        OutputFormat::Json => println!("{}", output::to_json(&report)?),
        OutputFormat::Plain => print!("{}", MemberView::new(&report, Style::detect())),
    }

    Ok(())
}
