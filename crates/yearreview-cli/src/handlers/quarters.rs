use super::analyze::analyze_file;
use crate::output::{self, QuartersView, Style};
use crate::types::OutputFormat;
use anyhow::Result;
use std::path::Path;
use yearreview_engine::organize_by_quarter;
use yearreview_runtime::TeamConfig;

pub fn handle(config: &TeamConfig, input: &Path, year: i32, format: OutputFormat) -> Result<()> {
    let projects = analyze_file(config, input)?;
    let quarters = organize_by_quarter(&projects, year);

    match format {
        OutputFormat::Json => println!("{}", output::to_json(&quarters)?),
        OutputFormat::Plain => print!("{}", QuartersView::new(&quarters, Style::detect())),
    }

    Ok(())
}
