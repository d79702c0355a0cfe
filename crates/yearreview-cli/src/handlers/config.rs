use crate::output::{self, ConfigView, Style};
use crate::types::OutputFormat;
use anyhow::Result;
use serde_json::json;
use std::path::Path;
use yearreview_runtime::TeamConfig;

pub fn handle(config_path: &Path, data_dir: &Path, format: OutputFormat) -> Result<()> {
    let found = config_path.exists();
    let config = TeamConfig::load_or_default(config_path)?;

    match format {
        OutputFormat::Json => {
            let value = json!({
                "path": config_path.display().to_string(),
                "found": found,
                "data_dir": data_dir.display().to_string(),
                "config": config,
            });
            println!("{}", output::to_json(&value)?);
        }
        OutputFormat::Plain => print!(
            "{}",
            ConfigView::new(config_path, found, &config, data_dir, Style::detect())
        ),
    }

    Ok(())
}
