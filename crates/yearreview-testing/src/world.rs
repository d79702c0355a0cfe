//! TestWorld pattern for declarative CLI test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated config file and data directory
//! - Writing member data documents
//! - Executing the CLI against that environment

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use yearreview_types::MemberData;

/// Isolated yearreview environment.
///
/// # Example
/// ```no_run
/// use yearreview_testing::TestWorld;
///
/// let world = TestWorld::new().with_config(r#"year = 2025
/// team_name = "Platform"
/// "#);
///
/// let result = world.run(&["config"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_path = temp_dir.path().to_path_buf();
        let config_path = base_path.join("config").join("team_config.toml");
        let data_dir = base_path.join("data").join("raw");

        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            config_path,
            data_dir,
            env_vars: HashMap::new(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write the team configuration (raw TOML).
    pub fn with_config(self, toml: &str) -> Self {
        self.write_config(toml).expect("Failed to write config");
        self
    }

    pub fn write_config(&self, toml: &str) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.config_path, toml)?;
        Ok(())
    }

    /// Write `<key>_data.json` into the data directory.
    pub fn with_member_data(self, key: &str, data: &MemberData) -> Self {
        self.write_member_data(key, data)
            .expect("Failed to write member data");
        self
    }

    pub fn write_member_data(&self, key: &str, data: &MemberData) -> Result<PathBuf> {
        let path = self.data_dir.join(format!("{}_data.json", key));
        std::fs::write(&path, serde_json::to_string_pretty(data)?)?;
        Ok(path)
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Point a command at this world's config, data directory and environment.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.current_dir(self.temp_dir.path())
            .env_remove("YEARREVIEW_CONFIG")
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(&self.config_path)
            .arg("--data-dir")
            .arg(&self.data_dir);

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }
        cmd
    }

    /// Execute the yearreview binary with `args` in this environment.
    ///
    /// Relies on `Command::cargo_bin()`, so it only works from integration
    /// tests of the CLI crate.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("yearreview")
            .map_err(|e| anyhow::anyhow!("Failed to find yearreview binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
