use crate::config::{Member, TeamConfig};
use crate::report::{MemberReport, TeamReport};
use crate::{Error, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use yearreview_engine::ProjectAnalyzer;
use yearreview_types::{MemberData, ProjectMap};

/// Read a collector-produced member data document.
pub fn read_member_data(path: &Path) -> Result<MemberData> {
    if !path.exists() {
        return Err(Error::NotFound(format!("member data {}", path.display())));
    }
    read_json(path)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// A team configuration bound to the data directory holding collector output.
///
/// Layout: `<key>_data.json` per member (input) and `<key>_projects.json`
/// (cached merged projects, written on analysis).
pub struct Workspace {
    config: TeamConfig,
    data_dir: PathBuf,
    analyzer: ProjectAnalyzer,
}

impl Workspace {
    pub fn new(config: TeamConfig, data_dir: impl Into<PathBuf>) -> Self {
        let analyzer = ProjectAnalyzer::new(config.project_keywords.clone());
        Self {
            config,
            data_dir: data_dir.into(),
            analyzer,
        }
    }

    pub fn config(&self) -> &TeamConfig {
        &self.config
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn analyzer(&self) -> &ProjectAnalyzer {
        &self.analyzer
    }

    pub fn data_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}_data.json", key))
    }

    pub fn projects_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}_projects.json", key))
    }

    /// Collected data for `key`; `None` when nothing was collected.
    pub fn load_member_data(&self, key: &str) -> Result<Option<MemberData>> {
        let path = self.data_path(key);
        if !path.exists() {
            return Ok(None);
        }
        read_json(&path).map(Some)
    }

    /// Run the project pipeline over one member's data.
    pub fn analyze_data(&self, data: &MemberData) -> ProjectMap {
        self.analyzer
            .analyze(&data.github.prs_authored, &data.calendar.events)
    }

    /// Data and merged projects for a member.
    ///
    /// Cached projects are reused when both files exist and `refresh` is off;
    /// otherwise the pipeline runs and the cache is rewritten. A member with
    /// no data file is analyzed as empty and nothing is cached.
    pub fn analyze_member(&self, member: &Member, refresh: bool) -> Result<(MemberData, ProjectMap)> {
        let key = member.key();

        let Some(data) = self.load_member_data(&key)? else {
            tracing::warn!(member = %member.name, key = %key, "no collected data, reporting empty activity");
            return Ok((MemberData::default(), ProjectMap::new()));
        };

        let cache = self.projects_path(&key);
        if !refresh && cache.exists() {
            tracing::info!(member = %member.name, "using cached projects");
            let projects: ProjectMap = read_json(&cache)?;
            return Ok((data, projects));
        }

        let projects = self.analyze_data(&data);
        write_json(&cache, &projects)?;
        tracing::info!(member = %member.name, projects = projects.len(), "identified projects");

        Ok((data, projects))
    }

    pub fn member_report(&self, member: &Member, refresh: bool) -> Result<MemberReport> {
        let (data, projects) = self.analyze_member(member, refresh)?;
        Ok(MemberReport::build(
            &member.name,
            &member.key(),
            &data,
            projects,
            self.config.year,
        ))
    }

    /// Report for the member matching `key` (GitHub handle, derived key, or name).
    pub fn member_report_by_key(&self, key: &str, refresh: bool) -> Result<MemberReport> {
        let member = self
            .config
            .find_member(key)
            .ok_or_else(|| Error::UnknownMember(key.to_string()))?;
        self.member_report(member, refresh)
    }

    pub fn team_report(&self, refresh: bool) -> Result<TeamReport> {
        let members = self
            .config
            .members
            .iter()
            .map(|member| self.member_report(member, refresh))
            .collect::<Result<Vec<_>>>()?;

        Ok(TeamReport::build(
            &self.config.team_name,
            self.config.year,
            members,
        ))
    }
}
