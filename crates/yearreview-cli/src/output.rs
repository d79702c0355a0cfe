//! Plain-text views of analysis results.
//!
//! Each view implements `Display`, so handlers can print it or write it to
//! `--output` through `to_string()`. Colors are only applied when
//! [`Style::detect`] finds a terminal.

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use yearreview_engine::TopicDigest;
use yearreview_runtime::{MemberReport, TeamConfig, TeamReport};
use yearreview_types::{DateRange, Project, ProjectMap, QuarterMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    color: bool,
}

impl Style {
    pub fn detect() -> Self {
        Self {
            color: std::io::stdout().is_terminal(),
        }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

fn format_range(range: &DateRange) -> String {
    match (range.start, range.end) {
        (Some(start), Some(end)) => {
            let (start, end) = (start.format("%Y-%m-%d"), end.format("%Y-%m-%d"));
            format!("{} → {}", start, end)
        }
        _ => "undated".to_string(),
    }
}

fn write_project_line(f: &mut fmt::Formatter, style: &Style, project: &Project) -> fmt::Result {
    write!(
        f,
        "{} {} [{}] {}",
        project.icon_glyph,
        style.heading(&project.name),
        project.category,
        style.dim(&format_range(&project.date_range))
    )
}

// --------------------------------------------------------
// Projects View
// --------------------------------------------------------

pub struct ProjectsView<'a> {
    projects: &'a ProjectMap,
    year: i32,
    style: Style,
}

impl<'a> ProjectsView<'a> {
    pub fn new(projects: &'a ProjectMap, year: i32, style: Style) -> Self {
        Self {
            projects,
            year,
            style,
        }
    }
}

impl fmt::Display for ProjectsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let header = format!("{} projects identified ({})", self.projects.len(), self.year);
        writeln!(f, "{}", self.style.heading(&header))?;

        for project in self.projects.values() {
            writeln!(f)?;
            write_project_line(f, &self.style, project)?;
            writeln!(f)?;
            writeln!(
                f,
                "  {} PRs, {} events",
                project.prs.len(),
                project.events.len()
            )?;
            if let Some(quarter) = project.quarter
                && quarter.year() != self.year
            {
                writeln!(f, "  started in {}", quarter)?;
            }
            writeln!(f, "  {}", project.description)?;
        }

        Ok(())
    }
}

// --------------------------------------------------------
// Quarters View
// --------------------------------------------------------

pub struct QuartersView<'a> {
    quarters: &'a QuarterMap,
    style: Style,
}

impl<'a> QuartersView<'a> {
    pub fn new(quarters: &'a QuarterMap, style: Style) -> Self {
        Self { quarters, style }
    }
}

impl fmt::Display for QuartersView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (quarter, projects) in self.quarters {
            writeln!(f, "{}", self.style.heading(&quarter.to_string()))?;
            if projects.is_empty() {
                writeln!(f, "  {}", self.style.dim("(no projects)"))?;
            }
            for project in projects {
                write!(f, "  ")?;
                write_project_line(f, &self.style, project)?;
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Member View
// --------------------------------------------------------

pub struct MemberView<'a> {
    report: &'a MemberReport,
    style: Style,
}

impl<'a> MemberView<'a> {
    pub fn new(report: &'a MemberReport, style: Style) -> Self {
        Self { report, style }
    }
}

fn digest_line(digests: &[TopicDigest]) -> String {
    digests
        .iter()
        .map(|d| format!("{} ({})", d.category, d.projects.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}

impl fmt::Display for MemberView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let report = self.report;
        writeln!(
            f,
            "{} {}",
            self.style.heading(&report.name),
            self.style.dim(&format!("({})", report.key))
        )?;
        writeln!(f, "  {}", report.summary.line1)?;
        writeln!(f, "  {}", report.summary.line2)?;
        if !report.summary.topics.is_empty() {
            writeln!(f, "  Topics: {}", report.summary.topics.join(", "))?;
        }

        let stats = &report.stats;
        writeln!(f)?;
        writeln!(
            f,
            "Projects: {} | PRs: {} | Reviews: {} | Slack: {} | Meetings: {}",
            stats.projects,
            stats.prs_authored,
            stats.prs_reviewed,
            stats.slack_messages,
            stats.calendar_events
        )?;

        let quarterly = report
            .quarterly_prs
            .iter()
            .map(|(label, count)| format!("{} {}", label, count))
            .collect::<Vec<_>>()
            .join(" · ");
        writeln!(f, "PRs by quarter: {}", quarterly)?;

        for (quarter, digests) in &report.digest {
            if !digests.is_empty() {
                writeln!(f, "{}: {}", quarter, digest_line(digests))?;
            }
        }

        Ok(())
    }
}

// --------------------------------------------------------
// Team View
// --------------------------------------------------------

pub struct TeamView<'a> {
    report: &'a TeamReport,
    style: Style,
}

impl<'a> TeamView<'a> {
    pub fn new(report: &'a TeamReport, style: Style) -> Self {
        Self { report, style }
    }
}

impl fmt::Display for TeamView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let report = self.report;
        let title = if report.team_name.is_empty() {
            format!("Year in review {}", report.year)
        } else {
            format!("{} · {}", report.team_name, report.year)
        };
        writeln!(f, "{}", self.style.heading(&title))?;
        writeln!(f, "{}", report.summary)?;
        writeln!(f)?;

        for member in &report.members {
            writeln!(
                f,
                "- {} ({}): {} projects, {} PRs, {} reviews",
                member.name,
                member.key,
                member.stats.projects,
                member.stats.prs_authored,
                member.stats.prs_reviewed
            )?;
        }

        Ok(())
    }
}

// --------------------------------------------------------
// Config View
// --------------------------------------------------------

pub struct ConfigView<'a> {
    path: &'a Path,
    found: bool,
    config: &'a TeamConfig,
    data_dir: &'a Path,
    style: Style,
}

impl<'a> ConfigView<'a> {
    pub fn new(
        path: &'a Path,
        found: bool,
        config: &'a TeamConfig,
        data_dir: &'a Path,
        style: Style,
    ) -> Self {
        Self {
            path,
            found,
            config,
            data_dir,
            style,
        }
    }
}

impl fmt::Display for ConfigView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let config = self.config;
        let source = if self.found {
            ""
        } else {
            " (not found, using defaults)"
        };
        writeln!(f, "Config: {}{}", self.path.display(), self.style.dim(source))?;
        writeln!(f, "Data directory: {}", self.data_dir.display())?;
        writeln!(f, "Year: {}", config.year)?;
        if !config.team_name.is_empty() {
            writeln!(f, "Team: {}", config.team_name)?;
        }

        writeln!(f, "Members ({}):", config.members.len())?;
        for member in &config.members {
            writeln!(f, "  - {} [{}]", member.name, member.key())?;
        }

        writeln!(f, "Keyword categories ({}):", config.project_keywords.len())?;
        for (category, keywords) in config.project_keywords.iter() {
            writeln!(f, "  {}: {}", category, keywords.join(", "))?;
        }

        Ok(())
    }
}
