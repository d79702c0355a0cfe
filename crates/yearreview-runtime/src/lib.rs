pub mod config;
pub mod error;
pub mod report;
pub mod workspace;

pub use config::{Member, TeamConfig, expand_tilde, resolve_config_path};
pub use error::{Error, Result};
pub use report::{MemberReport, TeamReport};
pub use workspace::{Workspace, read_member_data};
