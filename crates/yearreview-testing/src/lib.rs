//! Testing infrastructure for yearreview tests.
//!
//! - `fixtures`: record builders and sample keyword tables
//! - `world`: `TestWorld`, an isolated config + data directory for CLI runs

pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
