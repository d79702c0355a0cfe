pub mod analyze;
pub mod config;
pub mod member;
pub mod quarters;
pub mod team;
