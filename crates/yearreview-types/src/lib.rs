pub mod activity;
pub mod category;
pub mod error;
pub mod keywords;
pub mod member;
pub mod project;
pub mod quarter;
mod util;

pub use activity::*;
pub use category::Category;
pub use error::{Error, Result};
pub use keywords::{KeywordConfig, KeywordSet};
pub use member::*;
pub use project::*;
pub use quarter::Quarter;
pub use util::*;
