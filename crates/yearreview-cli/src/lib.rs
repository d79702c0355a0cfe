// yearreview groups a team's collected activity into projects.
//
// Collectors (GitHub, Slack, calendar exports) run elsewhere and leave one
// `<key>_data.json` per member in the data directory. This binary reads
// those documents, runs the engine heuristic, caches the merged projects
// next to the input and prints member or team reports. Rendering the HTML
// pages is left to whoever consumes the JSON.

mod args;
mod commands;
mod handlers;
mod logging;
pub mod output;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
