pub mod config;
pub mod layers;
pub mod logging;

pub use config::{Cli, Config};
pub use layers::pipeline::{Pipeline, RunSummary};
pub use layers::UrlOutcome;
