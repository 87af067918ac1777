//! Command implementations for the CLI.

mod config;
mod show;

pub use config::cmd_config;
pub use show::cmd_show;
