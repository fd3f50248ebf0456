//! Subcommands.

pub mod check;
pub mod render;
pub mod resolve;

use clap::ValueEnum;

/// Output format shared by `resolve` and `check`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}
