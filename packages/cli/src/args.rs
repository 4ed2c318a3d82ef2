//! Command line arguments.

use clap::{Parser, ValueEnum};

/// Parkways demonstration: two visitors, two national parks, three trips
#[derive(Debug, Parser)]
#[command(name = "parkways", version, about)]
pub struct Args {
    /// Output format of the report
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
