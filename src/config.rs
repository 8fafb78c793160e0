//! Command line and environment configuration.

use crate::output::{OutputFormat, DEFAULT_WIDTH};
use clap::Parser;
use std::path::PathBuf;

/// Takes a list of subnets to include and a list of subnets to exclude.
/// Outputs the include list, modified such that it does not include any
/// address space in the exclude list.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// File from which to read subnets to include, one per line. Format: 1.2.3.4/5
    pub include_file: PathBuf,

    /// File from which to read subnets to exclude, one per line. Format: 1.2.3.4/5
    pub exclude_file: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Wrap width of the comment listings
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    pub wrap_width: usize,

    /// log4rs config file
    #[arg(long, env = "IP_EXCLUDE_LOG_CONFIG", default_value = "log4rs.yml")]
    pub log_config: PathBuf,

    /// Log level used when the log config file is missing
    #[arg(long, env = "IP_EXCLUDE_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,
}
