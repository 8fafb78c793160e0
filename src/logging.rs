//! log4rs initialisation.
//!
//! Logs always go to stderr; stdout carries the report.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;
use std::str::FromStr;

const PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Parse a level name, falling back to `warn`.
pub fn parse_level(level: &str) -> LevelFilter {
    LevelFilter::from_str(level).unwrap_or(LevelFilter::Warn)
}

/// Programmatic stderr config at `level`.
pub fn stderr_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}

/// Initialise logging from `config_file` if it exists, else log to stderr at
/// `level`.
pub fn init(config_file: &Path, level: &str) -> Result<(), Box<dyn Error>> {
    if config_file.exists() {
        log4rs::init_file(config_file, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {}: {e}", config_file.display()))?;
    } else {
        log4rs::init_config(stderr_config(parse_level(level))?)?;
    }
    Ok(())
}
