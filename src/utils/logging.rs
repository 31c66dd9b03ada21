// Date Cracker - Free and Open Source Software Statement
//
// This project, datecrack, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/logging.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file sets up log4rs for the datecrack binary: a stderr console
// appender and an optional log file, so stdout carries only the report.

use crate::error::Error;
use crate::Result;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;

const CONSOLE_PATTERN: &str = "{d(%H:%M:%S)} {h({l:<5})} {m}{n}";
const FILE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l:<5} [{t}] {m}{n}";

/// Build the logging configuration without installing it
pub fn build_config(level: LevelFilter, log_file: Option<&Path>) -> Result<Config> {
    let console = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();

    let mut builder =
        Config::builder().appender(Appender::builder().build("console", Box::new(console)));
    let mut root = Root::builder().appender("console");

    if let Some(path) = log_file {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(FILE_PATTERN)))
            .build(path)
            .map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })?;
        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    builder
        .build(root.build(level))
        .map_err(|e| Error::Logging(e.to_string()))
}

/// Install the global logger. Call once, before any worker is spawned.
pub fn init_logging(level: LevelFilter, log_file: Option<&Path>) -> Result<()> {
    let config = build_config(level, log_file)?;
    log4rs::init_config(config).map_err(|e| Error::Logging(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_only_config() {
        assert!(build_config(LevelFilter::Info, None).is_ok());
    }

    #[test]
    fn test_file_appender_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("datecrack.log");
        assert!(build_config(LevelFilter::Debug, Some(&path)).is_ok());
    }
}
