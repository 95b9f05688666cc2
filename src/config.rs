use std::{io::IsTerminal, path::PathBuf};

use crate::logging::Severity;

pub const LOGGER_NAME: &str = "exercise";
pub const LOG_FILE: &str = "log_file.txt";
pub const FILE_PATTERN: &str = "{asctime} - {levelname} - {message}";
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Everything the facade needs to assemble its logger.
#[derive(Debug, Clone)]
pub struct Config {
    pub name: String,
    pub level: Severity,

    pub console_level: Severity,
    pub console_datetime_format: String,
    pub use_ansi: bool,

    pub file_path: PathBuf,
    pub file_level: Severity,
    pub file_pattern: String,
    pub datetime_format: String,
    pub append: bool,
}

impl Config {
    pub fn new() -> Self {
        Self {
            name: LOGGER_NAME.to_string(),
            level: Severity::Debug,
            console_level: Severity::Debug,
            console_datetime_format: "%H:%M:%S".to_string(),
            use_ansi: std::io::stderr().is_terminal(),
            file_path: PathBuf::from(LOG_FILE),
            file_level: Severity::Error,
            file_pattern: FILE_PATTERN.to_string(),
            datetime_format: DATETIME_FORMAT.to_string(),
            append: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.name, "exercise");
        assert_eq!(config.level, Severity::Debug);
        assert_eq!(config.console_level, Severity::Debug);
        assert_eq!(config.file_level, Severity::Error);
        assert_eq!(config.file_path, PathBuf::from("log_file.txt"));
        assert!(!config.file_pattern.contains("{name}"));
        assert!(config.append);
    }
}
