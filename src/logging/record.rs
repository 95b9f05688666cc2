use chrono::{DateTime, Local};

use super::Severity;

/// Payload of a single log call. Built by [`Logger::make_record`] and handed
/// to every sink that accepts its severity.
///
/// [`Logger::make_record`]: super::Logger::make_record
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub name: String,
    pub level: Severity,
    pub message: String,
    pub created: DateTime<Local>,
    pub module_path: Option<String>,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub exc_info: Option<String>,
}

impl LogRecord {
    pub fn new(name: impl Into<String>, level: Severity, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level,
            message: message.into(),
            created: Local::now(),
            module_path: None,
            file: None,
            line: None,
            exc_info: None,
        }
    }

    pub fn with_location(
        self,
        module_path: Option<&str>,
        file: Option<&str>,
        line: Option<u32>,
    ) -> Self {
        Self {
            module_path: module_path.map(String::from),
            file: file.map(String::from),
            line,
            ..self
        }
    }

    pub fn with_exc_info(self, exc_info: impl Into<String>) -> Self {
        Self {
            exc_info: Some(exc_info.into()),
            ..self
        }
    }
}
