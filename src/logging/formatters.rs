use core::fmt::{self, Write};

use yansi::Paint;

use super::{LogFormatter, LogRecord, Severity};
use crate::{config::Config, error::Error};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    AscTime,
    LevelName,
    Message,
    Name,
    Module,
    LineNo,
}

/// Renders records through a `{placeholder}` template.
///
/// Supported placeholders are `{asctime}`, `{levelname}`, `{message}`,
/// `{name}`, `{module}` and `{lineno}`. Literal braces are written as `{{`
/// and `}}`.
#[derive(Debug, Clone)]
pub struct PatternFormatter {
    pattern: String,
    segments: Vec<Segment>,
    datetime_format: String,
}

impl PatternFormatter {
    pub fn new(
        pattern: impl Into<String>,
        datetime_format: impl Into<String>,
    ) -> Result<Self, Error> {
        let pattern = pattern.into();
        let segments = parse_pattern(&pattern)?;

        Ok(Self {
            pattern,
            segments,
            datetime_format: datetime_format.into(),
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    fn render(&self, record: &LogRecord) -> Result<String, fmt::Error> {
        let mut out = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::AscTime => {
                    write!(out, "{}", record.created.format(&self.datetime_format))?
                }
                Segment::LevelName => out.push_str(record.level.name()),
                Segment::Message => out.push_str(&record.message),
                Segment::Name => out.push_str(&record.name),
                Segment::Module => out.push_str(record.module_path.as_deref().unwrap_or("?")),
                Segment::LineNo => match record.line {
                    Some(line) => write!(out, "{}", line)?,
                    None => out.push('?'),
                },
            }
        }

        if let Some(exc_info) = &record.exc_info {
            out.push('\n');
            out.push_str(exc_info);
        }

        Ok(out)
    }
}

impl LogFormatter for PatternFormatter {
    fn format(&self, record: &LogRecord) -> String {
        // chrono only reports a bad strftime specifier while rendering
        self.render(record)
            .unwrap_or_else(|_| format!("{} - {}", record.level.name(), record.message))
    }
}

fn parse_pattern(pattern: &str) -> Result<Vec<Segment>, Error> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                literal.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                literal.push('}');
            }
            '{' => {
                let mut key = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(c) => key.push(c),
                        None => {
                            return Err(Error::InvalidPattern(format!(
                                "unclosed placeholder '{{{}' in '{}'",
                                key, pattern
                            )))
                        }
                    }
                }

                let segment = match key.as_str() {
                    "asctime" => Segment::AscTime,
                    "levelname" => Segment::LevelName,
                    "message" => Segment::Message,
                    "name" => Segment::Name,
                    "module" => Segment::Module,
                    "lineno" => Segment::LineNo,
                    _ => {
                        return Err(Error::InvalidPattern(format!(
                            "unknown placeholder '{{{}}}' in '{}'",
                            key, pattern
                        )))
                    }
                };

                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(segment);
            }
            '}' => {
                return Err(Error::InvalidPattern(format!(
                    "unmatched '}}' in '{}'",
                    pattern
                )))
            }
            c => literal.push(c),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    Ok(segments)
}

/// Compact console line: `[time] LVL: message`.
pub struct ConsoleFormatter {
    datetime_format: String,
    use_ansi: bool,
}

impl ConsoleFormatter {
    pub fn new(config: &Config) -> Self {
        Self {
            datetime_format: config.console_datetime_format.clone(),
            use_ansi: config.use_ansi,
        }
    }

    fn timestamp(&self, record: &LogRecord) -> String {
        let mut time = String::new();
        if write!(time, "[{}]", record.created.format(&self.datetime_format)).is_err() {
            time = record.created.format("[%H:%M:%S]").to_string();
        }

        if self.use_ansi {
            time.bright_black().to_string()
        } else {
            time
        }
    }

    fn format_level(&self, level: Severity) -> String {
        let tag = match level {
            Severity::Debug => "DBG",
            Severity::Info => "INF",
            Severity::Warning => "WRN",
            Severity::Error => "ERR",
            Severity::Critical => "CRT",
        };

        if !self.use_ansi {
            return tag.to_string();
        }

        match level {
            Severity::Debug => tag.blue().to_string(),
            Severity::Info => tag.green().to_string(),
            Severity::Warning => tag.yellow().to_string(),
            Severity::Error => tag.red().to_string(),
            Severity::Critical => tag.red().bold().to_string(),
        }
    }

    fn format_msg(&self, message: &str) -> String {
        if self.use_ansi {
            message.bold().to_string()
        } else {
            message.to_string()
        }
    }
}

impl LogFormatter for ConsoleFormatter {
    fn format(&self, record: &LogRecord) -> String {
        let mut line = format!(
            "{} {}: {}",
            self.timestamp(record),
            self.format_level(record.level),
            self.format_msg(&record.message),
        );

        if let Some(exc_info) = &record.exc_info {
            line.push('\n');
            line.push_str(exc_info);
        }

        line
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};

    use super::*;

    fn record(level: Severity, message: &str) -> LogRecord {
        let mut record = LogRecord::new("exercise", level, message);
        record.created = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        record
    }

    #[test]
    fn test_pattern_renders_placeholders_in_order() {
        let formatter =
            PatternFormatter::new("{asctime} - {levelname} - {message}", "%Y-%m-%d %H:%M:%S")
                .unwrap();

        let line = formatter.format(&record(Severity::Info, "foo"));
        assert_eq!(line, "2024-03-09 14:05:07 - INFO - foo");
    }

    #[test]
    fn test_pattern_location_placeholders() {
        let formatter =
            PatternFormatter::new("{name}:{module}:{lineno} {{{message}}}", "%F").unwrap();

        let bare = formatter.format(&record(Severity::Debug, "hi"));
        assert_eq!(bare, "exercise:?:? {hi}");

        let located = record(Severity::Debug, "hi").with_location(
            Some("app::db"),
            Some("db.rs"),
            Some(42),
        );
        assert_eq!(formatter.format(&located), "exercise:app::db:42 {hi}");
    }

    #[test]
    fn test_pattern_appends_exception_text() {
        let formatter = PatternFormatter::new("{levelname} - {message}", "%F").unwrap();
        let record = record(Severity::Error, "boom").with_exc_info("Traceback: kaput");

        assert_eq!(formatter.format(&record), "ERROR - boom\nTraceback: kaput");
    }

    #[test]
    fn test_pattern_rejects_bad_templates() {
        for pattern in ["{asctime", "{user} - {message}", "message}"] {
            let err = PatternFormatter::new(pattern, "%F").unwrap_err();
            assert!(matches!(err, Error::InvalidPattern(_)), "{pattern}");
        }
    }

    #[test]
    fn test_bad_datetime_format_falls_back() {
        let formatter =
            PatternFormatter::new("{asctime} - {levelname} - {message}", "%Y %Q").unwrap();

        let line = formatter.format(&record(Severity::Warning, "low disk"));
        assert_eq!(line, "WARNING - low disk");
    }

    #[test]
    fn test_console_formatter_without_ansi() {
        let config = Config {
            use_ansi: false,
            ..Config::default()
        };
        let formatter = ConsoleFormatter::new(&config);

        let line = formatter.format(&record(Severity::Critical, "on fire"));
        assert_eq!(line, "[14:05:07] CRT: on fire");
    }
}
