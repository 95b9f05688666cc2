use std::path::PathBuf;

use log::Log;

use super::{
    formatters::{ConsoleFormatter, PatternFormatter},
    sinks::{ConsoleSink, FileSink, Sink},
    LogRecord, LogSink, Severity,
};
use crate::{
    config::Config,
    error::{Error, Result},
};

/// Named logger fanning records out to an ordered list of sinks.
///
/// A record reaches a sink only when its severity passes both the logger's
/// level and the sink's own level.
pub struct Logger {
    name: String,
    level: Severity,
    sinks: Vec<Sink>,
}

impl Logger {
    pub fn new(name: impl Into<String>, level: Severity) -> Self {
        Self {
            name: name.into(),
            level,
            sinks: Vec::new(),
        }
    }

    pub fn add_sink(&mut self, sink: impl Into<Sink>) {
        self.sinks.push(sink.into());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> Severity {
        self.level
    }

    pub fn sinks(&self) -> &[Sink] {
        &self.sinks
    }

    pub fn is_enabled_for(&self, level: Severity) -> bool {
        level >= self.level
    }

    pub fn make_record(&self, level: Severity, message: impl Into<String>) -> LogRecord {
        LogRecord::new(self.name.clone(), level, message)
    }

    /// Delivers `record` to every sink whose threshold it meets. Sink errors
    /// are reported on stderr and never reach the caller.
    pub fn handle(&self, record: &LogRecord) {
        if !self.is_enabled_for(record.level) {
            return;
        }

        for sink in self.sinks.iter().filter(|sink| record.level >= sink.level()) {
            if let Err(err) = sink.emit(record) {
                eprintln!("{}", self.delivery_failure(&err));
            }
        }
    }

    fn delivery_failure(&self, err: &Error) -> String {
        let mut report = format!("{}: failed delivering log record: {}", self.name, err);
        let mut source = std::error::Error::source(err);
        while let Some(cause) = source {
            report.push_str(&format!(": {}", cause));
            source = cause.source();
        }
        report
    }

    pub fn log(&self, level: Severity, message: impl Into<String>) {
        if self.is_enabled_for(level) {
            self.handle(&self.make_record(level, message));
        }
    }

    pub fn debug(&self, message: impl Into<String>) {
        self.log(Severity::Debug, message)
    }

    pub fn info(&self, message: impl Into<String>) {
        self.log(Severity::Info, message)
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.log(Severity::Warning, message)
    }

    pub fn error(&self, message: impl Into<String>) {
        self.log(Severity::Error, message)
    }

    pub fn critical(&self, message: impl Into<String>) {
        self.log(Severity::Critical, message)
    }

    /// Logs at ERROR with the error and its source chain attached.
    pub fn exception(&self, message: impl Into<String>, err: &(dyn std::error::Error + 'static)) {
        if !self.is_enabled_for(Severity::Error) {
            return;
        }

        let mut exc_info = format!("Error: {}", err);
        let mut source = err.source();
        while let Some(cause) = source {
            exc_info.push_str(&format!("\nCaused by: {}", cause));
            source = cause.source();
        }

        self.handle(&self.make_record(Severity::Error, message).with_exc_info(exc_info));
    }

    pub fn flush(&self) {
        for sink in &self.sinks {
            sink.flush();
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.is_enabled_for(metadata.level().into())
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let record = self
            .make_record(record.level().into(), record.args().to_string())
            .with_location(record.module_path(), record.file(), record.line());
        self.handle(&record);
    }

    fn flush(&self) {
        Logger::flush(self)
    }
}

type SinkConstructor = Box<dyn Fn(&Config) -> Result<Sink>>;

pub struct Builder {
    config: Config,
    constructors: Vec<SinkConstructor>,
}

impl Builder {
    pub fn new() -> Self {
        Self::from_config(Config::new())
    }

    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            constructors: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    pub fn with_level(mut self, level: Severity) -> Self {
        self.config.level = level;
        self
    }

    pub fn with_console_sink(mut self, level: Severity) -> Self {
        self.constructors.push(Box::new(move |config: &Config| {
            let formatter = ConsoleFormatter::new(config);
            Ok(ConsoleSink::new(level, Some(Box::new(formatter))).into())
        }));
        self
    }

    /// Adds a file sink rendering through the configured file pattern.
    pub fn with_file_sink(mut self, path: impl Into<PathBuf>, level: Severity) -> Self {
        let path: PathBuf = path.into();
        self.constructors.push(Box::new(move |config: &Config| {
            let formatter = PatternFormatter::new(&config.file_pattern, &config.datetime_format)?;
            let sink = FileSink::open(&path, level, Some(Box::new(formatter)), config.append)?;
            Ok(sink.into())
        }));
        self
    }

    /// Assembles the logger, opening every file sink. Nothing is attached when
    /// any sink fails to build.
    pub fn build(&self) -> Result<Logger> {
        let mut logger = Logger::new(self.config.name.clone(), self.config.level);
        for constructor in &self.constructors {
            logger.add_sink(constructor(&self.config)?);
        }

        Ok(logger)
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}
