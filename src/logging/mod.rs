mod formatters;
mod level;
mod logger;
mod record;
mod sinks;

pub use formatters::{ConsoleFormatter, PatternFormatter};
pub use level::Severity;
pub use logger::{Builder, Logger};
pub use record::LogRecord;
pub use sinks::{ConsoleSink, FileSink, Sink};

pub trait LogFormatter: Sync + Send {
    fn format(&self, record: &LogRecord) -> String;
}

pub trait LogSink: Sync + Send {
    fn level(&self) -> Severity;
    fn formatter(&self) -> Option<&dyn LogFormatter>;
    fn emit(&self, record: &LogRecord) -> crate::error::Result<()>;
    fn flush(&self);
}
