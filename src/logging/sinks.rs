use std::{
    fs::File,
    io::{LineWriter, Write},
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use super::{LogFormatter, LogRecord, LogSink, Severity};
use crate::error::{Error, Result};

fn render(formatter: &Option<Box<dyn LogFormatter>>, record: &LogRecord) -> String {
    match formatter {
        Some(formatter) => formatter.format(record),
        None => record.message.clone(),
    }
}

/// Every destination a [`Logger`](super::Logger) can fan out to.
pub enum Sink {
    Console(ConsoleSink),
    File(FileSink),
}

impl Sink {
    pub fn as_console(&self) -> Option<&ConsoleSink> {
        match self {
            Sink::Console(sink) => Some(sink),
            _ => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileSink> {
        match self {
            Sink::File(sink) => Some(sink),
            _ => None,
        }
    }
}

impl LogSink for Sink {
    fn level(&self) -> Severity {
        match self {
            Sink::Console(sink) => sink.level(),
            Sink::File(sink) => sink.level(),
        }
    }

    fn formatter(&self) -> Option<&dyn LogFormatter> {
        match self {
            Sink::Console(sink) => sink.formatter(),
            Sink::File(sink) => sink.formatter(),
        }
    }

    fn emit(&self, record: &LogRecord) -> Result<()> {
        match self {
            Sink::Console(sink) => sink.emit(record),
            Sink::File(sink) => sink.emit(record),
        }
    }

    fn flush(&self) {
        match self {
            Sink::Console(sink) => sink.flush(),
            Sink::File(sink) => sink.flush(),
        }
    }
}

impl From<ConsoleSink> for Sink {
    fn from(sink: ConsoleSink) -> Self {
        Sink::Console(sink)
    }
}

impl From<FileSink> for Sink {
    fn from(sink: FileSink) -> Self {
        Sink::File(sink)
    }
}

pub struct FileSink {
    file: Mutex<LineWriter<File>>,
    file_path: PathBuf,
    level: Severity,
    formatter: Option<Box<dyn LogFormatter>>,
}

impl FileSink {
    /// Opens `path` for writing, creating it when missing. Existing content is
    /// kept when `append` is set and truncated otherwise.
    pub fn open(
        path: impl AsRef<Path>,
        level: Severity,
        formatter: Option<Box<dyn LogFormatter>>,
        append: bool,
    ) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .append(append)
            .truncate(!append)
            .open(path)
            .map_err(|source| Error::OpenLogFile {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            file: Mutex::new(LineWriter::new(file)),
            file_path: path.to_path_buf(),
            level,
            formatter,
        })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl LogSink for FileSink {
    fn level(&self) -> Severity {
        self.level
    }

    fn formatter(&self) -> Option<&dyn LogFormatter> {
        self.formatter.as_deref()
    }

    fn emit(&self, record: &LogRecord) -> Result<()> {
        let line = render(&self.formatter, record);

        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(file, "{}", line)?;
        file.flush()?;
        Ok(())
    }

    fn flush(&self) {
        let _ = self
            .file
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush();
    }
}

/// Writes to stderr.
pub struct ConsoleSink {
    handle: std::io::Stderr,
    level: Severity,
    formatter: Option<Box<dyn LogFormatter>>,
}

impl ConsoleSink {
    pub fn new(level: Severity, formatter: Option<Box<dyn LogFormatter>>) -> Self {
        Self {
            handle: std::io::stderr(),
            level,
            formatter,
        }
    }
}

impl LogSink for ConsoleSink {
    fn level(&self) -> Severity {
        self.level
    }

    fn formatter(&self) -> Option<&dyn LogFormatter> {
        self.formatter.as_deref()
    }

    fn emit(&self, record: &LogRecord) -> Result<()> {
        let line = render(&self.formatter, record);

        let mut writer = self.handle.lock();
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }

    fn flush(&self) {
        let _ = self.handle.lock().flush();
    }
}
