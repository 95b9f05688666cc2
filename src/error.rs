use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed opening or creating log file {}", path.display())]
    OpenLogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid format pattern: {0}")]
    InvalidPattern(String),

    #[error("unknown severity level '{0}'")]
    UnknownSeverity(String),

    #[error("failed writing log record")]
    Write(#[from] io::Error),

    #[error("a global logger is already installed")]
    AlreadyInstalled,
}

pub type Result<T> = std::result::Result<T, Error>;
