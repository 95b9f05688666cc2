//! A small logging library around one process-wide, lazily configured logger.
//!
//! ```no_run
//! let logger = exercise_log::get_logger()?;
//! logger.debug("console only");
//! logger.error("disk full"); // console and log_file.txt
//! # Ok::<(), exercise_log::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod facade;
pub mod logging;

pub use config::Config;
pub use error::{Error, Result};
pub use facade::{get_logger, init_with, install};
pub use logging::{LogFormatter, LogRecord, LogSink, Logger, Severity, Sink};
