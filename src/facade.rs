//! Process-wide access to the configured `exercise` logger.
//!
//! The first successful call builds the logger; every later call hands back
//! the same instance. A failed build leaves nothing behind, so the next call
//! tries again.

use once_cell::sync::OnceCell;

use crate::{
    config::Config,
    error::{Error, Result},
    logging::{Builder, Logger},
};

static LOGGER: OnceCell<Logger> = OnceCell::new();

/// Returns the singleton logger, building it from [`Config::default`] on first use.
pub fn get_logger() -> Result<&'static Logger> {
    init_with(Config::default())
}

/// Like [`get_logger`], but the first caller decides the configuration. Once
/// the logger exists `config` is ignored.
pub fn init_with(config: Config) -> Result<&'static Logger> {
    LOGGER.get_or_try_init(|| build(config))
}

fn build(config: Config) -> Result<Logger> {
    let console_level = config.console_level;
    let file_level = config.file_level;
    let file_path = config.file_path.clone();

    Builder::from_config(config)
        .with_console_sink(console_level)
        .with_file_sink(file_path, file_level)
        .build()
}

/// Routes the `log` crate macros through the singleton logger.
pub fn install() -> Result<&'static Logger> {
    let logger = get_logger()?;

    log::set_logger(logger).map_err(|_| Error::AlreadyInstalled)?;
    log::set_max_level(logger.level().to_level_filter());

    Ok(logger)
}
