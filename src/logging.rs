// ── Logging ───────────────────────────────────────────────────────────────────
//
// All diagnostics go through the `log` facade.  `init` routes them to a file
// in the working directory that is truncated on every start, so the file only
// ever describes the current run.

use std::{path::Path, sync::Mutex};

use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config as LogConfig, Root},
    encode::pattern::PatternEncoder,
};

use crate::{
    config::Config,
    error::{AppError, Result},
};

const APPENDER: &str = "logfile";

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l:<5} {t} - {m}{n}";

/// Create (or truncate) `path` and wrap it in a file appender.
fn file_appender(path: &Path) -> Result<FileAppender> {
    FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .append(false)
        .build(path)
        .map_err(|source| AppError::LogFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Build the log4rs configuration for `config` without installing it.
///
/// A relative `log_file` is resolved against `dir`.
fn build(config: &Config, dir: &Path) -> Result<LogConfig> {
    let level = config.level_filter()?;
    let file = file_appender(&dir.join(&config.log_file))?;

    LogConfig::builder()
        .appender(Appender::builder().build(APPENDER, Box::new(file)))
        .build(Root::builder().appender(APPENDER).build(level))
        .map_err(|e| AppError::Logger(e.to_string()))
}

/// Handle of the installed logger.  `log` accepts one logger per process;
/// later `init` calls swap its configuration instead.
static INSTALLED: Mutex<Option<log4rs::Handle>> = Mutex::new(None);

/// Route the `log` facade to the log file described by `config`.
///
/// Called before the first window.  On error the previous configuration (if
/// any) stays in place.
pub(crate) fn init(config: &Config, dir: &Path) -> Result<()> {
    let log_config = build(config, dir)?;

    let mut installed = INSTALLED
        .lock()
        .map_err(|_| AppError::Logger("logger state poisoned".to_owned()))?;
    match installed.as_ref() {
        Some(handle) => handle.set_config(log_config),
        None => {
            let handle =
                log4rs::init_config(log_config).map_err(|e| AppError::Logger(e.to_string()))?;
            *installed = Some(handle);
        }
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
