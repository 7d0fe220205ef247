// ── Configuration ─────────────────────────────────────────────────────────────
//
// Every string and size the window uses, with defaults matching the classic
// demo.  An optional `winhello.json` in the working directory overrides any
// subset of fields.  No `unsafe` — pure safe Rust + serde_json.

use std::{fs, io, path::Path, str::FromStr, sync::OnceLock};

use log::LevelFilter;
use serde::Deserialize;

use crate::error::{AppError, Result};

/// Name of the optional config file, resolved against the working directory.
pub(crate) const CONFIG_FILE: &str = "winhello.json";

// ── On-disk type ──────────────────────────────────────────────────────────────

/// Root of the JSON config file.  Missing fields take their default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    /// Name the main window class is registered under.
    pub(crate) class_name: String,
    pub(crate) window_title: String,
    pub(crate) window_width: i32,
    pub(crate) window_height: i32,

    pub(crate) button_text: String,
    /// Control identifier carried in the low word of `WM_COMMAND`'s wparam.
    pub(crate) button_id: u16,
    /// Button position, relative to the main window's client area.
    pub(crate) button_x: i32,
    pub(crate) button_y: i32,
    pub(crate) button_width: i32,
    pub(crate) button_height: i32,

    /// Caption of the dialog shown when the button is clicked.
    pub(crate) message_title: String,
    /// Body of the dialog shown when the button is clicked.
    pub(crate) message_text: String,

    /// Log file, truncated on every start.
    pub(crate) log_file: String,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub(crate) log_level: String,

    /// Substitute a synthetic non-null module handle when
    /// `GetModuleHandleW` fails twice.  It is not a real handle and later
    /// calls will most likely fail with it; off unless explicitly asked for.
    pub(crate) placeholder_module_fallback: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            class_name: "WinHelloMainWindow".to_owned(),
            window_title: "Rust GUI".to_owned(),
            window_width: 500,
            window_height: 400,
            button_text: "Hello World".to_owned(),
            button_id: 1001,
            button_x: 50,
            button_y: 50,
            button_width: 100,
            button_height: 30,
            message_title: "Hello".to_owned(),
            message_text: "Hello Windows".to_owned(),
            log_file: "winhello_debug.log".to_owned(),
            log_level: "debug".to_owned(),
            placeholder_module_fallback: false,
        }
    }
}

impl Config {
    /// Parsed `log_level`.
    pub(crate) fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| AppError::InvalidConfig(format!("unknown log level {:?}", self.log_level)))
    }

    /// Reject values that would make a class or window call fail for reasons
    /// that have nothing to do with the OS.
    pub(crate) fn validate(&self) -> Result<()> {
        // Win32 takes null-terminated strings; an embedded NUL would silently
        // cut the text short.
        for (field, value) in [
            ("class_name", &self.class_name),
            ("window_title", &self.window_title),
            ("button_text", &self.button_text),
            ("message_title", &self.message_title),
            ("message_text", &self.message_text),
            ("log_file", &self.log_file),
        ] {
            if value.contains('\0') {
                return Err(AppError::InvalidConfig(format!("{field} contains a NUL character")));
            }
        }
        if self.class_name.trim().is_empty() {
            return Err(AppError::InvalidConfig("class_name is empty".to_owned()));
        }
        if self.window_width <= 0 || self.window_height <= 0 {
            return Err(AppError::InvalidConfig(format!(
                "window size {}x{} is not positive",
                self.window_width, self.window_height
            )));
        }
        if self.button_width <= 0 || self.button_height <= 0 {
            return Err(AppError::InvalidConfig(format!(
                "button size {}x{} is not positive",
                self.button_width, self.button_height
            )));
        }
        if self.log_file.trim().is_empty() {
            return Err(AppError::InvalidConfig("log_file is empty".to_owned()));
        }
        self.level_filter().map(|_| ())
    }
}

// ── Load ──────────────────────────────────────────────────────────────────────

/// Read and validate the config file at `path`.
///
/// A missing file is not an error: the defaults are returned.  Any other
/// failure is returned so that the caller can log it once logging is up and
/// continue with `Config::default()`.
pub(crate) fn load(path: &Path) -> Result<Config> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => return Err(e.into()),
    };
    let config: Config = serde_json::from_slice(&data)?;
    config.validate()?;
    Ok(config)
}

// ── Process-wide instance ─────────────────────────────────────────────────────

static ACTIVE: OnceLock<Config> = OnceLock::new();

/// Freeze `config` as the process-wide configuration.
///
/// Called once from `app::start` before any window exists.  A second call keeps the
/// first value.
pub(crate) fn install(config: Config) -> &'static Config {
    ACTIVE.get_or_init(|| config)
}

/// The installed configuration, or the defaults if nothing was installed.
///
/// Read by the window procedure, which the OS calls without any context of
/// ours.
pub(crate) fn active() -> &'static Config {
    ACTIVE.get_or_init(Config::default)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
