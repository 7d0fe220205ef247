// ── Central error type ────────────────────────────────────────────────────────
//
// All fallible operations in winhello return `error::Result<T>`.  No panics
// in production paths; startup failures surface as one error dialog plus a
// log line (see `app::report`).

use std::path::PathBuf;

/// Every error that winhello can produce.
#[derive(Debug)]
pub enum AppError {
    /// `GetModuleHandleW` failed on both attempts.
    ModuleHandle {
        /// Win32 last-error code of the second attempt (0 if the call
        /// "succeeded" with a null handle).
        code: u32,
    },

    /// `RegisterClassExW` failed or returned a zero atom.
    ClassRegistration { code: u32 },

    /// The top-level window could not be created.
    WindowCreation { code: u32 },

    /// The push-button child could not be created.
    ControlCreation { code: u32 },

    /// The log file could not be created or truncated.
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The logger rejected its configuration or was already installed.
    Logger(String),

    /// The config file exists but is not valid JSON for `Config`.
    Json(serde_json::Error),

    /// The config file parsed but holds values the window cannot use.
    InvalidConfig(String),

    /// A standard I/O error (config read, …).
    Io(std::io::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ModuleHandle { code } => {
                write!(f, "GetModuleHandleW failed (error {code:#010x})")
            }
            Self::ClassRegistration { code } => {
                write!(f, "RegisterClassExW failed (error {code:#010x})")
            }
            Self::WindowCreation { code } => {
                write!(f, "CreateWindowExW failed for the main window (error {code:#010x})")
            }
            Self::ControlCreation { code } => {
                write!(f, "CreateWindowExW failed for the button (error {code:#010x})")
            }
            Self::LogFile { path, source } => {
                write!(f, "failed to create log file {}: {source}", path.display())
            }
            Self::Logger(reason) => write!(f, "failed to initialise logging: {reason}"),
            Self::Json(e) => write!(f, "config parse error: {e}"),
            Self::InvalidConfig(reason) => write!(f, "invalid config: {reason}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::LogFile { source, .. } => Some(source),
            Self::Json(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AppError>;

// ── Tests ─────────────────────────────────────────────────────────────────────
