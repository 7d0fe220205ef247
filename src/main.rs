// ── Safety policy ────────────────────────────────────────────────────────────
// Unsafe code is forbidden everywhere except `platform::win32` (Win32 FFI).
// Each unsafe block in that module MUST carry a `// SAFETY:` comment.
#![deny(unsafe_code)]
// Release builds run as a GUI application (no console window).
// Debug builds keep the console so that startup failures also reach stderr.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
// Off Windows only the portable core is built (for its tests); the code that
// drives it is unreachable there.
#![cfg_attr(not(windows), allow(dead_code))]

mod app;
mod config;
mod error;
mod logging;
mod platform;

#[cfg(windows)]
fn main() {
    // Every path returns normally: the exit status is always success.
    app::start(&platform::win32::Win32, std::path::Path::new("."));
}

#[cfg(not(windows))]
fn main() {
    eprintln!("winhello needs the Win32 windowing API; run it on Windows.");
}
