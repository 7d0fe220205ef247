// ── Window procedure and conversions ──────────────────────────────────────────
//
// Responsibilities in this file (unsafe confined here):
//   • The `extern "system"` WndProc registered with the main window class.
//   • Conversions between crate-level `Handle`/`Message` and Win32 types.
//   • Last-error capture.

#![allow(unsafe_code)]

use std::ffi::c_void;

use windows::Win32::{
    Foundation::{GetLastError, HWND, LPARAM, LRESULT, POINT, WPARAM},
    UI::WindowsAndMessaging::MSG,
};

use super::Win32;
use crate::{
    app::procedure,
    config,
    platform::{win32_code_from_hresult, Handle, Message},
};

// ── Window procedure ──────────────────────────────────────────────────────────

// SAFETY: wnd_proc is registered as lpfnWndProc in WNDCLASSEXW.
// Windows guarantees that hwnd, msg, wparam, and lparam are valid for the
// lifetime of this call; we must not store hwnd beyond the message handler.
// It captures nothing: the configuration it needs is the process-wide,
// write-once `config::active()`.
pub(super) unsafe extern "system" fn wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    let message = Message {
        window: handle_of(hwnd),
        code: msg,
        wparam: wparam.0,
        lparam: lparam.0,
        ..Message::default()
    };
    LRESULT(procedure::handle(&Win32, config::active(), &message))
}

// ── Conversions ───────────────────────────────────────────────────────────────

pub(super) fn hwnd_of(handle: Handle) -> HWND {
    HWND(handle.0 as *mut c_void)
}

pub(super) fn handle_of(hwnd: HWND) -> Handle {
    Handle(hwnd.0 as isize)
}

pub(super) fn raw_message(message: &Message) -> MSG {
    MSG {
        hwnd: hwnd_of(message.window),
        message: message.code,
        wParam: WPARAM(message.wparam),
        lParam: LPARAM(message.lparam),
        time: message.time,
        pt: POINT {
            x: message.point.0,
            y: message.point.1,
        },
        ..Default::default()
    }
}

pub(super) fn message_of(raw: &MSG) -> Message {
    Message {
        window: handle_of(raw.hwnd),
        code: raw.message,
        wparam: raw.wParam.0,
        lparam: raw.lParam.0,
        time: raw.time,
        point: (raw.pt.x, raw.pt.y),
    }
}

/// Null-terminated UTF-16 copy of `s`.
pub(super) fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

// ── Error helpers ─────────────────────────────────────────────────────────────

/// Capture the current Win32 last-error code.
///
/// Call immediately after a Win32 function that signals failure — `GetLastError`
/// reads thread-local state that can be overwritten by any subsequent API call.
pub(super) fn last_error() -> u32 {
    // SAFETY: GetLastError reads thread-local state set by the last Win32 call.
    // It is always safe to call and never fails.
    unsafe { GetLastError() }.0
}

/// Win32 code carried by a windows-crate error.
pub(super) fn code_of(e: &windows::core::Error) -> u32 {
    // HRESULT.0 is i32; reinterpret bits as u32.
    win32_code_from_hresult(e.code().0 as u32)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
