// ── Platform abstraction layer ────────────────────────────────────────────────
//
// This module defines the interface that the rest of the codebase uses to
// talk to the OS windowing API.  No `unsafe` lives here; all Win32 FFI is
// confined to the `win32` sub-module and never leaks outward.
//
// Everything above this layer (bootstrap, window procedure, message loop) is
// written against `Platform`, so it runs unchanged against the fake in
// `app::testing`.

#[cfg(windows)]
pub mod win32;

// ── Message codes ─────────────────────────────────────────────────────────────

/// The handful of message and notification codes the window procedure acts
/// on.  Values are fixed by the Win32 ABI.
pub(crate) mod codes {
    pub(crate) const WM_CREATE: u32 = 0x0001;
    pub(crate) const WM_DESTROY: u32 = 0x0002;
    pub(crate) const WM_QUIT: u32 = 0x0012;
    pub(crate) const WM_COMMAND: u32 = 0x0111;

    /// Button notification sent (as the high word of wparam) on a click.
    pub(crate) const BN_CLICKED: u16 = 0;
}

// ── Handles ───────────────────────────────────────────────────────────────────

/// Opaque OS handle (HWND, HINSTANCE, HCURSOR, …).  Owned by the OS; we only
/// pass it back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub(crate) struct Handle(pub(crate) isize);

impl Handle {
    pub(crate) const NULL: Handle = Handle(0);

    /// Synthetic non-null "module handle" used only when
    /// `Config::placeholder_module_fallback` is on.
    pub(crate) const PLACEHOLDER: Handle = Handle(1);

    pub(crate) fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

// ── Descriptors ───────────────────────────────────────────────────────────────

/// Window class registration request.  The window procedure is not part of
/// it: each platform registers its own callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ClassSpec<'a> {
    pub(crate) name: &'a str,
    pub(crate) instance: Handle,
    /// `Handle::NULL` leaves the class without a cursor.
    pub(crate) cursor: Handle,
    /// `CS_HREDRAW | CS_VREDRAW`: repaint the whole client area on resize.
    pub(crate) redraw_on_resize: bool,
}

/// What kind of window `create_window` produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum WindowKind<'a> {
    /// Overlapped, visible top-level window of a registered class.
    TopLevel { class_name: &'a str },
    /// Visible push-button child of `parent`, tagged with `control_id`.
    PushButton { parent: Handle, control_id: u16 },
}

/// Window creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WindowSpec<'a> {
    pub(crate) kind: WindowKind<'a>,
    /// Title bar text, or the button label.
    pub(crate) text: &'a str,
    /// `None` lets the OS pick (`CW_USEDEFAULT`).  Child positions are
    /// relative to the parent's client area.
    pub(crate) position: Option<(i32, i32)>,
    pub(crate) size: (i32, i32),
    pub(crate) instance: Handle,
}

/// Icon and button set of a message box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DialogKind {
    /// `MB_OK`, no icon.
    Plain,
    /// `MB_OK | MB_ICONERROR`.
    Error,
}

// ── Messages ──────────────────────────────────────────────────────────────────

/// One queued or sent window message.  Overwritten on every loop turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Message {
    pub(crate) window: Handle,
    pub(crate) code: u32,
    pub(crate) wparam: usize,
    pub(crate) lparam: isize,
    pub(crate) time: u32,
    /// Cursor position in screen coordinates when the message was posted.
    pub(crate) point: (i32, i32),
}

/// Outcome of one `get_message` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Retrieval {
    /// A message was stored in the caller's record.
    Message,
    /// `WM_QUIT` was retrieved; its exit code is in the record's wparam.
    Quit,
    /// Retrieval failed with this Win32 error code.
    Error(u32),
}

/// Result of a binding call: the value, or the Win32 last-error code.
pub(crate) type OsResult<T> = std::result::Result<T, u32>;

// ── Binding trait ─────────────────────────────────────────────────────────────

/// The Win32 entry points the application consumes, one method each.
///
/// Implementations translate parameters and return codes only; no method
/// applies any application logic.
pub(crate) trait Platform {
    /// `GetModuleHandleW(NULL)`.
    fn module_handle(&self) -> OsResult<Handle>;

    /// `LoadCursorW(NULL, IDC_ARROW)`.
    fn load_arrow_cursor(&self) -> OsResult<Handle>;

    /// `RegisterClassExW`; returns the class atom.
    fn register_class(&self, class: &ClassSpec<'_>) -> OsResult<u16>;

    /// `CreateWindowExW`.
    fn create_window(&self, spec: &WindowSpec<'_>) -> OsResult<Handle>;

    /// `ShowWindow(SW_SHOWNORMAL)`.  `false` when the window was previously
    /// hidden.
    fn show_window(&self, window: Handle) -> bool;

    /// `UpdateWindow`.  `false` on failure.
    fn update_window(&self, window: Handle) -> bool;

    /// `MessageBoxW`; blocks until dismissed.
    fn message_box(&self, owner: Option<Handle>, text: &str, title: &str, kind: DialogKind);

    /// `GetMessageW` for every window of the calling thread, no filter.
    fn get_message(&self, message: &mut Message) -> Retrieval;

    /// `TranslateMessage`.
    fn translate_message(&self, message: &Message) -> bool;

    /// `DispatchMessageW`; synchronously runs the target's window procedure.
    fn dispatch_message(&self, message: &Message) -> isize;

    /// `DefWindowProcW`.
    fn default_procedure(&self, message: &Message) -> isize;

    /// `PostQuitMessage`.
    fn post_quit(&self, exit_code: i32);
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Recover the Win32 error code from an HRESULT.
///
/// `HRESULT_FROM_WIN32` packs a code as `0x8007xxxx`; anything else is
/// returned unchanged.
pub(crate) fn win32_code_from_hresult(hr: u32) -> u32 {
    if hr & 0xFFFF_0000 == 0x8007_0000 {
        hr & 0xFFFF
    } else {
        hr
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
