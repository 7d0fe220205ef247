// ── Win32 bindings ────────────────────────────────────────────────────────────
//
// `Win32` implements `Platform` by calling straight into user32/kernel32.
// The entry points are resolved at link time by the `windows` crate, so the
// zero-sized `Win32` value is the whole registry: nothing to look up, nothing
// to mutate.

#![allow(unsafe_code)]

use std::ffi::c_void;

use windows::{
    core::PCWSTR,
    Win32::{
        Foundation::{HINSTANCE, LPARAM, WPARAM},
        Graphics::Gdi::{UpdateWindow, COLOR_WINDOW, HBRUSH},
        System::LibraryLoader::GetModuleHandleW,
        UI::WindowsAndMessaging::{
            CreateWindowExW, DefWindowProcW, DispatchMessageW, GetMessageW, LoadCursorW,
            MessageBoxW, PostQuitMessage, RegisterClassExW, ShowWindow, TranslateMessage,
            BS_PUSHBUTTON, CS_HREDRAW, CS_VREDRAW, CW_USEDEFAULT, HCURSOR, HMENU, IDC_ARROW,
            MB_ICONERROR, MB_OK, MSG, SW_SHOWNORMAL, WINDOW_EX_STYLE, WINDOW_STYLE,
            WNDCLASSEXW, WNDCLASS_STYLES, WS_CHILD, WS_OVERLAPPEDWINDOW, WS_VISIBLE,
        },
    },
};

use super::window::{code_of, handle_of, hwnd_of, last_error, message_of, raw_message, wide, wnd_proc};
use crate::platform::{
    ClassSpec, DialogKind, Handle, Message, OsResult, Platform, Retrieval, WindowKind, WindowSpec,
};

/// The real OS.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Win32;

fn instance_of(handle: Handle) -> HINSTANCE {
    HINSTANCE(handle.0 as *mut c_void)
}

impl Platform for Win32 {
    fn module_handle(&self) -> OsResult<Handle> {
        // SAFETY: GetModuleHandleW(None) returns the .exe's own HMODULE and
        // does not increment its reference count; nothing to release.
        unsafe { GetModuleHandleW(None) }
            .map(|m| Handle(m.0 as isize))
            .map_err(|e| code_of(&e))
    }

    fn load_arrow_cursor(&self) -> OsResult<Handle> {
        // SAFETY: None for hInstance selects the system cursor set; IDC_ARROW
        // is a built-in resource present on every Windows version.
        unsafe { LoadCursorW(None, IDC_ARROW) }
            .map(|c| Handle(c.0 as isize))
            .map_err(|e| code_of(&e))
    }

    fn register_class(&self, class: &ClassSpec<'_>) -> OsResult<u16> {
        let class_name = wide(class.name);
        let style = if class.redraw_on_resize {
            CS_HREDRAW | CS_VREDRAW
        } else {
            WNDCLASS_STYLES(0)
        };

        let wndclass = WNDCLASSEXW {
            // WNDCLASSEXW is ~80 bytes; the cast to u32 is always lossless.
            cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
            style,
            lpfnWndProc: Some(wnd_proc),
            cbClsExtra: 0,
            cbWndExtra: 0,
            hInstance: instance_of(class.instance),
            hCursor: HCURSOR(class.cursor.0 as *mut c_void),
            // System colour brushes are addressed as COLOR_* + 1.
            hbrBackground: HBRUSH((COLOR_WINDOW.0 + 1) as isize as *mut c_void),
            lpszMenuName: PCWSTR::null(),
            lpszClassName: PCWSTR(class_name.as_ptr()),
            ..Default::default()
        };

        // SAFETY: wndclass is fully initialised; class_name is a valid
        // null-terminated UTF-16 string that outlives the call (the system
        // copies it during registration).
        let atom = unsafe { RegisterClassExW(&wndclass) };
        if atom == 0 {
            return Err(last_error());
        }
        Ok(atom)
    }

    fn create_window(&self, spec: &WindowSpec<'_>) -> OsResult<Handle> {
        let text = wide(spec.text);
        let (x, y) = spec.position.unwrap_or((CW_USEDEFAULT, CW_USEDEFAULT));
        let (width, height) = spec.size;

        let (class_name, style, parent, menu) = match spec.kind {
            WindowKind::TopLevel { class_name } => {
                (wide(class_name), WS_OVERLAPPEDWINDOW | WS_VISIBLE, None, None)
            }
            WindowKind::PushButton { parent, control_id } => (
                wide("BUTTON"),
                WS_CHILD | WS_VISIBLE | WINDOW_STYLE(BS_PUSHBUTTON as u32),
                Some(hwnd_of(parent)),
                // For child windows the menu slot carries the control id.
                Some(HMENU(usize::from(control_id) as *mut c_void)),
            ),
        };

        // SAFETY: class_name and text are valid null-terminated UTF-16 strings
        // that outlive the call.  The class is either registered by us or the
        // system "BUTTON" class.  parent, when present, is a live window owned
        // by this thread.  No creation data is passed.
        unsafe {
            CreateWindowExW(
                WINDOW_EX_STYLE::default(),
                PCWSTR(class_name.as_ptr()),
                PCWSTR(text.as_ptr()),
                style,
                x,
                y,
                width,
                height,
                parent,
                menu,
                Some(instance_of(spec.instance)),
                None,
            )
        }
        .map(handle_of)
        .map_err(|e| code_of(&e))
    }

    fn show_window(&self, window: Handle) -> bool {
        // SAFETY: window was returned by CreateWindowExW and not destroyed.
        unsafe { ShowWindow(hwnd_of(window), SW_SHOWNORMAL) }.as_bool()
    }

    fn update_window(&self, window: Handle) -> bool {
        // SAFETY: window was returned by CreateWindowExW and not destroyed.
        unsafe { UpdateWindow(hwnd_of(window)) }.as_bool()
    }

    fn message_box(&self, owner: Option<Handle>, text: &str, title: &str, kind: DialogKind) {
        let text = wide(text);
        let title = wide(title);
        let style = match kind {
            DialogKind::Plain => MB_OK,
            DialogKind::Error => MB_OK | MB_ICONERROR,
        };

        // SAFETY: text and title are valid null-terminated UTF-16 strings
        // that remain allocated for the duration of the MessageBoxW call.
        // A None owner makes the dialog top-level.
        // Return value (button pressed) is intentionally unused: MB_OK only.
        unsafe {
            let _ = MessageBoxW(
                owner.map(hwnd_of),
                PCWSTR(text.as_ptr()),
                PCWSTR(title.as_ptr()),
                style,
            );
        }
    }

    fn get_message(&self, message: &mut Message) -> Retrieval {
        let mut raw = MSG::default();

        // SAFETY: &mut raw is a valid MSG pointer; None retrieves messages
        // for all windows on this thread; 0,0 filter accepts all.
        let ret = unsafe { GetMessageW(&mut raw, None, 0, 0) };

        match ret.0 {
            // GetMessageW returns -1 on error.
            -1 => Retrieval::Error(last_error()),
            // Returns 0 when WM_QUIT is retrieved.
            0 => {
                *message = message_of(&raw);
                Retrieval::Quit
            }
            _ => {
                *message = message_of(&raw);
                Retrieval::Message
            }
        }
    }

    fn translate_message(&self, message: &Message) -> bool {
        let raw = raw_message(message);
        // SAFETY: raw is a fully initialised MSG built from a retrieved message.
        unsafe { TranslateMessage(&raw) }.as_bool()
    }

    fn dispatch_message(&self, message: &Message) -> isize {
        let raw = raw_message(message);
        // SAFETY: raw is a fully initialised MSG built from a retrieved message;
        // DispatchMessageW runs the target window's procedure on this thread.
        unsafe { DispatchMessageW(&raw) }.0
    }

    fn default_procedure(&self, message: &Message) -> isize {
        // SAFETY: the parameters were handed to our WndProc by Windows for
        // this window and are forwarded unchanged within the same call.
        unsafe {
            DefWindowProcW(
                hwnd_of(message.window),
                message.code,
                WPARAM(message.wparam),
                LPARAM(message.lparam),
            )
        }
        .0
    }

    fn post_quit(&self, exit_code: i32) {
        // SAFETY: PostQuitMessage has no preconditions; it posts WM_QUIT to
        // the calling thread's queue.
        unsafe { PostQuitMessage(exit_code) }
    }
}
