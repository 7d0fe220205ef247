// ── Window procedure logic ────────────────────────────────────────────────────
//
// Pure dispatch on the message code.  No state survives a call: everything
// comes in through the parameters.  The `extern "system"` shim that Windows
// actually calls lives in `platform::win32`.

use crate::{
    config::Config,
    platform::{codes, DialogKind, Message, Platform},
};

/// The messages this window reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Event {
    Create,
    /// A control notification: identifier in the low word of wparam,
    /// notification code in the high word.
    Command { control_id: u16, notification: u16 },
    Destroy,
    /// Everything else goes to the default procedure.
    Other,
}

impl Event {
    pub(crate) fn decode(code: u32, wparam: usize) -> Self {
        match code {
            codes::WM_CREATE => Self::Create,
            codes::WM_COMMAND => Self::Command {
                control_id: (wparam & 0xFFFF) as u16,
                notification: ((wparam >> 16) & 0xFFFF) as u16,
            },
            codes::WM_DESTROY => Self::Destroy,
            _ => Self::Other,
        }
    }
}

/// Handle one message for the main window and return its `LRESULT`.
pub(crate) fn handle<P: Platform>(platform: &P, config: &Config, message: &Message) -> isize {
    log::trace!(
        "WndProc: hwnd={}, msg={:#06x}, wparam={:#010x}, lparam={:#010x}",
        message.window,
        message.code,
        message.wparam,
        message.lparam
    );

    match Event::decode(message.code, message.wparam) {
        Event::Create => {
            log::debug!("WM_CREATE: window {} created", message.window);
            0
        }

        Event::Command {
            control_id,
            notification,
        } => {
            log::debug!("WM_COMMAND: control_id={control_id}, notification={notification}");
            if control_id == config.button_id && notification == codes::BN_CLICKED {
                log::info!("Button clicked, showing message box");
                platform.message_box(
                    Some(message.window),
                    &config.message_text,
                    &config.message_title,
                    DialogKind::Plain,
                );
            }
            0
        }

        Event::Destroy => {
            log::info!("WM_DESTROY received, posting quit");
            platform.post_quit(0);
            0
        }

        Event::Other => platform.default_procedure(message),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
