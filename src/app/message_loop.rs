// ── Message loop ──────────────────────────────────────────────────────────────

use crate::platform::{Message, Platform, Retrieval};

/// What happened while the loop ran.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct LoopSummary {
    pub(crate) dispatched: usize,
    pub(crate) retrieval_errors: usize,
    /// The wparam of `WM_QUIT`, as passed to `PostQuitMessage`.
    pub(crate) exit_code: i32,
}

/// Retrieve, translate and dispatch messages for every window of this thread
/// until `WM_QUIT`.
///
/// A failed retrieval is logged and retried rather than ending the loop.
pub(crate) fn run<P: Platform>(platform: &P) -> LoopSummary {
    log::info!("Entering message loop");

    let mut summary = LoopSummary::default();
    let mut message = Message::default();

    loop {
        match platform.get_message(&mut message) {
            Retrieval::Quit => {
                summary.exit_code = message.wparam as i32;
                log::info!("WM_QUIT received (exit code {}), leaving message loop", summary.exit_code);
                break;
            }
            Retrieval::Error(code) => {
                summary.retrieval_errors += 1;
                log::error!("GetMessageW failed (error {code:#010x}), continuing");
            }
            Retrieval::Message => {
                let _ = platform.translate_message(&message);
                let _ = platform.dispatch_message(&message);
                summary.dispatched += 1;
            }
        }
    }

    summary
}

// ── Tests ─────────────────────────────────────────────────────────────────────
