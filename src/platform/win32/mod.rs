// ── Win32 platform implementation ─────────────────────────────────────────────
//
// This is the only module in the codebase where `unsafe` code is permitted.
// Every `unsafe` block MUST carry a `// SAFETY:` comment that states:
//   • which invariant makes the operation sound, and
//   • what the caller is responsible for maintaining.
//
// Nothing in this module is `pub` beyond what callers genuinely need; keep the
// unsafe surface as small as possible.

#![allow(unsafe_code)]

// ── Sub-modules ───────────────────────────────────────────────────────────────

mod bindings; // `Platform` for the real OS
mod window; // WndProc, handle and message conversions

pub(crate) use bindings::Win32;
