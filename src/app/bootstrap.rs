// ── Startup wiring ────────────────────────────────────────────────────────────
//
// Module handle → class registration → main window → button.  Each resource
// step is gated on the previous one and fails with its own `AppError` variant;
// show/update failures are only logged.

use super::ERROR_TITLE;
use crate::{
    config::Config,
    error::{AppError, Result},
    platform::{ClassSpec, DialogKind, Handle, Platform, WindowKind, WindowSpec},
};

/// Handles produced by a successful bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AppWindows {
    pub(crate) main: Handle,
    pub(crate) button: Handle,
}

/// Create the main window and its button, visible and painted.
pub(crate) fn bootstrap<P: Platform>(platform: &P, config: &Config) -> Result<AppWindows> {
    let instance = resolve_module(platform, config)?;
    log::info!("Got module handle: {instance}");

    register_class(platform, config, instance)?;

    let main = create_main_window(platform, config, instance)?;
    log::info!("Window created: {main}");
    show_and_update(platform, main, "main window");

    let button = create_button(platform, config, main, instance)?;
    log::info!("Button created: {button}");
    show_and_update(platform, button, "button");

    Ok(AppWindows { main, button })
}

// ── Module handle ─────────────────────────────────────────────────────────────

/// `GetModuleHandleW(NULL)`, retried once.
fn resolve_module<P: Platform>(platform: &P, config: &Config) -> Result<Handle> {
    let code = match platform.module_handle() {
        Ok(h) if !h.is_null() => return Ok(h),
        Ok(_) => 0,
        Err(code) => code,
    };
    log::warn!("First attempt to get module handle failed (error {code:#010x}), retrying");

    let code = match platform.module_handle() {
        Ok(h) if !h.is_null() => return Ok(h),
        Ok(_) => 0,
        Err(code) => code,
    };

    if config.placeholder_module_fallback {
        let text = format!(
            "Could not get module handle (error {code:#010x}); \
             continuing with placeholder {} as configured",
            Handle::PLACEHOLDER
        );
        log::warn!("{text}");
        platform.message_box(None, &text, ERROR_TITLE, DialogKind::Error);
        return Ok(Handle::PLACEHOLDER);
    }

    Err(AppError::ModuleHandle { code })
}

// ── Window class registration ─────────────────────────────────────────────────

fn register_class<P: Platform>(platform: &P, config: &Config, instance: Handle) -> Result<u16> {
    // The class still works without a cursor; Windows then keeps whatever
    // cursor was last set while the pointer is over the client area.
    let cursor = platform.load_arrow_cursor().unwrap_or_else(|code| {
        log::warn!("LoadCursorW(IDC_ARROW) failed (error {code:#010x})");
        Handle::NULL
    });

    let class = ClassSpec {
        name: &config.class_name,
        instance,
        cursor,
        redraw_on_resize: true,
    };

    let atom = platform
        .register_class(&class)
        .map_err(|code| AppError::ClassRegistration { code })?;
    if atom == 0 {
        return Err(AppError::ClassRegistration { code: 0 });
    }

    log::info!("Registered window class {:?}, atom: {atom}", config.class_name);
    Ok(atom)
}

// ── Window creation ───────────────────────────────────────────────────────────

fn create_main_window<P: Platform>(platform: &P, config: &Config, instance: Handle) -> Result<Handle> {
    let spec = WindowSpec {
        kind: WindowKind::TopLevel {
            class_name: &config.class_name,
        },
        text: &config.window_title,
        position: None,
        size: (config.window_width, config.window_height),
        instance,
    };

    match platform.create_window(&spec) {
        Ok(h) if !h.is_null() => Ok(h),
        Ok(_) => Err(AppError::WindowCreation { code: 0 }),
        Err(code) => Err(AppError::WindowCreation { code }),
    }
}

fn create_button<P: Platform>(
    platform: &P,
    config: &Config,
    parent: Handle,
    instance: Handle,
) -> Result<Handle> {
    let spec = WindowSpec {
        kind: WindowKind::PushButton {
            parent,
            control_id: config.button_id,
        },
        text: &config.button_text,
        position: Some((config.button_x, config.button_y)),
        size: (config.button_width, config.button_height),
        instance,
    };

    match platform.create_window(&spec) {
        Ok(h) if !h.is_null() => Ok(h),
        Ok(_) => Err(AppError::ControlCreation { code: 0 }),
        Err(code) => Err(AppError::ControlCreation { code }),
    }
}

fn show_and_update<P: Platform>(platform: &P, window: Handle, what: &str) {
    if platform.show_window(window) {
        log::debug!("ShowWindow succeeded for {what}");
    } else {
        log::warn!("ShowWindow failed for {what}");
    }

    if platform.update_window(window) {
        log::debug!("UpdateWindow succeeded for {what}");
    } else {
        log::warn!("UpdateWindow failed for {what}");
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
