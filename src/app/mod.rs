// ── Application ───────────────────────────────────────────────────────────────
//
// Platform-independent half of the program: startup wiring, the window
// procedure's logic and the message loop, all written against
// `platform::Platform`.  No `unsafe` here.

pub(crate) mod bootstrap;
pub(crate) mod message_loop;
pub(crate) mod procedure;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use crate::{
    config::{self, Config},
    error::{AppError, Result},
    logging,
    platform::{DialogKind, Platform},
};

/// Caption of every startup error dialog.
const ERROR_TITLE: &str = "Error";

/// Process entry: read `winhello.json` from `dir`, open the log file there,
/// then `run`.
///
/// An unusable config falls back to the defaults with a logged warning.  A
/// log file that cannot be created ends startup before any window call.
pub(crate) fn start<P: Platform>(platform: &P, dir: &Path) {
    let (config, config_error) = match config::load(&dir.join(config::CONFIG_FILE)) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    // The window procedure reads the frozen copy; the first install wins.
    config::install(config.clone());

    if let Err(e) = logging::init(&config, dir) {
        // No log yet: the console and a dialog are the only outputs.
        eprintln!("{e}");
        report(platform, &e);
        return;
    }

    if let Some(e) = config_error {
        log::warn!("Ignoring {}: {e}; using defaults", config::CONFIG_FILE);
    }

    if let Err(e) = run(platform, &config) {
        report(platform, &e);
    }
}

/// Create the window and button, then pump messages until the window is
/// closed.
pub(crate) fn run<P: Platform>(platform: &P, config: &Config) -> Result<()> {
    log::info!("Application starting");

    let windows = bootstrap::bootstrap(platform, config)?;
    log::debug!("Main window {}, button {}", windows.main, windows.button);

    let summary = message_loop::run(platform);
    log::info!(
        "Application exiting: {} messages dispatched, {} retrieval errors, exit code {}",
        summary.dispatched,
        summary.retrieval_errors,
        summary.exit_code
    );

    Ok(())
}

/// Log `error` and show it in a blocking, ownerless error dialog.
///
/// The single reporting path for every startup failure.
pub(crate) fn report<P: Platform>(platform: &P, error: &AppError) {
    log::error!("{error}");
    platform.message_box(None, &error.to_string(), ERROR_TITLE, DialogKind::Error);
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::{
        app::testing::{message, Call, CreatedKind, FakePlatform, Queued},
        platform::codes,
    };

    #[test]
    fn run_creates_one_window_and_one_button_then_exits_on_destroy() {
        let fake = FakePlatform::new().with_queue(&[Queued::Message(message(codes::WM_DESTROY, 0))]);

        run(&fake, &fake.config).expect("run");

        let created: Vec<CreatedKind> = fake
            .calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::CreateWindow { kind, .. } => Some(kind),
                _ => None,
            })
            .collect();
        assert_eq!(
            created,
            vec![
                CreatedKind::TopLevel {
                    class_name: "WinHelloMainWindow".to_owned()
                },
                CreatedKind::PushButton {
                    parent: FakePlatform::MAIN_WINDOW,
                    control_id: 1001
                },
            ]
        );
        assert_eq!(fake.calls().last(), Some(&Call::GetMessage));
    }

    #[test]
    fn failed_bootstrap_never_enters_the_loop() {
        let fake = FakePlatform::new().with_register_result(Err(1410));

        let err = run(&fake, &fake.config).unwrap_err();

        assert!(matches!(err, AppError::ClassRegistration { .. }));
        assert!(!fake.calls().contains(&Call::GetMessage));
    }

    #[test]
    fn unopenable_log_file_stops_startup_with_one_error_dialog() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir(dir.path().join("logs")).expect("mkdir");
        fs::write(dir.path().join(config::CONFIG_FILE), r#"{"log_file":"logs"}"#)
            .expect("write");
        let fake = FakePlatform::new();

        start(&fake, dir.path());

        let calls = fake.calls();
        assert!(matches!(
            calls.as_slice(),
            [Call::MessageBox { owner: None, kind: DialogKind::Error, text, .. }]
                if text.contains("log file")
        ));
        assert!(!calls.contains(&Call::ModuleHandle));
    }

    #[test]
    fn malformed_config_starts_with_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join(config::CONFIG_FILE), "{ not json").expect("write");
        let fake = FakePlatform::new().with_queue(&[Queued::Message(message(codes::WM_DESTROY, 0))]);

        start(&fake, dir.path());

        let calls = fake.calls();
        assert!(calls.contains(&Call::ModuleHandle));
        assert!(calls.iter().any(|c| matches!(
            c,
            Call::RegisterClass { name, .. } if name == "WinHelloMainWindow"
        )));
        assert!(calls.iter().any(|c| matches!(
            c,
            Call::CreateWindow { text, size: (500, 400), .. } if text == "Rust GUI"
        )));
        assert!(!calls.iter().any(|c| matches!(c, Call::MessageBox { .. })));
        assert!(dir.path().join("winhello_debug.log").exists());
    }

    #[test]
    fn invalid_config_starts_with_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join(config::CONFIG_FILE),
            r#"{"button_text":"Hi","button_width":0}"#,
        )
        .expect("write");
        let fake = FakePlatform::new().with_queue(&[Queued::Message(message(codes::WM_DESTROY, 0))]);

        start(&fake, dir.path());

        assert!(fake.calls().iter().any(|c| matches!(
            c,
            Call::CreateWindow { text, size: (100, 30), .. } if text == "Hello World"
        )));
    }

    #[test]
    fn report_shows_one_ownerless_error_dialog() {
        let fake = FakePlatform::new();
        report(&fake, &AppError::WindowCreation { code: 8 });

        assert_eq!(
            fake.calls(),
            vec![Call::MessageBox {
                owner: None,
                text: "CreateWindowExW failed for the main window (error 0x00000008)".to_owned(),
                title: "Error".to_owned(),
                kind: DialogKind::Error,
            }]
        );
    }
}
