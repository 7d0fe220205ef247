/// winhello build script.
///
/// The window itself only exists on Windows. Other targets still build the
/// portable core (config, logging, bootstrap, window procedure, message loop)
/// so its tests run anywhere; warn so nobody mistakes that binary for the app.
fn main() {
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if target_os != "windows" {
        println!(
            "cargo:warning=winhello only opens a window on Windows \
             (CARGO_CFG_TARGET_OS = {target_os:?}); building the portable core"
        );
    }

    println!("cargo:rerun-if-changed=build.rs");
}
