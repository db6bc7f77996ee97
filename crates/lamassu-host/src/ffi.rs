//! C-ABI entry points for Swift / Objective-C hosts.
//!
//! The surface is intentionally a single zero-argument call: once the crate
//! is built into a static library or `.xcframework`, an iOS application
//! invokes the demo with one line from its `App` initializer and never hears
//! back — the session owns the process from that point on.

/// Run the bundled egui demo session inside an iOS process.
///
/// Blocking: on iOS this does not return. Errors are logged rather than
/// unwound, since panicking across the C boundary is undefined behavior.
#[unsafe(no_mangle)]
pub extern "C" fn lamassu_run_demo() {
    #[cfg(target_os = "ios")]
    run_demo_session();

    #[cfg(not(target_os = "ios"))]
    log::warn!("lamassu_run_demo() called on non-iOS target; ignoring");
}

#[cfg(target_os = "ios")]
fn run_demo_session() {
    use crate::{DemoSession, HostConfig, launch};

    if let Err(err) = launch(HostConfig::ios(), DemoSession) {
        log::error!("lamassu_run_demo failed: {err:#}");
    }
}
