use std::env;

use eframe::egui;

/// Environment toggle read by the egui iOS backend to trace IME traffic.
///
/// The value is always the fixed string `"1"`; presence is what the reader
/// checks for.
pub const LOG_IME_ENV: &str = "EGUI_IOS_LOG_IME";

/// Host bootstrap configuration.
///
/// Passed by value into [`launch`](crate::launch); the session reads it
/// through [`native_options`](HostConfig::native_options) and the process
/// environment prepared by [`apply_process_env`](HostConfig::apply_process_env).
#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Window title. Ignored on platforms where the OS owns the frame.
    pub title: String,
    /// Borderless fullscreen viewport.
    pub fullscreen: bool,
    /// Whether the event loop hands control back when the session ends.
    /// `false` on iOS, where the native loop consumes the process.
    pub run_and_return: bool,
    /// Enable IME trace logging in the session backend via [`LOG_IME_ENV`].
    pub log_ime: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            title: "lamassu".to_string(),
            fullscreen: false,
            run_and_return: true,
            log_ime: true,
        }
    }
}

impl HostConfig {
    /// Preset for an iOS process: UIKit owns the frame, so the viewport is
    /// borderless fullscreen and the event loop never returns.
    pub fn ios() -> Self {
        Self {
            fullscreen: true,
            run_and_return: false,
            ..Self::default()
        }
    }

    /// Writes the process-wide IME toggle when `log_ime` is enabled.
    ///
    /// Overwrite-always: any prior value becomes `"1"`. Re-applying has no
    /// additional effect. When `log_ime` is disabled the environment is left
    /// untouched — the toggle is never cleared once set.
    pub fn apply_process_env(&self) {
        if self.log_ime {
            // SAFETY: called from the bootstrap thread before the session
            // spawns anything that could read the environment concurrently.
            unsafe { env::set_var(LOG_IME_ENV, "1") };
        }
    }

    /// Maps the host config onto the session collaborator's window options.
    pub fn native_options(&self) -> eframe::NativeOptions {
        let mut viewport = egui::ViewportBuilder::default();
        if self.fullscreen {
            viewport = viewport.with_fullscreen(true);
        }

        eframe::NativeOptions {
            viewport,
            run_and_return: self.run_and_return,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── presets ───────────────────────────────────────────────────────────

    #[test]
    fn default_enables_ime_toggle() {
        let config = HostConfig::default();
        assert!(config.log_ime);
        assert!(config.run_and_return);
        assert!(!config.fullscreen);
    }

    #[test]
    fn ios_preset_takes_over_the_process() {
        let config = HostConfig::ios();
        assert!(config.fullscreen);
        assert!(!config.run_and_return);
        assert!(config.log_ime);
    }

    // ── native_options ────────────────────────────────────────────────────

    #[test]
    fn native_options_desktop_defaults() {
        let options = HostConfig::default().native_options();
        assert_eq!(options.viewport.fullscreen, None);
        assert!(options.run_and_return);
    }

    #[test]
    fn native_options_ios_fullscreen_non_returning() {
        let options = HostConfig::ios().native_options();
        assert_eq!(options.viewport.fullscreen, Some(true));
        assert!(!options.run_and_return);
    }
}
