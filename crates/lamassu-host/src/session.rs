use anyhow::{Result, anyhow};
use eframe::egui;

use crate::config::HostConfig;

/// Boundary contract between the host and the session that does the real
/// work.
///
/// `run` takes over the calling thread: it starts the platform event loop
/// and does not return until the session ends. On platforms where the native
/// loop consumes the process (iOS with `run_and_return = false`) it never
/// returns at all. The host makes no contract about what the session
/// renders.
pub trait Session {
    fn run(self, config: &HostConfig) -> Result<()>;
}

// ── DemoSession ───────────────────────────────────────────────────────────

/// Hosts the stock `egui_demo_lib` demo windows.
///
/// This is the known-good target for iOS experiments: a session with real
/// widgets, input, and repaint traffic, reachable before any application
/// code exists.
#[derive(Debug, Default)]
pub struct DemoSession;

impl Session for DemoSession {
    fn run(self, config: &HostConfig) -> Result<()> {
        eframe::run_native(
            &config.title,
            config.native_options(),
            Box::new(|cc| Ok(Box::new(DemoApp::new(cc)))),
        )
        .map_err(|err| anyhow!("eframe event loop terminated with error: {err}"))
    }
}

struct DemoApp {
    demos: egui_demo_lib::DemoWindows,
}

impl DemoApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            demos: egui_demo_lib::DemoWindows::default(),
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.demos.ui(ctx);
    }
}

// ── BlankSession ──────────────────────────────────────────────────────────

/// Presents a surface that paints nothing beyond an empty fill.
///
/// The smoke host uses this to validate the bootstrap path — environment,
/// logging, hand-off — without pulling in the demo UI.
#[derive(Debug, Default)]
pub struct BlankSession;

impl Session for BlankSession {
    fn run(self, config: &HostConfig) -> Result<()> {
        eframe::run_native(
            &config.title,
            config.native_options(),
            Box::new(|_cc| Ok(Box::new(BlankApp))),
        )
        .map_err(|err| anyhow!("eframe event loop terminated with error: {err}"))
    }
}

struct BlankApp;

impl eframe::App for BlankApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        blank_frame(ctx);
    }
}

/// One frame of the blank surface: a frameless panel with no content.
fn blank_frame(ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |_ui| {});
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A shape that contributes no pixels: a paint-slot placeholder or a
    /// rect with neither fill nor stroke (what a frameless panel registers
    /// as its background).
    fn is_invisible(shape: &egui::Shape) -> bool {
        match shape {
            egui::Shape::Noop => true,
            egui::Shape::Rect(rect) => {
                rect.fill == egui::Color32::TRANSPARENT && rect.stroke.is_empty()
            }
            egui::Shape::Vec(shapes) => shapes.iter().all(is_invisible),
            _ => false,
        }
    }

    // ── blank surface ─────────────────────────────────────────────────────

    #[test]
    fn blank_frame_emits_no_visible_shapes() {
        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| blank_frame(ctx));

        assert!(
            output
                .shapes
                .iter()
                .all(|clipped| is_invisible(&clipped.shape)),
            "blank surface painted visible shapes: {:?}",
            output.shapes
        );
    }

    #[test]
    fn blank_frame_is_stable_across_frames() {
        let ctx = egui::Context::default();
        for _ in 0..3 {
            let output = ctx.run(egui::RawInput::default(), |ctx| blank_frame(ctx));
            assert!(
                output
                    .shapes
                    .iter()
                    .all(|clipped| is_invisible(&clipped.shape))
            );
        }
    }
}
