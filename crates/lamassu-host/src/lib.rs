//! Host layer for embedded egui demo sessions.
//!
//! This crate owns process bootstrap — logging, environment preparation,
//! typed configuration — and the hand-off to a [`Session`] that takes over
//! the main thread. Everything behind the session boundary (event loop,
//! rendering, input) belongs to `eframe` and is opaque to this layer.

pub mod config;
pub mod ffi;
pub mod logging;

mod launch;
mod session;

pub use config::{HostConfig, LOG_IME_ENV};
pub use launch::launch;
pub use session::{BlankSession, DemoSession, Session};
