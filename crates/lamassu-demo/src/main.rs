use anyhow::Result;

use lamassu_host::logging::{LoggingConfig, init_logging};
use lamassu_host::{DemoSession, HostConfig, launch};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  lamassu demo host");
    println!("  eframe session  ·  egui_demo_lib windows");
    println!();

    launch(host_config(), DemoSession)
}

#[cfg(target_os = "ios")]
fn host_config() -> HostConfig {
    HostConfig::ios()
}

#[cfg(not(target_os = "ios"))]
fn host_config() -> HostConfig {
    HostConfig {
        title: "lamassu demo".to_string(),
        ..HostConfig::default()
    }
}
