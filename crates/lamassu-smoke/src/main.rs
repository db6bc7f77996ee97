//! Smoke host: the minimal bootstrap.
//!
//! Configures the process, hands off to a session exactly once, and shows a
//! window whose surface stays an empty fill for the whole session. Useful
//! for validating the host layer on a new target before the demo UI builds.

use anyhow::Result;

use lamassu_host::logging::{LoggingConfig, init_logging};
use lamassu_host::{BlankSession, HostConfig, launch};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = HostConfig {
        title: "lamassu smoke".to_string(),
        ..HostConfig::default()
    };

    launch(config, BlankSession)
}
