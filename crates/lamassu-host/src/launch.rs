use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Result, bail};

use crate::config::HostConfig;
use crate::logging::{self, LoggingConfig};
use crate::session::Session;

/// Latched on the first `launch` for the lifetime of the process.
static LAUNCHED: AtomicBool = AtomicBool::new(false);

/// Boots the process and hands the calling thread to `session`.
///
/// The bootstrap is a single linear path: latch the launch guard, initialize
/// logging, apply the process environment from `config`, then invoke the
/// session. The environment is always applied before the session runs, so
/// the toggle is visible to it at every point of its execution.
///
/// A session can be launched at most once per process; a second call fails
/// without touching the environment. Blocking contract: see [`Session::run`].
pub fn launch<S: Session>(config: HostConfig, session: S) -> Result<()> {
    if LAUNCHED.swap(true, Ordering::SeqCst) {
        bail!("a session was already launched in this process");
    }

    logging::init_logging(LoggingConfig::default());
    config.apply_process_env();
    log::debug!("bootstrap complete; handing off to session");

    session.run(&config)
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::config::LOG_IME_ENV;

    /// Records what the process environment looked like at `run` time.
    struct ProbeSession {
        seen: Arc<Mutex<Option<String>>>,
    }

    impl Session for ProbeSession {
        fn run(self, _config: &HostConfig) -> Result<()> {
            *self.seen.lock().unwrap() = env::var(LOG_IME_ENV).ok();
            Ok(())
        }
    }

    // The launch guard and the toggle are process-wide, so every assertion
    // about them lives in this one test.
    #[test]
    fn launch_prepares_env_once_then_refuses_reentry() {
        // A stale value must be overwritten, not merely left in place.
        unsafe { env::set_var(LOG_IME_ENV, "0") };

        let seen = Arc::new(Mutex::new(None));
        let session = ProbeSession { seen: seen.clone() };

        launch(HostConfig::default(), session).unwrap();

        // Configure-before-invoke: the session observed the applied toggle.
        assert_eq!(seen.lock().unwrap().as_deref(), Some("1"));
        assert_eq!(env::var(LOG_IME_ENV).as_deref(), Ok("1"));

        // Exactly once per process: the second launch is refused and the
        // session is never invoked.
        let second = Arc::new(Mutex::new(None));
        let err = launch(
            HostConfig::default(),
            ProbeSession {
                seen: second.clone(),
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("already launched"));
        assert!(second.lock().unwrap().is_none());
    }
}
