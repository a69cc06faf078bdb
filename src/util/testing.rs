//! Shared tracing setup for unit and integration tests.

use std::sync::Once;

use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TEST_SETUP: Once = Once::new();

/// Install a test subscriber once per process.
///
/// Honors `RUST_LOG`; defaults to `eqparse=debug`.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("eqparse=debug"));

        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_test_writer()
                .with_target(true)
                .with_thread_names(false)
                .with_filter(env_filter),
        );

        if tracing::dispatcher::has_been_set() {
            debug!("Tracing subscriber already set");
        } else if let Err(e) = subscriber.try_init() {
            eprintln!("Error: Failed to set up logging: {}", e);
        }
    });
}
