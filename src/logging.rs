//! Tracing subscriber setup shared by the binaries.

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber. `RUST_LOG` wins; otherwise `default_directives` applies.
pub fn init_tracing(default_directives: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));
    // A subscriber may already be installed (tests, embedding); keep the first one.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
