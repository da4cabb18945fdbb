use tracing_subscriber::{fmt, EnvFilter};

/// Filter applied when the environment does not set one.
fn default_filter() -> String {
    "toaster=info".to_string()
}

/// Install the global subscriber. Verbosity is environment-driven
/// (`RUST_LOG`); the CLI surface stays fixed.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter()));

    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .without_time()
        .compact()
        .init();
}
