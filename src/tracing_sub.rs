use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber writing to stderr. Safe to call
/// multiple times; subsequent calls are no-ops for the global subscriber.
///
/// Filter resolution: explicit override, then `RUST_LOG`, then a default
/// that keeps this crate at info.
pub fn init_default(filter_override: Option<&str>) {
    let filter = match filter_override {
        Some(spec) => EnvFilter::new(spec),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("term_host=info")),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_names(false)
        .try_init();
}
