use tracing_subscriber::EnvFilter;

/// Installs the global subscriber: one JSON object per line on stdout
///
/// The filter is read from `RUST_LOG` and falls back to `info`. Calling this
/// more than once is harmless; later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_target(true)
        .with_current_span(true)
        .with_writer(std::io::stdout)
        .try_init();
}
