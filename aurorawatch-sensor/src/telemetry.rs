use tracing_subscriber::EnvFilter;

/// Installs the tracing subscriber. Diagnostics go to stderr so that stdout
/// stays reserved for the sensor payload line.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
