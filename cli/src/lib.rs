use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. `RUST_LOG` wins when set; otherwise only warnings show.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
