use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber, filtering with the configured directive
pub fn init(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("Invalid log level {directive:?} ({e}), using info");
        EnvFilter::new("info")
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
