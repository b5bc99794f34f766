use tracing::metadata::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Level filters come from `RUST_LOG`,
/// defaulting to `info`.
pub fn setup_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
