//! Process-wide log output.
use tracing_subscriber::EnvFilter;

/// Install the process-wide `tracing` subscriber.
///
/// `env_filter` accepts anything `EnvFilter` does (`info`, `ocg_gen=debug,warn`, ...); an
/// unparseable filter falls back to `info`. Logs go to stderr so that command output on stdout
/// stays clean.
pub fn setup(env_filter: &str) {
    let filter = EnvFilter::try_new(env_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
