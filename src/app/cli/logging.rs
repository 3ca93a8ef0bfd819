use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "FAWKES_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber. Stdout stays reserved for command output.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    // A second init (e.g. from an embedding binary) keeps the first subscriber.
    let _ = tracing_subscriber::registry().with(env_filter).with(stderr_layer).try_init();
}
