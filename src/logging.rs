use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "NUMSPLIT_LOG";

/// Initialize structured JSON logging on stderr.
///
/// Defaults to `default_level` unless overridden by `NUMSPLIT_LOG`. Safe to call more than once;
/// only the first call installs a subscriber.
pub fn init(default_level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_env_var(LOG_ENV_VAR)
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(true)
                .with_span_list(true),
        )
        .try_init();
}
