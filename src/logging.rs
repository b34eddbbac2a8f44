use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "tweet_provider=info,tower_http=info";

pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .init();
}
