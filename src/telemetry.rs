// Console logging setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize human-readable console logging with environment filter
///
/// `RUST_LOG` overrides the default filter.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "onyxs_backend=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
