//! Tracing setup for binaries and tools embedding the form controller

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "charsheet_player=debug,charsheet_domain=info";

/// Install the global tracing subscriber.
///
/// Reads `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`]. Returns `false`
/// if a subscriber was already installed.
pub fn init_tracing() -> bool {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_harmless() {
        init_tracing();
        assert!(!init_tracing());
    }
}
