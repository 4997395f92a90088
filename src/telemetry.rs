//! Logging setup and span constructors.

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `info`, or `debug`
/// when `debug` is true.
pub fn init(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_target(true)
        .init();
}

/// Standardized span constructors for warden observability.
pub mod spans {
    use tracing::{Span, info_span};

    /// Create a span for the server connection.
    pub fn connection(address: &str, nick: &str) -> Span {
        info_span!("connection", address = %address, nick = %nick)
    }

    /// Create a span for routing one event.
    pub fn event(kind: &str, source: Option<&str>) -> Span {
        if let Some(source) = source {
            info_span!("event", kind = %kind, source = %source)
        } else {
            info_span!("event", kind = %kind)
        }
    }
}
