//! Tracing subscriber setup for the `plis` binary.
//!
//! Off unless `PLIS_LOG` or `RUST_LOG` is set. Both take `EnvFilter`
//! directives, e.g. `PLIS_LOG=plis_eval=trace`. Output goes to stderr as an
//! indented span tree.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Environment variable checked before `RUST_LOG`.
pub const LOG_ENV: &str = "PLIS_LOG";

/// Install the global subscriber. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let filter = if let Ok(directives) = std::env::var(LOG_ENV) {
            EnvFilter::new(directives)
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        tracing_subscriber::registry()
            .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
            .with(filter)
            .init();
    });
}
