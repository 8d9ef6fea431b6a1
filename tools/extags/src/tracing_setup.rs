//! Tracing initialization for the command-line tool.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber.
///
/// The filter comes from `EXTAGS_LOG` when set, otherwise `warn` (or
/// `debug` when `verbose`). Output goes to stderr as an indented tree.
/// Safe to call multiple times; only the first call has an effect.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_env("EXTAGS_LOG")
            .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

        // Another subscriber may already be installed (e.g. by a test harness).
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_tree::HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_indent_lines(true),
            )
            .try_init();
    });
}
