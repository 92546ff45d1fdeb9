//! Monkey driver.
//!
//! Ties the pipeline together: lex, parse, define macros, expand macros,
//! evaluate. [`Session`] keeps the runtime and macro environments alive
//! between runs so the REPL can build on earlier lines.

pub mod commands;
mod diagnostics;
pub mod repl;
mod session;

use std::sync::Once;

pub use diagnostics::render_parse_errors;
pub use session::{Session, SessionError};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=monkey_eval=debug` or `RUST_LOG=monkey_parse=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
