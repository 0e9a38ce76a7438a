//! Verse Driver
//!
//! Library half of the `verse` binary: reads class skeletons, runs them
//! through `verse_codegen`, and writes the printed methods.
//!
//! The binary is a thin dispatcher over [`commands`]; everything it does is
//! reachable from here so it can be tested without spawning a process.

use std::sync::Once;

pub mod commands;
mod error;
pub mod input;

pub use error::CliError;
pub use input::{parse_classes, ClassDecl, InputError};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber.
///
/// Call this once at startup. Uses `RUST_LOG` env var for filtering.
/// Example: `RUST_LOG=verse_codegen=trace verse gen Foo.txt`
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        }
    });
}
