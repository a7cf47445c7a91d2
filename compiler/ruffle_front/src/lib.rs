//! Ruffle front end.
//!
//! Wires the phases together for one translation unit ([`check_unit`]) and
//! for a batch of units ([`check_units`]):
//!
//! ```text
//! source ─► lex ─► skim ─► declare pass ─► freeze ─► normalize ─► UnitReport
//! ```
//!
//! Lexing and skimming run in parallel per unit. The declare pass is the one
//! sequential step: it visits units in order so that "first declared" is
//! deterministic. Normalization then runs in parallel against the frozen
//! symbol table, each unit with its own diagnostic queue.

mod config;
mod error;
mod pipeline;
mod source;

pub use config::FrontEndConfig;
pub use error::FrontEndError;
pub use pipeline::{check_unit, check_units, LoweredAnnotation, UnitReport};
pub use source::SourceUnit;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debugging.
///
/// Set `RUST_LOG=ruffle_parse=debug` (or similar) to enable logging.
/// Safe to call more than once; only the first call has an effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A host application may already have installed a subscriber.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .try_init();
        }
    });
}
