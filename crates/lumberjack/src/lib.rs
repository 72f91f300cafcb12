#![deny(missing_docs)]

//! Installs the global `tracing` subscriber for foundry-redirect.

use std::io;

use tracing_subscriber::fmt;

pub use tracing_core::Level;

/// Initializes a global tracing subscriber writing to stderr.
///
/// Nothing is printed unless a level is given. `debug` and `trace` add
/// targets and span context so request logs from the HTTP layer can be told apart.
pub fn init(level: Option<Level>) {
    if let Some(level) = level {
        if level >= Level::DEBUG {
            fmt()
                .with_max_level(level)
                .with_target(true)
                .with_writer(io::stderr)
                .init();
        } else {
            let format = fmt::format().without_time().with_target(false).compact();
            fmt()
                .with_max_level(level)
                .event_format(format)
                .with_writer(io::stderr)
                .init();
        }
    }
}
