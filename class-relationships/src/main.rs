//! Prints the library catalogue and the reading club roster.
//!
//! Command-line arguments are ignored. Diagnostics go to stderr and are
//! controlled with `RUST_LOG` (default `warn`).

use std::io::{self, Write};

use class_relationships::{LibraryError, demo};
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber and run the demonstration on stdout
fn main() -> Result<(), LibraryError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    demo::run(&mut out)?;
    out.flush()?;
    Ok(())
}
