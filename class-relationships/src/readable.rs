use std::io::{self, Write};

/// Anything that can describe itself to a reader
pub trait Readable {
    /// Write a human-readable description of `self` to `out`
    ///
    /// # Errors
    ///
    /// Returns the error reported by the sink if a write fails.
    fn read(&self, out: &mut dyn Write) -> io::Result<()>;
}
