use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::book::Publication;

/// A person who reads whatever book they are handed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Reader {
    /// The reader's name
    name: String,
}

impl Reader {
    /// Create a reader
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The reader's name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read `book`, printing its description to `out`
    ///
    /// The reader only depends on the book for the duration of the call.
    ///
    /// # Errors
    ///
    /// Returns the error reported by the sink if a write fails.
    pub fn read_book(&self, book: &dyn Publication, out: &mut dyn Write) -> io::Result<()> {
        debug!(reader = %self.name, title = book.title(), "reading book");
        book.read(out)
    }
}
