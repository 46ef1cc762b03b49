use tracing::debug;

use crate::{
    book::SharedBook,
    catalogue::{Catalogue, CatalogueEntry},
};

/// A named collection of books
///
/// The library aggregates books: it holds shared handles, so the same book
/// may sit on the shelves of several libraries and outlives any of them.
#[derive(Debug, Clone)]
pub struct Library {
    /// Name of the library, e.g. "City Library"
    name: String,
    /// Books in the order they were added, duplicates included
    books: Vec<SharedBook>,
}

impl Library {
    /// Create an empty library
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), books: Vec::new() }
    }

    /// Name of the library
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Books in insertion order
    #[must_use]
    pub fn books(&self) -> &[SharedBook] {
        &self.books
    }

    /// Append a book to the end of the collection
    ///
    /// Adding a book that is already present is allowed; it simply appears
    /// twice.
    pub fn add_book(&mut self, book: SharedBook) {
        debug!(library = %self.name, title = book.title(), "book added");
        self.books.push(book);
    }

    /// Structured snapshot of the collection
    #[must_use]
    pub fn catalogue(&self) -> Catalogue {
        Catalogue {
            library: self.name.clone(),
            entries: self
                .books
                .iter()
                .map(|book| CatalogueEntry::from_publication(&**book))
                .collect(),
        }
    }
}
