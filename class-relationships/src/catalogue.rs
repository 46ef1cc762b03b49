//! Structured snapshots of a library's shelves.

use serde::{Deserialize, Serialize};

use crate::{book::Publication, error::Result, library::Library};

/// One line of a catalogue
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogueEntry {
    /// Title of the book
    pub title: String,
    /// Name of the author
    pub author: String,
    /// File format of electronic editions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_format: Option<String>,
}

impl CatalogueEntry {
    /// Describe any book, printed or electronic
    #[must_use]
    pub fn from_publication(book: &dyn Publication) -> Self {
        Self {
            title: book.title().to_string(),
            author: book.author().name().to_string(),
            file_format: book.file_format().map(str::to_string),
        }
    }
}

/// Everything a library holds, in shelf order
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Catalogue {
    /// Name of the library
    pub library: String,
    /// Entries in insertion order
    pub entries: Vec<CatalogueEntry>,
}

/// Render the catalogue of `library` as pretty-printed JSON
///
/// # Errors
///
/// Returns `LibraryError::Export` if serialization fails.
pub fn to_json(library: &Library) -> Result<String> {
    Ok(serde_json::to_string_pretty(&library.catalogue())?)
}
