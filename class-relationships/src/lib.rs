//! A miniature library domain that exercises the four basic class
//! relationships.
//!
//! - association: a [`Book`] refers to its [`Author`]
//! - aggregation: a [`Library`] collects shared books, a [`ReadingClub`]
//!   collects shared readers
//! - specialisation: an [`EBook`] is a [`Book`] with a file format
//! - realization: books implement [`Readable`]
//!
//! Every operation with an observable effect writes to a caller supplied
//! [`std::io::Write`] sink so the output can be captured.

pub mod author;
pub mod book;
pub mod catalogue;
pub mod demo;
pub mod ebook;
pub mod error;
pub mod library;
pub mod readable;
pub mod reader;
pub mod reading_club;

#[cfg(test)]
mod test_support;

pub use author::Author;
pub use book::{Book, Publication, SharedBook};
pub use catalogue::{Catalogue, CatalogueEntry};
pub use ebook::EBook;
pub use error::{LibraryError, Result};
pub use library::Library;
pub use readable::Readable;
pub use reader::Reader;
pub use reading_club::ReadingClub;
