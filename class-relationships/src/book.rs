use std::{
    fmt,
    io::{self, Write},
    rc::Rc,
};

use crate::{author::Author, readable::Readable};

/// Common view over every kind of book held by a library or handed to a reader
///
/// A `dyn Publication` is the book-typed handle: whatever concrete type sits
/// behind it, [`Readable::read`] dispatches to that type's implementation.
pub trait Publication: Readable + fmt::Debug {
    /// Title of the book
    fn title(&self) -> &str;

    /// The author the book is attributed to
    fn author(&self) -> &Author;

    /// File format tag, present only for electronic editions
    fn file_format(&self) -> Option<&str> {
        None
    }
}

/// Shared handle to a book; libraries and readers never own the book itself
pub type SharedBook = Rc<dyn Publication>;

/// A printed book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Title as printed on the cover
    title: String,
    /// Author, shared with every other book they wrote
    author: Rc<Author>,
}

impl Book {
    /// Bind a title to an author
    #[must_use]
    pub fn new(title: impl Into<String>, author: Rc<Author>) -> Self {
        Self { title: title.into(), author }
    }

    /// Wrap the book in a shared handle
    #[must_use]
    pub fn shared(self) -> SharedBook {
        Rc::new(self)
    }
}

impl Readable for Book {
    fn read(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Book name is {} written by {}", self.title, self.author.name())
    }
}

impl Publication for Book {
    fn title(&self) -> &str {
        &self.title
    }

    fn author(&self) -> &Author {
        &self.author
    }
}
