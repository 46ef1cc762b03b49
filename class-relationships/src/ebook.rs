use std::{
    io::{self, Write},
    rc::Rc,
};

use crate::{
    author::Author,
    book::{Book, Publication, SharedBook},
    readable::Readable,
};

/// An electronic edition: a [`Book`] plus the format it is distributed in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EBook {
    /// The underlying book this edition specialises
    book: Book,
    /// Format tag such as "PDF" or "EPUB"
    file_format: String,
}

impl EBook {
    /// Create an electronic edition of `title` by `author`
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: Rc<Author>,
        file_format: impl Into<String>,
    ) -> Self {
        Self { book: Book::new(title, author), file_format: file_format.into() }
    }

    /// View this edition as a plain book
    #[must_use]
    pub fn as_book(&self) -> &Book {
        &self.book
    }

    /// Wrap the edition in a shared book handle
    #[must_use]
    pub fn shared(self) -> SharedBook {
        Rc::new(self)
    }
}

impl Readable for EBook {
    fn read(&self, out: &mut dyn Write) -> io::Result<()> {
        self.book.read(out)?;
        writeln!(out, "File format : {}", self.file_format)
    }
}

impl Publication for EBook {
    fn title(&self) -> &str {
        self.book.title()
    }

    fn author(&self) -> &Author {
        self.book.author()
    }

    fn file_format(&self) -> Option<&str> {
        Some(&self.file_format)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::EBook;
    use crate::{author::Author, book::SharedBook, readable::Readable, test_support::capture};

    /// "Clean Code" in PDF, used throughout these tests
    fn clean_code() -> EBook {
        EBook::new("Clean Code", Rc::new(Author::new("Robert C. Martin")), "PDF")
    }

    #[test]
    fn test_read_appends_format_after_book_line() {
        let ebook = clean_code();

        let output = capture(|out| ebook.read(out));

        assert_eq!(
            output,
            "Book name is Clean Code written by Robert C. Martin\nFile format : PDF\n"
        );
    }

    #[test]
    fn test_plain_book_view_prints_only_book_line() {
        let ebook = clean_code();

        let output = capture(|out| ebook.as_book().read(out));

        assert_eq!(output, "Book name is Clean Code written by Robert C. Martin\n");
    }

    #[test]
    fn test_book_handle_dispatches_to_ebook() {
        let handle: SharedBook = clean_code().shared();

        let output = capture(|out| handle.read(out));

        assert_eq!(output.lines().count(), 2);
        assert_eq!(output.lines().last(), Some("File format : PDF"));
        assert_eq!(handle.title(), "Clean Code");
        assert_eq!(handle.author().name(), "Robert C. Martin");
        assert_eq!(handle.file_format(), Some("PDF"));
    }
}
