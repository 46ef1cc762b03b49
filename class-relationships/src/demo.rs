//! The demonstration driver: builds a small fixture and prints the
//! library catalogue and the reading club roster.

use std::{
    io::{self, Write},
    rc::Rc,
};

use tracing::{Level, debug, info};

use crate::{
    author::Author,
    book::{Book, SharedBook},
    catalogue,
    ebook::EBook,
    error::Result,
    library::Library,
    reader::Reader,
    reading_club::ReadingClub,
};

/// The objects the demonstration works with
#[derive(Debug)]
pub struct Fixture {
    /// "City Library" holding both books
    pub library: Library,
    /// "Evening Readers" with both readers
    pub club: ReadingClub,
    /// "1984" by George Orwell
    pub nineteen_eighty_four: SharedBook,
    /// "Clean Code" by Robert C. Martin, as a PDF
    pub clean_code: SharedBook,
    /// Reads the printed book
    pub ayush: Rc<Reader>,
    /// Reads the electronic book
    pub john: Rc<Reader>,
}

impl Fixture {
    /// Build the fixture without producing any output
    #[must_use]
    pub fn build() -> Self {
        let orwell = Rc::new(Author::new("George Orwell"));
        let uncle_bob = Rc::new(Author::new("Robert C. Martin"));

        let nineteen_eighty_four = Book::new("1984", orwell).shared();
        // An EBook stored behind the same handle type as a plain book
        let clean_code = EBook::new("Clean Code", uncle_bob, "PDF").shared();

        let mut library = Library::new("City Library");
        library.add_book(Rc::clone(&nineteen_eighty_four));
        library.add_book(Rc::clone(&clean_code));

        let ayush = Rc::new(Reader::new("Ayush"));
        let john = Rc::new(Reader::new("John"));

        let mut club = ReadingClub::new("Evening Readers");
        club.add_member(Rc::clone(&ayush));
        club.add_member(Rc::clone(&john));

        Self { library, club, nineteen_eighty_four, clean_code, ayush, john }
    }
}

/// Print the catalogue header followed by every book's description
///
/// # Errors
///
/// Returns the error reported by the sink if a write fails.
pub fn print_catalogue(library: &Library, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Library Catalogue ---")?;
    for book in library.books() {
        book.read(out)?;
    }
    Ok(())
}

/// Print the roster header followed by one member name per line
///
/// # Errors
///
/// Returns the error reported by the sink if a write fails.
pub fn print_roster(club: &ReadingClub, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Reading Club Members ---")?;
    for reader in club.members() {
        writeln!(out, "{}", reader.name())?;
    }
    Ok(())
}

/// Ayush reads the printed book, John the electronic one
///
/// # Errors
///
/// Returns the error reported by the sink if a write fails.
pub fn run_reader_scenario(fixture: &Fixture, out: &mut dyn Write) -> io::Result<()> {
    fixture.ayush.read_book(&*fixture.nineteen_eighty_four, out)?;
    fixture.john.read_book(&*fixture.clean_code, out)
}

/// Build the fixture and print the catalogue and the club roster
///
/// # Errors
///
/// Returns `LibraryError::Output` if the sink fails and
/// `LibraryError::Export` if the debug catalogue cannot be rendered.
pub fn run(out: &mut dyn Write) -> Result<()> {
    let fixture = Fixture::build();
    info!(library = fixture.library.name(), club = fixture.club.name(), "fixture built");

    if tracing::enabled!(Level::DEBUG) {
        let json = catalogue::to_json(&fixture.library)?;
        debug!(catalogue = %json, "library contents");
    }

    print_catalogue(&fixture.library, out)?;
    print_roster(&fixture.club, out)?;
    Ok(())
}
