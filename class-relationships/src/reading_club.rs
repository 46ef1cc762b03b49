use std::rc::Rc;

use tracing::debug;

use crate::reader::Reader;

/// A named group of readers
///
/// Members are shared: a reader may belong to several clubs at once.
#[derive(Debug, Clone)]
pub struct ReadingClub {
    /// Name of the club
    club_name: String,
    /// Members in the order they joined, duplicates included
    readers: Vec<Rc<Reader>>,
}

impl ReadingClub {
    /// Create a club with no members
    #[must_use]
    pub fn new(club_name: impl Into<String>) -> Self {
        Self { club_name: club_name.into(), readers: Vec::new() }
    }

    /// Name of the club
    #[must_use]
    pub fn name(&self) -> &str {
        &self.club_name
    }

    /// Members in insertion order
    #[must_use]
    pub fn members(&self) -> &[Rc<Reader>] {
        &self.readers
    }

    /// Append a member
    pub fn add_member(&mut self, reader: Rc<Reader>) {
        debug!(club = %self.club_name, reader = reader.name(), "member added");
        self.readers.push(reader);
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::ReadingClub;
    use crate::reader::Reader;

    #[test]
    fn test_members_keep_join_order() {
        let mut club = ReadingClub::new("Evening Readers");
        club.add_member(Rc::new(Reader::new("Ayush")));
        club.add_member(Rc::new(Reader::new("John")));

        let names: Vec<&str> = club.members().iter().map(|r| r.name()).collect();

        assert_eq!(club.name(), "Evening Readers");
        assert_eq!(names, ["Ayush", "John"]);
    }

    #[test]
    fn test_same_reader_can_join_twice_and_other_clubs() {
        let ayush = Rc::new(Reader::new("Ayush"));
        let mut evening = ReadingClub::new("Evening Readers");
        let mut morning = ReadingClub::new("Morning Readers");

        evening.add_member(Rc::clone(&ayush));
        evening.add_member(Rc::clone(&ayush));
        morning.add_member(Rc::clone(&ayush));

        assert_eq!(evening.members().len(), 2);
        assert!(evening.members().iter().all(|r| Rc::ptr_eq(r, &ayush)));
        assert_eq!(Rc::strong_count(&ayush), 4);
    }
}
