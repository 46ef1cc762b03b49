//! Helpers shared by the unit tests.

use std::io::{self, Write};

/// Run `write` against an in-memory sink and return what it printed
#[allow(clippy::expect_used)]
pub(crate) fn capture(write: impl FnOnce(&mut dyn Write) -> io::Result<()>) -> String {
    let mut buffer = Vec::new();
    write(&mut buffer).expect("writing to a Vec cannot fail");
    String::from_utf8(buffer).expect("output should be valid UTF-8")
}
