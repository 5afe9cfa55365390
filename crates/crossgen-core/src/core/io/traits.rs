use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading word lists from a particular file format.
///
/// Implementors handle format-specific parsing and return the words in file order.
/// Word order matters to the search, so readers must not reorder or deduplicate.
pub trait WordListFile {
    /// The error type for I/O and parse failures.
    type Error: Error + From<io::Error>;

    /// Reads the words from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter issues.
    fn read_from(reader: &mut impl BufRead) -> Result<Vec<String>, Self::Error>;

    /// Reads the words from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<String>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}
