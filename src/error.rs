use std::error;
use std::fmt;
use std::io;

/// Errors that can be returned while dumping a disk image.  These are
/// generally converted into `io::Error`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PeekError {
    /// No disk image path was supplied
    NoInputFile,
    /// The disk image could not be opened
    Unreadable,
    /// The image length matches no known geometry
    InvalidSize,
    /// The stream ended partway through a sector
    Truncated,
}

impl error::Error for PeekError {}

impl fmt::Display for PeekError {
    /// Provide human-readable descriptions of the errors
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl From<PeekError> for io::Error {
    fn from(error: PeekError) -> io::Error {
        use self::PeekError::*;
        use std::io::ErrorKind;
        let kind = match error {
            NoInputFile => ErrorKind::InvalidInput,
            Unreadable => ErrorKind::NotFound,
            InvalidSize => ErrorKind::InvalidData,
            Truncated => ErrorKind::UnexpectedEof,
        };
        io::Error::new(kind, error)
    }
}

impl PeekError {
    /// If the provided `io::Error` contains a `PeekError`, return the
    /// underlying `PeekError`.  If not, return None.
    pub fn from_io_error(error: &io::Error) -> Option<PeekError> {
        error
            .get_ref()
            .and_then(|e| e.downcast_ref::<PeekError>())
            .copied()
    }

    /// Terse descriptions, worded the way they appear on the console.
    fn message(&self) -> &str {
        use self::PeekError::*;
        match *self {
            NoInputFile => "no input file",
            Unreadable => "file unreadable or not found",
            InvalidSize => "invalid file size",
            Truncated => "unexpected end of file inside a sector",
        }
    }
}

impl PartialEq<io::Error> for PeekError {
    fn eq(&self, other: &io::Error) -> bool {
        PeekError::from_io_error(other) == Some(*self)
    }
}

impl PartialEq<PeekError> for io::Error {
    fn eq(&self, other: &PeekError) -> bool {
        PeekError::from_io_error(self) == Some(*other)
    }
}
