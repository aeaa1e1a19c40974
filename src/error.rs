use std::fmt;

/// Errors raised while building or writing HTML.
#[derive(Debug)]
pub enum Error {
    /// A name/value attribute list had a name without a value.
    UnpairedAttribute(String),
    /// Writing rendered output failed.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnpairedAttribute(name) => {
                write!(f, "attribute {:?} has no value", name)
            }
            Error::Io(e) => write!(f, "i/o error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    #[inline]
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
