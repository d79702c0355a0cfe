use std::fmt;

/// Result type for yearreview-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Quarter label did not have the `Q<n> <year>` shape
    InvalidQuarter(String),

    /// Category name outside the fixed set
    InvalidCategory(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidQuarter(raw) => write!(f, "Invalid quarter label: {:?}", raw),
            Error::InvalidCategory(raw) => write!(f, "Invalid category: {:?}", raw),
        }
    }
}

impl std::error::Error for Error {}
