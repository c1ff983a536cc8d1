use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Error while parsing one corpus line into a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Status token is not one of `1`, `0`, `-1`
    InvalidLabel { token: String },
    /// Length token is not a non-negative base-10 integer
    InvalidLength { token: String },
}

impl ParseError {
    /// The offending token as it appeared in the line
    pub fn token(&self) -> &str {
        match self {
            ParseError::InvalidLabel { token } | ParseError::InvalidLength { token } => token,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidLabel { token } => {
                write!(f, "unknown string status: {:?}", token)
            }
            ParseError::InvalidLength { token } => {
                write!(f, "invalid string length: {:?}", token)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}
