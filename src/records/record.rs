//! String instances and the line parser

use super::{ClassificationLabel, ParseError};

#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};

/// One labeled string from a corpus
///
/// `declared_length` is whatever the corpus line declares. It is kept as
/// metadata and never checked against the payload.
///
/// # Example
///
/// ```
/// use dfa_corpus::records::{ClassificationLabel, StringRecord};
///
/// let record = StringRecord::parse("1 4 a b b a", " ").unwrap();
///
/// assert_eq!(record.label(), ClassificationLabel::Accepting);
/// assert_eq!(record.declared_length(), 4);
/// assert_eq!(record.payload(), "abba");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StringRecord {
    label: ClassificationLabel,
    declared_length: usize,
    payload: String,
}

impl StringRecord {
    /// Build a record from already-typed parts
    pub fn new(label: ClassificationLabel, declared_length: usize, payload: impl Into<String>) -> Self {
        Self {
            label,
            declared_length,
            payload: payload.into(),
        }
    }

    /// Parse a delimited line: `<status><d><length><d><symbol><d><symbol>...`
    ///
    /// The line is split on every occurrence of `delimiter`. The first token
    /// is the status, the second the declared length, and all remaining tokens
    /// are concatenated without a separator to form the payload. An empty
    /// delimiter splits the line into single characters.
    pub fn parse(line: &str, delimiter: &str) -> Result<Self, ParseError> {
        if delimiter.is_empty() {
            Self::from_tokens(line.split_inclusive(|_: char| true))
        } else {
            Self::from_tokens(line.split(delimiter))
        }
    }

    fn from_tokens<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Result<Self, ParseError> {
        let label = tokens.next().unwrap_or("").parse::<ClassificationLabel>()?;

        let length_token = tokens.next().unwrap_or("");
        let declared_length =
            length_token
                .parse::<usize>()
                .map_err(|_| ParseError::InvalidLength {
                    token: length_token.to_string(),
                })?;

        let payload: String = tokens.collect();

        Ok(Self {
            label,
            declared_length,
            payload,
        })
    }

    /// Membership label of the string
    pub fn label(&self) -> ClassificationLabel {
        self.label
    }

    /// Length declared by the corpus line
    pub fn declared_length(&self) -> usize {
        self.declared_length
    }

    /// The string itself, symbols concatenated
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Split into `(label, declared_length, payload)`
    pub fn into_parts(self) -> (ClassificationLabel, usize, String) {
        (self.label, self.declared_length, self.payload)
    }
}
