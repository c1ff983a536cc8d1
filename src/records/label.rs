//! Classification labels for string instances

use core::fmt;
use core::str::FromStr;

use super::ParseError;

#[cfg(not(feature = "std"))]
use alloc::string::ToString;

/// Membership status of a string with respect to the target language
///
/// Corpus files encode the label as a status token: `1` for accepted strings,
/// `0` for rejected strings and `-1` for strings whose membership is unknown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClassificationLabel {
    /// The string belongs to the target language
    Accepting,
    /// The string does not belong to the target language
    Rejecting,
    /// Membership is not known (e.g. unlabeled test strings)
    Unknown,
}

impl ClassificationLabel {
    /// Status token used in corpus files
    pub fn as_token(&self) -> &'static str {
        match self {
            ClassificationLabel::Accepting => "1",
            ClassificationLabel::Rejecting => "0",
            ClassificationLabel::Unknown => "-1",
        }
    }

    /// Check if the string is in the language
    pub fn is_accepting(&self) -> bool {
        matches!(self, ClassificationLabel::Accepting)
    }

    /// Check if the string is outside the language
    pub fn is_rejecting(&self) -> bool {
        matches!(self, ClassificationLabel::Rejecting)
    }

    /// Check if membership is unknown
    pub fn is_unknown(&self) -> bool {
        matches!(self, ClassificationLabel::Unknown)
    }
}

impl FromStr for ClassificationLabel {
    type Err = ParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "1" => Ok(ClassificationLabel::Accepting),
            "0" => Ok(ClassificationLabel::Rejecting),
            "-1" => Ok(ClassificationLabel::Unknown),
            other => Err(ParseError::InvalidLabel {
                token: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ClassificationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}
