use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::records::ParseError;

/// Error type for corpus loading failures
///
/// Every variant names the file involved. A load that fails never yields a
/// partial batch.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The file could not be opened
    #[error("cannot open corpus file '{}': {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },
    /// The file could not be read at `line`
    #[error("cannot read line {line} of '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        line: usize,
        source: io::Error,
    },
    /// A record line is not valid UTF-8
    #[error("line {line} of '{}' is not valid UTF-8", .path.display())]
    Encoding { path: PathBuf, line: usize },
    /// A record line failed to parse
    #[error("malformed line {line} of '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        source: ParseError,
    },
    /// A numbered dataset outside the published range
    #[error("dataset index {index} is outside 1..={max}")]
    InvalidIndex { index: usize, max: usize },
}

impl CorpusError {
    /// 1-based line number for read, encoding and parse failures
    pub fn line(&self) -> Option<usize> {
        match self {
            CorpusError::Read { line, .. }
            | CorpusError::Encoding { line, .. }
            | CorpusError::Parse { line, .. } => Some(*line),
            CorpusError::Open { .. } | CorpusError::InvalidIndex { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_parse_error_display_names_file_and_line() {
        let err = CorpusError::Parse {
            path: PathBuf::from("data/1_training.txt"),
            line: 7,
            source: ParseError::InvalidLabel {
                token: "2".to_string(),
            },
        };

        assert_eq!(
            err.to_string(),
            "malformed line 7 of 'data/1_training.txt': unknown string status: \"2\""
        );
        assert_eq!(err.line(), Some(7));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_encoding_error_display() {
        let err = CorpusError::Encoding {
            path: PathBuf::from("corpus.txt"),
            line: 4,
        };

        assert_eq!(err.to_string(), "line 4 of 'corpus.txt' is not valid UTF-8");
        assert_eq!(err.line(), Some(4));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_open_error_has_no_line() {
        let err = CorpusError::Open {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };

        assert!(err.to_string().starts_with("cannot open corpus file 'missing.txt'"));
        assert_eq!(err.line(), None);
    }
}
