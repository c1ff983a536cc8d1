//! Corpus file loading
//!
//! Corpus files are plain text. The first line is a header and is ignored;
//! every other line is one record:
//!
//! ```text
//! <status> <length> <symbol> <symbol> ...
//! ```
//!
//! where `<status>` is `1`, `0` or `-1` and the symbols are concatenated into
//! the payload.
//!
//! # Example
//!
//! ```
//! use dfa_corpus::corpus::load_from_file;
//! # let dir = tempfile::tempdir().unwrap();
//! # let path = dir.path().join("1_training.txt");
//! # std::fs::write(&path, "2 2\n1 4 a b b a\n0 1 b\n").unwrap();
//!
//! let mut batch = load_from_file(&path).unwrap();
//! batch.sort_by_length();
//!
//! assert_eq!(batch.len(), 2);
//! assert_eq!(batch.get(0).unwrap().payload(), "b");
//! ```

mod dataset;
mod error;
mod loader;

pub use dataset::{DatasetPair, DATASET_COUNT};
pub use error::CorpusError;
pub use loader::{load_from_file, CorpusLoader, DEFAULT_DELIMITER};
