//! # dfa-corpus
//!
//! Data preparation for automaton (DFA) learners.
//!
//! dfa-corpus turns labeled string corpora into typed records and summarizes
//! numeric streams in a single pass. It does no learning itself: the batches
//! it produces are handed to a downstream learner.
//!
//! ## Features
//!
//! - **Streaming Statistics**: min, max, mean, variance and standard deviation
//!   with Welford's online algorithm, O(1) memory, mergeable
//! - **Records**: accepting/rejecting/unknown string instances parsed from
//!   delimited lines, collected into batches that sort by length
//! - **Corpus Loading**: header-skipping file loader with typed errors that
//!   name the file and line
//!
//! ## Quick Start
//!
//! ```rust
//! use dfa_corpus::prelude::*;
//!
//! let mut batch: RecordBatch = ["1 4 a b b a", "0 1 b", "1 2 a a"]
//!     .iter()
//!     .map(|line| StringRecord::parse(line, " "))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! batch.sort_by_length();
//!
//! let lengths = batch.length_stats();
//! println!(
//!     "{} strings, length {}..{}, mean {:.2}",
//!     lengths.count(),
//!     lengths.min(),
//!     lengths.max(),
//!     lengths.mean()
//! );
//! ```
//!
//! ## Feature Flags
//!
//! Module families:
//! - `statistics` (default): [`NumericAccumulator`](statistics::NumericAccumulator)
//! - `records` (default): labels, records and batches
//! - `corpus` (default): file loading, requires `std` and `records`
//! - `full`: Enable everything
//!
//! Platform features:
//! - `std` (default): Standard library support, `thiserror` errors and `tracing` logs
//! - `serde`: Serialize and deserialize labels and records

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Core traits always available
pub mod traits;

#[cfg(feature = "statistics")]
pub(crate) mod math;

#[cfg(feature = "statistics")]
#[cfg_attr(docsrs, doc(cfg(feature = "statistics")))]
pub mod statistics;

#[cfg(feature = "records")]
#[cfg_attr(docsrs, doc(cfg(feature = "records")))]
pub mod records;

#[cfg(feature = "corpus")]
#[cfg_attr(docsrs, doc(cfg(feature = "corpus")))]
pub mod corpus;

pub mod prelude {
    pub use crate::traits::*;

    #[cfg(feature = "statistics")]
    pub use crate::statistics::NumericAccumulator;

    #[cfg(feature = "records")]
    pub use crate::records::{ClassificationLabel, ParseError, RecordBatch, StringRecord};

    #[cfg(feature = "corpus")]
    pub use crate::corpus::{load_from_file, CorpusError, CorpusLoader, DatasetPair};
}

#[cfg(feature = "statistics")]
pub use statistics::NumericAccumulator;

#[cfg(feature = "records")]
pub use records::{ClassificationLabel, RecordBatch, StringRecord};

#[cfg(feature = "corpus")]
pub use corpus::{load_from_file, CorpusLoader};
