//! Labeled string records
//!
//! This module provides the typed form of one corpus line, the line parser
//! and the batch collection handed to a downstream learner.
//!
//! # Types
//!
//! - [`ClassificationLabel`]: accepting, rejecting or unknown membership
//! - [`StringRecord`]: label, declared length and payload
//! - [`RecordBatch`]: ordered records with length-based sorting
//!
//! # Example
//!
//! ```
//! use dfa_corpus::records::{ClassificationLabel, RecordBatch, StringRecord};
//!
//! let mut batch = RecordBatch::new();
//! batch.push(StringRecord::parse("1 4 a b b a", " ").unwrap());
//! batch.push(StringRecord::parse("0 1 b", " ").unwrap());
//!
//! batch.sort_by_length();
//!
//! assert_eq!(batch.get(0).unwrap().label(), ClassificationLabel::Rejecting);
//! assert_eq!(batch.label_counts().accepting, 1);
//! ```

mod batch;
mod error;
mod label;
mod record;

pub use batch::{LabelCounts, RecordBatch};
pub use error::ParseError;
pub use label::ClassificationLabel;
pub use record::StringRecord;
