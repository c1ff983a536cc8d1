//! Numbered training/test corpus pairs
//!
//! Published grid benchmarks (StaMinA) ship as numbered pairs
//! `<n>_training.txt` and `<n>_test.txt`. A fetcher drops them into one
//! directory; this module locates and loads a pair.

use std::path::{Path, PathBuf};

use super::{CorpusError, CorpusLoader};
use crate::records::RecordBatch;

/// Number of published problem instances
pub const DATASET_COUNT: usize = 100;

/// Training and test corpus files for one numbered problem
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetPair {
    directory: PathBuf,
    index: usize,
}

impl DatasetPair {
    /// Locate problem `index` (1-based) inside `directory`
    pub fn new(directory: impl Into<PathBuf>, index: usize) -> Result<Self, CorpusError> {
        if !(1..=DATASET_COUNT).contains(&index) {
            return Err(CorpusError::InvalidIndex {
                index,
                max: DATASET_COUNT,
            });
        }

        Ok(Self {
            directory: directory.into(),
            index,
        })
    }

    /// Every published pair inside `directory`
    pub fn all(directory: impl AsRef<Path>) -> impl Iterator<Item = DatasetPair> {
        let directory = directory.as_ref().to_path_buf();
        (1..=DATASET_COUNT).map(move |index| DatasetPair {
            directory: directory.clone(),
            index,
        })
    }

    /// 1-based problem number
    pub fn index(&self) -> usize {
        self.index
    }

    /// Path of `<index>_training.txt`
    pub fn training_path(&self) -> PathBuf {
        self.directory.join(format!("{}_training.txt", self.index))
    }

    /// Path of `<index>_test.txt`
    pub fn test_path(&self) -> PathBuf {
        self.directory.join(format!("{}_test.txt", self.index))
    }

    /// Load `(training, test)`; fails if either file fails
    pub fn load(&self) -> Result<(RecordBatch, RecordBatch), CorpusError> {
        let training = CorpusLoader::new(self.training_path()).load()?;
        let test = CorpusLoader::new(self.test_path()).load()?;
        Ok((training, test))
    }
}
