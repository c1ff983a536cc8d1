//! Line-oriented corpus loader

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::CorpusError;
use crate::records::{RecordBatch, StringRecord};
use crate::traits::RecordSource;

/// Delimiter used by Abbadingo-style corpus files
pub const DEFAULT_DELIMITER: &str = " ";

/// Loads a [`RecordBatch`] from a text corpus file
///
/// The first line of the file is a header and is always skipped. Every
/// following line is parsed with [`StringRecord::parse`]. The first bad line
/// or read failure aborts the whole load.
///
/// # Example
///
/// ```no_run
/// use dfa_corpus::corpus::CorpusLoader;
///
/// let batch = CorpusLoader::new("datasets/1_training.txt").load()?;
/// println!("{} records", batch.len());
/// # Ok::<(), dfa_corpus::corpus::CorpusError>(())
/// ```
#[derive(Clone, Debug)]
pub struct CorpusLoader {
    path: PathBuf,
    delimiter: String,
}

impl CorpusLoader {
    /// Create a loader for `path` using the default single-space delimiter
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }

    /// Use a different token delimiter
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// File this loader reads
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Token delimiter used for record lines
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Read and parse the whole file
    pub fn load(&self) -> Result<RecordBatch, CorpusError> {
        tracing::debug!(
            path = %self.path.display(),
            delimiter = ?self.delimiter,
            "loading corpus"
        );

        let file = File::open(&self.path).map_err(|source| {
            tracing::warn!(path = %self.path.display(), error = %source, "cannot open corpus");
            CorpusError::Open {
                path: self.path.clone(),
                source,
            }
        })?;

        let mut reader = BufReader::new(file);
        let mut batch = RecordBatch::new();
        let mut buf = Vec::new();
        let mut line_number = 0;

        loop {
            buf.clear();
            let read = reader.read_until(b'\n', &mut buf).map_err(|source| {
                tracing::warn!(
                    path = %self.path.display(),
                    line = line_number + 1,
                    error = %source,
                    "corpus read failed"
                );
                CorpusError::Read {
                    path: self.path.clone(),
                    line: line_number + 1,
                    source,
                }
            })?;
            if read == 0 {
                break;
            }
            line_number += 1;

            // Header bytes are discarded undecoded
            if line_number == 1 {
                continue;
            }

            if buf.last() == Some(&b'\n') {
                buf.pop();
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
            }

            let line = std::str::from_utf8(&buf).map_err(|_| {
                tracing::warn!(
                    path = %self.path.display(),
                    line = line_number,
                    "corpus line is not valid UTF-8"
                );
                CorpusError::Encoding {
                    path: self.path.clone(),
                    line: line_number,
                }
            })?;

            let record = StringRecord::parse(line, &self.delimiter).map_err(|source| {
                tracing::warn!(
                    path = %self.path.display(),
                    line = line_number,
                    error = %source,
                    "malformed corpus line"
                );
                CorpusError::Parse {
                    path: self.path.clone(),
                    line: line_number,
                    source,
                }
            })?;
            batch.push(record);
        }

        tracing::info!(
            path = %self.path.display(),
            records = batch.len(),
            "corpus loaded"
        );
        Ok(batch)
    }
}

impl RecordSource for CorpusLoader {
    type Error = CorpusError;

    fn load(&self) -> Result<RecordBatch, Self::Error> {
        CorpusLoader::load(self)
    }
}

/// Load a space-delimited corpus file
pub fn load_from_file(path: impl AsRef<Path>) -> Result<RecordBatch, CorpusError> {
    CorpusLoader::new(path.as_ref()).load()
}
