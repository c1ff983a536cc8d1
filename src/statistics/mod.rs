//! Summary statistics for numeric streams
//!
//! This module computes min, max, mean, variance and standard deviation over
//! a stream in a single pass with constant memory.
//!
//! # Example
//!
//! ```
//! use dfa_corpus::statistics::NumericAccumulator;
//!
//! let mut stats = NumericAccumulator::new();
//!
//! for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
//!     stats.observe(value);
//! }
//!
//! println!("Mean: {}", stats.mean());
//! println!("Stddev: {}", stats.population_std_dev());
//! println!("Min: {}", stats.min());
//! println!("Max: {}", stats.max());
//! ```

mod moments;

pub use moments::NumericAccumulator;
