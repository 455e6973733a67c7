//! Line-oriented input adapters
//!
//! Implementations of [`InputSource`](quiz_application::InputSource),
//! driven from the input pump thread.

mod line_reader;

pub use line_reader::LineReader;
