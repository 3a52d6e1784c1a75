//! Sample output formatting
//!
//! Samples are written as plain text, one integer per line, in draw order.

pub mod text;

pub use text::{output_value, SampleWriter};
