//! I/O module
//!
//! Handles reading receipt documents from disk and writing points reports.
//!
//! # Components
//!
//! - `receipt_file` - Receipt JSON file reading and breakdown output

pub mod receipt_file;

pub use receipt_file::{read_receipt, write_breakdown};
