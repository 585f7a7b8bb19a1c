//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `receipt`: Receipt, item, and identifier types
//! - `error`: Error types for the receipt points service

pub mod error;
pub mod receipt;

pub use error::ReceiptError;
pub use receipt::{Item, Points, Receipt, ReceiptId, StoredReceipt};
