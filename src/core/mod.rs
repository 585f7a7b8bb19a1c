//! Core business logic module
//!
//! This module contains the receipt processing components:
//! - `traits` - Trait abstraction for interchangeable receipt stores
//! - `receipt_store` - Thread-safe in-memory receipt storage
//! - `scoring` - The points rules and the scoring engine

pub mod receipt_store;
pub mod scoring;
pub mod traits;

pub use receipt_store::InMemoryReceiptStore;
pub use scoring::{score, score_breakdown, ScoreBreakdown};
pub use traits::ReceiptStore;
