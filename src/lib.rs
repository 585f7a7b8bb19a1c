//! Receipt Points Library
//! # Overview
//!
//! This library provides a small HTTP service that accepts purchase receipts,
//! keeps them in memory, and scores them for points.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Receipt, Item, ReceiptId, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::receipt_store`] - Thread-safe in-memory receipt storage
//!   - [`core::scoring`] - The points rules
//! - [`http`] - Routes and request handlers
//! - [`server`] - Listener, runtime configuration, graceful shutdown
//! - [`io`] - Receipt files and points reports for offline scoring
//! - [`logging`] - Tracing subscriber setup
//!
//! # Scoring Rules
//!
//! - **Retailer**: 1 point per alphanumeric character in the retailer name
//! - **Round dollar**: 50 points if the total has no cents
//! - **Quarter multiple**: 25 points if the cents are a multiple of 25
//! - **Item descriptions**: `ceil(price * 0.2)` for each item whose trimmed
//!   description length is a multiple of 3
//! - **Odd day**: 6 points if the purchase day is odd
//! - **Afternoon**: 10 points for purchases between 14:01 and 15:59
//! - **Item count**: 5 points for every two items

// Module declarations
pub mod cli;
pub mod core;
pub mod http;
pub mod io;
pub mod logging;
pub mod server;
pub mod types;

pub use crate::core::{
    score, score_breakdown, InMemoryReceiptStore, ReceiptStore, ScoreBreakdown,
};
pub use http::{router, AppState};
pub use server::ServerConfig;
pub use types::{Item, Points, Receipt, ReceiptError, ReceiptId, StoredReceipt};
