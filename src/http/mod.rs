//! HTTP surface
//!
//! Exposes the receipt store and scoring engine over HTTP:
//!
//! | Method | Path                     | Response                 |
//! |--------|--------------------------|--------------------------|
//! | POST   | `/reciepts/process`      | `{"id": "<uuid>"}`       |
//! | POST   | `/receipts/process`      | same handler             |
//! | GET    | `/receipts/{id}/points`  | `{"points": <integer>}`  |
//!
//! The misspelled process path is the one existing clients call and is kept;
//! the correctly spelled path is served by the same handler. Errors are
//! returned as plain text with the matching status code.

mod error;
mod handlers;
mod router;

pub use handlers::{PointsResponse, ProcessResponse};
pub use router::{router, AppState};
