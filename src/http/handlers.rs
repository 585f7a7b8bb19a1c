//! Request handlers
//!
//! Every handler returns as soon as it has an error to report; nothing is
//! stored for a request that fails to decode.

use crate::core::scoring::score;
use crate::http::router::AppState;
use crate::types::{Points, Receipt, ReceiptError, ReceiptId};
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::Method;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Body returned by the process endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: ReceiptId,
}

/// Body returned by the points endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: Points,
}

/// Accept a receipt, store it, and return its new id
///
/// The body is decoded from raw bytes so clients need not send a
/// `Content-Type` header.
pub async fn process_receipt(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ProcessResponse>, ReceiptError> {
    let receipt: Receipt = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "rejected receipt body");
        ReceiptError::from(e)
    })?;

    let item_count = receipt.items.len();
    let id = state.store.add(receipt);
    info!(receipt_id = %id, item_count, "receipt stored");

    Ok(Json(ProcessResponse { id }))
}

/// Score a stored receipt
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ReceiptError> {
    if id.trim().is_empty() {
        return Err(ReceiptError::MissingId);
    }

    let stored = state.store.find_by_id(&ReceiptId::from(id)).map_err(|e| {
        debug!(error = %e, "points requested for unknown receipt");
        e
    })?;

    let points = score(&stored.receipt);
    debug!(receipt_id = %stored.id, points, "receipt scored");

    Ok(Json(PointsResponse { points }))
}

/// Fallback for methods the matched path does not accept
pub async fn invalid_method(method: Method) -> ReceiptError {
    debug!(%method, "method not allowed");
    ReceiptError::method_not_allowed(method.as_str())
}
