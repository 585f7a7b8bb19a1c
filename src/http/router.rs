//! Route table and shared handler state

use crate::core::{InMemoryReceiptStore, ReceiptStore};
use crate::http::handlers::{get_points, invalid_method, process_receipt};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

/// State shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReceiptStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ReceiptStore>) -> Self {
        Self { store }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryReceiptStore::new()))
    }
}

/// Build the service router
///
/// axum answers HEAD with the GET handler unless HEAD has its own endpoint,
/// so the points route maps HEAD to the 405 handler explicitly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/reciepts/process",
            post(process_receipt).fallback(invalid_method),
        )
        .route(
            "/receipts/process",
            post(process_receipt).fallback(invalid_method),
        )
        .route(
            "/receipts/{id}/points",
            get(get_points)
                .head(invalid_method)
                .fallback(invalid_method),
        )
        .with_state(state)
}
