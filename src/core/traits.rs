//! Core traits for receipt storage
//!
//! The store is shared across request handlers, so every implementation must
//! be safe to use from multiple threads through a shared reference.

use crate::types::{Receipt, ReceiptError, ReceiptId, StoredReceipt};

/// Trait for storing and retrieving submitted receipts
///
/// Append-only: receipts are added once and never updated or removed.
pub trait ReceiptStore: Send + Sync {
    /// Store a receipt under a freshly generated id and return that id
    fn add(&self, receipt: Receipt) -> ReceiptId;

    /// Look up a stored receipt by id
    ///
    /// Returns `ReceiptError::NotFound` if no receipt carries the id.
    fn find_by_id(&self, id: &ReceiptId) -> Result<StoredReceipt, ReceiptError>;

    /// Number of stored receipts
    fn len(&self) -> usize;

    /// Whether the store holds no receipts
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
