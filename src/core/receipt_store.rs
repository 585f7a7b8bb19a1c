//! Thread-safe receipt storage
//!
//! This module provides the `InMemoryReceiptStore`, which keeps every submitted
//! receipt for the lifetime of the process.
//!
//! # Design
//!
//! Receipts live in a `DashMap` keyed by their id. Handlers on different worker
//! threads can add and look up receipts concurrently; the map's internal
//! sharding serializes access to the same entry without a global lock.
//!
//! # Lifecycle
//!
//! The store only grows. There is no eviction, update, or delete, and all
//! state is lost when the process exits.

use crate::core::traits::ReceiptStore;
use crate::types::{Receipt, ReceiptError, ReceiptId, StoredReceipt};
use dashmap::DashMap;

/// In-memory receipt store
///
/// All methods take `&self` and are safe to call from many threads at once.
/// Lookups return clones so no lock outlives the call.
#[derive(Debug)]
pub struct InMemoryReceiptStore {
    /// Submitted receipts by id
    receipts: DashMap<ReceiptId, Receipt>,
}

impl InMemoryReceiptStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            receipts: DashMap::new(),
        }
    }
}

impl Default for InMemoryReceiptStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReceiptStore for InMemoryReceiptStore {
    /// Assign a new id to the receipt and store it
    ///
    /// Always succeeds. Ids are random v4 UUIDs, so they are unique by
    /// construction.
    fn add(&self, receipt: Receipt) -> ReceiptId {
        let id = ReceiptId::generate();
        self.receipts.insert(id.clone(), receipt);
        id
    }

    fn find_by_id(&self, id: &ReceiptId) -> Result<StoredReceipt, ReceiptError> {
        self.receipts
            .get(id)
            .map(|entry| StoredReceipt {
                id: entry.key().clone(),
                receipt: entry.value().clone(),
            })
            .ok_or_else(|| ReceiptError::not_found(id.as_str()))
    }

    fn len(&self) -> usize {
        self.receipts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Item;
    use std::sync::Arc;
    use std::thread;

    fn sample_receipt(retailer: &str) -> Receipt {
        Receipt {
            retailer: retailer.to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            total: "6.49".to_string(),
            items: vec![Item {
                short_description: "Mountain Dew 12PK".to_string(),
                price: "6.49".to_string(),
            }],
        }
    }

    #[test]
    fn test_add_and_find_receipt() {
        let store = InMemoryReceiptStore::new();

        let id = store.add(sample_receipt("Target"));

        let stored = store.find_by_id(&id).unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.receipt, sample_receipt("Target"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_find_unknown_id_is_not_found() {
        let store = InMemoryReceiptStore::new();
        store.add(sample_receipt("Target"));

        let result = store.find_by_id(&ReceiptId::from("does-not-exist"));
        assert_eq!(result, Err(ReceiptError::not_found("does-not-exist")));
    }

    #[test]
    fn test_empty_store() {
        let store = InMemoryReceiptStore::default();
        assert!(store.is_empty());
        assert!(matches!(
            store.find_by_id(&ReceiptId::generate()),
            Err(ReceiptError::NotFound { .. })
        ));
    }

    #[test]
    fn test_same_receipt_twice_gets_distinct_ids() {
        let store = InMemoryReceiptStore::new();

        let first = store.add(sample_receipt("Target"));
        let second = store.add(sample_receipt("Target"));

        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_lookups_return_independent_copies() {
        let store = InMemoryReceiptStore::new();
        let id = store.add(sample_receipt("Target"));

        let mut copy = store.find_by_id(&id).unwrap();
        copy.receipt.retailer = "Changed".to_string();

        assert_eq!(store.find_by_id(&id).unwrap().receipt.retailer, "Target");
    }

    #[test]
    fn test_concurrent_adds() {
        let store = Arc::new(InMemoryReceiptStore::new());

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..50)
                        .map(|i| store.add(sample_receipt(&format!("Store {t}-{i}"))))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let ids: Vec<ReceiptId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();

        assert_eq!(store.len(), 400);
        for id in &ids {
            assert!(store.find_by_id(id).is_ok());
        }
    }
}
