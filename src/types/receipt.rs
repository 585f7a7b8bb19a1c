//! Receipt-related types for the receipt points service
//!
//! This module defines the submitted receipt document, its line items, and the
//! stored record the receipt store keeps for later scoring.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Point total produced by the scoring engine
pub type Points = u64;

/// Receipt identifier
///
/// Assigned server-side when a receipt is submitted. Ids handed out by the
/// service are random v4 UUIDs, but lookups accept any string so that an
/// unknown or malformed id simply resolves to "not found".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(String);

impl ReceiptId {
    /// Generate a fresh, globally unique identifier
    pub fn generate() -> Self {
        ReceiptId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ReceiptId {
    fn from(id: String) -> Self {
        ReceiptId(id)
    }
}

impl From<&str> for ReceiptId {
    fn from(id: &str) -> Self {
        ReceiptId(id.to_string())
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One line entry on a receipt
///
/// The price is kept as submitted (a decimal string) and only parsed when
/// the receipt is scored, so a malformed price never rejects a submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    /// Free-text description of the purchased item
    pub short_description: String,

    /// Item price as a decimal string, e.g. `"6.49"`
    pub price: String,
}

/// Submitted purchase document
///
/// Mirrors the JSON body accepted by the process endpoint. Missing fields
/// decode to empty values; the scoring rules that depend on them then
/// contribute 0 points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Receipt {
    /// Name of the retailer or store
    pub retailer: String,

    /// Purchase date, `YYYY-MM-DD`
    pub purchase_date: String,

    /// Purchase time, `HH:MM` on a 24-hour clock
    pub purchase_time: String,

    /// Total amount paid, a decimal string with two fractional digits
    pub total: String,

    /// Purchased items, in receipt order
    pub items: Vec<Item>,
}

/// Stored receipt record
///
/// Created once on submission and never mutated afterwards. The store owns
/// these records; callers always receive clones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredReceipt {
    /// Identifier assigned at submission time
    pub id: ReceiptId,

    /// The receipt as submitted
    pub receipt: Receipt,
}
