//! Receipt file input and points report output
//!
//! Backs the `points` subcommand: read one receipt JSON document from disk
//! and write its per-rule breakdown as plain text. Both functions are
//! independent of the HTTP surface.

use crate::core::scoring::ScoreBreakdown;
use crate::types::{Receipt, ReceiptError};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Read and decode a receipt JSON file
///
/// # Errors
///
/// * `ReceiptError::Io` - The file cannot be read
/// * `ReceiptError::InvalidBody` - The content is not a receipt document
pub fn read_receipt(path: &Path) -> Result<Receipt, ReceiptError> {
    let content = fs::read(path).map_err(|e| ReceiptError::Io {
        message: format!("Failed to read '{}': {}", path.display(), e),
    })?;
    Ok(serde_json::from_slice(&content)?)
}

/// Write a points breakdown, one rule per line, followed by the total
pub fn write_breakdown(
    breakdown: &ScoreBreakdown,
    output: &mut dyn Write,
) -> Result<(), ReceiptError> {
    let rows = [
        ("retailer", breakdown.retailer),
        ("round_dollar", breakdown.round_dollar),
        ("quarter_multiple", breakdown.quarter_multiple),
        ("item_descriptions", breakdown.item_descriptions),
        ("odd_day", breakdown.odd_day),
        ("afternoon", breakdown.afternoon),
        ("item_count", breakdown.item_count),
    ];

    for (rule, points) in rows {
        writeln!(output, "{:<18}{:>6}", rule, points)?;
    }
    writeln!(output, "{:<18}{:>6}", "total", breakdown.total())?;
    output.flush()?;

    Ok(())
}
