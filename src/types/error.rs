//! Error types for the receipt points service
//!
//! This module defines all error types that can occur while accepting,
//! storing, and scoring receipts.
//!
//! # Error Categories
//!
//! - **Request Errors**: Malformed body, missing id, wrong HTTP method
//! - **Lookup Errors**: Unknown receipt id
//! - **Field Errors**: Unparsable totals, prices, dates, and times met during scoring
//! - **I/O Errors**: Reading receipt files, binding the listener

use thiserror::Error;

/// Main error type for the receipt points service
///
/// Request and lookup errors are reported to the caller. Field errors are
/// never fatal: the scoring engine logs them and scores the affected rule
/// as 0.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReceiptError {
    /// No receipt is stored under the requested id
    #[error("Receipt not found: {id}")]
    NotFound {
        /// The id that was looked up
        id: String,
    },

    /// The points request carried an empty id segment
    #[error("No ID found")]
    MissingId,

    /// The request body could not be decoded as a receipt
    #[error("Error parsing request body: {message}")]
    InvalidBody {
        /// Decoder error description
        message: String,
    },

    /// The endpoint does not accept the request's HTTP method
    #[error("Invalid request method: {method}")]
    MethodNotAllowed {
        /// The rejected method
        method: String,
    },

    /// The total has no `.` separating dollars from cents
    #[error("Total '{total}' has no cents part")]
    MissingCents {
        /// The offending total string
        total: String,
    },

    /// The cents part of the total is not an unsigned integer
    #[error("Invalid cents '{cents}' in total '{total}'")]
    InvalidCents {
        /// The offending total string
        total: String,
        /// The text found after the `.`
        cents: String,
    },

    /// An item price is not a non-negative decimal number
    #[error("Invalid price '{price}' for item '{description}'")]
    InvalidPrice {
        /// Trimmed item description
        description: String,
        /// The offending price string
        price: String,
    },

    /// The purchase date has no parsable day-of-month field
    #[error("Invalid purchase date '{date}'")]
    InvalidDate {
        /// The offending date string
        date: String,
    },

    /// The purchase time is not `HH:MM`
    #[error("Invalid purchase time '{time}'")]
    InvalidTime {
        /// The offending time string
        time: String,
    },

    /// I/O error while reading input or binding the listener
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },
}

impl From<std::io::Error> for ReceiptError {
    fn from(error: std::io::Error) -> Self {
        ReceiptError::Io {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for ReceiptError {
    fn from(error: serde_json::Error) -> Self {
        ReceiptError::InvalidBody {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl ReceiptError {
    /// Create a NotFound error
    pub fn not_found(id: &str) -> Self {
        ReceiptError::NotFound { id: id.to_string() }
    }

    /// Create a MethodNotAllowed error
    pub fn method_not_allowed(method: &str) -> Self {
        ReceiptError::MethodNotAllowed {
            method: method.to_string(),
        }
    }

    /// Create a MissingCents error
    pub fn missing_cents(total: &str) -> Self {
        ReceiptError::MissingCents {
            total: total.to_string(),
        }
    }

    /// Create an InvalidCents error
    pub fn invalid_cents(total: &str, cents: &str) -> Self {
        ReceiptError::InvalidCents {
            total: total.to_string(),
            cents: cents.to_string(),
        }
    }

    /// Create an InvalidPrice error
    pub fn invalid_price(description: &str, price: &str) -> Self {
        ReceiptError::InvalidPrice {
            description: description.to_string(),
            price: price.to_string(),
        }
    }

    /// Create an InvalidDate error
    pub fn invalid_date(date: &str) -> Self {
        ReceiptError::InvalidDate {
            date: date.to_string(),
        }
    }

    /// Create an InvalidTime error
    pub fn invalid_time(time: &str) -> Self {
        ReceiptError::InvalidTime {
            time: time.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::not_found(
        ReceiptError::NotFound { id: "abc".to_string() },
        "Receipt not found: abc"
    )]
    #[case::missing_id(ReceiptError::MissingId, "No ID found")]
    #[case::invalid_body(
        ReceiptError::InvalidBody { message: "EOF while parsing".to_string() },
        "Error parsing request body: EOF while parsing"
    )]
    #[case::method_not_allowed(
        ReceiptError::MethodNotAllowed { method: "DELETE".to_string() },
        "Invalid request method: DELETE"
    )]
    #[case::missing_cents(
        ReceiptError::MissingCents { total: "35".to_string() },
        "Total '35' has no cents part"
    )]
    #[case::invalid_cents(
        ReceiptError::InvalidCents { total: "35.x5".to_string(), cents: "x5".to_string() },
        "Invalid cents 'x5' in total '35.x5'"
    )]
    #[case::invalid_price(
        ReceiptError::InvalidPrice { description: "Dasani".to_string(), price: "free".to_string() },
        "Invalid price 'free' for item 'Dasani'"
    )]
    #[case::invalid_date(
        ReceiptError::InvalidDate { date: "2022/01/01".to_string() },
        "Invalid purchase date '2022/01/01'"
    )]
    #[case::invalid_time(
        ReceiptError::InvalidTime { time: "noon".to_string() },
        "Invalid purchase time 'noon'"
    )]
    fn test_error_display(#[case] error: ReceiptError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::not_found(
        ReceiptError::not_found("abc"),
        ReceiptError::NotFound { id: "abc".to_string() }
    )]
    #[case::invalid_cents(
        ReceiptError::invalid_cents("1.x", "x"),
        ReceiptError::InvalidCents { total: "1.x".to_string(), cents: "x".to_string() }
    )]
    #[case::invalid_time(
        ReceiptError::invalid_time("25"),
        ReceiptError::InvalidTime { time: "25".to_string() }
    )]
    fn test_helper_functions(#[case] result: ReceiptError, #[case] expected: ReceiptError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "No such file");
        let error: ReceiptError = io_error.into();
        assert!(matches!(error, ReceiptError::Io { .. }));
        assert_eq!(error.to_string(), "I/O error: No such file");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: ReceiptError = json_error.into();
        assert!(matches!(error, ReceiptError::InvalidBody { .. }));
    }
}
