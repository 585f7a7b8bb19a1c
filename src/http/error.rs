//! Mapping from `ReceiptError` to HTTP responses

use crate::types::ReceiptError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

impl ReceiptError {
    /// HTTP status code reported for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ReceiptError::NotFound { .. } => StatusCode::NOT_FOUND,
            ReceiptError::MissingId | ReceiptError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            ReceiptError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ReceiptError::MissingCents { .. }
            | ReceiptError::InvalidCents { .. }
            | ReceiptError::InvalidPrice { .. }
            | ReceiptError::InvalidDate { .. }
            | ReceiptError::InvalidTime { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ReceiptError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ReceiptError {
    fn into_response(self) -> Response {
        let body = match &self {
            ReceiptError::NotFound { .. } => "Receipt not found".to_string(),
            ReceiptError::InvalidBody { .. } => "Error parsing request body".to_string(),
            ReceiptError::MethodNotAllowed { .. } => "Invalid request method".to_string(),
            other => other.to_string(),
        };
        (self.status_code(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::not_found(ReceiptError::not_found("abc"), StatusCode::NOT_FOUND)]
    #[case::missing_id(ReceiptError::MissingId, StatusCode::BAD_REQUEST)]
    #[case::invalid_body(
        ReceiptError::InvalidBody { message: "EOF".to_string() },
        StatusCode::BAD_REQUEST
    )]
    #[case::method(ReceiptError::method_not_allowed("PUT"), StatusCode::METHOD_NOT_ALLOWED)]
    #[case::io(
        ReceiptError::Io { message: "boom".to_string() },
        StatusCode::INTERNAL_SERVER_ERROR
    )]
    fn test_status_codes(#[case] error: ReceiptError, #[case] expected: StatusCode) {
        assert_eq!(error.status_code(), expected);
        assert_eq!(error.into_response().status(), expected);
    }
}
