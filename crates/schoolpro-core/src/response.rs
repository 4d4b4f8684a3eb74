//! The `{ data, error }` response envelope.
//!
//! Most create endpoints and a few list endpoints wrap their payload in this
//! envelope; others return the bare payload. Errors are always enveloped
//! (see [`crate::errors::AppError`]).

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_serializes_null_error() {
        let value = serde_json::to_value(ApiResponse::success(vec![1, 2])).unwrap();
        assert_eq!(value, serde_json::json!({ "data": [1, 2], "error": null }));
    }
}
