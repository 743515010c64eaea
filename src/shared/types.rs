use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const STATUS_SUCCESS: &str = "success";

/// Uniform envelope around every successful response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub status: String,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            message: message.into(),
            data,
        }
    }
}

/// Error body; the HTTP status code carries the error kind
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let response = ApiResponse::success("successfully get message", "Hello, World");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "status": "success",
                "message": "successfully get message",
                "data": "Hello, World"
            })
        );
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorResponse {
            message: "Something went wrong.".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "message": "Something went wrong." })
        );
    }
}
