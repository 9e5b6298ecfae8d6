//! Error types for the prediction service client
//!
//! The prediction rows themselves live in `crate::models::prediction`;
//! they are shared with the annotation service.

/// Comprehensive error type for prediction API operations
#[derive(Debug, Clone)]
pub enum ApiError {
    /// 5xx Server Error
    ServerError(i32, String),
    /// Other HTTP errors
    HttpError(i32, String),
    /// Network/request error
    RequestError(String),
    /// Deserialization error
    DeserializationError(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::ServerError(code, msg) => write!(f, "Server Error ({}): {}", code, msg),
            ApiError::HttpError(code, msg) => write!(f, "HTTP Error ({}): {}", code, msg),
            ApiError::RequestError(msg) => write!(f, "Request Error: {}", msg),
            ApiError::DeserializationError(msg) => {
                write!(f, "Deserialization Error: {}", msg)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_status_code() {
        let err = ApiError::ServerError(503, "maintenance".to_string());
        assert_eq!(err.to_string(), "Server Error (503): maintenance");
    }

    #[test]
    fn test_display_request_error() {
        let err = ApiError::RequestError("connection refused".to_string());
        assert_eq!(err.to_string(), "Request Error: connection refused");
    }
}
