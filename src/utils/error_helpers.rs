use crate::api::client::DEFAULT_TIMEOUT_SECS;
use crate::error::ApiError;

/// Helper functions for standardizing error conversions across the codebase
/// Convert reqwest errors to ApiError with endpoint context
pub fn convert_request_error(error: reqwest::Error, endpoint: &str) -> ApiError {
    if error.is_timeout() {
        return convert_timeout_error(endpoint, DEFAULT_TIMEOUT_SECS);
    }

    ApiError::NetworkFailure {
        endpoint: endpoint.to_string(),
        message: error.to_string(),
    }
}

/// Convert timeout errors to ApiError with endpoint context
pub fn convert_timeout_error(endpoint: &str, timeout_secs: u64) -> ApiError {
    ApiError::Timeout {
        timeout_secs,
        endpoint: endpoint.to_string(),
    }
}

/// Convert JSON deserialization errors to ApiError with endpoint context
pub fn convert_json_error(error: serde_json::Error, endpoint: &str) -> ApiError {
    ApiError::MalformedResponse {
        endpoint: endpoint.to_string(),
        message: format!("JSON parse error: {}", error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_timeout_error() {
        let api_error = convert_timeout_error("/test", 30);

        match api_error {
            ApiError::Timeout {
                endpoint,
                timeout_secs,
            } => {
                assert_eq!(endpoint, "/test");
                assert_eq!(timeout_secs, 30);
            }
            _ => panic!("Expected Timeout error"),
        }
    }

    #[test]
    fn test_convert_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{\"resources\": [")
            .expect_err("truncated JSON must fail");
        let api_error = convert_json_error(json_error, "/devices/queries/devices/v1");

        match api_error {
            ApiError::MalformedResponse { endpoint, message } => {
                assert_eq!(endpoint, "/devices/queries/devices/v1");
                assert!(message.starts_with("JSON parse error"));
            }
            _ => panic!("Expected MalformedResponse error"),
        }
    }

    #[tokio::test]
    async fn test_convert_request_error_connection_refused() {
        // Port 9 (discard) is not expected to accept HTTP connections
        let error = reqwest::get("http://127.0.0.1:9/")
            .await
            .expect_err("connection should fail");
        let api_error = convert_request_error(error, "/unreachable");

        assert!(matches!(
            api_error,
            ApiError::NetworkFailure { ref endpoint, .. } if endpoint == "/unreachable"
        ));
    }
}
