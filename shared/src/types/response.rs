//! API response envelope
//!
//! Every endpoint answers with the same `{success, message}` shape;
//! validation failures additionally carry a per-field error map.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standard response envelope for all endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Whether the operation succeeded
    pub success: bool,

    /// Human-readable outcome message
    pub message: String,

    /// Field-level validation messages, present on 400 validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<HashMap<String, Vec<String>>>,
}

impl ApiResponse {
    /// Create a success response
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            errors: None,
        }
    }

    /// Create a failure response
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: None,
        }
    }

    /// Create a failure response carrying aggregated field errors
    pub fn failure_with_errors(
        message: impl Into<String>,
        errors: HashMap<String, Vec<String>>,
    ) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: Some(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response() {
        let response = ApiResponse::success("Signup successful.");
        assert!(response.success);
        assert_eq!(response.message, "Signup successful.");
        assert!(response.errors.is_none());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert!(json.get("errors").is_none());
    }

    #[test]
    fn test_failure_with_errors() {
        let mut errors = HashMap::new();
        errors.insert("email".to_string(), vec!["Invalid email address".to_string()]);
        let response = ApiResponse::failure_with_errors("Validation failed", errors);

        assert!(!response.success);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["errors"]["email"][0], "Invalid email address");
    }
}
