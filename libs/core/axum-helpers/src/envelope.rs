//! Uniform JSON wrapper for every API response.
//!
//! Success: `{"data": <payload>}`. Failure: `{"data": null, "errors": "<message>"}`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Success envelope carrying a payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Envelope<T> {
    /// Response payload, `null` on failure
    pub data: Option<T>,
    /// Short, user-facing error message; omitted on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<String>,
}

impl<T> Envelope<T> {
    pub fn data(data: T) -> Self {
        Self {
            data: Some(data),
            errors: None,
        }
    }
}

/// Failure envelope; `data` is always `null`
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(value_type = Option<Object>)]
    pub data: Option<()>,
    pub errors: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            data: None,
            errors: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_omits_errors() {
        let value = serde_json::to_value(Envelope::data(true)).unwrap();
        assert_eq!(value, json!({ "data": true }));
    }

    #[test]
    fn test_error_body_has_null_data() {
        let value = serde_json::to_value(ErrorBody::new("Invalid request body")).unwrap();
        assert_eq!(value, json!({ "data": null, "errors": "Invalid request body" }));
    }

    #[test]
    fn test_envelope_parses_error_shape() {
        let parsed: Envelope<serde_json::Value> =
            serde_json::from_value(json!({ "data": null, "errors": "nope" })).unwrap();
        assert_eq!(parsed.data, None);
        assert_eq!(parsed.errors.as_deref(), Some("nope"));
    }
}
