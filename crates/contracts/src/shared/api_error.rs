use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body returned by the backend on a failed request.
///
/// `detail` is either a plain message or a list of validation items,
/// each carrying a `msg` field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorPayload {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorPayload {
    /// Parse a raw response body. Bodies that are not JSON yield an empty payload.
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// Human-readable message carried by the payload, if any
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Array(items) => {
                let parts: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                if parts.is_empty() {
                    None
                } else {
                    Some(parts.join("; "))
                }
            }
            _ => None,
        }
    }

    /// Payload message, or `fallback` when the payload carries none
    pub fn message_or(&self, fallback: &str) -> String {
        self.message().unwrap_or_else(|| fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail() {
        let payload = ErrorPayload::parse(r#"{"detail": "Product 'Kefir' not found."}"#);
        assert_eq!(payload.message().as_deref(), Some("Product 'Kefir' not found."));
    }

    #[test]
    fn test_validation_detail() {
        let payload = ErrorPayload::parse(
            r#"{"detail": [{"loc": ["body", "amount"], "msg": "field required"}, {"msg": "value is not a valid float"}]}"#,
        );
        assert_eq!(
            payload.message().as_deref(),
            Some("field required; value is not a valid float")
        );
    }

    #[test]
    fn test_fallback() {
        assert_eq!(ErrorPayload::parse("<html>").message_or("Failed"), "Failed");
        assert_eq!(ErrorPayload::parse("{}").message_or("Failed"), "Failed");
        assert_eq!(
            ErrorPayload::parse(r#"{"detail": 42}"#).message_or("Failed"),
            "Failed"
        );
        assert_eq!(
            ErrorPayload::parse(r#"{"detail": "  "}"#).message_or("Failed"),
            "Failed"
        );
    }
}
