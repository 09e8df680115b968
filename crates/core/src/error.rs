use serde::Serialize;

/// Outcome of a failed tool invocation.
///
/// Errors are created where the failure happens and travel unchanged to the
/// caller. Nothing in this workspace retries on any of them.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum ToolError {
    /// The caller sent parameters that do not match the tool schema.
    #[error("{message}")]
    #[serde(rename = "validation_error")]
    Validation { message: String },

    /// The news API answered with a non-2xx status or a payload we can't use.
    #[error("GNews API error (HTTP {status}): {message}")]
    #[serde(rename = "upstream_error")]
    Upstream { status: u16, message: String },

    /// The request never produced an HTTP response.
    #[error("Request error: {message}")]
    #[serde(rename = "network_error")]
    Network { message: String },
}

impl ToolError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Stable tag used by the protocol layer to tell error kinds apart.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation_error",
            Self::Upstream { .. } => "upstream_error",
            Self::Network { .. } => "network_error",
        }
    }

    /// HTTP status attached to upstream errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Extract the message of a non-2xx GNews response.
///
/// GNews reports failures as `{"errors": [...]}`, and occasionally as an object
/// keyed by parameter name. Anything else falls back to the raw body, and an
/// empty body to `HTTP <status>`.
pub fn upstream_error_message(status: u16, body: &str) -> String {
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body) {
        match map.get("errors") {
            Some(serde_json::Value::Array(errors)) => {
                return errors
                    .first()
                    .map(value_to_message)
                    .unwrap_or_else(|| "Unknown API error".to_string());
            }
            Some(serde_json::Value::Object(errors)) if !errors.is_empty() => {
                return errors
                    .values()
                    .map(value_to_message)
                    .collect::<Vec<_>>()
                    .join("; ");
            }
            Some(serde_json::Value::String(error)) => return error.clone(),
            _ => {}
        }
    }

    let body = body.trim();
    if body.is_empty() {
        format!("HTTP {status}")
    } else {
        body.to_string()
    }
}

fn value_to_message(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(ToolError::validation("x").kind(), "validation_error");
        assert_eq!(ToolError::upstream(500, "x").kind(), "upstream_error");
        assert_eq!(ToolError::network("x").kind(), "network_error");
    }

    #[test]
    fn test_status_only_on_upstream() {
        assert_eq!(ToolError::upstream(429, "slow down").status(), Some(429));
        assert_eq!(ToolError::validation("bad").status(), None);
        assert_eq!(ToolError::network("refused").status(), None);
    }

    #[test]
    fn test_serialize_carries_kind_tag() {
        let value = serde_json::to_value(ToolError::upstream(403, "Forbidden")).unwrap();
        assert_eq!(value["kind"], "upstream_error");
        assert_eq!(value["status"], 403);
        assert_eq!(value["message"], "Forbidden");
    }

    #[test]
    fn test_upstream_message_from_errors_array() {
        let body = r#"{"errors":["You have reached your request limit for today."]}"#;
        assert_eq!(
            upstream_error_message(429, body),
            "You have reached your request limit for today."
        );
    }

    #[test]
    fn test_upstream_message_from_empty_errors_array() {
        assert_eq!(
            upstream_error_message(400, r#"{"errors":[]}"#),
            "Unknown API error"
        );
    }

    #[test]
    fn test_upstream_message_from_errors_object() {
        let body = r#"{"errors":{"q":"The query is required."}}"#;
        assert_eq!(upstream_error_message(400, body), "The query is required.");
    }

    #[test]
    fn test_upstream_message_falls_back_to_body() {
        assert_eq!(
            upstream_error_message(502, "<html>Bad Gateway</html>"),
            "<html>Bad Gateway</html>"
        );
    }

    #[test]
    fn test_upstream_message_json_without_errors_uses_body() {
        assert_eq!(
            upstream_error_message(500, r#"{"detail":"boom"}"#),
            r#"{"detail":"boom"}"#
        );
    }

    #[test]
    fn test_upstream_message_empty_body() {
        assert_eq!(upstream_error_message(503, "  "), "HTTP 503");
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ToolError::upstream(401, "Invalid API key").to_string(),
            "GNews API error (HTTP 401): Invalid API key"
        );
        assert_eq!(
            ToolError::network("connection refused").to_string(),
            "Request error: connection refused"
        );
    }
}
