use serde_json::Value;

use super::transport::ApiResponse;

/// Every way a call can fail, reduced to something a toast can show
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// No response: connection refused, CORS, aborted
    #[error("{0}")]
    Network(String),

    /// Response with a status other than the one the operation expects
    #[error("{}", status_message(.status, .status_text, .message))]
    Status {
        status: u16,
        status_text: String,
        message: Option<String>,
    },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),

    /// The entity has no identity key, so there is no item URL to call
    #[error("{0} has no key")]
    MissingKey(&'static str),
}

impl ApiError {
    /// Error for a response that did not carry the expected status
    pub fn from_response(response: &ApiResponse) -> Self {
        ApiError::Status {
            status: response.status,
            status_text: response.status_text.trim().to_string(),
            message: response.body.as_ref().and_then(server_message),
        }
    }

    /// Single human-readable message, using `fallback` when the server said nothing useful
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Status {
                status,
                status_text,
                message: None,
            } if status_text.is_empty() => format!("{} ({})", fallback, status),
            ApiError::Status {
                status,
                status_text,
                message: None,
            } => format!("{}: {} ({})", fallback, status_text, status),
            ApiError::Network(e) | ApiError::Decode(e) | ApiError::Encode(e) => {
                format!("{}: {}", fallback, e)
            }
            ApiError::MissingKey(_) => format!("{}: {}", fallback, self),
        }
    }
}

fn status_message(status: &u16, status_text: &str, message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None if status_text.is_empty() => format!("Request failed with status {}", status),
        None => format!("{} ({})", status_text, status),
    }
}

/// `message` or `error` string from an error body
fn server_message(body: &Value) -> Option<String> {
    match body {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Object(map) => ["message", "error"]
            .iter()
            .filter_map(|k| map.get(*k))
            .find_map(|v| v.as_str().filter(|s| !s.trim().is_empty()))
            .map(str::to_string),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn server_message_wins_over_fallback() {
        let resp = ApiResponse::new(409, Some(json!({"message": "Vendor already exists"})));
        let err = ApiError::from_response(&resp);
        assert_eq!(err.message_or("Failed to create vendor"), "Vendor already exists");
        assert_eq!(err.to_string(), "Vendor already exists");
    }

    #[test]
    fn error_key_is_read_too() {
        let resp = ApiResponse::new(401, Some(json!({"error": "Token expired"})));
        assert_eq!(
            ApiError::from_response(&resp).message_or("x"),
            "Token expired"
        );
    }

    #[test]
    fn fallback_carries_status_when_body_is_silent() {
        let resp = ApiResponse::new(500, None);
        let err = ApiError::from_response(&resp);
        assert_eq!(err.message_or("Failed to load vendors"), "Failed to load vendors (500)");
        assert_eq!(err.to_string(), "Request failed with status 500");
    }

    #[test]
    fn status_text_fills_in_for_a_silent_body() {
        let resp = ApiResponse {
            status: 503,
            status_text: "Service Unavailable".into(),
            body: None,
        };
        let err = ApiError::from_response(&resp);
        assert_eq!(
            err.message_or("Failed to load vendors"),
            "Failed to load vendors: Service Unavailable (503)"
        );
        assert_eq!(err.to_string(), "Service Unavailable (503)");
    }

    #[test]
    fn missing_key_names_the_entity() {
        let err = ApiError::MissingKey("Customer");
        assert_eq!(
            err.message_or("Failed to delete customer"),
            "Failed to delete customer: Customer has no key"
        );
    }

    #[test]
    fn network_errors_are_prefixed() {
        let err = ApiError::Network("Failed to send request: refused".into());
        assert_eq!(
            err.message_or("Failed to load sales"),
            "Failed to load sales: Failed to send request: refused"
        );
    }
}
