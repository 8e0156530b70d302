use std::fmt;

use serde_json::Value;

use crate::global_constants;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Server,
    Validation,
    Authentication,
    Authorization,
    Timeout,
    Unknown,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Network => "network",
            ErrorKind::Server => "server",
            ErrorKind::Validation => "validation",
            ErrorKind::Authentication => "authentication",
            ErrorKind::Authorization => "authorization",
            ErrorKind::Timeout => "timeout",
            ErrorKind::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransportFailure {
    Timeout,
    Connect,
    NoResponse(String),
    Other(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ErrorDetails {
    pub kind: ErrorKind,
    pub message: String,
    pub status_code: Option<u16>,
    pub details: Option<Value>,
}

impl ErrorDetails {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status_code: None,
            details: None,
        }
    }

    pub fn unexpected() -> Self {
        Self::new(ErrorKind::Unknown, global_constants::MESSAGE_UNEXPECTED_ERROR)
    }

    pub fn from_message(message: &str) -> Self {
        if message.trim().is_empty() {
            return Self::unexpected();
        }
        Self::new(ErrorKind::Unknown, message)
    }

    pub fn from_transport(failure: TransportFailure) -> Self {
        match failure {
            TransportFailure::Timeout => {
                Self::new(ErrorKind::Timeout, global_constants::MESSAGE_TIMEOUT)
            }
            TransportFailure::Connect => {
                Self::new(ErrorKind::Network, global_constants::MESSAGE_NETWORK_ERROR)
            }
            TransportFailure::NoResponse(reason) => Self {
                kind: ErrorKind::Network,
                message: global_constants::MESSAGE_NO_RESPONSE.to_string(),
                status_code: None,
                details: Some(Value::String(reason)),
            },
            TransportFailure::Other(reason) => Self::from_message(&reason),
        }
    }

    pub fn from_status(status_code: u16, body: Option<Value>) -> Self {
        let detail_text = body
            .as_ref()
            .and_then(|value| value.get("detail"))
            .and_then(Value::as_str)
            .filter(|detail| !detail.trim().is_empty())
            .map(str::to_string);

        let (kind, message) = match status_code {
            401 => (
                ErrorKind::Authentication,
                global_constants::MESSAGE_AUTHENTICATION_REQUIRED.to_string(),
            ),
            403 => (
                ErrorKind::Authorization,
                global_constants::MESSAGE_PERMISSION_DENIED.to_string(),
            ),
            400 | 422 => (
                ErrorKind::Validation,
                detail_text.unwrap_or_else(|| global_constants::MESSAGE_INVALID_INPUT.to_string()),
            ),
            code if code >= 500 => (
                ErrorKind::Server,
                global_constants::MESSAGE_SERVER_ERROR.to_string(),
            ),
            code => (
                ErrorKind::Unknown,
                detail_text.unwrap_or_else(|| format!("Error {}. Please try again.", code)),
            ),
        };

        Self {
            kind,
            message,
            status_code: Some(status_code),
            details: body,
        }
    }
}

impl From<anyhow::Error> for ErrorDetails {
    fn from(error: anyhow::Error) -> Self {
        Self::from_message(&error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unauthorized_maps_to_authentication() {
        let details = ErrorDetails::from_status(401, Some(json!({"detail": "token expired"})));

        assert_eq!(details.kind, ErrorKind::Authentication);
        assert_eq!(details.message, global_constants::MESSAGE_AUTHENTICATION_REQUIRED);
        assert_eq!(details.status_code, Some(401));
    }

    #[test]
    fn test_forbidden_maps_to_authorization() {
        let details = ErrorDetails::from_status(403, None);

        assert_eq!(details.kind, ErrorKind::Authorization);
        assert_eq!(details.message, global_constants::MESSAGE_PERMISSION_DENIED);
    }

    #[test]
    fn test_bad_request_uses_server_detail() {
        let body = json!({"detail": "File is not an image"});

        let details = ErrorDetails::from_status(400, Some(body.clone()));

        assert_eq!(details.kind, ErrorKind::Validation);
        assert_eq!(details.message, "File is not an image");
        assert_eq!(details.details, Some(body));
    }

    #[test]
    fn test_unprocessable_entity_with_structured_detail_falls_back() {
        let body = json!({"detail": [{"loc": ["body", "file"], "msg": "field required"}]});

        let details = ErrorDetails::from_status(422, Some(body));

        assert_eq!(details.kind, ErrorKind::Validation);
        assert_eq!(details.message, global_constants::MESSAGE_INVALID_INPUT);
    }

    #[test]
    fn test_server_errors_hide_detail() {
        let details = ErrorDetails::from_status(
            503,
            Some(json!({"detail": "Error processing image: CUDA out of memory"})),
        );

        assert_eq!(details.kind, ErrorKind::Server);
        assert_eq!(details.message, global_constants::MESSAGE_SERVER_ERROR);
        assert_eq!(details.status_code, Some(503));
    }

    #[test]
    fn test_other_status_uses_detail_or_generic_message() {
        let with_detail = ErrorDetails::from_status(404, Some(json!({"detail": "Not Found"})));
        let without_detail = ErrorDetails::from_status(409, None);

        assert_eq!(with_detail.kind, ErrorKind::Unknown);
        assert_eq!(with_detail.message, "Not Found");
        assert_eq!(without_detail.message, "Error 409. Please try again.");
    }

    #[test]
    fn test_transport_failures() {
        assert_eq!(
            ErrorDetails::from_transport(TransportFailure::Timeout).kind,
            ErrorKind::Timeout
        );

        let connect = ErrorDetails::from_transport(TransportFailure::Connect);
        assert_eq!(connect.kind, ErrorKind::Network);
        assert_eq!(connect.message, global_constants::MESSAGE_NETWORK_ERROR);

        let no_response =
            ErrorDetails::from_transport(TransportFailure::NoResponse("reset".to_string()));
        assert_eq!(no_response.kind, ErrorKind::Network);
        assert_eq!(no_response.message, global_constants::MESSAGE_NO_RESPONSE);
        assert!(no_response.status_code.is_none());

        let other = ErrorDetails::from_transport(TransportFailure::Other(String::new()));
        assert_eq!(other.kind, ErrorKind::Unknown);
        assert_eq!(other.message, global_constants::MESSAGE_UNEXPECTED_ERROR);
    }

    #[test]
    fn test_from_anyhow_keeps_message() {
        let details: ErrorDetails = anyhow::anyhow!("disk full").into();

        assert_eq!(details.kind, ErrorKind::Unknown);
        assert_eq!(details.to_string(), "disk full");
    }
}
