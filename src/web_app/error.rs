// web_app/error.rs - Error type shared by the API client, service and pages
//
// ApiError travels across the server function boundary, so it is plain
// serde data. With Leptos enabled it also implements FromServerFnError,
// which lets server functions return it directly.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message shown when no response came back at all
pub const NETWORK_MESSAGE: &str = "Network error. Please check your connection.";

#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ApiError {
    /// Bad caller input. Raised before any request is sent.
    #[error("{0}")]
    Validation(String),

    /// No response was received
    #[error("{0}")]
    Network(String),

    /// Non-2xx response, or a 2xx body that could not be decoded
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The backend has no such resource
    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    /// Build a server error, falling back to "Server Error: {status}"
    /// when the backend sent no message
    pub fn server(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("Server Error: {}", status));
        ApiError::Server { status, message }
    }

    pub fn network() -> Self {
        ApiError::Network(NETWORK_MESSAGE.to_string())
    }

    /// HTTP status associated with the failure, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            ApiError::NotFound(_) => Some(404),
            ApiError::Validation(_) | ApiError::Network(_) => None,
        }
    }

    /// Text for notifications, used verbatim
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
mod server_fn_support {
    use super::ApiError;
    use leptos::server_fn::codec::JsonEncoding;
    use leptos::server_fn::error::{FromServerFnError, ServerFnErrorErr};

    impl FromServerFnError for ApiError {
        type Encoder = JsonEncoding;

        fn from_server_fn_error(value: ServerFnErrorErr) -> Self {
            match value {
                // The browser could not reach the site at all
                ServerFnErrorErr::Request(message) => {
                    tracing::warn!("Server function request failed: {}", message);
                    ApiError::network()
                }
                other => ApiError::server(500, Some(other.to_string())),
            }
        }
    }
}
