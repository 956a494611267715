//! Error types for the Revenda back office
//!
//! Every variant renders to a message fit for a user-facing notification;
//! the controller formats failures as `"ERRO: {error}"` and shows them in
//! the notification area instead of propagating them.

use std::{error::Error as StdError, fmt};

/// Main error type for the Revenda back office
#[derive(Debug)]
pub enum Error {
    /// Transport-level failure (connection refused, timeout, interrupted body)
    Http(String),

    /// Non-success HTTP status from the backend
    Api {
        /// HTTP status code
        status: u16,
        /// Human-readable message, taken from the response body when present
        message: String,
    },

    /// Malformed payload from the backend
    Serialization(serde_json::Error),

    /// Configuration error
    Configuration {
        /// Error message
        message: String,
    },

    /// Other error
    Other(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Http and Api messages are already human-readable and go into
            // notifications verbatim.
            Self::Http(msg) => write!(f, "{msg}"),
            Self::Api { status, message } => {
                if message.is_empty() {
                    write!(f, "HTTP {status}")
                } else {
                    write!(f, "{message}")
                }
            }
            Self::Serialization(err) => write!(f, "Resposta inválida do servidor: {err}"),
            Self::Configuration { message } => write!(f, "Erro de configuração: {message}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_http_error_displays_bare_message() {
        let error = Error::Http("Network error".to_string());
        assert_eq!(format!("{error}"), "Network error");
    }

    #[test]
    fn test_api_error_prefers_body_message() {
        let error = Error::Api {
            status: 403,
            message: "Forbidden".to_string(),
        };
        assert_eq!(format!("{error}"), "Forbidden");
    }

    #[test]
    fn test_api_error_falls_back_to_status() {
        let error = Error::Api {
            status: 502,
            message: String::new(),
        };
        assert_eq!(format!("{error}"), "HTTP 502");
    }

    #[test]
    fn test_configuration_error() {
        let error = Error::Configuration {
            message: "base_url ausente".to_string(),
        };
        assert_eq!(format!("{error}"), "Erro de configuração: base_url ausente");
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
        let error = Error::from(json_error);

        match error {
            Error::Serialization(_) => {}
            _ => panic!("Expected Serialization error variant"),
        }

        assert!(format!("{error}").contains("Resposta inválida do servidor"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_non_wrapping_variants_have_no_source() {
        let error = Error::Http("timeout".to_string());
        assert!(error.source().is_none());

        let error = Error::Other("test".to_string());
        assert!(error.source().is_none());
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<i64> {
            Ok(42)
        }

        fn returns_error() -> Result<i64> {
            Err(Error::Other("test error".to_string()))
        }

        assert!(returns_result().is_ok());
        assert!(returns_error().is_err());
    }
}
