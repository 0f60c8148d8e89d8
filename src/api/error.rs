//! API Error Types
//!
//! Taxonomy for requests issued from the dashboards: backend-reported
//! application errors, transport failures, and malformed payloads.
//! `Display` carries the technical detail that goes to the console; the
//! message shown to the user comes from [`ApiError::user_message`].

use thiserror::Error;

/// Errors produced by the HTTP client.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status. `message` is the
    /// backend's JSON `message` field, or the caller's default when the
    /// body carried none.
    #[error("status {code}: {message}")]
    Status { code: u16, message: String },

    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    Parse(String),
}

impl ApiError {
    /// Message suitable for direct display to the user.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Error en la conexión. Inténtalo más tarde.".to_string(),
            ApiError::Status { message, .. } => message.clone(),
            ApiError::Parse(_) => "Respuesta inválida del servidor.".to_string(),
        }
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_shows_generic_connectivity_message() {
        let err = ApiError::Network("Failed to fetch".to_string());
        assert_eq!(err.user_message(), "Error en la conexión. Inténtalo más tarde.");
    }

    #[test]
    fn test_status_error_surfaces_backend_message_verbatim() {
        let err = ApiError::Status {
            code: 401,
            message: "Sesión expirada".to_string(),
        };
        assert_eq!(err.user_message(), "Sesión expirada");
    }

    #[test]
    fn test_display_keeps_technical_detail_for_logs() {
        let err = ApiError::Status {
            code: 400,
            message: "Error al cerrar sesión".to_string(),
        };
        assert_eq!(err.to_string(), "status 400: Error al cerrar sesión");
    }
}
