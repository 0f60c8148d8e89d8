//! HTTP API Client
//!
//! Request wrappers for the clinic REST API. Every call includes the
//! session cookie so the backend can authenticate the user; no request
//! is retried.

use gloo_net::http::{Request, Response};
use serde::Deserialize;
use web_sys::RequestCredentials;

use crate::api::error::{ApiError, ApiResult};
use crate::state::patient::Patient;

/// Default API base URL: same origin as the served app.
pub const DEFAULT_API_BASE: &str = "";

/// Get the API base URL from local storage or use the default.
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("turnos_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage.
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("turnos_api_url", url);
        }
    }
}

/// Error body sent by the backend on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Build a status error from a failed response, preferring the backend's
/// `message` over the caller's default.
async fn status_error(response: Response, default_msg: &str) -> ApiError {
    let code = response.status();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| default_msg.to_string());
    ApiError::Status { code, message }
}

/// Join the configured base with an endpoint path. A path without a
/// leading slash is passed through untouched and resolves against the
/// current page URL instead of the base.
fn join_endpoint(base: &str, endpoint: &str) -> String {
    if endpoint.starts_with('/') {
        format!("{}{}", base, endpoint)
    } else {
        endpoint.to_string()
    }
}

/// Fetch the logged-in patient together with their appointment list.
pub async fn fetch_patient() -> ApiResult<Patient> {
    let response = Request::get(&format!("{}/api/pacientes/turnos", get_api_base()))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(status_error(response, "Error al obtener los turnos").await);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Cancel one appointment by identifier.
pub async fn cancel_appointment(id: i64) -> ApiResult<()> {
    let response = Request::delete(&format!("{}/api/turnos/{}", get_api_base(), id))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(status_error(response, "Error al cancelar el turno").await);
    }

    Ok(())
}

/// Terminate the session against a role-specific endpoint. The caller is
/// responsible for clearing the cookie and navigating away on success.
pub async fn logout(endpoint: &str) -> ApiResult<()> {
    let url = join_endpoint(&get_api_base(), endpoint);

    let response = Request::post(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(status_error(response, "Error al cerrar sesión").await);
    }

    Ok(())
}
