//! HTTP helper functions for Crux Core
//!
//! Turns `crux_http` results into `DeviceError`s so handlers only ever see
//! domain results.

use crux_http::{HttpError, Response};

use crate::types::DeviceError;

/// Base URL for device endpoints.
///
/// NOTE: This is a dummy prefix required because `crux_http` requires
/// absolute URLs and rejects relative paths (`RelativeUrlWithoutBase` error).
/// The UI shell strips this prefix before sending requests via `fetch()`,
/// so requests stay relative to the page the device served.
pub const BASE_URL: &str = "https://relative";

/// Constructs the full address from a given endpoint.
///
/// # Example
/// ```
/// use restart_control_core::http_helpers::build_url;
/// let url = build_url("/restart");
/// assert_eq!(url, "https://relative/restart");
/// ```
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

/// Returns `true` if the response status is 2xx.
pub fn is_response_success(response: &Response<Vec<u8>>) -> bool {
    response.status().is_success()
}

/// Maps a `crux_http` error onto the device error taxonomy.
///
/// Status errors keep their code, everything else means the request never
/// completed.
pub fn map_http_error(action: &str, error: HttpError) -> DeviceError {
    let mapped = match error {
        HttpError::Http { code, .. } => DeviceError::Http {
            status: u16::from(code),
        },
        other => DeviceError::Transport(other.to_string()),
    };
    log::warn!("{action} failed: {mapped}");
    mapped
}

/// Check response status only (no body parsing).
pub fn check_response_status(
    action: &str,
    response: &Response<Vec<u8>>,
) -> Result<(), DeviceError> {
    if is_response_success(response) {
        Ok(())
    } else {
        let status = u16::from(response.status());
        log::warn!("{action} failed: HTTP {status}");
        Err(DeviceError::Http { status })
    }
}

/// Parse JSON from response body.
pub fn parse_json_response<T: serde::de::DeserializeOwned>(
    action: &str,
    response: &mut Response<Vec<u8>>,
) -> Result<T, DeviceError> {
    check_response_status(action, response)?;

    match response.take_body() {
        Some(body) => serde_json::from_slice(&body).map_err(|e| {
            log::warn!("{action}: JSON parse error: {e}");
            DeviceError::Transport(format!("{action}: JSON parse error: {e}"))
        }),
        None => Err(DeviceError::Transport(format!(
            "{action}: Empty response body"
        ))),
    }
}

/// Process HTTP response result and check status only (no JSON parsing)
pub fn process_status_response(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<(), DeviceError> {
    match result {
        Ok(response) => check_response_status(action, &response),
        Err(e) => Err(map_http_error(action, e)),
    }
}

/// Process HTTP response result and parse JSON
pub fn process_json_response<T: serde::de::DeserializeOwned>(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<T, DeviceError> {
    match result {
        Ok(mut response) => parse_json_response(action, &mut response),
        Err(e) => Err(map_http_error(action, e)),
    }
}


// Note: crux_http::Response has a private constructor, so the response
// based helpers are exercised through the app tests in `tests.rs`.
