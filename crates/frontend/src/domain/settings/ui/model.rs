//! HTTP calls for the settings endpoints.

use crate::shared::api_utils::api_url;
use contracts::settings::{AppSettings, ErrorBody, SettingsResetResponse};
use gloo_net::http::Request;

/// `GET /settings`. Returns the settings object directly.
pub async fn fetch_settings() -> Result<AppSettings, String> {
    let response = Request::get(&api_url("/settings"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("Settings load failed: {}", response.status_text()));
    }

    response
        .json::<AppSettings>()
        .await
        .map_err(|e| format!("Invalid response: {}", e))
}

/// A save failure that made it to the backend may carry a `detail` string
/// worth surfacing; a transport failure carries none.
pub enum SaveError {
    Rejected(Option<String>),
    Transport(String),
}

/// `POST /settings` with the full settings object.
pub async fn save_settings(settings: &AppSettings) -> Result<(), SaveError> {
    let response = Request::post(&api_url("/settings"))
        .json(settings)
        .map_err(|e| SaveError::Transport(format!("Request failed: {}", e)))?
        .send()
        .await
        .map_err(|e| SaveError::Transport(format!("Request failed: {}", e)))?;

    if response.ok() {
        return Ok(());
    }

    let detail = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|b| b.detail);
    Err(SaveError::Rejected(detail))
}

/// `POST /settings/reset`. Returns the defaults the backend reverted to.
pub async fn reset_settings() -> Result<AppSettings, String> {
    let response = Request::post(&api_url("/settings/reset"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("Settings reset failed: {}", response.status_text()));
    }

    response
        .json::<SettingsResetResponse>()
        .await
        .map(|r| r.settings)
        .map_err(|e| format!("Invalid response: {}", e))
}
