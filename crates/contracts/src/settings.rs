//! Settings endpoint contracts: `GET/POST /settings`, `POST /settings/reset`.

use serde::{Deserialize, Serialize};

/// Widget bounds for the settings form. Enforced through input attributes
/// only; the client does not re-validate before send.
pub const CHUNK_SIZE_MIN: i64 = 100;
pub const CHUNK_SIZE_MAX: i64 = 5000;
pub const CHUNK_OVERLAP_MIN: i64 = 0;
pub const TOP_K_MIN: i64 = 1;
pub const TOP_K_MAX: i64 = 100;
pub const TEMPERATURE_MIN: f64 = 0.0;
pub const TEMPERATURE_MAX: f64 = 2.0;
pub const TYPEWRITER_SPEED_MIN: i64 = 10;
pub const TYPEWRITER_SPEED_MAX: i64 = 200;

pub const THEMES: [&str; 3] = ["light", "dark", "auto"];

/// Application settings as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub chunk_size: i64,
    pub chunk_overlap: i64,
    pub top_k_retrieval: i64,
    pub temperature: f64,
    pub model: String,
    pub typewriter_speed: i64,
    pub theme: String,
    pub batch_processing: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            chunk_overlap: 200,
            top_k_retrieval: 10,
            temperature: 0.7,
            model: "gpt-3.5-turbo".to_string(),
            typewriter_speed: 50,
            theme: "light".to_string(),
            batch_processing: true,
        }
    }
}

impl AppSettings {
    /// Upper bound for the chunk-overlap input, derived from the current
    /// chunk size.
    pub fn chunk_overlap_max(&self) -> i64 {
        self.chunk_size - 100
    }
}

/// Response of `POST /settings/reset`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsResetResponse {
    pub settings: AppSettings,
}

/// FastAPI-style error body; `detail` is surfaced inline on save failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_backend_defaults() {
        let s = AppSettings::default();
        assert_eq!(s.chunk_size, 1000);
        assert_eq!(s.chunk_overlap, 200);
        assert_eq!(s.top_k_retrieval, 10);
        assert_eq!(s.model, "gpt-3.5-turbo");
        assert_eq!(s.theme, "light");
        assert!(s.batch_processing);
    }

    #[test]
    fn overlap_bound_tracks_chunk_size() {
        let mut s = AppSettings::default();
        assert_eq!(s.chunk_overlap_max(), 900);
        s.chunk_size = 500;
        assert_eq!(s.chunk_overlap_max(), 400);
    }

    #[test]
    fn reset_response_round_trips() {
        let json = r#"{"settings":{"chunk_size":1000,"chunk_overlap":200,
            "top_k_retrieval":10,"temperature":0.7,"model":"gpt-3.5-turbo",
            "typewriter_speed":50,"theme":"light","batch_processing":true}}"#;
        let r: SettingsResetResponse = serde_json::from_str(json).unwrap();
        assert_eq!(r.settings, AppSettings::default());
    }
}
