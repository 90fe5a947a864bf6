//! Settings form state.

use contracts::settings::AppSettings;
use leptos::prelude::*;

pub const SAVE_SUCCESS: &str = "Settings saved successfully!";
pub const SAVE_ERROR: &str = "Error saving settings";
pub const RESET_SUCCESS: &str = "Settings reset to defaults!";
pub const RESET_ERROR: &str = "Error resetting settings";

/// Inline status banners are styled by whether the text carries an error.
pub fn is_error_message(message: &str) -> bool {
    message.contains("Error")
}

/// Save failure message: the backend's `detail` when present, a generic
/// string otherwise.
pub fn save_error_message(detail: Option<String>) -> String {
    match detail {
        Some(detail) => format!("Error: {}", detail),
        None => SAVE_ERROR.to_string(),
    }
}

#[derive(Clone, Copy)]
pub struct SettingsVm {
    pub settings: RwSignal<AppSettings>,
    pub is_loading: RwSignal<bool>,
    pub is_saving: RwSignal<bool>,
    pub message: RwSignal<String>,
}

impl SettingsVm {
    pub fn new() -> Self {
        Self {
            settings: RwSignal::new(AppSettings::default()),
            is_loading: RwSignal::new(true),
            is_saving: RwSignal::new(false),
            message: RwSignal::new(String::new()),
        }
    }

    pub fn apply(&self, settings: AppSettings) {
        self.settings.set(settings);
    }

    pub fn snapshot(&self) -> AppSettings {
        self.settings.get_untracked()
    }
}

impl Default for SettingsVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_kind_is_detected_by_error_prefix() {
        assert!(is_error_message("Error saving settings"));
        assert!(is_error_message("Error: chunk_size out of range"));
        assert!(!is_error_message(SAVE_SUCCESS));
        assert!(!is_error_message(RESET_SUCCESS));
    }

    #[test]
    fn save_error_prefers_backend_detail() {
        assert_eq!(
            save_error_message(Some("chunk_size out of range".to_string())),
            "Error: chunk_size out of range"
        );
        assert_eq!(save_error_message(None), SAVE_ERROR);
    }

    #[test]
    fn load_failure_leaves_defaults_in_place() {
        let vm = SettingsVm::new();
        assert_eq!(vm.snapshot(), AppSettings::default());
        assert!(vm.is_loading.get_untracked());
    }

    #[test]
    fn apply_replaces_the_whole_object() {
        let vm = SettingsVm::new();
        let mut custom = AppSettings::default();
        custom.chunk_size = 500;
        custom.theme = "dark".to_string();
        vm.apply(custom.clone());
        assert_eq!(vm.snapshot(), custom);
    }
}
