//! Widget configuration.
//!
//! The page may embed a JSON object in a
//! `<script id="programedit-config" type="application/json">` element; any
//! field it leaves out keeps its default.

use serde::{Deserialize, Serialize};

use crate::flash::FlashSettings;
use crate::messages::Language;
use crate::programs::FORM_ID;
use crate::WidgetError;

/// Id of the script element holding the JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "programedit-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub programs_endpoint: String,
    /// Session probe used when a conflict body carries no wait time.
    pub access_endpoint: String,
    pub container_id: String,
    pub add_button_id: String,
    pub result_frame_selector: String,
    pub form_id: String,
    /// Forced UI language; detected from `<html lang>` when absent.
    pub language: Option<Language>,
    pub flash: FlashSettings,
    pub countdown_tick_ms: u32,
    /// Wait used when neither the conflict body nor the probe yields one.
    pub fallback_wait_secs: i64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            programs_endpoint: "/programs".to_string(),
            access_endpoint: "/access".to_string(),
            container_id: "programs".to_string(),
            add_button_id: "btn-add".to_string(),
            result_frame_selector: "iframe".to_string(),
            form_id: FORM_ID.to_string(),
            language: None,
            flash: FlashSettings::default(),
            countdown_tick_ms: 1000,
            fallback_wait_secs: 0,
        }
    }
}

impl WidgetConfig {
    pub fn from_json_str(json: &str) -> Result<Self, WidgetError> {
        serde_json::from_str(json).map_err(|e| WidgetError::Config(e.to_string()))
    }

    /// Configured language, else the page's language tag, else Swedish.
    pub fn resolve_language(&self, page_tag: Option<&str>) -> Language {
        self.language
            .or_else(|| page_tag.and_then(Language::from_tag))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(WidgetConfig::from_json_str("{}").unwrap(), WidgetConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = WidgetConfig::from_json_str(
            r#"{"programs_endpoint": "/api/programs", "language": "en", "flash": {"flashes": 5}}"#,
        )
        .unwrap();
        assert_eq!(config.programs_endpoint, "/api/programs");
        assert_eq!(config.container_id, "programs");
        assert_eq!(config.language, Some(Language::English));
        assert_eq!(config.flash.flashes, 5);
        assert_eq!(config.flash.highlight, "#AAFFAA");
    }

    #[test]
    fn test_malformed_is_config_error() {
        let result = WidgetConfig::from_json_str("{\"countdown_tick_ms\": \"soon\"}");
        assert!(matches!(result, Err(WidgetError::Config(_))));
    }

    #[test]
    fn test_resolve_language_order() {
        let mut config = WidgetConfig::default();
        assert_eq!(config.resolve_language(None), Language::Swedish);
        assert_eq!(config.resolve_language(Some("en-US")), Language::English);
        assert_eq!(config.resolve_language(Some("fi")), Language::Swedish);

        config.language = Some(Language::Swedish);
        assert_eq!(config.resolve_language(Some("en")), Language::Swedish);
    }
}
