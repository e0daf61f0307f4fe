//! UI configuration with page-overridable defaults.
//!
//! A page may embed `<script id="ui-config" type="application/json">` to
//! override any subset of fields; everything missing falls back to the
//! defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::UiError;

/// DOM id of the optional embedded JSON config block.
pub const CONFIG_SCRIPT_ID: &str = "ui-config";

pub const DEFAULT_NOTIFICATION_VISIBLE_MS: u32 = 3000;
pub const DEFAULT_NOTIFICATION_FADE_MS: u32 = 300;
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 30_000;
pub const DEFAULT_LOADER_ID: &str = "global-loader";

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub notification: NotificationConfig,
    pub loader: LoaderConfig,
    pub bootstrap: BootstrapConfig,
    pub messages: Messages,
}

impl UiConfig {
    /// Parse a (possibly partial) JSON override.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        serde_json::from_str(raw).map_err(|e| UiError::Config(e.to_string()))
    }

    /// Parse `raw` when present, falling back to defaults on absence or error.
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring {CONFIG_SCRIPT_ID}: {e}");
                Self::default()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub visible_ms: u32,
    pub fade_ms: u32,
    /// Classes shared by every notification; the severity color is prepended.
    pub base_class: String,
    pub colors: SeverityColors,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            visible_ms: DEFAULT_NOTIFICATION_VISIBLE_MS,
            fade_ms: DEFAULT_NOTIFICATION_FADE_MS,
            base_class: "text-white px-6 py-3 rounded-lg shadow-lg z-50 transition-opacity".to_owned(),
            colors: SeverityColors::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SeverityColors {
    pub info: String,
    pub success: String,
    pub warning: String,
    pub error: String,
}

impl Default for SeverityColors {
    fn default() -> Self {
        Self {
            info: "bg-blue-500".to_owned(),
            success: "bg-green-500".to_owned(),
            warning: "bg-yellow-500".to_owned(),
            error: "bg-red-500".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub element_id: String,
    pub class: String,
    pub inner_html: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            element_id: DEFAULT_LOADER_ID.to_owned(),
            class: "fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50".to_owned(),
            inner_html: r#"<div class="spinner"></div>"#.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Links whose `href` contains this substring announce an export.
    pub export_href_marker: String,
    /// Exact pathname on which the poll hook is scheduled.
    pub poll_path: String,
    pub poll_interval_ms: u32,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            export_href_marker: "/export".to_owned(),
            poll_path: "/scrapers".to_owned(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub copied: String,
    pub copy_failed: String,
    pub export_started: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            copied: "Copied to clipboard!".to_owned(),
            copy_failed: "Failed to copy".to_owned(),
            export_started: "Export started...".to_owned(),
        }
    }
}
