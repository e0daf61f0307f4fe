//! Transient toast notifications.
//!
//! A notification is a fixed-position `<div>` appended to `<body>`. After
//! `visible_ms` its opacity drops to zero so the stylesheet's transition
//! fades it; `fade_ms` later the element is removed.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::rc::Rc;

use serde::Deserialize;

use crate::config::{NotificationConfig, SeverityColors};
use crate::error::UiError;
use crate::platform::{ElementId, ElementSpec, Platform};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "info" => Some(Self::Info),
            "success" => Some(Self::Success),
            "warning" => Some(Self::Warning),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    /// Lenient parse for page scripts: absent or unknown names style as info.
    #[must_use]
    pub fn from_name(raw: Option<&str>) -> Self {
        raw.and_then(Self::parse).unwrap_or_default()
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub fn color(self, colors: &SeverityColors) -> &str {
        match self {
            Self::Info => &colors.info,
            Self::Success => &colors.success,
            Self::Warning => &colors.warning,
            Self::Error => &colors.error,
        }
    }
}

/// Full class attribute for a notification of `severity`.
#[must_use]
pub fn notification_class(config: &NotificationConfig, severity: Severity) -> String {
    format!("fixed top-4 right-4 {} {}", severity.color(&config.colors), config.base_class)
}

/// Show `message` and schedule its fade-out and removal.
pub fn notify(
    platform: &Rc<dyn Platform>,
    config: &NotificationConfig,
    message: &str,
    severity: Severity,
) -> Result<ElementId, UiError> {
    let class = notification_class(config, severity);
    let element = platform.append_to_body(&ElementSpec {
        tag: "div",
        class: &class,
        text: Some(message),
        ..ElementSpec::default()
    })?;
    log::debug!("notification {} shown ({})", element.0, severity.as_str());

    let fade_ms = config.fade_ms;
    let host = Rc::clone(platform);
    platform.set_timeout(
        config.visible_ms,
        Box::new(move || {
            if let Err(e) = host.set_style(element, "opacity", "0") {
                log::warn!("notification {} fade failed: {e}", element.0);
            }
            let remover = Rc::clone(&host);
            host.set_timeout(fade_ms, Box::new(move || remover.remove_element(element)));
        }),
    );
    Ok(element)
}
