//! Full-viewport loading overlay.
//!
//! The overlay handle is owned by the caller rather than looked up by DOM id,
//! so two `show` calls before a `hide` still produce a single element.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

use crate::config::LoaderConfig;
use crate::error::UiError;
use crate::platform::{ElementId, ElementSpec, Platform};

#[derive(Debug, Default)]
pub struct LoadingOverlay {
    element: Option<ElementId>,
}

impl LoadingOverlay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the overlay unless it is already shown.
    pub fn show(&mut self, platform: &dyn Platform, config: &LoaderConfig) -> Result<ElementId, UiError> {
        if let Some(element) = self.element {
            return Ok(element);
        }
        let element = platform.append_to_body(&ElementSpec {
            tag: "div",
            dom_id: Some(config.element_id.as_str()),
            class: &config.class,
            inner_html: Some(config.inner_html.as_str()),
            ..ElementSpec::default()
        })?;
        log::debug!("loading overlay {} shown", element.0);
        self.element = Some(element);
        Ok(element)
    }

    /// Remove the overlay. Returns `false` when nothing was shown.
    pub fn hide(&mut self, platform: &dyn Platform) -> bool {
        let Some(element) = self.element.take() else {
            return false;
        };
        platform.remove_element(element);
        log::debug!("loading overlay {} hidden", element.0);
        true
    }

    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.element.is_some()
    }

    #[must_use]
    pub fn element(&self) -> Option<ElementId> {
        self.element
    }
}
