//! Asynchronous clipboard write with a settled outcome.
//!
//! Failures never escape: the outcome is handed to the caller's completion,
//! which turns it into a user-visible notification.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use crate::config::Messages;
use crate::error::UiError;
use crate::notify::Severity;
use crate::platform::Platform;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed(UiError),
}

impl CopyOutcome {
    /// Notification text and severity announcing this outcome.
    #[must_use]
    pub fn notification<'a>(&self, messages: &'a Messages) -> (&'a str, Severity) {
        match self {
            Self::Copied => (messages.copied.as_str(), Severity::Success),
            Self::Failed(_) => (messages.copy_failed.as_str(), Severity::Error),
        }
    }
}

/// Write `text` to the clipboard; `on_settled` runs after the write resolves.
pub fn write_text(platform: &dyn Platform, text: &str, on_settled: impl FnOnce(CopyOutcome) + 'static) {
    platform.write_clipboard(
        text,
        Box::new(move |result| {
            let outcome = match result {
                Ok(()) => CopyOutcome::Copied,
                Err(e) => {
                    log::warn!("clipboard write failed: {e}");
                    CopyOutcome::Failed(e)
                }
            };
            on_settled(outcome);
        }),
    );
}
