//! Error type shared by platform adapters and UI helpers.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UiError {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("dom operation failed: {0}")]
    Dom(String),
    #[error("clipboard api unavailable")]
    ClipboardUnavailable,
    #[error("clipboard write rejected: {0}")]
    ClipboardRejected(String),
    #[error("invalid ui config: {0}")]
    Config(String),
}
