//! Browser capability surface consumed by every UI helper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Helpers never touch `window`, `document`, or `navigator` directly. They
//! talk to a [`Platform`], which the WASM build backs with `web-sys`
//! ([`browser::BrowserPlatform`]) and tests back with an in-memory fake that
//! owns a virtual clock.
//!
//! Elements and timers are referred to by opaque ids so that no DOM type
//! leaks into helper code.

#[cfg(feature = "hydrate")]
pub mod browser;
#[cfg(test)]
pub mod fake;


use crate::error::UiError;

/// Handle to an element the platform created or discovered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// Handle to a scheduled timeout or interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Description of an element to append to `<body>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ElementSpec<'a> {
    pub tag: &'a str,
    pub dom_id: Option<&'a str>,
    pub class: &'a str,
    pub text: Option<&'a str>,
    pub inner_html: Option<&'a str>,
}

/// A `<form>` found on the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormRef {
    pub element: ElementId,
    pub method: String,
}

/// An `<a>` found on the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkRef {
    pub element: ElementId,
    pub href: String,
}

/// Parking spot for timer handles whose callback is running.
///
/// A handle cannot be dropped from inside its own callback, so the firing
/// handle is parked and released the next time another one fires.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug)]
pub struct Spent<T> {
    parked: Vec<T>,
}

#[cfg(any(test, feature = "hydrate"))]
impl<T> Default for Spent<T> {
    fn default() -> Self {
        Self { parked: Vec::new() }
    }
}

#[cfg(any(test, feature = "hydrate"))]
impl<T> Spent<T> {
    /// Park `firing` and hand back the handles parked before it for dropping.
    #[must_use]
    pub fn park(&mut self, firing: T) -> Vec<T> {
        let released = std::mem::take(&mut self.parked);
        self.parked.push(firing);
        released
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parked.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parked.is_empty()
    }
}

/// Completion callback for an asynchronous clipboard write.
pub type ClipboardDone = Box<dyn FnOnce(Result<(), UiError>)>;

pub trait Platform {
    /// Create an element from `spec` and append it to `<body>`.
    fn append_to_body(&self, spec: &ElementSpec<'_>) -> Result<ElementId, UiError>;

    /// Set one inline style property on a tracked element.
    fn set_style(&self, element: ElementId, property: &str, value: &str) -> Result<(), UiError>;

    /// Detach a tracked element. Unknown ids are ignored.
    fn remove_element(&self, element: ElementId);

    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerId;

    fn set_interval(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> TimerId;

    /// Cancel a pending timeout or a running interval. Unknown ids are ignored.
    fn clear_timer(&self, timer: TimerId);

    /// Blocking yes/no prompt.
    fn confirm(&self, message: &str) -> bool;

    /// Start an asynchronous clipboard write; `done` runs once it settles.
    fn write_clipboard(&self, text: &str, done: ClipboardDone);

    /// Current `location.pathname`.
    fn pathname(&self) -> String;

    fn forms(&self) -> Vec<FormRef>;

    /// The form's method as of now; scripts may change it after load.
    fn form_method(&self, form: ElementId) -> Option<String>;

    fn links(&self) -> Vec<LinkRef>;

    fn on_submit(&self, form: ElementId, handler: Box<dyn FnMut()>) -> Result<(), UiError>;

    fn on_click(&self, link: ElementId, handler: Box<dyn FnMut()>) -> Result<(), UiError>;
}
