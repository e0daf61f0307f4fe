//! The UI component instance.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`Ui`] owns the injected [`Platform`], the resolved [`UiConfig`], and the
//! only piece of mutable state in the crate: the loading overlay handle. Page
//! handlers and the JS exports all go through one shared `Rc<Ui>`.
//!
//! Helpers that the page calls fire-and-forget never return errors; platform
//! failures are logged at `warn` and dropped.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::clipboard;
use crate::config::UiConfig;
use crate::confirm;
use crate::debounce::Debouncer;
use crate::loading::LoadingOverlay;
use crate::notify::{self, Severity};
use crate::platform::Platform;

type PollHook = Box<dyn FnMut()>;

pub struct Ui {
    platform: Rc<dyn Platform>,
    config: UiConfig,
    overlay: RefCell<LoadingOverlay>,
    poll_hook: RefCell<Option<PollHook>>,
}

impl Ui {
    pub fn new(platform: Rc<dyn Platform>, config: UiConfig) -> Rc<Self> {
        Rc::new(Self {
            platform,
            config,
            overlay: RefCell::new(LoadingOverlay::new()),
            poll_hook: RefCell::new(None),
        })
    }

    #[must_use]
    pub fn platform(&self) -> Rc<dyn Platform> {
        Rc::clone(&self.platform)
    }

    #[must_use]
    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn notify(&self, message: &str, severity: Severity) {
        if let Err(e) = notify::notify(&self.platform, &self.config.notification, message, severity) {
            log::warn!("notification failed: {e}");
        }
    }

    pub fn show_loading(&self) {
        if let Err(e) = self.overlay.borrow_mut().show(&*self.platform, &self.config.loader) {
            log::warn!("loading overlay failed: {e}");
        }
    }

    pub fn hide_loading(&self) {
        self.overlay.borrow_mut().hide(&*self.platform);
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.overlay.borrow().is_shown()
    }

    pub fn confirm_scraper_run(&self, site: &str, mode: &str) -> bool {
        confirm::confirm_scraper_run(&*self.platform, site, mode)
    }

    /// Copy `text` and announce the settled outcome as a notification.
    pub fn copy_to_clipboard(self: &Rc<Self>, text: &str) {
        let ui = Rc::downgrade(self);
        clipboard::write_text(&*self.platform, text, move |outcome| {
            let Some(ui) = ui.upgrade() else {
                return;
            };
            let (message, severity) = outcome.notification(&ui.config.messages);
            ui.notify(message, severity);
        });
    }

    pub fn debounce<A: 'static>(&self, wait_ms: u32, callback: impl Fn(A) + 'static) -> Debouncer<A> {
        Debouncer::new(self.platform(), wait_ms, callback)
    }

    /// Install the action run on each scraper-page poll tick.
    pub fn set_poll_hook(&self, hook: impl FnMut() + 'static) {
        *self.poll_hook.borrow_mut() = Some(Box::new(hook));
    }

    pub fn clear_poll_hook(&self) {
        *self.poll_hook.borrow_mut() = None;
    }

    /// Run the poll hook, if any. No-op without a hook.
    pub fn run_poll_hook(&self) {
        let Ok(mut slot) = self.poll_hook.try_borrow_mut() else {
            log::debug!("poll hook re-entered; skipping tick");
            return;
        };
        match slot.as_mut() {
            Some(hook) => hook(),
            None => log::debug!("poll tick (no hook installed)"),
        }
    }
}
