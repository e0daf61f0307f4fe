//! Page-ready wiring.
//!
//! - every `<form>` shows the loading overlay on submit unless its method,
//!   read when the submit happens, is `get`
//! - every `<a>` whose `href` contains the export marker announces the export
//! - on the scrapers page, an interval runs the [`Ui`] poll hook

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use std::rc::Rc;

use crate::notify::Severity;
use crate::platform::TimerId;
use crate::ui::Ui;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    pub forms_wired: usize,
    pub export_links_wired: usize,
    pub poll_timer: Option<TimerId>,
}

/// Search/filter forms submit with `get` and must not block on the overlay.
#[must_use]
pub fn shows_loader_on_submit(method: &str) -> bool {
    !method.trim().eq_ignore_ascii_case("get")
}

#[must_use]
pub fn is_export_link(href: &str, marker: &str) -> bool {
    !marker.is_empty() && href.contains(marker)
}

#[must_use]
pub fn polls_on_path(pathname: &str, poll_path: &str) -> bool {
    !poll_path.is_empty() && pathname == poll_path
}

/// Attach all page handlers. Handlers hold a weak reference to `ui`.
pub fn bootstrap(ui: &Rc<Ui>) -> BootstrapReport {
    let platform = ui.platform();
    let config = ui.config();
    let mut report = BootstrapReport::default();

    for form in platform.forms() {
        log::debug!("wiring form {} (method {})", form.element.0, form.method);
        let weak = Rc::downgrade(ui);
        let element = form.element;
        let handler = Box::new(move || {
            let Some(ui) = weak.upgrade() else {
                return;
            };
            let method = ui.platform().form_method(element).unwrap_or_default();
            if shows_loader_on_submit(&method) {
                ui.show_loading();
            }
        });
        match platform.on_submit(form.element, handler) {
            Ok(()) => report.forms_wired += 1,
            Err(e) => log::warn!("form {} not wired: {e}", form.element.0),
        }
    }

    for link in platform.links() {
        if !is_export_link(&link.href, &config.bootstrap.export_href_marker) {
            continue;
        }
        let weak = Rc::downgrade(ui);
        let handler = Box::new(move || {
            if let Some(ui) = weak.upgrade() {
                ui.notify(&ui.config().messages.export_started, Severity::Info);
            }
        });
        match platform.on_click(link.element, handler) {
            Ok(()) => report.export_links_wired += 1,
            Err(e) => log::warn!("export link {} not wired: {e}", link.href),
        }
    }

    if polls_on_path(&platform.pathname(), &config.bootstrap.poll_path) {
        let weak = Rc::downgrade(ui);
        let timer = platform.set_interval(
            config.bootstrap.poll_interval_ms,
            Box::new(move || {
                if let Some(ui) = weak.upgrade() {
                    ui.run_poll_hook();
                }
            }),
        );
        report.poll_timer = Some(timer);
    }

    log::info!(
        "PakJobs UI initialized: {} forms, {} export links, polling={}",
        report.forms_wired,
        report.export_links_wired,
        report.poll_timer.is_some()
    );
    report
}
