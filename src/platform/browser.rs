//! `web-sys` implementation of [`Platform`].
//!
//! Elements and timers handed out to helpers are kept alive in id-keyed maps.
//! Event listener closures live for the lifetime of the platform.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::{ClipboardDone, ElementId, ElementSpec, FormRef, LinkRef, Platform, Spent, TimerId};
use crate::error::UiError;

fn dom_error(err: JsValue) -> UiError {
    UiError::Dom(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

pub struct BrowserPlatform {
    window: web_sys::Window,
    document: web_sys::Document,
    next_id: Cell<u64>,
    elements: RefCell<HashMap<ElementId, web_sys::Element>>,
    timeouts: Rc<RefCell<HashMap<TimerId, Timeout>>>,
    spent: Rc<RefCell<Spent<Timeout>>>,
    intervals: RefCell<HashMap<TimerId, Interval>>,
    listeners: RefCell<Vec<Closure<dyn FnMut(web_sys::Event)>>>,
}

impl BrowserPlatform {
    pub fn new() -> Result<Self, UiError> {
        let window = web_sys::window().ok_or(UiError::NoWindow)?;
        let document = window.document().ok_or(UiError::NoDocument)?;
        Ok(Self {
            window,
            document,
            next_id: Cell::new(1),
            elements: RefCell::new(HashMap::new()),
            timeouts: Rc::new(RefCell::new(HashMap::new())),
            spent: Rc::new(RefCell::new(Spent::default())),
            intervals: RefCell::new(HashMap::new()),
            listeners: RefCell::new(Vec::new()),
        })
    }

    #[must_use]
    pub fn document(&self) -> &web_sys::Document {
        &self.document
    }

    /// `true` once `DOMContentLoaded` has fired.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.document.ready_state() != web_sys::DocumentReadyState::Loading
    }

    /// Text of the element with `dom_id`, if present.
    #[must_use]
    pub fn text_of(&self, dom_id: &str) -> Option<String> {
        self.document.get_element_by_id(dom_id).and_then(|el| el.text_content())
    }

    /// Run `callback` once the DOM is parsed.
    pub fn on_ready(&self, callback: impl FnOnce() + 'static) -> Result<(), UiError> {
        let mut callback = Some(callback);
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            if let Some(callback) = callback.take() {
                callback();
            }
        });
        self.document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())
            .map_err(dom_error)?;
        self.listeners.borrow_mut().push(closure);
        Ok(())
    }

    fn track(&self, element: web_sys::Element) -> ElementId {
        let id = ElementId(self.allocate());
        self.elements.borrow_mut().insert(id, element);
        id
    }

    fn allocate(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    fn tracked(&self, element: ElementId) -> Result<web_sys::Element, UiError> {
        self.elements
            .borrow()
            .get(&element)
            .cloned()
            .ok_or_else(|| UiError::Dom(format!("unknown element {}", element.0)))
    }

    fn listen(&self, element: ElementId, event: &str, mut handler: Box<dyn FnMut()>) -> Result<(), UiError> {
        let target = self.tracked(element)?;
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| handler());
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(dom_error)?;
        self.listeners.borrow_mut().push(closure);
        Ok(())
    }

    fn query_all(&self, selector: &str) -> Vec<web_sys::Element> {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            log::warn!("query_selector_all({selector}) failed");
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_ref::<web_sys::Element>().cloned())
            .collect()
    }
}

impl Platform for BrowserPlatform {
    fn append_to_body(&self, spec: &ElementSpec<'_>) -> Result<ElementId, UiError> {
        let body = self.document.body().ok_or(UiError::NoBody)?;
        let element = self.document.create_element(spec.tag).map_err(dom_error)?;
        element.set_class_name(spec.class);
        if let Some(dom_id) = spec.dom_id {
            element.set_id(dom_id);
        }
        if let Some(text) = spec.text {
            element.set_text_content(Some(text));
        }
        if let Some(html) = spec.inner_html {
            element.set_inner_html(html);
        }
        body.append_child(&element).map_err(dom_error)?;
        Ok(self.track(element))
    }

    fn set_style(&self, element: ElementId, property: &str, value: &str) -> Result<(), UiError> {
        let element = self.tracked(element)?;
        let html = element
            .dyn_ref::<web_sys::HtmlElement>()
            .ok_or_else(|| UiError::Dom("element is not an HtmlElement".to_owned()))?;
        html.style().set_property(property, value).map_err(dom_error)
    }

    fn remove_element(&self, element: ElementId) {
        if let Some(el) = self.elements.borrow_mut().remove(&element) {
            el.remove();
        }
    }

    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerId {
        let id = TimerId(self.allocate());
        let timeouts = Rc::clone(&self.timeouts);
        let spent = Rc::clone(&self.spent);
        let timeout = Timeout::new(delay_ms, move || {
            let fired = timeouts.borrow_mut().remove(&id);
            if let Some(fired) = fired {
                let released = spent.borrow_mut().park(fired);
                drop(released);
            }
            callback();
        });
        self.timeouts.borrow_mut().insert(id, timeout);
        id
    }

    fn set_interval(&self, period_ms: u32, mut callback: Box<dyn FnMut()>) -> TimerId {
        let id = TimerId(self.allocate());
        let interval = Interval::new(period_ms, move || callback());
        self.intervals.borrow_mut().insert(id, interval);
        id
    }

    fn clear_timer(&self, timer: TimerId) {
        // Dropping a gloo handle clears the underlying browser timer.
        drop(self.timeouts.borrow_mut().remove(&timer));
        drop(self.intervals.borrow_mut().remove(&timer));
    }

    fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }

    fn write_clipboard(&self, text: &str, done: ClipboardDone) {
        // `navigator.clipboard` is undefined outside secure contexts.
        let navigator = self.window.navigator();
        let clipboard = match js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard")) {
            Ok(value) if !value.is_undefined() && !value.is_null() => value.unchecked_into::<web_sys::Clipboard>(),
            _ => {
                done(Err(UiError::ClipboardUnavailable));
                return;
            }
        };
        let promise = clipboard.write_text(text);
        wasm_bindgen_futures::spawn_local(async move {
            let result = JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| UiError::ClipboardRejected(e.as_string().unwrap_or_else(|| format!("{e:?}"))));
            done(result);
        });
    }

    fn pathname(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }

    fn forms(&self) -> Vec<FormRef> {
        self.query_all("form")
            .into_iter()
            .map(|el| {
                let method = el
                    .dyn_ref::<web_sys::HtmlFormElement>()
                    .map_or_else(|| "get".to_owned(), web_sys::HtmlFormElement::method);
                FormRef { element: self.track(el), method }
            })
            .collect()
    }

    fn form_method(&self, form: ElementId) -> Option<String> {
        let element = self.elements.borrow().get(&form).cloned()?;
        element.dyn_ref::<web_sys::HtmlFormElement>().map(web_sys::HtmlFormElement::method)
    }

    fn links(&self) -> Vec<LinkRef> {
        self.query_all("a[href]")
            .into_iter()
            .map(|el| {
                let href = el.get_attribute("href").unwrap_or_default();
                LinkRef { element: self.track(el), href }
            })
            .collect()
    }

    fn on_submit(&self, form: ElementId, handler: Box<dyn FnMut()>) -> Result<(), UiError> {
        self.listen(form, "submit", handler)
    }

    fn on_click(&self, link: ElementId, handler: Box<dyn FnMut()>) -> Result<(), UiError> {
        self.listen(link, "click", handler)
    }
}
