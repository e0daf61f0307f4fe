//! In-memory [`Platform`] for native tests.
//!
//! Time only moves when a test calls [`FakePlatform::advance`]. Clipboard
//! writes stay pending until [`FakePlatform::settle_clipboard`] so tests can
//! observe ordering around the asynchronous completion.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::{ClipboardDone, ElementId, ElementSpec, FormRef, LinkRef, Platform, TimerId};
use crate::error::UiError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FakeElement {
    pub id: ElementId,
    pub tag: String,
    pub dom_id: Option<String>,
    pub class: String,
    pub text: Option<String>,
    pub inner_html: Option<String>,
    pub styles: Vec<(String, String)>,
    pub attached: bool,
}

impl FakeElement {
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .rev()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipboardMode {
    Accept,
    Reject,
    Unavailable,
}

enum TimerCallback {
    Once(Box<dyn FnOnce()>),
    Repeat(Box<dyn FnMut()>),
}

struct FakeTimer {
    id: TimerId,
    due_ms: u64,
    period_ms: Option<u32>,
    callback: TimerCallback,
}

struct FakeTarget {
    element: ElementId,
    attr: String,
    handlers: Vec<Box<dyn FnMut()>>,
}

struct PendingWrite {
    text: String,
    done: ClipboardDone,
}

struct FakeState {
    now_ms: u64,
    next_id: u64,
    elements: Vec<FakeElement>,
    timers: Vec<FakeTimer>,
    firing: Option<TimerId>,
    firing_cleared: bool,
    confirm_answers: VecDeque<bool>,
    prompts: Vec<String>,
    clipboard_mode: ClipboardMode,
    pending_writes: Vec<PendingWrite>,
    clipboard_text: Option<String>,
    pathname: String,
    forms: Vec<FakeTarget>,
    links: Vec<FakeTarget>,
}

pub struct FakePlatform {
    state: RefCell<FakeState>,
}

impl Default for FakePlatform {
    fn default() -> Self {
        Self {
            state: RefCell::new(FakeState {
                now_ms: 0,
                next_id: 1,
                elements: Vec::new(),
                timers: Vec::new(),
                firing: None,
                firing_cleared: false,
                confirm_answers: VecDeque::new(),
                prompts: Vec::new(),
                clipboard_mode: ClipboardMode::Accept,
                pending_writes: Vec::new(),
                clipboard_text: None,
                pathname: "/".to_owned(),
                forms: Vec::new(),
                links: Vec::new(),
            }),
        }
    }
}

impl FakePlatform {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> u64 {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        id
    }

    // --- Scripting ---

    pub fn set_pathname(&self, path: &str) {
        path.clone_into(&mut self.state.borrow_mut().pathname);
    }

    pub fn push_confirm_answer(&self, answer: bool) {
        self.state.borrow_mut().confirm_answers.push_back(answer);
    }

    pub fn set_clipboard_mode(&self, mode: ClipboardMode) {
        self.state.borrow_mut().clipboard_mode = mode;
    }

    pub fn add_form(&self, method: &str) -> ElementId {
        let element = ElementId(self.next_id());
        self.state.borrow_mut().forms.push(FakeTarget { element, attr: method.to_owned(), handlers: Vec::new() });
        element
    }

    /// Change a form's method after the page has loaded.
    pub fn set_form_method(&self, form: ElementId, method: &str) {
        if let Some(target) = self.state.borrow_mut().forms.iter_mut().find(|t| t.element == form) {
            method.clone_into(&mut target.attr);
        }
    }

    pub fn add_link(&self, href: &str) -> ElementId {
        let element = ElementId(self.next_id());
        self.state.borrow_mut().links.push(FakeTarget { element, attr: href.to_owned(), handlers: Vec::new() });
        element
    }

    // --- Driving ---

    /// Move the virtual clock forward, firing due timers in deadline order.
    pub fn advance(&self, ms: u64) {
        let target = self.state.borrow().now_ms + ms;
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let due = state
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due_ms <= target)
                    .min_by_key(|(_, t)| (t.due_ms, t.id))
                    .map(|(index, _)| index);
                match due {
                    Some(index) => {
                        let timer = state.timers.remove(index);
                        state.now_ms = timer.due_ms;
                        state.firing = Some(timer.id);
                        state.firing_cleared = false;
                        Some(timer)
                    }
                    None => None,
                }
            };
            let Some(timer) = next else {
                break;
            };
            match timer.callback {
                TimerCallback::Once(callback) => callback(),
                TimerCallback::Repeat(mut callback) => {
                    callback();
                    let mut state = self.state.borrow_mut();
                    if !state.firing_cleared {
                        if let Some(period) = timer.period_ms {
                            let due_ms = timer.due_ms + u64::from(period.max(1));
                            state.timers.push(FakeTimer {
                                id: timer.id,
                                due_ms,
                                period_ms: timer.period_ms,
                                callback: TimerCallback::Repeat(callback),
                            });
                        }
                    }
                }
            }
            self.state.borrow_mut().firing = None;
        }
        self.state.borrow_mut().now_ms = target;
    }

    /// Resolve every pending clipboard write according to the current mode.
    pub fn settle_clipboard(&self) {
        let (writes, mode) = {
            let mut state = self.state.borrow_mut();
            (std::mem::take(&mut state.pending_writes), state.clipboard_mode)
        };
        for write in writes {
            let result = match mode {
                ClipboardMode::Accept => {
                    self.state.borrow_mut().clipboard_text = Some(write.text);
                    Ok(())
                }
                ClipboardMode::Reject => Err(UiError::ClipboardRejected("NotAllowedError".to_owned())),
                ClipboardMode::Unavailable => Err(UiError::ClipboardUnavailable),
            };
            (write.done)(result);
        }
    }

    pub fn submit_form(&self, form: ElementId) {
        self.fire(form, true);
    }

    pub fn click_link(&self, link: ElementId) {
        self.fire(link, false);
    }

    fn fire(&self, element: ElementId, is_form: bool) {
        let mut handlers = {
            let mut state = self.state.borrow_mut();
            let targets = if is_form { &mut state.forms } else { &mut state.links };
            match targets.iter_mut().find(|t| t.element == element) {
                Some(target) => std::mem::take(&mut target.handlers),
                None => return,
            }
        };
        for handler in &mut handlers {
            handler();
        }
        let mut state = self.state.borrow_mut();
        let targets = if is_form { &mut state.forms } else { &mut state.links };
        if let Some(target) = targets.iter_mut().find(|t| t.element == element) {
            handlers.append(&mut target.handlers);
            target.handlers = handlers;
        }
    }

    // --- Inspection ---

    pub fn now_ms(&self) -> u64 {
        self.state.borrow().now_ms
    }

    pub fn attached(&self) -> Vec<FakeElement> {
        self.state.borrow().elements.iter().filter(|e| e.attached).cloned().collect()
    }

    pub fn element(&self, id: ElementId) -> Option<FakeElement> {
        self.state.borrow().elements.iter().find(|e| e.id == id).cloned()
    }

    pub fn attached_by_dom_id(&self, dom_id: &str) -> Vec<FakeElement> {
        self.attached()
            .into_iter()
            .filter(|e| e.dom_id.as_deref() == Some(dom_id))
            .collect()
    }

    pub fn pending_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.state.borrow().prompts.clone()
    }

    pub fn pending_clipboard_writes(&self) -> usize {
        self.state.borrow().pending_writes.len()
    }

    pub fn clipboard_text(&self) -> Option<String> {
        self.state.borrow().clipboard_text.clone()
    }

    pub fn handler_count(&self, element: ElementId) -> usize {
        let state = self.state.borrow();
        state
            .forms
            .iter()
            .chain(state.links.iter())
            .find(|t| t.element == element)
            .map_or(0, |t| t.handlers.len())
    }
}

impl Platform for FakePlatform {
    fn append_to_body(&self, spec: &ElementSpec<'_>) -> Result<ElementId, UiError> {
        let id = ElementId(self.next_id());
        self.state.borrow_mut().elements.push(FakeElement {
            id,
            tag: spec.tag.to_owned(),
            dom_id: spec.dom_id.map(str::to_owned),
            class: spec.class.to_owned(),
            text: spec.text.map(str::to_owned),
            inner_html: spec.inner_html.map(str::to_owned),
            styles: Vec::new(),
            attached: true,
        });
        Ok(id)
    }

    fn set_style(&self, element: ElementId, property: &str, value: &str) -> Result<(), UiError> {
        let mut state = self.state.borrow_mut();
        let Some(el) = state.elements.iter_mut().find(|e| e.id == element) else {
            return Err(UiError::Dom(format!("unknown element {}", element.0)));
        };
        el.styles.push((property.to_owned(), value.to_owned()));
        Ok(())
    }

    fn remove_element(&self, element: ElementId) {
        if let Some(el) = self.state.borrow_mut().elements.iter_mut().find(|e| e.id == element) {
            el.attached = false;
        }
    }

    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerId {
        let id = TimerId(self.next_id());
        let mut state = self.state.borrow_mut();
        let due_ms = state.now_ms + u64::from(delay_ms);
        state.timers.push(FakeTimer { id, due_ms, period_ms: None, callback: TimerCallback::Once(callback) });
        id
    }

    fn set_interval(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> TimerId {
        let id = TimerId(self.next_id());
        let mut state = self.state.borrow_mut();
        let due_ms = state.now_ms + u64::from(period_ms.max(1));
        state.timers.push(FakeTimer {
            id,
            due_ms,
            period_ms: Some(period_ms),
            callback: TimerCallback::Repeat(callback),
        });
        id
    }

    fn clear_timer(&self, timer: TimerId) {
        let mut state = self.state.borrow_mut();
        state.timers.retain(|t| t.id != timer);
        if state.firing == Some(timer) {
            state.firing_cleared = true;
        }
    }

    fn confirm(&self, message: &str) -> bool {
        let mut state = self.state.borrow_mut();
        state.prompts.push(message.to_owned());
        state.confirm_answers.pop_front().unwrap_or(false)
    }

    fn write_clipboard(&self, text: &str, done: ClipboardDone) {
        self.state.borrow_mut().pending_writes.push(PendingWrite { text: text.to_owned(), done });
    }

    fn pathname(&self) -> String {
        self.state.borrow().pathname.clone()
    }

    fn forms(&self) -> Vec<FormRef> {
        self.state
            .borrow()
            .forms
            .iter()
            .map(|t| FormRef { element: t.element, method: t.attr.clone() })
            .collect()
    }

    fn form_method(&self, form: ElementId) -> Option<String> {
        self.state
            .borrow()
            .forms
            .iter()
            .find(|t| t.element == form)
            .map(|t| t.attr.clone())
    }

    fn links(&self) -> Vec<LinkRef> {
        self.state
            .borrow()
            .links
            .iter()
            .map(|t| LinkRef { element: t.element, href: t.attr.clone() })
            .collect()
    }

    fn on_submit(&self, form: ElementId, handler: Box<dyn FnMut()>) -> Result<(), UiError> {
        let mut state = self.state.borrow_mut();
        let Some(target) = state.forms.iter_mut().find(|t| t.element == form) else {
            return Err(UiError::Dom(format!("unknown form {}", form.0)));
        };
        target.handlers.push(handler);
        Ok(())
    }

    fn on_click(&self, link: ElementId, handler: Box<dyn FnMut()>) -> Result<(), UiError> {
        let mut state = self.state.borrow_mut();
        let Some(target) = state.links.iter_mut().find(|t| t.element == link) else {
            return Err(UiError::Dom(format!("unknown link {}", link.0)));
        };
        target.handlers.push(handler);
        Ok(())
    }
}
