//! JavaScript entry points.
//!
//! Page templates call these by their camelCase names. The shared [`Ui`] is
//! created once by [`start`] and kept in a thread-local.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::bootstrap;
use crate::config::{CONFIG_SCRIPT_ID, UiConfig};
use crate::error::UiError;
use crate::format;
use crate::notify::Severity;
use crate::platform::browser::BrowserPlatform;
use crate::ui::Ui;

thread_local! {
    static UI: RefCell<Option<Rc<Ui>>> = const { RefCell::new(None) };
}

fn current_ui() -> Result<Rc<Ui>, JsValue> {
    UI.with(|slot| slot.borrow().clone())
        .ok_or_else(|| JsValue::from_str("pakjobs-ui is not initialized"))
}

fn to_js(err: UiError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn init_logging() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logger already set: {e}")));
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    init_logging();

    let platform = Rc::new(BrowserPlatform::new().map_err(to_js)?);
    let config = UiConfig::from_json_or_default(platform.text_of(CONFIG_SCRIPT_ID).as_deref());
    let ui = Ui::new(platform.clone(), config);
    UI.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&ui)));

    if platform.is_ready() {
        bootstrap::bootstrap(&ui);
    } else {
        let weak = Rc::downgrade(&ui);
        platform
            .on_ready(move || {
                if let Some(ui) = weak.upgrade() {
                    bootstrap::bootstrap(&ui);
                }
            })
            .map_err(to_js)?;
    }
    Ok(())
}

#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, kind: Option<String>) -> Result<(), JsValue> {
    current_ui()?.notify(message, Severity::from_name(kind.as_deref()));
    Ok(())
}

#[wasm_bindgen(js_name = showLoading)]
pub fn show_loading() -> Result<(), JsValue> {
    current_ui()?.show_loading();
    Ok(())
}

#[wasm_bindgen(js_name = hideLoading)]
pub fn hide_loading() -> Result<(), JsValue> {
    current_ui()?.hide_loading();
    Ok(())
}

/// Accepts a JS number or numeric string.
#[wasm_bindgen(js_name = formatNumber)]
pub fn format_number(value: JsValue) -> String {
    format::format_js_number(value.as_string().as_deref(), value.as_f64())
}

#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(value: &str) -> String {
    format::format_date(value)
}

/// Wrap `func` so bursts of calls collapse into one trailing call.
///
/// Every argument of the last call is forwarded, so the Rust side receives
/// them packed into one array by a small variadic JS shim.
#[wasm_bindgen]
pub fn debounce(func: js_sys::Function, wait: u32) -> Result<js_sys::Function, JsValue> {
    let ui = current_ui()?;
    let debouncer = ui.debounce(wait, move |args: js_sys::Array| {
        if let Err(e) = func.apply(&JsValue::NULL, &args) {
            log::warn!("debounced callback threw: {e:?}");
        }
    });
    let inner = Closure::<dyn Fn(js_sys::Array)>::new(move |args: js_sys::Array| debouncer.call(args));
    let pack = js_sys::Function::new_with_args("inner", "return function(...args) { inner(args); };");
    let wrapper = pack.call1(&JsValue::NULL, &inner.into_js_value())?;
    Ok(wrapper.unchecked_into())
}

#[wasm_bindgen(js_name = confirmScraperRun)]
pub fn confirm_scraper_run(site: &str, mode: &str) -> Result<bool, JsValue> {
    Ok(current_ui()?.confirm_scraper_run(site, mode))
}

#[wasm_bindgen(js_name = copyToClipboard)]
pub fn copy_to_clipboard(text: &str) -> Result<(), JsValue> {
    current_ui()?.copy_to_clipboard(text);
    Ok(())
}
