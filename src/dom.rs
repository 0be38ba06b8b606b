// Thin helpers over web-sys used by the compare control.
use js_sys::Reflect;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, EventTarget, HtmlElement};

use crate::error::CompareError;
use crate::model::{Bounds, Modality};

pub type EventClosure = Closure<dyn FnMut(Event)>;

pub fn document() -> Result<Document, CompareError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| CompareError::Dom("no document available".into()))
}

pub fn create_div(document: &Document, class: &str) -> Result<HtmlElement, CompareError> {
    let el = document
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| CompareError::Dom("created element is not an HtmlElement".into()))?;
    el.set_class_name(class);
    Ok(el)
}

pub fn measure(el: &HtmlElement) -> Bounds {
    let rect = el.get_bounding_client_rect();
    Bounds::new(rect.left(), rect.width(), rect.height())
}

pub fn set_style(el: &HtmlElement, prop: &str, value: &str) {
    el.style().set_property(prop, value).ok();
}

pub fn listen(target: &EventTarget, event: &str, cb: &EventClosure) {
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .ok();
}

pub fn unlisten(target: &EventTarget, event: &str, cb: &EventClosure) {
    let _ = target.remove_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
}

// Looked up by property so plain events carrying a `touches` array, as built in tests,
// take the same path as real touch events.
fn touches(event: &Event) -> Option<JsValue> {
    Reflect::get(event, &JsValue::from_str("touches"))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

pub fn modality(event: &Event) -> Modality {
    if touches(event).is_some() {
        Modality::Touch
    } else {
        Modality::Mouse
    }
}

/// Viewport x of the pointer, or of the first touch point.
pub fn client_x(event: &Event) -> Option<f64> {
    let point: JsValue = match touches(event) {
        Some(list) => Reflect::get_u32(&list, 0)
            .ok()
            .filter(|t| !t.is_undefined())?,
        None => event.clone().into(),
    };
    Reflect::get(&point, &JsValue::from_str("clientX"))
        .ok()?
        .as_f64()
}
