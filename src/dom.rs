use wasm_bindgen::JsCast;
use web_sys as web;

/// Viewport width in CSS pixels, if the window reports one.
#[inline]
pub fn viewport_width() -> Option<f64> {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
}

/// Create `<tag id=..>` and cast it to the requested element type.
pub fn create<T: JsCast>(document: &web::Document, tag: &str, id: &str) -> anyhow::Result<T> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}> error: {:?}", tag, e))?;
    el.set_id(id);
    el.dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} is not the expected element: {:?}", id, e))
}

#[inline]
pub fn set_hidden(el: &web::Element, hidden: bool) {
    let cl = el.class_list();
    if hidden {
        _ = cl.add_1(crate::constants::HIDDEN_CLASS);
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "display:none");
    } else {
        _ = cl.remove_1(crate::constants::HIDDEN_CLASS);
        _ = el.remove_attribute("style");
    }
}

#[inline]
pub fn is_hidden(el: &web::Element) -> bool {
    el.class_list().contains(crate::constants::HIDDEN_CLASS)
        || el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false)
}

#[inline]
pub fn toggle_hidden(el: &web::Element) {
    set_hidden(el, !is_hidden(el));
}

#[inline]
pub fn add_click_listener(el: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Calls `handler` with the slider value on every `input` event.
pub fn add_range_listener(input: &web::HtmlInputElement, mut handler: impl FnMut(f64) + 'static) {
    let source = input.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        handler(source.value_as_number());
    }) as Box<dyn FnMut()>);
    _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}
