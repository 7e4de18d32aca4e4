use crate::constants::{START_SCREEN_FADE_MS, START_SCREEN_ID};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = dom::html_by_id(document, START_SCREEN_ID) {
        _ = el.class_list().add_1("hidden");
        dom::set_style(&el, "display", "none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    if let Some(el) = dom::html_by_id(document, START_SCREEN_ID) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .style()
            .get_property_value("display")
            .map(|s| s == "none")
            .unwrap_or(false);
    }
    false
}

/// Fade the start screen out, then take it out of the layout.
pub fn fade_out(document: &web::Document) {
    let Some(el) = dom::html_by_id(document, START_SCREEN_ID) else {
        return;
    };
    if is_hidden(document) {
        return;
    }
    dom::set_style(
        &el,
        "transition",
        &format!("opacity {}ms ease", START_SCREEN_FADE_MS),
    );
    dom::set_style(&el, "opacity", "0");

    let doc = document.clone();
    let on_faded: js_sys::Function = Closure::once_into_js(move || hide(&doc)).unchecked_into();
    let scheduled = web::window().map(|w| {
        w.set_timeout_with_callback_and_timeout_and_arguments_0(&on_faded, START_SCREEN_FADE_MS)
    });
    if !matches!(scheduled, Some(Ok(_))) {
        hide(document);
    }
}
