use crate::constants::STAR_CLASS;
use crate::core::{Progress, Star, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn html_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn query_html(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn query_all_html(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> bool {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
        return true;
    }
    false
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

pub fn viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::default();
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64());
    let height = w.inner_height().ok().and_then(|v| v.as_f64());
    match (width, height) {
        (Some(width), Some(height)) => Viewport {
            width: width as f32,
            height: height as f32,
        },
        _ => Viewport::default(),
    }
}

/// Current scroll position over the scrollable extent of the document.
pub fn scroll_progress() -> Progress {
    let Some(w) = web::window() else {
        return Progress::START;
    };
    let offset = w.scroll_y().unwrap_or(0.0);
    let inner = w
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let doc_height = w
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    Progress::from_scroll(offset, doc_height - inner)
}

/// Append one element per star to `container`.
pub fn populate_star_field(
    document: &web::Document,
    container: &web::HtmlElement,
    stars: &[Star],
) -> anyhow::Result<()> {
    for star in stars {
        let el = document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!("create star: {:?}", e))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!("star is not an HtmlElement: {:?}", e))?;
        _ = el.class_list().add_1(STAR_CLASS);
        set_style(&el, "left", &format!("{}%", star.left_pct));
        set_style(&el, "top", &format!("{}%", star.top_pct));
        set_style(&el, "width", &format!("{}px", star.size_px));
        set_style(&el, "height", &format!("{}px", star.size_px));
        set_style(
            &el,
            "animation-delay",
            &format!("{}s", star.twinkle_delay_sec),
        );
        container
            .append_child(&el)
            .map_err(|e| anyhow::anyhow!("append star: {:?}", e))?;
    }
    Ok(())
}
