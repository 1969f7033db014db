use crate::constants::PEN_CURSOR_ELEMENT_ID;
use crate::dom;
use crate::input;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Makes the `#pen-cursor` element follow the pointer. No-op when the page
/// has no such element.
pub fn wire_pen_cursor(document: &web::Document) {
    let Some(cursor) = document
        .get_element_by_id(PEN_CURSOR_ELEMENT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        log::info!("[cursor] no #{} element, pen cursor disabled", PEN_CURSOR_ELEMENT_ID);
        return;
    };
    dom::add_listener(document, "pointermove", move |ev: web::PointerEvent| {
        let at = input::pointer_viewport_point(&ev);
        let style = cursor.style();
        _ = style.set_property("left", &format!("{}px", at.x));
        _ = style.set_property("top", &format!("{}px", at.y));
    });
}
