use crate::core::{OverlayConfig, Point, SurfaceSize, Underlay};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Registers `handler` for `event` on `target` for the lifetime of the page.
pub fn add_listener<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Current viewport in CSS pixels together with the device pixel ratio.
pub fn viewport_size() -> Option<SurfaceSize> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some(SurfaceSize::new(
        width as f32,
        height as f32,
        w.device_pixel_ratio() as f32,
    ))
}

#[inline]
pub fn set_pointer_events(el: &web::HtmlElement, value: &str) {
    _ = el.style().set_property("pointer-events", value);
}

/// Builds the overlay config from defaults plus `data-*` overrides on the
/// canvas. Rejected overrides are logged and leave the default in place.
pub fn read_config(canvas: &web::HtmlCanvasElement) -> OverlayConfig {
    let mut config = OverlayConfig::default();
    let found: Vec<(&str, String)> = OverlayConfig::KEYS
        .iter()
        .filter_map(|key| {
            canvas
                .get_attribute(&format!("data-{key}"))
                .map(|value| (*key, value))
        })
        .collect();
    for (key, value) in &found {
        log::info!("[config] {} = {}", key, value);
    }
    for err in config.apply_overrides(found.iter().map(|(k, v)| (*k, v.as_str()))) {
        log::warn!("[config] {}", err);
    }
    config
}

/// The page beneath the ink canvas, probed by hit-testing with the canvas
/// made transparent to pointer events.
pub struct DomUnderlay {
    document: web::Document,
    canvas: web::HtmlCanvasElement,
    selector: String,
}

impl DomUnderlay {
    pub fn new(document: web::Document, canvas: web::HtmlCanvasElement, selector: String) -> Self {
        Self {
            document,
            canvas,
            selector,
        }
    }

    /// Topmost element at a surface-local point, ignoring the canvas itself.
    fn element_below(&self, at: Point) -> Option<web::Element> {
        let rect = self.canvas.get_bounding_client_rect();
        let x = rect.left() as f32 + at.x;
        let y = rect.top() as f32 + at.y;
        set_pointer_events(&self.canvas, "none");
        let below = self.document.element_from_point(x, y);
        set_pointer_events(&self.canvas, "auto");
        below
    }

    fn matches(&self, el: &web::Element) -> bool {
        matches!(el.closest(&self.selector), Ok(Some(_)))
    }
}

impl Underlay for DomUnderlay {
    fn is_interactive(&self, at: Point) -> bool {
        self.element_below(at)
            .map(|el| self.matches(&el))
            .unwrap_or(false)
    }

    fn activate(&self, at: Point) -> bool {
        let Some(el) = self.element_below(at) else {
            return false;
        };
        if !self.matches(&el) {
            return false;
        }
        // clicking the hit element lets the event bubble to the control that
        // owns the default action (e.g. a span inside a link)
        match el.dyn_ref::<web::HtmlElement>() {
            Some(html) => {
                html.click();
                true
            }
            None => false,
        }
    }
}
