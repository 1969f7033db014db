#![cfg(target_arch = "wasm32")]
use crate::core::{InkOverlay, InstantClock};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod surface;

use surface::CanvasSurface;

thread_local! {
    static HANDLE: RefCell<Option<InkHandle>> = const { RefCell::new(None) };
}

/// JS-side control over the running ink overlay.
#[wasm_bindgen]
#[derive(Clone)]
pub struct InkHandle {
    overlay: Rc<RefCell<InkOverlay<InstantClock>>>,
    frames: frame::FrameLoop,
}

#[wasm_bindgen]
impl InkHandle {
    /// Resumes the render loop after `stop`.
    pub fn start(&self) {
        self.frames.start();
    }

    /// Pauses the render loop; the last frame stays on screen.
    pub fn stop(&self) {
        self.frames.stop();
    }

    /// Stops the loop and drops all ink.
    pub fn shutdown(&self) {
        self.frames.stop();
        self.overlay.borrow_mut().shutdown();
        log::info!("[ink] shut down");
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.frames.is_running()
    }

    #[wasm_bindgen(getter, js_name = liveStrokes)]
    pub fn live_strokes(&self) -> usize {
        self.overlay.borrow().live_count()
    }
}

/// Handle to the overlay started on page load, if initialization succeeded.
#[wasm_bindgen]
pub fn ink() -> Option<InkHandle> {
    HANDLE.with(|h| h.borrow().clone())
}

fn wire_canvas_resize(
    overlay: &Rc<RefCell<InkOverlay<InstantClock>>>,
    surface: &Rc<RefCell<CanvasSurface>>,
) {
    let resize = {
        let overlay = overlay.clone();
        let surface = surface.clone();
        move || {
            if let Some(size) = dom::viewport_size() {
                let mut surface = surface.borrow_mut();
                overlay.borrow_mut().resize(&mut *surface, size);
            }
        }
    };
    resize();
    if let Some(window) = web::window() {
        dom::add_listener(&window, "resize", move |_: web::Event| {
            resize();
            log::debug!("[resize] canvas synced to viewport");
        });
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ink-web starting");

    match init() {
        Ok(handle) => HANDLE.with(|h| *h.borrow_mut() = Some(handle)),
        Err(e) => log::error!("init error: {:?}", e),
    }
    Ok(())
}

fn init() -> anyhow::Result<InkHandle> {
    let document =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window or document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ELEMENT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ELEMENT_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let config = dom::read_config(&canvas);
    let underlay = Rc::new(dom::DomUnderlay::new(
        document.clone(),
        canvas.clone(),
        config.interactive_selector(),
    ));
    let surface = Rc::new(RefCell::new(CanvasSurface::new(canvas.clone())?));
    let overlay = Rc::new(RefCell::new(InkOverlay::new(config, InstantClock::new())));

    // The canvas overlays the page; it takes pointer input itself and
    // forwards clicks meant for controls underneath.
    dom::set_pointer_events(&canvas, "auto");
    wire_canvas_resize(&overlay, &surface);

    events::wire_input_handlers(events::InkWiring {
        canvas: canvas.clone(),
        overlay: overlay.clone(),
        underlay,
    });
    events::wire_pen_cursor(&document);

    let frames = frame::FrameLoop::new(frame::FrameContext {
        overlay: overlay.clone(),
        surface,
    });
    frames.start();

    {
        let o = overlay.borrow();
        log::info!(
            "[ink] ready: fade {}ms + {}ms, width {:.1}, alpha {:.2}",
            o.config().fade.delay.as_millis(),
            o.config().fade.duration.as_millis(),
            o.config().style.line_width,
            o.config().style.base_alpha
        );
    }

    Ok(InkHandle { overlay, frames })
}
