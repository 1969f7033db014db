use crate::core::{InkOverlay, InstantClock};
use crate::surface::CanvasSurface;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub overlay: Rc<RefCell<InkOverlay<InstantClock>>>,
    pub surface: Rc<RefCell<CanvasSurface>>,
}

impl FrameContext {
    pub fn frame(&self) {
        let mut surface = self.surface.borrow_mut();
        self.overlay.borrow_mut().tick(&mut *surface);
    }
}

type TickClosure = Closure<dyn FnMut()>;

struct LoopState {
    running: Cell<bool>,
    pending: Cell<Option<i32>>,
    tick: RefCell<Option<TickClosure>>,
}

impl LoopState {
    fn request(&self) {
        let Some(w) = web::window() else {
            return;
        };
        if let Some(tick) = self.tick.borrow().as_ref() {
            let f: &js_sys::Function = tick.as_ref().unchecked_ref();
            self.pending.set(w.request_animation_frame(f).ok());
        }
    }

    fn cancel_pending(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for LoopState {
    // a pending frame must not fire into a freed closure
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

/// requestAnimationFrame driver for the ink overlay.
///
/// Each frame ticks the overlay and requests the next one until `stop` is
/// called. Cloning yields another handle to the same loop.
#[derive(Clone)]
pub struct FrameLoop {
    state: Rc<LoopState>,
}

impl FrameLoop {
    pub fn new(frame_ctx: FrameContext) -> Self {
        let state = Rc::new(LoopState {
            running: Cell::new(false),
            pending: Cell::new(None),
            tick: RefCell::new(None),
        });
        // the closure only holds a weak handle, so dropping every FrameLoop
        // clone frees it
        let weak = Rc::downgrade(&state);
        *state.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.pending.set(None);
            if !state.running.get() {
                return;
            }
            frame_ctx.frame();
            state.request();
        }) as Box<dyn FnMut()>));
        Self { state }
    }

    pub fn start(&self) {
        if self.state.running.replace(true) {
            return;
        }
        log::info!("[frame] loop started");
        self.state.request();
    }

    pub fn stop(&self) {
        if !self.state.running.replace(false) {
            return;
        }
        self.state.cancel_pending();
        log::info!("[frame] loop stopped");
    }

    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }
}
