use crate::core::{InkOverlay, InputOutcome, InstantClock, PointerInput};
use crate::dom::{self, DomUnderlay};
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct InkWiring {
    pub canvas: web::HtmlCanvasElement,
    pub overlay: Rc<RefCell<InkOverlay<InstantClock>>>,
    pub underlay: Rc<DomUnderlay>,
}

impl InkWiring {
    fn feed(&self, input: PointerInput) -> InputOutcome {
        self.overlay.borrow_mut().handle_input(input, &*self.underlay)
    }
}

pub fn wire_input_handlers(w: InkWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_gesture_end(&w, "pointerup", PointerInput::Up);
    wire_gesture_end(&w, "pointerleave", PointerInput::Leave);
    wire_click(&w);
}

fn wire_pointerdown(w: &InkWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::add_listener(&target, "pointerdown", move |ev: web::PointerEvent| {
        if !ev.is_primary() {
            return;
        }
        let at = input::pointer_surface_point(&ev, &w.canvas);
        match w.feed(PointerInput::Down(at)) {
            InputOutcome::Consumed => ev.prevent_default(),
            InputOutcome::PassedThrough => {
                log::debug!("[ink] pointerdown at ({:.0},{:.0}) left to page", at.x, at.y);
            }
            InputOutcome::Ignored => {}
        }
    });
}

fn wire_pointermove(w: &InkWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::add_listener(&target, "pointermove", move |ev: web::PointerEvent| {
        if !ev.is_primary() {
            return;
        }
        let at = input::pointer_surface_point(&ev, &w.canvas);
        if w.feed(PointerInput::Move(at)) == InputOutcome::Consumed {
            ev.prevent_default();
        }
    });
}

fn wire_gesture_end(w: &InkWiring, event: &str, input: PointerInput) {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::add_listener(&target, event, move |ev: web::PointerEvent| {
        if !ev.is_primary() {
            return;
        }
        w.feed(input);
    });
}

// The canvas sits above the whole page, so plain clicks on links and buttons
// land here and have to be forwarded.
fn wire_click(w: &InkWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::add_listener(&target, "click", move |ev: web::MouseEvent| {
        let at = input::pointer_surface_point(&ev, &w.canvas);
        if w.feed(PointerInput::Click(at)) == InputOutcome::PassedThrough {
            log::debug!("[ink] forwarded click at ({:.0},{:.0})", at.x, at.y);
        }
    });
}
