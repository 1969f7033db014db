use crate::core::Point;
use web_sys as web;

/// Pointer position relative to the canvas' top-left corner, in CSS pixels.
///
/// Strokes are stored in this space so a backing-store resize (which only
/// changes the device-pixel scale) never moves them.
#[inline]
pub fn pointer_surface_point(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Point {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    Point::new(x_css, y_css)
}

/// Pointer position in viewport CSS pixels.
#[inline]
pub fn pointer_viewport_point(ev: &web::MouseEvent) -> Point {
    Point::new(ev.client_x() as f32, ev.client_y() as f32)
}
