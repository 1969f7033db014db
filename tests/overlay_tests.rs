// Host-side tests for gesture capture, decay and drawing of the ink overlay.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod clock {
        include!("../src/core/clock.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod fade {
        include!("../src/core/fade.rs");
    }
    pub mod overlay {
        include!("../src/core/overlay.rs");
    }
    pub mod render {
        include!("../src/core/render.rs");
    }
    pub mod stroke {
        include!("../src/core/stroke.rs");
    }
}

use crate::core::clock::ManualClock;
use crate::core::config::OverlayConfig;
use crate::core::overlay::*;
use crate::core::render::*;
use crate::core::stroke::Point;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
enum Op {
    Resize(SurfaceSize),
    Clear,
    Path { points: Vec<Point>, paint: Paint },
}

struct RecordingSurface {
    size: SurfaceSize,
    ops: Vec<Op>,
}

impl RecordingSurface {
    fn new() -> Self {
        Self {
            size: SurfaceSize::new(800.0, 600.0, 1.0),
            ops: Vec::new(),
        }
    }

    fn paths(&self) -> Vec<(Vec<Point>, Paint)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Path { points, paint } => Some((points.clone(), *paint)),
                _ => None,
            })
            .collect()
    }
}

impl InkSurface for RecordingSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }
    fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
        self.ops.clear();
        self.ops.push(Op::Resize(size));
    }
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }
    fn stroke_path(&mut self, points: &[Point], paint: &Paint) {
        self.ops.push(Op::Path {
            points: points.to_vec(),
            paint: *paint,
        });
    }
}

/// Page stand-in: a "link" occupies x in [0, 100), everything else is plain
/// text. Records activations.
#[derive(Default)]
struct FakePage {
    activated: RefCell<Vec<Point>>,
}

impl Underlay for FakePage {
    fn is_interactive(&self, at: Point) -> bool {
        at.x < 100.0
    }
    fn activate(&self, at: Point) -> bool {
        self.activated.borrow_mut().push(at);
        true
    }
}

fn p(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

fn overlay_at(ms: u64) -> (InkOverlay<Rc<ManualClock>>, Rc<ManualClock>) {
    let clock = Rc::new(ManualClock::at_ms(ms));
    (InkOverlay::new(OverlayConfig::default(), clock.clone()), clock)
}

fn draw(overlay: &mut InkOverlay<Rc<ManualClock>>, page: &FakePage, points: &[Point]) {
    assert_eq!(
        overlay.handle_input(PointerInput::Down(points[0]), page),
        InputOutcome::Consumed
    );
    for &pt in &points[1..] {
        overlay.handle_input(PointerInput::Move(pt), page);
    }
    overlay.handle_input(PointerInput::Up, page);
}

#[test]
fn single_point_gesture_leaves_no_stroke() {
    let (mut overlay, _) = overlay_at(0);
    let page = FakePage::default();
    assert_eq!(
        overlay.handle_input(PointerInput::Down(p(200.0, 50.0)), &page),
        InputOutcome::Consumed
    );
    assert!(overlay.is_drawing());
    assert_eq!(overlay.handle_input(PointerInput::Up, &page), InputOutcome::Consumed);
    assert!(!overlay.is_drawing());
    assert_eq!(overlay.live_count(), 0);
}

#[test]
fn drag_commits_one_stroke_with_points_in_order() {
    let (mut overlay, _) = overlay_at(0);
    let page = FakePage::default();
    let pts = [p(200.0, 10.0), p(210.0, 12.0), p(230.0, 20.0), p(260.0, 35.0)];
    draw(&mut overlay, &page, &pts);

    assert_eq!(overlay.live_count(), 1);
    let stroke = overlay.strokes().next().unwrap();
    assert_eq!(stroke.points(), &pts);
    assert!(overlay.in_progress().is_none());
}

#[test]
fn leaving_the_surface_ends_the_gesture() {
    let (mut overlay, _) = overlay_at(0);
    let page = FakePage::default();
    overlay.handle_input(PointerInput::Down(p(300.0, 300.0)), &page);
    overlay.handle_input(PointerInput::Move(p(320.0, 310.0)), &page);
    assert_eq!(overlay.handle_input(PointerInput::Leave, &page), InputOutcome::Consumed);
    assert!(!overlay.is_drawing());
    assert_eq!(overlay.live_count(), 1);
}

#[test]
fn moves_and_releases_without_a_gesture_are_ignored() {
    let (mut overlay, _) = overlay_at(0);
    let page = FakePage::default();
    assert_eq!(
        overlay.handle_input(PointerInput::Move(p(300.0, 300.0)), &page),
        InputOutcome::Ignored
    );
    assert_eq!(overlay.handle_input(PointerInput::Up, &page), InputOutcome::Ignored);
    assert_eq!(overlay.handle_input(PointerInput::Leave, &page), InputOutcome::Ignored);
    assert_eq!(overlay.live_count(), 0);
}

#[test]
fn second_down_during_a_gesture_is_ignored() {
    let (mut overlay, _) = overlay_at(0);
    let page = FakePage::default();
    overlay.handle_input(PointerInput::Down(p(300.0, 300.0)), &page);
    assert_eq!(
        overlay.handle_input(PointerInput::Down(p(500.0, 500.0)), &page),
        InputOutcome::Ignored
    );
    assert_eq!(overlay.in_progress(), Some(&[p(300.0, 300.0)][..]));
}

#[test]
fn gesture_over_interactive_element_passes_through_and_click_still_fires() {
    let (mut overlay, _) = overlay_at(0);
    let page = FakePage::default();
    let link = p(40.0, 20.0);

    assert_eq!(
        overlay.handle_input(PointerInput::Down(link), &page),
        InputOutcome::PassedThrough
    );
    assert!(!overlay.is_drawing());
    assert_eq!(
        overlay.handle_input(PointerInput::Move(p(60.0, 25.0)), &page),
        InputOutcome::Ignored
    );
    assert_eq!(overlay.handle_input(PointerInput::Up, &page), InputOutcome::Ignored);
    assert_eq!(overlay.live_count(), 0);

    assert_eq!(
        overlay.handle_input(PointerInput::Click(link), &page),
        InputOutcome::PassedThrough
    );
    assert_eq!(page.activated.borrow().as_slice(), &[link]);
}

#[test]
fn click_on_plain_content_is_not_forwarded() {
    let (mut overlay, _) = overlay_at(0);
    let page = FakePage::default();
    overlay.handle_input(PointerInput::Down(p(400.0, 20.0)), &page);
    overlay.handle_input(PointerInput::Up, &page);
    assert_eq!(
        overlay.handle_input(PointerInput::Click(p(400.0, 20.0)), &page),
        InputOutcome::Ignored
    );
    assert!(page.activated.borrow().is_empty());
}

#[test]
fn click_trailing_a_drawn_stroke_is_swallowed() {
    let (mut overlay, _) = overlay_at(0);
    let page = FakePage::default();
    // drag from plain content onto the link
    draw(&mut overlay, &page, &[p(300.0, 20.0), p(150.0, 20.0), p(50.0, 20.0)]);
    assert_eq!(overlay.live_count(), 1);
    assert_eq!(
        overlay.handle_input(PointerInput::Click(p(50.0, 20.0)), &page),
        InputOutcome::Ignored
    );
    assert!(page.activated.borrow().is_empty());

    // the next plain click on the link goes through again
    overlay.handle_input(PointerInput::Down(p(50.0, 20.0)), &page);
    overlay.handle_input(PointerInput::Up, &page);
    assert_eq!(
        overlay.handle_input(PointerInput::Click(p(50.0, 20.0)), &page),
        InputOutcome::PassedThrough
    );
    assert_eq!(page.activated.borrow().len(), 1);
}

#[test]
fn stroke_fades_and_disappears_on_schedule() {
    let (mut overlay, clock) = overlay_at(0);
    let page = FakePage::default();
    draw(&mut overlay, &page, &[p(200.0, 0.0), p(220.0, 10.0)]);
    let id = overlay.strokes().next().unwrap().id();

    clock.set_ms(3500);
    overlay.update();
    assert!((overlay.stroke(id).unwrap().opacity() - 0.75).abs() < 1e-6);

    clock.set_ms(4000);
    overlay.update();
    assert!((overlay.stroke(id).unwrap().opacity() - 0.5).abs() < 1e-6);

    clock.set_ms(5000);
    assert_eq!(overlay.update(), 1);
    assert!(overlay.stroke(id).is_none());

    clock.set_ms(5001);
    overlay.update();
    assert!(overlay.stroke(id).is_none());
}

#[test]
fn overlapping_strokes_fade_on_their_own_timestamps() {
    let (mut overlay, clock) = overlay_at(0);
    let page = FakePage::default();
    draw(&mut overlay, &page, &[p(200.0, 0.0), p(300.0, 100.0)]);
    clock.set_ms(2000);
    draw(&mut overlay, &page, &[p(300.0, 0.0), p(200.0, 100.0)]);
    let ids: Vec<_> = overlay.strokes().map(|s| s.id()).collect();
    let (first, second) = (ids[0], ids[1]);

    clock.set_ms(4000);
    overlay.update();
    assert!((overlay.stroke(first).unwrap().opacity() - 0.5).abs() < 1e-6);
    assert_eq!(overlay.stroke(second).unwrap().opacity(), 1.0);

    clock.set_ms(6000);
    overlay.update();
    assert!(overlay.stroke(first).is_none());
    assert!((overlay.stroke(second).unwrap().opacity() - 0.5).abs() < 1e-6);
}

#[test]
fn stroke_timestamp_is_taken_at_gesture_end() {
    let (mut overlay, clock) = overlay_at(0);
    let page = FakePage::default();
    overlay.handle_input(PointerInput::Down(p(200.0, 0.0)), &page);
    clock.set_ms(1200);
    overlay.handle_input(PointerInput::Move(p(210.0, 0.0)), &page);
    overlay.handle_input(PointerInput::Up, &page);
    let stroke = overlay.strokes().next().unwrap();
    assert_eq!(stroke.created_at(), std::time::Duration::from_millis(1200));
}

#[test]
fn tick_clears_then_draws_live_strokes_and_the_gesture_on_top() {
    let (mut overlay, clock) = overlay_at(0);
    let page = FakePage::default();
    let committed = [p(200.0, 0.0), p(220.0, 10.0)];
    draw(&mut overlay, &page, &committed);

    clock.set_ms(4000);
    overlay.handle_input(PointerInput::Down(p(400.0, 400.0)), &page);
    overlay.handle_input(PointerInput::Move(p(410.0, 420.0)), &page);

    let mut surface = RecordingSurface::new();
    overlay.tick(&mut surface);

    assert_eq!(surface.ops[0], Op::Clear);
    let paths = surface.paths();
    assert_eq!(paths.len(), 2);

    let style = InkStyle::default();
    assert_eq!(paths[0].0, committed.to_vec());
    assert!((paths[0].1.alpha - 0.5 * style.base_alpha).abs() < 1e-6);
    assert_eq!(paths[0].1.line_width, style.line_width);

    assert_eq!(paths[1].0, vec![p(400.0, 400.0), p(410.0, 420.0)]);
    assert!((paths[1].1.alpha - style.base_alpha).abs() < 1e-6);
    assert_eq!(paths[1].1.line_width, style.line_width);
    assert_eq!(paths[1].1.rgb, style.rgb);
}

#[test]
fn single_point_gesture_is_not_drawn_live() {
    let (mut overlay, _) = overlay_at(0);
    let page = FakePage::default();
    overlay.handle_input(PointerInput::Down(p(400.0, 400.0)), &page);
    let mut surface = RecordingSurface::new();
    overlay.tick(&mut surface);
    assert_eq!(surface.ops, vec![Op::Clear]);
}

#[test]
fn expired_stroke_is_never_drawn() {
    let (mut overlay, clock) = overlay_at(0);
    let page = FakePage::default();
    draw(&mut overlay, &page, &[p(200.0, 0.0), p(220.0, 10.0)]);
    clock.set_ms(5000);
    let mut surface = RecordingSurface::new();
    overlay.tick(&mut surface);
    assert_eq!(surface.ops, vec![Op::Clear]);
    assert_eq!(overlay.live_count(), 0);
}

#[test]
fn resize_keeps_strokes_and_redraws_immediately() {
    let (mut overlay, clock) = overlay_at(0);
    let page = FakePage::default();
    draw(&mut overlay, &page, &[p(200.0, 0.0), p(220.0, 10.0)]);
    draw(&mut overlay, &page, &[p(300.0, 0.0), p(320.0, 10.0)]);

    clock.set_ms(1000);
    let mut surface = RecordingSurface::new();
    let size = SurfaceSize::new(1024.0, 768.0, 2.0);
    overlay.resize(&mut surface, size);

    assert_eq!(overlay.live_count(), 2);
    assert_eq!(surface.size(), size);
    assert_eq!(surface.ops[0], Op::Resize(size));
    assert_eq!(surface.ops[1], Op::Clear);
    assert_eq!(surface.paths().len(), 2);

    // decay carries on after the resize
    clock.set_ms(4000);
    overlay.update();
    assert!(overlay.strokes().all(|s| (s.opacity() - 0.5).abs() < 1e-6));
}

#[test]
fn shutdown_drops_all_ink() {
    let (mut overlay, _) = overlay_at(0);
    let page = FakePage::default();
    draw(&mut overlay, &page, &[p(200.0, 0.0), p(220.0, 10.0)]);
    overlay.handle_input(PointerInput::Down(p(400.0, 400.0)), &page);
    overlay.shutdown();
    assert_eq!(overlay.live_count(), 0);
    assert!(!overlay.is_drawing());
}

#[test]
fn paint_formats_css_rgba() {
    let paint = InkStyle::default().paint(1.0);
    assert_eq!(paint.css_color(), "rgba(44, 24, 16, 0.9)");
    assert_eq!(InkStyle::default().paint(0.0).alpha, 0.0);
}

#[test]
fn surface_size_backing_store_scales_with_pixel_ratio() {
    assert_eq!(SurfaceSize::new(800.0, 600.0, 2.0).backing_px(), (1600, 1200));
    assert_eq!(SurfaceSize::new(0.0, 0.0, 1.0).backing_px(), (1, 1));
    assert_eq!(SurfaceSize::new(10.0, 10.0, f32::NAN).pixel_ratio, 1.0);
    assert_eq!(SurfaceSize::new(10.0, 10.0, 0.0).pixel_ratio, 1.0);
}

#[test]
fn css_extent_stays_at_css_size_on_dense_screens() {
    let size = SurfaceSize::new(1280.0, 720.5, 2.0);
    assert_eq!(size.backing_px(), (2560, 1441));
    assert_eq!(
        size.css_extent(),
        ("1280px".to_string(), "720.5px".to_string())
    );
}

#[test]
fn clocks_only_move_forward() {
    use crate::core::clock::{Clock, InstantClock};
    let manual = ManualClock::at_ms(100);
    manual.advance_ms(250);
    assert_eq!(manual.now(), std::time::Duration::from_millis(350));

    let wall = InstantClock::new();
    let a = wall.now();
    let b = wall.now();
    assert!(b >= a);
}
