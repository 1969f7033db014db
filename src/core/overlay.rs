use crate::core::clock::Clock;
use crate::core::config::OverlayConfig;
use crate::core::render::{draw_frame, InkSurface, SurfaceSize};
use crate::core::stroke::{Point, Stroke, StrokeId, StrokeStore};

/// Pointer activity as seen by the overlay, already mapped to surface-local
/// coordinates by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    Down(Point),
    Move(Point),
    Up,
    /// Pointer left the surface bounds; ends a gesture like `Up`.
    Leave,
    Click(Point),
}

/// What the host should do with the raw event after the overlay saw it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    /// Nothing happened.
    Ignored,
    /// The overlay used the event; the host suppresses default handling.
    Consumed,
    /// The event belongs to an interactive element under the surface.
    PassedThrough,
}

/// The page content beneath the ink surface.
pub trait Underlay {
    /// Whether the element at `at`, ignoring the ink surface, is a control
    /// that must keep receiving pointer interaction.
    fn is_interactive(&self, at: Point) -> bool;
    /// Fires the default action of the interactive element at `at`.
    /// Returns false when there was nothing to activate.
    fn activate(&self, at: Point) -> bool;
}

/// Fading ink overlay: gesture capture, stroke decay and per-frame drawing.
///
/// The overlay never schedules itself; the host calls [`InkOverlay::tick`]
/// once per display refresh and feeds pointer events through
/// [`InkOverlay::handle_input`].
pub struct InkOverlay<C: Clock> {
    config: OverlayConfig,
    clock: C,
    store: StrokeStore,
    in_progress: Option<Vec<Point>>,
    // set when the last gesture left ink behind, so its trailing click is not
    // forwarded to whatever lies under the pen
    swallow_click: bool,
}

impl<C: Clock> InkOverlay<C> {
    pub fn new(config: OverlayConfig, clock: C) -> Self {
        Self {
            config,
            clock,
            store: StrokeStore::new(),
            in_progress: None,
            swallow_click: false,
        }
    }

    pub fn handle_input(&mut self, input: PointerInput, underlay: &impl Underlay) -> InputOutcome {
        match input {
            PointerInput::Down(at) => {
                if self.in_progress.is_some() {
                    return InputOutcome::Ignored;
                }
                self.swallow_click = false;
                if underlay.is_interactive(at) {
                    return InputOutcome::PassedThrough;
                }
                self.in_progress = Some(vec![at]);
                InputOutcome::Consumed
            }
            PointerInput::Move(at) => match self.in_progress.as_mut() {
                Some(points) => {
                    points.push(at);
                    InputOutcome::Consumed
                }
                None => InputOutcome::Ignored,
            },
            PointerInput::Up | PointerInput::Leave => match self.in_progress.take() {
                Some(points) => {
                    let count = points.len();
                    if let Some(id) = self.store.commit(points, self.clock.now()) {
                        log::debug!("[ink] committed stroke {} ({} points)", id.0, count);
                        self.swallow_click = true;
                    }
                    InputOutcome::Consumed
                }
                None => InputOutcome::Ignored,
            },
            PointerInput::Click(at) => {
                if std::mem::take(&mut self.swallow_click) {
                    return InputOutcome::Ignored;
                }
                if underlay.is_interactive(at) && underlay.activate(at) {
                    InputOutcome::PassedThrough
                } else {
                    InputOutcome::Ignored
                }
            }
        }
    }

    /// Refreshes opacities and evicts expired strokes. Returns the number
    /// evicted.
    pub fn update(&mut self) -> usize {
        let now = self.clock.now();
        self.store.update(now, &self.config.fade)
    }

    /// One frame: update then draw, so an expired stroke is never drawn.
    pub fn tick<S: InkSurface + ?Sized>(&mut self, surface: &mut S) {
        self.update();
        draw_frame(
            surface,
            self.store.iter(),
            self.in_progress.as_deref(),
            &self.config.style,
        );
    }

    /// Resizes the surface and redraws immediately, since resizing wipes the
    /// backing store.
    pub fn resize<S: InkSurface + ?Sized>(&mut self, surface: &mut S, size: SurfaceSize) {
        surface.resize(size);
        self.tick(surface);
    }

    /// Drops all ink, committed or in progress.
    pub fn shutdown(&mut self) {
        self.in_progress = None;
        self.swallow_click = false;
        self.store.clear();
    }

    pub fn stroke(&self, id: StrokeId) -> Option<&Stroke> {
        self.store.get(id)
    }

    pub fn strokes(&self) -> impl Iterator<Item = &Stroke> {
        self.store.iter()
    }

    pub fn live_count(&self) -> usize {
        self.store.len()
    }

    pub fn is_drawing(&self) -> bool {
        self.in_progress.is_some()
    }

    pub fn in_progress(&self) -> Option<&[Point]> {
        self.in_progress.as_deref()
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
