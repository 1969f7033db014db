/// Ink overlay tuning constants.
///
/// Defaults for the fade timing, the ink look and the page contract. Each of
/// these can be overridden per page through `data-*` attributes on the canvas
/// (see `core::config`).
// Fade timing (milliseconds)
pub const FADE_DELAY_MS: u64 = 3000; // full opacity hold
pub const FADE_DURATION_MS: u64 = 2000; // linear ramp to zero after the hold

// Ink look
pub const INK_RGB: [u8; 3] = [44, 24, 16]; // dark sepia
pub const INK_BASE_ALPHA: f32 = 0.9; // scales every stroke's opacity
pub const INK_LINE_WIDTH: f32 = 2.5; // CSS pixels, shared by live and committed strokes

// Gestures shorter than this never become strokes
pub const MIN_STROKE_POINTS: usize = 2;

// Elements (or descendants of elements) matching these keep receiving clicks
// even though the ink canvas sits on top of them.
pub const DEFAULT_INTERACTIVE_SELECTORS: &[&str] = &[
    "a",
    "button",
    "input",
    "select",
    "textarea",
    ".nav",
    ".buy-button",
    ".copy-btn",
];

// Page contract
pub const CANVAS_ELEMENT_ID: &str = "draw-canvas";
pub const PEN_CURSOR_ELEMENT_ID: &str = "pen-cursor";
