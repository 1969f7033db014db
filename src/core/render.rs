use crate::constants::{INK_BASE_ALPHA, INK_LINE_WIDTH, INK_RGB, MIN_STROKE_POINTS};
use crate::core::stroke::{Point, Stroke};

/// How ink looks on screen. Shared by committed and in-progress strokes.
///
/// - `rgb`: ink colour
/// - `base_alpha`: multiplied into each stroke's opacity
/// - `line_width`: path width in CSS pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InkStyle {
    pub rgb: [u8; 3],
    pub base_alpha: f32,
    pub line_width: f32,
}

impl Default for InkStyle {
    fn default() -> Self {
        Self {
            rgb: INK_RGB,
            base_alpha: INK_BASE_ALPHA,
            line_width: INK_LINE_WIDTH,
        }
    }
}

impl InkStyle {
    /// Paint for a stroke at the given fade opacity.
    #[inline]
    pub fn paint(&self, opacity: f32) -> Paint {
        Paint {
            rgb: self.rgb,
            alpha: (opacity * self.base_alpha).clamp(0.0, 1.0),
            line_width: self.line_width,
        }
    }
}

/// Resolved stroke paint for a single path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    pub rgb: [u8; 3],
    pub alpha: f32,
    pub line_width: f32,
}

impl Paint {
    /// CSS `rgba()` string for canvas `strokeStyle`.
    pub fn css_color(&self) -> String {
        let [r, g, b] = self.rgb;
        format!("rgba({}, {}, {}, {})", r, g, b, self.alpha)
    }
}

/// Drawable size: CSS pixels plus the device pixel ratio of the backing store.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    pub css_width: f32,
    pub css_height: f32,
    pub pixel_ratio: f32,
}

impl SurfaceSize {
    pub fn new(css_width: f32, css_height: f32, pixel_ratio: f32) -> Self {
        Self {
            css_width: css_width.max(0.0),
            css_height: css_height.max(0.0),
            pixel_ratio: if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
                pixel_ratio
            } else {
                1.0
            },
        }
    }

    /// CSS `width`/`height` values that pin the element to its CSS size, so
    /// the browser does not display the canvas at its backing-store size.
    pub fn css_extent(&self) -> (String, String) {
        (
            format!("{}px", self.css_width),
            format!("{}px", self.css_height),
        )
    }

    /// Backing store dimensions in device pixels, never zero.
    pub fn backing_px(&self) -> (u32, u32) {
        let w = (self.css_width * self.pixel_ratio) as u32;
        let h = (self.css_height * self.pixel_ratio) as u32;
        (w.max(1), h.max(1))
    }
}

/// 2D target the ink is drawn onto.
///
/// Points are handed over in CSS pixels; the surface owns the mapping to
/// its backing store. Resizing a surface clears it.
pub trait InkSurface {
    fn size(&self) -> SurfaceSize;
    fn resize(&mut self, size: SurfaceSize);
    fn clear(&mut self);
    /// Stroke a connected path with round caps and joins.
    fn stroke_path(&mut self, points: &[Point], paint: &Paint);
}

/// Clears the surface and draws one frame of ink.
///
/// Committed strokes are drawn in commit order at their current opacity, the
/// live gesture last at full opacity so it sits on top.
pub fn draw_frame<'a, S, I>(surface: &mut S, strokes: I, in_progress: Option<&[Point]>, style: &InkStyle)
where
    S: InkSurface + ?Sized,
    I: IntoIterator<Item = &'a Stroke>,
{
    surface.clear();
    for stroke in strokes {
        if stroke.points().len() < MIN_STROKE_POINTS {
            continue;
        }
        surface.stroke_path(stroke.points(), &style.paint(stroke.opacity()));
    }
    if let Some(points) = in_progress {
        if points.len() >= MIN_STROKE_POINTS {
            surface.stroke_path(points, &style.paint(1.0));
        }
    }
}
