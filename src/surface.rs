use crate::core::{InkSurface, Paint, Point, SurfaceSize};
use wasm_bindgen::JsCast;
use web_sys as web;

/// `InkSurface` over a 2D canvas context.
///
/// The backing store is CSS size times the device pixel ratio; paths are
/// drawn through a matching scale transform.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    size: SurfaceSize,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context on canvas"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        let size = SurfaceSize::new(canvas.width() as f32, canvas.height() as f32, 1.0);
        Ok(Self { canvas, ctx, size })
    }
}

impl InkSurface for CanvasSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn resize(&mut self, size: SurfaceSize) {
        let (w, h) = size.backing_px();
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        let (css_w, css_h) = size.css_extent();
        let style = self.canvas.style();
        _ = style.set_property("width", &css_w);
        _ = style.set_property("height", &css_h);
        self.size = size;
    }

    fn clear(&mut self) {
        _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn stroke_path(&mut self, points: &[Point], paint: &Paint) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let ratio = self.size.pixel_ratio as f64;
        _ = self.ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0);
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(&paint.css_color());
        self.ctx.set_line_width(paint.line_width as f64);
        self.ctx.set_line_cap("round");
        self.ctx.set_line_join("round");
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.stroke();
    }
}
