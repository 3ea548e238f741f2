//! HTML canvas 2D surface.
//!
//! Drawing only: creating the overlay canvas and wiring DOM listeners is the
//! host page's job.

use std::f64::consts::TAU;

use sparkle_trail::{RadialGlow, Star, Surface, Viewport};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// A [`Surface`] backed by a canvas element's 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wraps a canvas, acquiring its 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, context })
    }

    /// Matches the canvas backing store to the viewport.
    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    /// Current backing-store size.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(f64::from(self.canvas.width()), f64::from(self.canvas.height()))
    }

    fn try_fill_glow(&self, glow: &RadialGlow) -> Result<(), JsValue> {
        let (x, y) = (glow.center.x, glow.center.y);
        let gradient = self
            .context
            .create_radial_gradient(x, y, 0.0, x, y, glow.radius)?;
        for stop in &glow.stops {
            gradient.add_color_stop(stop.offset, &stop.color.to_string())?;
        }

        self.context.set_global_alpha(f64::from(glow.opacity));
        self.context.set_fill_style_canvas_gradient(&gradient);
        self.context.begin_path();
        self.context.arc(x, y, glow.radius, 0.0, TAU)?;
        self.context.fill();
        Ok(())
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, viewport: Viewport) {
        // The whole backing store, even if the host reported a smaller size.
        let own = self.viewport();
        self.context.clear_rect(
            0.0,
            0.0,
            own.width.max(viewport.width),
            own.height.max(viewport.height),
        );
    }

    fn extent(&self) -> Option<Viewport> {
        Some(self.viewport())
    }

    fn fill_glow(&mut self, glow: &RadialGlow) {
        self.context.save();
        if let Err(err) = self.try_fill_glow(glow) {
            tracing::warn!(?err, "canvas glow failed");
        }
        self.context.restore();
    }

    fn fill_star(&mut self, star: &Star) {
        let vertices = star.vertices();

        self.context.save();
        self.context.set_global_alpha(f64::from(star.opacity));
        self.context.set_fill_style_str(&star.color.to_string());
        self.context.begin_path();
        self.context.move_to(vertices[0].x, vertices[0].y);
        for v in &vertices[1..] {
            self.context.line_to(v.x, v.y);
        }
        self.context.close_path();
        self.context.fill();
        self.context.restore();
    }
}
