//! Canvas 2D backend (web only)

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::{Color, Surface};

/// `Surface` over a browser canvas 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.clear_rect(x, y, w, h);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.ctx.set_fill_style_str(color.as_css());
        self.ctx.fill_rect(x, y, w, h);
    }

    fn fill_circle(&mut self, x: f64, y: f64, r: f64, color: Color) {
        self.ctx.set_fill_style_str(color.as_css());
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(x, y, r, 0.0, TAU) {
            log::warn!("Canvas arc failed: {:?}", e);
            return;
        }
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, color: Color) {
        self.ctx.set_fill_style_str(color.as_css());
        self.ctx.set_font(font);
        if let Err(e) = self.ctx.fill_text(text, x, y) {
            log::warn!("Canvas fill_text failed: {:?}", e);
        }
    }
}
