mod canvas;

pub use canvas::{Canvas, BACKGROUND, CANVAS_HEIGHT, CANVAS_WIDTH, PALETTE};

use crate::settings::Settings;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tool {
    Brush,
    Eraser,
    // TODO: drag-out rectangle with a preview; until then it strokes like
    // the brush.
    Rectangle,
}

impl Tool {
    pub fn label(self) -> &'static str {
        match self {
            Tool::Brush => "brush",
            Tool::Eraser => "eraser",
            Tool::Rectangle => "rectangle",
        }
    }
}

/// Everything the paint screen mutates: the bitmap plus the current
/// tool/color/width selection and the in-progress stroke anchor.
pub struct PaintState {
    pub canvas: Canvas,
    pub tool: Tool,
    pub color: u8,
    pub line_width: u16,
    max_width: u16,
    stroke: Option<(i32, i32)>,
}

impl PaintState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            canvas: Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT),
            tool: Tool::Brush,
            color: 1,
            line_width: settings.brush_width.clamp(1, settings.max_brush_width),
            max_width: settings.max_brush_width,
            stroke: None,
        }
    }

    fn stroke_color(&self) -> u8 {
        // Only the eraser is special-cased; the rectangle stub paints the
        // selected color like the brush.
        if self.tool == Tool::Eraser {
            BACKGROUND
        } else {
            self.color
        }
    }

    /// Pointer press: anchor the stroke. Nothing is painted until the
    /// pointer moves, so a click without a drag leaves the canvas alone.
    pub fn pointer_down(&mut self, x: i32, y: i32) {
        self.stroke = Some((x, y));
    }

    /// Pointer drag: rasterize a segment from the anchor and advance it.
    /// A drag with no anchor (press happened off-canvas) is a no-op.
    pub fn pointer_move(&mut self, x: i32, y: i32) {
        let Some((px, py)) = self.stroke else {
            return;
        };
        let color = self.stroke_color();
        self.canvas.line(px, py, x, y, self.line_width, color);
        self.stroke = Some((x, y));
    }

    pub fn pointer_up(&mut self) {
        self.stroke = None;
    }

    pub fn select_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// Step through the palette. Index 0 is the background; only the
    /// eraser paints it, so cycling skips it.
    pub fn cycle_color(&mut self, step: i32) {
        let drawable = PALETTE.len() as i32 - 1;
        let cur = self.color as i32 - 1;
        self.color = ((cur + step).rem_euclid(drawable) + 1) as u8;
    }

    pub fn adjust_width(&mut self, delta: i32) {
        let width = self.line_width as i32 + delta;
        self.line_width = width.clamp(1, self.max_width as i32) as u16;
    }
}
