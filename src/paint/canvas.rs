use crossterm::style::Color;

pub const CANVAS_WIDTH: usize = 76;
pub const CANVAS_HEIGHT: usize = 22;

/// Palette index of the canvas background; it is what the eraser paints.
pub const BACKGROUND: u8 = 0;

pub const PALETTE: [Color; 14] = [
    Color::White,
    Color::Black,
    Color::DarkGrey,
    Color::Grey,
    Color::DarkRed,
    Color::Red,
    Color::DarkYellow,
    Color::Yellow,
    Color::DarkGreen,
    Color::Green,
    Color::DarkCyan,
    Color::Cyan,
    Color::DarkBlue,
    Color::Magenta,
];

/// A fixed-size bitmap of palette indices. Mutated only by stroke
/// rasterization; everything off the bitmap is clipped silently.
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![BACKGROUND; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Out-of-bounds reads come back as background.
    pub fn get(&self, x: i32, y: i32) -> u8 {
        if self.in_bounds(x, y) {
            self.pixels[y as usize * self.width + x as usize]
        } else {
            BACKGROUND
        }
    }

    fn set(&mut self, x: i32, y: i32, color: u8) {
        if self.in_bounds(x, y) {
            self.pixels[y as usize * self.width + x as usize] = color;
        }
    }

    /// Stamp a filled disc of radius `width / 2`; the round cap of a
    /// stroke at a single point.
    pub fn stamp(&mut self, x: i32, y: i32, width: u16, color: u8) {
        let r = (width / 2) as i32;
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r * r {
                    self.set(x + dx, y + dy, color);
                }
            }
        }
    }

    /// Rasterize one stroke segment: Bresenham between the endpoints,
    /// stamping the brush at every visited point.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, width: u16, color: u8) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let mut cx = x0;
        let mut cy = y0;

        loop {
            self.stamp(cx, cy, width, color);
            if cx == x1 && cy == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                cx += sx;
            }
            if e2 <= dx {
                err += dx;
                cy += sy;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_all_background() {
        let canvas = Canvas::new(8, 8);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(canvas.get(x, y), BACKGROUND);
            }
        }
    }

    #[test]
    fn thin_horizontal_line_paints_every_column() {
        let mut canvas = Canvas::new(10, 10);
        canvas.line(2, 5, 7, 5, 1, 3);
        for x in 2..=7 {
            assert_eq!(canvas.get(x, 5), 3);
        }
        assert_eq!(canvas.get(1, 5), BACKGROUND);
        assert_eq!(canvas.get(8, 5), BACKGROUND);
    }

    #[test]
    fn diagonal_line_hits_both_endpoints() {
        let mut canvas = Canvas::new(10, 10);
        canvas.line(0, 0, 6, 6, 1, 2);
        for i in 0..=6 {
            assert_eq!(canvas.get(i, i), 2);
        }
    }

    #[test]
    fn steep_line_is_connected() {
        let mut canvas = Canvas::new(10, 10);
        canvas.line(3, 0, 4, 8, 1, 5);
        // Every row between the endpoints gets a pixel in one of the two
        // columns the line passes through.
        for y in 0..=8 {
            assert!(canvas.get(3, y) == 5 || canvas.get(4, y) == 5, "row {}", y);
        }
    }

    #[test]
    fn wide_line_covers_thickness() {
        let mut canvas = Canvas::new(16, 16);
        canvas.line(4, 8, 11, 8, 3, 6);
        for x in 4..=11 {
            for y in 7..=9 {
                assert_eq!(canvas.get(x, y), 6);
            }
        }
    }

    #[test]
    fn single_point_stamp_with_width_one() {
        let mut canvas = Canvas::new(8, 8);
        canvas.stamp(4, 4, 1, 9);
        assert_eq!(canvas.get(4, 4), 9);
        assert_eq!(canvas.get(5, 4), BACKGROUND);
        assert_eq!(canvas.get(4, 5), BACKGROUND);
    }

    #[test]
    fn out_of_bounds_segment_is_clipped() {
        let mut canvas = Canvas::new(8, 8);
        canvas.line(-5, -5, 3, 3, 1, 4);
        assert_eq!(canvas.get(0, 0), 4);
        assert_eq!(canvas.get(3, 3), 4);
        // Reads past the edges stay background rather than panicking.
        assert_eq!(canvas.get(-1, -1), BACKGROUND);
        assert_eq!(canvas.get(100, 100), BACKGROUND);
    }
}
