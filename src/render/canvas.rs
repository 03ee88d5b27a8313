use crossterm::style::{Color, Stylize};
use crossterm::{cursor, execute};
use std::io::{self, Write};

use crate::paint::{PaintState, PALETTE};

use super::common::{draw_box_bottom, draw_box_top};

/// Screen cell holding the canvas pixel (0, 0); the paint loop subtracts
/// this to translate mouse coordinates.
pub(crate) const CANVAS_ORIGIN: (u16, u16) = (1, 2);

pub fn draw_paint(stdout: &mut io::Stdout, paint: &PaintState) -> io::Result<()> {
    execute!(stdout, cursor::MoveTo(0, 0))?;
    write!(
        stdout,
        "{}\x1b[K\r\n",
        " untitled - Paint "
            .with(Color::White)
            .on(Color::DarkBlue)
            .bold()
    )?;

    draw_box_top(stdout, 0, paint.canvas.width())?;
    for y in 0..paint.canvas.height() {
        write!(stdout, "║")?;
        for x in 0..paint.canvas.width() {
            let idx = paint.canvas.get(x as i32, y as i32);
            write!(stdout, "{}", " ".on(PALETTE[idx as usize]))?;
        }
        write!(stdout, "║\x1b[K\r\n")?;
    }
    draw_box_bottom(stdout, 0, paint.canvas.width())?;

    write!(
        stdout,
        " tool: {:<9}  width: {:>3}  ",
        paint.tool.label(),
        paint.line_width
    )?;
    for (i, color) in PALETTE.iter().enumerate().skip(1) {
        if i as u8 == paint.color {
            write!(stdout, "[{}]", "█".with(*color))?;
        } else {
            write!(stdout, " {} ", "█".with(*color))?;
        }
    }
    write!(stdout, "\x1b[K\r\n")?;
    write!(
        stdout,
        " B brush   E eraser   R rectangle   ←/→ color   ↑/↓ width   Esc menu   Q quit\x1b[K\r\n"
    )?;

    write!(stdout, "\x1b[J")?;
    stdout.flush()
}
