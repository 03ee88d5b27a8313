use crossterm::{cursor, execute};
use std::io::{self, Write};

use super::common::{centered_line, draw_box_bottom, draw_box_top, draw_title};

const MENU_INDENT: usize = 4;
const MENU_W: usize = 28;

pub fn draw_screen_select(stdout: &mut io::Stdout, sel: usize) -> io::Result<()> {
    execute!(stdout, cursor::MoveTo(0, 0))?;
    draw_title(stdout, "a paint surface and a falling-block game")?;

    let items = ["Paint", "Falling Blocks", "Quit"];

    draw_box_top(stdout, MENU_INDENT, MENU_W)?;
    write!(stdout, "{:MENU_INDENT$}║{:MENU_W$}║\x1b[K\r\n", "", "")?;
    for (i, item) in items.iter().enumerate() {
        write!(
            stdout,
            "{:MENU_INDENT$}║{}║\x1b[K\r\n",
            "",
            centered_line(item, sel == i, MENU_W)
        )?;
    }
    write!(stdout, "{:MENU_INDENT$}║{:MENU_W$}║\x1b[K\r\n", "", "")?;
    draw_box_bottom(stdout, MENU_INDENT, MENU_W)?;

    write!(stdout, "\r\n{:MENU_INDENT$}↑/↓ select   Enter open\x1b[K\r\n", "")?;
    write!(stdout, "\x1b[J")?;
    stdout.flush()
}
