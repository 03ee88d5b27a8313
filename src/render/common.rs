use crossterm::style::{Color, Stylize};
use std::io::{self, Write};

use crate::game::piece::PieceKind;

pub(crate) fn draw_title(stdout: &mut io::Stdout, subtitle: &str) -> io::Result<()> {
    write!(
        stdout,
        "  {}  {}\x1b[K\r\n\r\n",
        "PAINTRIS".bold(),
        subtitle.with(Color::DarkGrey)
    )
}

pub(crate) fn draw_box_top(stdout: &mut io::Stdout, indent: usize, inner_w: usize) -> io::Result<()> {
    write!(stdout, "{:indent$}╔", "")?;
    for _ in 0..inner_w {
        write!(stdout, "═")?;
    }
    write!(stdout, "╗\x1b[K\r\n")
}

pub(crate) fn draw_box_bottom(stdout: &mut io::Stdout, indent: usize, inner_w: usize) -> io::Result<()> {
    write!(stdout, "{:indent$}╚", "")?;
    for _ in 0..inner_w {
        write!(stdout, "═")?;
    }
    write!(stdout, "╝\x1b[K\r\n")
}

pub(crate) fn centered_line(text: &str, selected: bool, inner_w: usize) -> String {
    let prefix = if selected { "> " } else { "  " };
    let text_w = text.chars().count();
    let total_pad = inner_w.saturating_sub(text_w);
    let left_pad = total_pad / 2;
    let right_pad = total_pad - left_pad;
    let line = format!(
        "{:ls$}{}{}{:rs$}",
        "",
        prefix,
        text,
        "",
        ls = left_pad.saturating_sub(prefix.len()),
        rs = right_pad,
    );
    if selected {
        format!("{}", line.as_str().with(Color::Yellow))
    } else {
        line
    }
}

/// Color for a settled grid tag.
pub(crate) fn color_for(id: u8) -> Color {
    match PieceKind::from_cell(id) {
        Some(kind) => kind.color(),
        None => Color::White,
    }
}
