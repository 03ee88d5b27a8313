use crossterm::event::KeyCode;
use std::io;

use crate::render;

use super::input::{menu_nav, read_key};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Paint,
    Puzzle,
}

/// Screen-select menu. `None` means quit.
pub fn select_screen(stdout: &mut io::Stdout) -> io::Result<Option<Screen>> {
    let mut sel: usize = 0;
    let count: usize = 3;

    loop {
        render::draw_screen_select(stdout, sel)?;

        if let Some(code) = read_key()? {
            match code {
                KeyCode::Up | KeyCode::Down => sel = menu_nav(sel, count, code),
                KeyCode::Enter => match sel {
                    0 => return Ok(Some(Screen::Paint)),
                    1 => return Ok(Some(Screen::Puzzle)),
                    _ => return Ok(None),
                },
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(None),
                _ => {}
            }
        }
    }
}
