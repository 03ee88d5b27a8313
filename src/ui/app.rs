use std::io;

use crate::settings::Settings;

use super::game_loop;
use super::menus::{self, Screen};
use super::paint_loop;

pub fn run_app(stdout: &mut io::Stdout) -> io::Result<()> {
    let mut settings = Settings::load();

    loop {
        let screen = match menus::select_screen(stdout)? {
            Some(screen) => screen,
            None => break,
        };
        let quit = match screen {
            Screen::Paint => paint_loop::run_paint(stdout, &mut settings)?,
            Screen::Puzzle => game_loop::run_game(stdout, &settings)?,
        };
        if quit {
            break;
        }
    }

    settings.save();
    Ok(())
}
