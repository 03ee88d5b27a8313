use crossterm::event::{self, KeyCode};
use crossterm::{execute, terminal};
use std::io;
use std::time::{Duration, Instant};

use crate::game::Game;
use crate::render;
use crate::settings::Settings;

use super::input::read_key;

/// Run one puzzle session. Returns true if the user quit the whole app
/// rather than backing out to the menu.
pub fn run_game(stdout: &mut io::Stdout, settings: &Settings) -> io::Result<bool> {
    let tick = Duration::from_millis(settings.tick_ms);
    let mut game = Game::new();
    let mut last_tick = Instant::now();
    execute!(stdout, terminal::Clear(terminal::ClearType::All))?;

    loop {
        render::draw_game(stdout, &game)?;

        if game.game_over {
            // The tick timer is suspended; block until reset or leave.
            if let Some(code) = read_key()? {
                match code {
                    KeyCode::Char('r') | KeyCode::Char('R') => {
                        game.reset();
                        last_tick = Instant::now();
                    }
                    KeyCode::Esc => return Ok(false),
                    KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),
                    _ => {}
                }
            }
            continue;
        }

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Some(code) = read_key()? {
                match code {
                    KeyCode::Left => {
                        game.move_piece(0, -1);
                    }
                    KeyCode::Right => {
                        game.move_piece(0, 1);
                    }
                    KeyCode::Down => {
                        game.move_piece(1, 0);
                    }
                    KeyCode::Up => {
                        game.rotate();
                    }
                    KeyCode::Char('r') | KeyCode::Char('R') => {
                        game.reset();
                        last_tick = Instant::now();
                    }
                    KeyCode::Esc => return Ok(false),
                    KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),
                    _ => {}
                }
            }
        }

        if last_tick.elapsed() >= tick {
            game.tick();
            last_tick = Instant::now();
        }
    }
}
