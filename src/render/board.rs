use crossterm::style::{Color, Stylize};
use crossterm::{cursor, execute};
use std::io::{self, Write};

use crate::game::piece::{BOARD_HEIGHT, BOARD_WIDTH, EMPTY};
use crate::game::Game;

use super::common::{color_for, draw_box_bottom, draw_box_top, draw_title};

const LEFT_W: usize = 4;

pub fn draw_game(stdout: &mut io::Stdout, game: &Game) -> io::Result<()> {
    execute!(stdout, cursor::MoveTo(0, 0))?;
    draw_title(stdout, "falling blocks")?;

    // The grid never contains the active piece; overlay it per frame.
    let (piece_cells, piece_tag) = match &game.current {
        Some(piece) => (piece.cells().collect::<Vec<_>>(), piece.kind.cell()),
        None => (Vec::new(), EMPTY),
    };

    draw_box_top(stdout, LEFT_W, BOARD_WIDTH * 2)?;
    for row in 0..BOARD_HEIGHT {
        write!(stdout, "{:LEFT_W$}║", "")?;
        for col in 0..BOARD_WIDTH {
            let id = if piece_cells.contains(&(row as i32, col as i32)) {
                piece_tag
            } else {
                game.board[row][col]
            };
            if id == EMPTY {
                write!(stdout, "  ")?;
            } else {
                write!(stdout, "{}", "██".with(color_for(id)))?;
            }
        }
        write!(stdout, "║")?;
        draw_side_panel(stdout, game, row)?;
        write!(stdout, "\x1b[K\r\n")?;
    }
    draw_box_bottom(stdout, LEFT_W, BOARD_WIDTH * 2)?;

    write!(stdout, "\x1b[J")?;
    stdout.flush()
}

fn draw_side_panel(stdout: &mut io::Stdout, game: &Game, row: usize) -> io::Result<()> {
    match row {
        1 => write!(stdout, "  SCORE: {}", game.score),
        4 if game.game_over => {
            write!(stdout, "  {}", "GAME OVER".with(Color::Red).bold())
        }
        5 if game.game_over => write!(stdout, "  R: play again"),
        8 => write!(stdout, "  ←/→  move"),
        9 => write!(stdout, "  ↓    drop"),
        10 => write!(stdout, "  ↑    rotate"),
        11 => write!(stdout, "  R    reset"),
        13 => write!(stdout, "  Esc  menu"),
        14 => write!(stdout, "  Q    quit"),
        _ => Ok(()),
    }
}
