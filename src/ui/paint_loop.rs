use crossterm::event::{self, Event, KeyCode, MouseButton, MouseEvent, MouseEventKind};
use crossterm::{execute, terminal};
use std::io;

use crate::paint::{PaintState, Tool, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::render;
use crate::settings::Settings;

use super::input::key_press;

/// Terminal mouse position to canvas pixel, if it lands on the canvas.
fn canvas_pos(column: u16, row: u16) -> Option<(i32, i32)> {
    let (ox, oy) = render::CANVAS_ORIGIN;
    let x = column as i32 - ox as i32;
    let y = row as i32 - oy as i32;
    if x >= 0 && x < CANVAS_WIDTH as i32 && y >= 0 && y < CANVAS_HEIGHT as i32 {
        Some((x, y))
    } else {
        None
    }
}

/// Run one paint session. Returns true if the user quit the whole app.
pub fn run_paint(stdout: &mut io::Stdout, settings: &mut Settings) -> io::Result<bool> {
    let mut paint = PaintState::new(settings);
    execute!(stdout, terminal::Clear(terminal::ClearType::All))?;

    let quit = loop {
        render::draw_paint(stdout, &paint)?;

        match event::read()? {
            Event::Mouse(MouseEvent {
                kind, column, row, ..
            }) => match kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    if let Some((x, y)) = canvas_pos(column, row) {
                        paint.pointer_down(x, y);
                    }
                }
                MouseEventKind::Drag(MouseButton::Left) => {
                    if let Some((x, y)) = canvas_pos(column, row) {
                        paint.pointer_move(x, y);
                    } else {
                        // Dragging off the canvas ends the stroke.
                        paint.pointer_up();
                    }
                }
                MouseEventKind::Up(MouseButton::Left) => paint.pointer_up(),
                _ => {}
            },
            event => {
                if let Some(code) = key_press(&event)? {
                    match code {
                        KeyCode::Char('b') | KeyCode::Char('B') => paint.select_tool(Tool::Brush),
                        KeyCode::Char('e') | KeyCode::Char('E') => paint.select_tool(Tool::Eraser),
                        KeyCode::Char('r') | KeyCode::Char('R') => {
                            paint.select_tool(Tool::Rectangle)
                        }
                        KeyCode::Left => paint.cycle_color(-1),
                        KeyCode::Right => paint.cycle_color(1),
                        KeyCode::Up => paint.adjust_width(1),
                        KeyCode::Down => paint.adjust_width(-1),
                        KeyCode::Esc => break false,
                        KeyCode::Char('q') | KeyCode::Char('Q') => break true,
                        _ => {}
                    }
                }
            }
        }
    };

    // The width slider is the one selection worth remembering.
    settings.brush_width = paint.line_width;
    Ok(quit)
}
