use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;

fn force_quit() -> io::Error {
    io::Error::new(io::ErrorKind::Interrupted, "force quit")
}

/// Key-press view of an already-read event. Repeats and releases are
/// filtered out; Ctrl-C becomes an Interrupted error so the terminal
/// teardown in main still runs.
pub(crate) fn key_press(event: &Event) -> io::Result<Option<KeyCode>> {
    if let Event::Key(KeyEvent {
        code,
        kind,
        modifiers,
        ..
    }) = event
    {
        if *kind != KeyEventKind::Press {
            return Ok(None);
        }
        if *code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return Err(force_quit());
        }
        Ok(Some(*code))
    } else {
        Ok(None)
    }
}

/// Block for the next key press, ignoring everything else.
pub(crate) fn read_key() -> io::Result<Option<KeyCode>> {
    let event = event::read()?;
    key_press(&event)
}

pub(crate) fn menu_nav(sel: usize, count: usize, code: KeyCode) -> usize {
    match code {
        KeyCode::Up => sel.checked_sub(1).unwrap_or(count - 1),
        KeyCode::Down => (sel + 1) % count,
        _ => sel,
    }
}
