mod board;
mod canvas;
mod common;
mod menus;

pub use board::draw_game;
pub use canvas::draw_paint;
pub(crate) use canvas::CANVAS_ORIGIN;
pub use menus::draw_screen_select;
