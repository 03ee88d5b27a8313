mod app;
mod game_loop;
mod input;
mod menus;
mod paint_loop;

pub use app::run_app;
