mod board;
mod movement;

pub mod piece;

pub use movement::MoveOutcome;

use piece::{Piece, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

pub const POINTS_PER_LINE: u32 = 100;

/// One puzzle session. The grid only ever changes through merge and line
/// clearing; the active piece floats above it until one of those happens.
pub struct Game {
    pub board: [[u8; BOARD_WIDTH]; BOARD_HEIGHT],
    pub current: Option<Piece>,
    pub score: u32,
    pub game_over: bool,
}

impl Game {
    /// An empty board with no active piece; the first tick spawns.
    pub fn new() -> Self {
        Self {
            board: [[EMPTY; BOARD_WIDTH]; BOARD_HEIGHT],
            current: None,
            score: 0,
            game_over: false,
        }
    }

    /// One timer tick: spawn if there is no active piece, otherwise descend
    /// one row (merging on a blocked descent), then clear any full rows.
    /// Does nothing while the game is over.
    pub fn tick(&mut self) {
        if self.game_over {
            return;
        }
        if self.current.is_none() {
            self.spawn_piece();
        } else {
            self.move_piece(1, 0);
        }
        self.clear_lines();
    }

    /// Fresh grid, zero score, game-over cleared, and a new piece spawned.
    pub fn reset(&mut self) {
        *self = Game::new();
        self.spawn_piece();
    }
}
