use super::Game;

/// What a requested translation did to the active piece.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    /// The piece now occupies the translated position.
    Moved,
    /// A blocked descent: the piece merged into the grid and a replacement
    /// spawned.
    Merged,
    /// The move would collide; the piece stays where it was.
    Rejected,
}

impl Game {
    /// Translate the active piece by (dr, dc). A blocked downward move
    /// commits the piece and spawns the next one; a blocked sideways move
    /// is rejected in place. With no active piece, or after game over,
    /// every move is rejected.
    pub fn move_piece(&mut self, dr: i32, dc: i32) -> MoveOutcome {
        if self.game_over {
            return MoveOutcome::Rejected;
        }
        let Some(current) = &self.current else {
            return MoveOutcome::Rejected;
        };

        let mut moved = current.clone();
        moved.row += dr;
        moved.col += dc;

        if self.fits(&moved) {
            self.current = Some(moved);
            MoveOutcome::Moved
        } else if dr > 0 {
            self.merge_current();
            self.spawn_piece();
            MoveOutcome::Merged
        } else {
            MoveOutcome::Rejected
        }
    }

    /// Rotate the active piece clockwise. A rotation whose result would
    /// collide is silently discarded; there are no wall kicks.
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let Some(current) = &self.current else {
            return false;
        };

        let rotated = current.rotated();
        if self.fits(&rotated) {
            self.current = Some(rotated);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::piece::*;
    use super::*;

    #[test]
    fn sideways_move_updates_position() {
        let mut game = Game::new();
        game.current = Some(Piece::spawn(PieceKind::T));
        assert_eq!(game.move_piece(0, -1), MoveOutcome::Moved);
        assert_eq!(game.current.as_ref().unwrap().col, 3);
    }

    #[test]
    fn sideways_collision_is_rejected_in_place() {
        let mut game = Game::new();
        let mut piece = Piece::spawn(PieceKind::O);
        piece.col = 0;
        game.current = Some(piece);

        assert_eq!(game.move_piece(0, -1), MoveOutcome::Rejected);
        let piece = game.current.as_ref().unwrap();
        assert_eq!((piece.row, piece.col), (0, 0));
    }

    #[test]
    fn blocked_descent_merges_and_respawns() {
        let mut game = Game::new();
        let mut piece = Piece::spawn(PieceKind::O);
        piece.row = BOARD_HEIGHT as i32 - 2;
        game.current = Some(piece);

        assert_eq!(game.move_piece(1, 0), MoveOutcome::Merged);
        assert_eq!(game.board[BOARD_HEIGHT - 1][4], PieceKind::O.cell());
        // The replacement is a fresh spawn, not the merged piece.
        assert_eq!(game.current.as_ref().unwrap().row, 0);
    }

    #[test]
    fn move_without_active_piece_is_rejected() {
        let mut game = Game::new();
        assert_eq!(game.move_piece(1, 0), MoveOutcome::Rejected);
        assert!(!game.rotate());
    }

    #[test]
    fn rotation_applies_when_it_fits() {
        let mut game = Game::new();
        let mut piece = Piece::spawn(PieceKind::I);
        piece.row = 5;
        game.current = Some(piece);

        assert!(game.rotate());
        assert_eq!(game.current.as_ref().unwrap().shape, vec![vec![true]; 4]);
    }

    #[test]
    fn blocked_rotation_leaves_piece_unchanged() {
        let mut game = Game::new();
        // Vertical I against the right wall; rotating back to horizontal
        // would poke through it.
        let mut piece = Piece::spawn(PieceKind::I).rotated();
        piece.row = 10;
        piece.col = BOARD_WIDTH as i32 - 1;
        game.current = Some(piece);

        assert!(!game.rotate());
        let piece = game.current.as_ref().unwrap();
        assert_eq!(piece.shape, vec![vec![true]; 4]);
        assert_eq!((piece.row, piece.col), (10, BOARD_WIDTH as i32 - 1));
    }

    #[test]
    fn blocked_rotation_against_settled_cells() {
        let mut game = Game::new();
        let mut piece = Piece::spawn(PieceKind::I).rotated();
        piece.row = 10;
        piece.col = 4;
        game.current = Some(piece);
        // Occupy a cell the horizontal form would need.
        game.board[10][5] = 1;

        assert!(!game.rotate());
        assert_eq!(game.current.as_ref().unwrap().shape, vec![vec![true]; 4]);
    }
}
