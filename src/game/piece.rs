use crossterm::style::Color;
use rand::Rng;

pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;
pub const EMPTY: u8 = 0;

/// The seven tetromino kinds. Discriminant order matches `ALL_KINDS`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

pub const ALL_KINDS: [PieceKind; 7] = [
    PieceKind::I,
    PieceKind::J,
    PieceKind::L,
    PieceKind::O,
    PieceKind::S,
    PieceKind::T,
    PieceKind::Z,
];

impl PieceKind {
    pub fn random() -> Self {
        ALL_KINDS[rand::thread_rng().gen_range(0..ALL_KINDS.len())]
    }

    /// Minimal bounding-box shape in its spawn orientation. Rotations are
    /// computed from this at runtime, so the matrices are ragged: I is 1x4,
    /// O is 2x2, the rest are 2x3.
    pub fn base_shape(self) -> Vec<Vec<bool>> {
        let rows: &[&[u8]] = match self {
            PieceKind::I => &[&[1, 1, 1, 1]],
            PieceKind::J => &[&[1, 0, 0], &[1, 1, 1]],
            PieceKind::L => &[&[0, 0, 1], &[1, 1, 1]],
            PieceKind::O => &[&[1, 1], &[1, 1]],
            PieceKind::S => &[&[0, 1, 1], &[1, 1, 0]],
            PieceKind::T => &[&[0, 1, 0], &[1, 1, 1]],
            PieceKind::Z => &[&[1, 1, 0], &[0, 1, 1]],
        };
        rows.iter()
            .map(|row| row.iter().map(|&v| v != 0).collect())
            .collect()
    }

    /// Grid tag written on merge; `EMPTY` stays 0.
    pub fn cell(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_cell(id: u8) -> Option<PieceKind> {
        ALL_KINDS.iter().copied().find(|k| k.cell() == id)
    }

    pub fn color(self) -> Color {
        match self {
            PieceKind::I => Color::Cyan,
            PieceKind::J => Color::Blue,
            PieceKind::L => Color::DarkYellow,
            PieceKind::O => Color::Yellow,
            PieceKind::S => Color::Green,
            PieceKind::T => Color::Magenta,
            PieceKind::Z => Color::Red,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Vec<Vec<bool>>,
    pub row: i32,
    pub col: i32,
}

impl Piece {
    /// Place a fresh piece at the top row, horizontally centered by its
    /// shape width.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = kind.base_shape();
        let col = BOARD_WIDTH as i32 / 2 - shape[0].len() as i32 / 2;
        Self {
            kind,
            shape,
            row: 0,
            col,
        }
    }

    /// Grid coordinates of every occupied shape cell.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape.iter().enumerate().flat_map(move |(r, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &v)| v)
                .map(move |(c, _)| (self.row + r as i32, self.col + c as i32))
        })
    }

    /// 90-degree clockwise rotation: transpose, then reverse each row.
    pub fn rotated(&self) -> Piece {
        let rows = self.shape.len();
        let cols = self.shape[0].len();
        let shape = (0..cols)
            .map(|c| (0..rows).rev().map(|r| self.shape[r][c]).collect())
            .collect();
        Piece {
            kind: self.kind,
            shape,
            row: self.row,
            col: self.col,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_centers_by_shape_width() {
        let i = Piece::spawn(PieceKind::I);
        assert_eq!((i.row, i.col), (0, 3));

        let o = Piece::spawn(PieceKind::O);
        assert_eq!((o.row, o.col), (0, 4));

        let t = Piece::spawn(PieceKind::T);
        assert_eq!((t.row, t.col), (0, 4));
    }

    #[test]
    fn every_shape_has_four_cells() {
        for kind in ALL_KINDS {
            let piece = Piece::spawn(kind);
            assert_eq!(piece.cells().count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn rotation_turns_i_vertical() {
        let piece = Piece::spawn(PieceKind::I).rotated();
        assert_eq!(piece.shape, vec![vec![true]; 4]);
    }

    #[test]
    fn rotation_is_clockwise() {
        let piece = Piece::spawn(PieceKind::J).rotated();
        assert_eq!(
            piece.shape,
            vec![vec![true, true], vec![true, false], vec![true, false]],
        );
    }

    #[test]
    fn rotation_keeps_position() {
        let mut piece = Piece::spawn(PieceKind::S);
        piece.row = 7;
        piece.col = 2;
        let rotated = piece.rotated();
        assert_eq!((rotated.row, rotated.col), (7, 2));
    }

    #[test]
    fn four_rotations_restore_shape() {
        for kind in ALL_KINDS {
            let piece = Piece::spawn(kind);
            let back = piece.rotated().rotated().rotated().rotated();
            assert_eq!(piece.shape, back.shape, "{:?}", kind);
        }
    }

    #[test]
    fn cell_tags_round_trip() {
        for kind in ALL_KINDS {
            assert_ne!(kind.cell(), EMPTY);
            assert_eq!(PieceKind::from_cell(kind.cell()), Some(kind));
        }
        assert_eq!(PieceKind::from_cell(EMPTY), None);
        assert_eq!(PieceKind::from_cell(8), None);
    }

    #[test]
    fn random_covers_all_kinds() {
        let mut seen = [false; 7];
        for _ in 0..500 {
            seen[PieceKind::random() as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
