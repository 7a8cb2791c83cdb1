use crate::automata::Automaton;
use crate::grid::{Cell, Grid};

/// Static checkered board. Light squares are stored as alive cells, and the
/// top-left square is light.
pub struct Chessboard {
    squares: Grid,
}

impl Chessboard {
    /// # Panics
    ///
    /// If `files` or `ranks` is zero.
    pub fn new(files: usize, ranks: usize) -> Self {
        Self {
            squares: Grid::from_fn(files, ranks, |c, r| Cell::from((c + r) % 2 == 0)),
        }
    }
}

impl Automaton for Chessboard {
    fn grid(&self) -> &Grid {
        &self.squares
    }

    fn step(&mut self) {}

    fn generation(&self) -> u64 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squares_alternate() {
        let board = Chessboard::new(8, 8);
        let grid = board.grid();
        assert_eq!(grid.get(0, 0), Some(Cell::Alive));
        assert_eq!(grid.get(1, 0), Some(Cell::Dead));
        assert_eq!(grid.get(0, 1), Some(Cell::Dead));
        assert_eq!(grid.get(7, 7), Some(Cell::Alive));
        assert_eq!(grid.population(), 32);
    }

    #[test]
    fn stepping_changes_nothing() {
        let mut board = Chessboard::new(8, 8);
        let before = board.grid().clone();
        board.step();
        assert_eq!(board.grid(), &before);
    }
}
