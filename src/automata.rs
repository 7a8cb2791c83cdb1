pub mod chessboard;
pub mod langton;
pub mod life;

use crate::grid::Grid;

/// A grid that advances one tick at a time. The driver loop only talks to
/// automata through this trait.
pub trait Automaton {
    /// Current state, read by the renderer.
    fn grid(&self) -> &Grid;

    /// Advance by exactly one tick.
    fn step(&mut self);

    /// Number of ticks applied so far.
    fn generation(&self) -> u64;
}
