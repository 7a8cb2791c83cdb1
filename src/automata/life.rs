use log::debug;

use crate::automata::Automaton;
use crate::grid::{Cell, Grid};

/// Generate a pseudorandom seed for the board's PRNG.
pub fn generate_seed() -> Result<(u64, u64), getrandom::Error> {
    use byteorder::{ByteOrder, NativeEndian};
    use getrandom::getrandom;

    let mut seed = [0_u8; 16];

    getrandom(&mut seed)?;

    Ok((
        NativeEndian::read_u64(&seed[0..8]),
        NativeEndian::read_u64(&seed[8..16]),
    ))
}

#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0), (1, 0),
    (-1, 1), (0, 1), (1, 1),
];

/// Alive cells among the 8 neighbors of `(x, y)`. Neighbors past the edge
/// count as dead; the board does not wrap.
pub fn live_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    let (x, y) = (x as isize, y as isize);
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|(dx, dy)| grid.is_alive_at(x + dx, y + dy))
        .count() as u8
}

/// B3/S23.
pub fn next_state(cell: Cell, neighbors: u8) -> Cell {
    match (cell, neighbors) {
        (Cell::Alive, 2 | 3) => Cell::Alive,
        (Cell::Dead, 3) => Cell::Alive,
        _ => Cell::Dead,
    }
}

/// Conway's Game of Life on a bounded board.
pub struct LifeGrid {
    cells: Grid,
    scratch_cells: Grid,
    generation: u64,
}

impl LifeGrid {
    pub fn new(cells: Grid) -> Self {
        Self {
            scratch_cells: Grid::new(cells.width(), cells.height()),
            cells,
            generation: 0,
        }
    }

    /// # Panics
    ///
    /// If `width` or `height` is zero, as does every constructor taking a
    /// size.
    pub fn new_empty(width: usize, height: usize) -> Self {
        Self::new(Grid::new(width, height))
    }

    /// Board with roughly half of the cells alive, seeded from OS entropy.
    /// Panics like [`LifeGrid::new_empty`].
    pub fn new_random(width: usize, height: usize) -> Result<Self, getrandom::Error> {
        let seed = generate_seed()?;
        debug!("life seed: {:#018x}{:016x}", seed.0, seed.1);
        Ok(Self::new_seeded(width, height, seed))
    }

    /// Same as [`LifeGrid::new_random`] but reproducible.
    pub fn new_seeded(width: usize, height: usize, seed: (u64, u64)) -> Self {
        let mut result = Self::new_empty(width, height);
        result.randomize(seed);
        result
    }

    fn randomize(&mut self, seed: (u64, u64)) {
        let mut rng: randomize::PCG32 = seed.into();
        for cell in self.cells.cells_mut() {
            *cell = (randomize::f32_half_open_right(rng.next_u32()) < 0.5).into();
        }
    }

    pub fn update(&mut self) {
        for ((x, y, cell), next) in self.cells.iter().zip(self.scratch_cells.cells_mut()) {
            // Write into scratch_cells, since we're still reading from `self.cells`
            *next = next_state(cell, live_neighbors(&self.cells, x, y));
        }
        std::mem::swap(&mut self.scratch_cells, &mut self.cells);
        self.generation += 1;
    }
}

impl Automaton for LifeGrid {
    fn grid(&self) -> &Grid {
        &self.cells
    }

    fn step(&mut self) {
        self.update();
    }

    fn generation(&self) -> u64 {
        self.generation
    }
}
