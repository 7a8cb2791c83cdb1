use crate::automata::Automaton;
use crate::grid::{Cell, Grid, GridError};

/// Which way the ant rotates.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Turn {
    Right,
    Left,
}

/// One of the four unit direction vectors. The compass names assume `y` grows
/// northward; the renderer puts `y = 0` at the top of the window, so `North`
/// moves down the screen and every turn appears mirrored.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub fn all() -> [Direction; 4] {
        [Direction::North, Direction::East, Direction::South, Direction::West]
    }

    pub const fn vector(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    /// Quarter turn. `Right` is the matrix `[[0, 1], [-1, 0]]` applied to
    /// [`Direction::vector`], `Left` is `[[0, -1], [1, 0]]`.
    pub fn turned(self, turn: Turn) -> Direction {
        match (turn, self) {
            (Turn::Right, Direction::North) => Direction::East,
            (Turn::Right, Direction::East) => Direction::South,
            (Turn::Right, Direction::South) => Direction::West,
            (Turn::Right, Direction::West) => Direction::North,
            (Turn::Left, Direction::North) => Direction::West,
            (Turn::Left, Direction::West) => Direction::South,
            (Turn::Left, Direction::South) => Direction::East,
            (Turn::Left, Direction::East) => Direction::North,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Ant {
    pub x: usize,
    pub y: usize,
    pub direction: Direction,
}

impl Ant {
    pub fn new(x: usize, y: usize, direction: Direction) -> Self {
        Self { x, y, direction }
    }

    /// Move one cell forward. Leaving one edge re-enters from the opposite one.
    fn advance(&mut self, width: usize, height: usize) {
        let (dx, dy) = self.direction.vector();
        self.x = (self.x as i64 + dx as i64).rem_euclid(width as i64) as usize;
        self.y = (self.y as i64 + dy as i64).rem_euclid(height as i64) as usize;
    }
}

/// Langton's Ant on a toroidal grid.
pub struct LangtonsAnt {
    grid: Grid,
    ant: Ant,
    generation: u64,
}

impl LangtonsAnt {
    pub fn new(grid: Grid, ant: Ant) -> Result<Self, GridError> {
        if grid.get(ant.x, ant.y).is_none() {
            return Err(GridError::OutOfBounds {
                x: ant.x,
                y: ant.y,
                width: grid.width(),
                height: grid.height(),
            });
        }
        Ok(Self { grid, ant, generation: 0 })
    }

    /// All-dead grid with the ant in the middle, facing north.
    ///
    /// # Panics
    ///
    /// If `width` or `height` is zero.
    pub fn centered(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new(width, height),
            ant: Ant::new(width / 2, height / 2, Direction::North),
            generation: 0,
        }
    }

    pub fn ant(&self) -> Ant {
        self.ant
    }

    pub fn update(&mut self) {
        let position = (self.ant.x, self.ant.y);
        let color = self.grid[position];
        let turn = match color {
            Cell::Dead => Turn::Right,
            Cell::Alive => Turn::Left,
        };
        self.ant.direction = self.ant.direction.turned(turn);
        self.grid[position] = color.flipped();
        self.ant.advance(self.grid.width(), self.grid.height());
        self.generation += 1;
    }
}

impl Automaton for LangtonsAnt {
    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn step(&mut self) {
        self.update();
    }

    fn generation(&self) -> u64 {
        self.generation
    }
}
