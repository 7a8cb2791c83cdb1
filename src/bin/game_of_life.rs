#![forbid(unsafe_code)]

use std::time::Duration;

use automata_demos::automata::life::LifeGrid;
use automata_demos::{DemoConfig, DemoError};

const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 800;
const CELL_SIZE: u32 = 10;

const CONFIG: DemoConfig =
    DemoConfig::new("Conway's Game of Life", WINDOW_WIDTH, WINDOW_HEIGHT, CELL_SIZE)
        .with_tick(Duration::from_millis(100));

fn main() -> Result<(), DemoError> {
    env_logger::init();
    automata_demos::run(&CONFIG, |config| {
        Ok(LifeGrid::new_random(config.grid_width(), config.grid_height())?)
    })
}
