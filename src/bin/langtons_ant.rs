#![forbid(unsafe_code)]

use std::time::Duration;

use automata_demos::automata::langton::LangtonsAnt;
use automata_demos::{DemoConfig, DemoError};

const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 800;
const CELL_SIZE: u32 = 10;

const CONFIG: DemoConfig =
    DemoConfig::new("Langton's Ant", WINDOW_WIDTH, WINDOW_HEIGHT, CELL_SIZE)
        .with_tick(Duration::from_millis(1));

fn main() -> Result<(), DemoError> {
    env_logger::init();
    automata_demos::run(&CONFIG, |config| {
        Ok(LangtonsAnt::centered(config.grid_width(), config.grid_height()))
    })
}
