#![forbid(unsafe_code)]

use std::time::Duration;

use automata_demos::automata::chessboard::Chessboard;
use automata_demos::{DemoConfig, DemoError};

const WINDOW_WIDTH: u32 = 480;
const WINDOW_HEIGHT: u32 = 480;
const SQUARE_SIZE: u32 = 60;

const CONFIG: DemoConfig =
    DemoConfig::new("Chess Board", WINDOW_WIDTH, WINDOW_HEIGHT, SQUARE_SIZE)
        .with_tick(Duration::from_millis(30));

fn main() -> Result<(), DemoError> {
    env_logger::init();
    automata_demos::run(&CONFIG, |config| {
        Ok(Chessboard::new(config.grid_width(), config.grid_height()))
    })
}
