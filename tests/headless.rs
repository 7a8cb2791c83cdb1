use automata_demos::automata::chessboard::Chessboard;
use automata_demos::automata::langton::{Direction, LangtonsAnt};
use automata_demos::automata::life::LifeGrid;
use automata_demos::canvas::{draw_grid, Canvas, Palette, BLACK, WHITE};
use automata_demos::grid::Cell;
use automata_demos::{Automaton, DemoConfig, DemoError};

fn render<A: Automaton>(config: &DemoConfig, automaton: &A) -> Vec<u8> {
    let mut frame = vec![0; (config.window_width * config.window_height * 4) as usize];
    let mut canvas = Canvas::new(&mut frame, config.window_width, config.window_height);
    draw_grid(&mut canvas, automaton.grid(), config.cell_size, &Palette::default());
    frame
}

fn pixel(frame: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
    let i = ((x + y * width) * 4) as usize;
    [frame[i], frame[i + 1], frame[i + 2], frame[i + 3]]
}

fn run_ticks<A: Automaton>(automaton: &mut A, ticks: u64) {
    for _ in 0..ticks {
        automaton.step();
    }
}

#[test]
fn chessboard_frame_alternates_squares() {
    let config = DemoConfig::new("Chess Board", 480, 480, 60);
    let board = Chessboard::new(config.grid_width(), config.grid_height());
    let frame = render(&config, &board);

    assert_eq!(pixel(&frame, 480, 0, 0), WHITE);
    assert_eq!(pixel(&frame, 480, 59, 59), WHITE);
    assert_eq!(pixel(&frame, 480, 60, 0), BLACK);
    assert_eq!(pixel(&frame, 480, 60, 60), WHITE);
    assert_eq!(pixel(&frame, 480, 479, 479), WHITE);
}

#[test]
fn ant_scenario_on_small_grid() {
    let config = DemoConfig::new("Langton's Ant", 450, 450, 10);
    let mut ant = LangtonsAnt::centered(config.grid_width(), config.grid_height());
    assert_eq!((ant.ant().x, ant.ant().y), (22, 22));

    ant.step();

    assert_eq!(ant.grid().get(22, 22), Some(Cell::Alive));
    assert_eq!(ant.ant().direction, Direction::East);
    assert_eq!((ant.ant().x, ant.ant().y), (23, 22));

    let frame = render(&config, &ant);
    assert_eq!(pixel(&frame, 450, 225, 225), WHITE);
    assert_eq!(pixel(&frame, 450, 235, 225), BLACK);
}

#[test]
fn ant_keeps_running_past_the_edges() {
    // Long enough for the highway to reach the border of a small grid.
    let mut ant = LangtonsAnt::centered(20, 20);
    run_ticks(&mut ant, 15_000);

    let state = ant.ant();
    assert!(state.x < 20 && state.y < 20);
    assert_eq!(ant.generation(), 15_000);
}

#[test]
fn ant_direction_stays_a_unit_vector() {
    let mut ant = LangtonsAnt::centered(16, 16);
    for _ in 0..3_000 {
        ant.step();
        let (dx, dy) = ant.ant().direction.vector();
        assert_eq!(dx.abs() + dy.abs(), 1);
        assert!(Direction::all().contains(&ant.ant().direction));
    }
}

#[test]
fn seeded_life_is_reproducible_across_runs() {
    let mut a = LifeGrid::new_seeded(40, 30, (7, 11));
    let mut b = LifeGrid::new_seeded(40, 30, (7, 11));
    run_ticks(&mut a, 50);
    run_ticks(&mut b, 50);
    assert_eq!(a.grid(), b.grid());
    assert_eq!(a.generation(), 50);
}

#[test]
fn empty_life_renders_black() {
    let config = DemoConfig::new("Conway's Game of Life", 40, 40, 10);
    let mut life = LifeGrid::new_empty(config.grid_width(), config.grid_height());
    run_ticks(&mut life, 5);

    let frame = render(&config, &life);
    assert!(frame.chunks_exact(4).all(|p| p == BLACK));
}

#[test]
fn zero_cell_size_fails_before_any_window() {
    let config = DemoConfig::new("bad", 100, 100, 0);
    let result = automata_demos::run(&config, |_| Ok(Chessboard::new(1, 1)));
    assert!(matches!(result, Err(DemoError::InvalidConfig(_))));
}

#[test]
fn cell_larger_than_window_fails_before_any_window() {
    let config = DemoConfig::new("bad", 100, 100, 200);
    let result = automata_demos::run(&config, |_| Ok(Chessboard::new(1, 1)));
    assert!(matches!(result, Err(DemoError::InvalidConfig(_))));
}

#[test]
fn construction_failure_is_returned_unchanged() {
    let config = DemoConfig::new("Conway's Game of Life", 80, 80, 10);
    let result = automata_demos::run(&config, |_| -> Result<LifeGrid, DemoError> {
        Err(getrandom::Error::UNSUPPORTED.into())
    });
    assert!(matches!(result, Err(DemoError::Entropy(_))));
}
