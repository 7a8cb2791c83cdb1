#![forbid(unsafe_code)]

pub mod automata;
pub mod canvas;
pub mod config;
pub mod grid;

use std::time::Instant;

use error_iter::ErrorIter as _;
use log::{error, info, trace};
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::KeyCode;
use winit::window::WindowBuilder;
use winit_input_helper::WinitInputHelper;

pub use crate::automata::Automaton;
use crate::canvas::{draw_grid, Canvas, Palette};
pub use crate::config::DemoConfig;

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("could not seed the random number generator")]
    Entropy(#[from] getrandom::Error),
    #[error("event loop failed")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("could not create the window")]
    Window(#[from] winit::error::OsError),
    #[error("pixel surface failed")]
    Pixels(#[from] pixels::Error),
    #[error("could not resize the pixel surface")]
    Resize(#[from] pixels::TextureError),
}

/// Validate `config`, build the automaton with `build`, then open a window and
/// drive it until the window is closed or Escape is pressed. Each tick steps
/// the automaton once and redraws it.
///
/// `build` only runs on a valid config, and no window is opened if it fails.
/// Every error is logged with its causes before being returned.
pub fn run<A, F>(config: &DemoConfig, build: F) -> Result<(), DemoError>
where
    A: Automaton,
    F: FnOnce(&DemoConfig) -> Result<A, DemoError>,
{
    let result = config
        .validate()
        .and_then(|()| build(config))
        .and_then(|automaton| run_window(config, automaton));
    if let Err(err) = &result {
        log_error(config.title, err);
    }
    result
}

fn run_window<A: Automaton>(config: &DemoConfig, mut automaton: A) -> Result<(), DemoError> {
    let event_loop = EventLoop::new()?;
    let mut input = WinitInputHelper::new();

    let window = {
        let size = LogicalSize::new(config.window_width as f64, config.window_height as f64);
        WindowBuilder::new()
            .with_title(config.title)
            .with_inner_size(size)
            .with_min_inner_size(size)
            .build(&event_loop)?
    };

    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(config.window_width, config.window_height, surface_texture)?
    };

    info!(
        "{}: {}x{} window, {}x{} grid of {}px cells, {:?} per tick",
        config.title,
        config.window_width,
        config.window_height,
        automaton.grid().width(),
        automaton.grid().height(),
        config.cell_size,
        config.tick,
    );

    let palette = Palette::default();
    let mut next_tick = Instant::now();
    let mut failure: Option<DemoError> = None;

    event_loop.run(|event, elwt| {
        // The one and only event that winit_input_helper doesn't have for us...
        if let Event::WindowEvent {
            event: WindowEvent::RedrawRequested,
            ..
        } = event
        {
            {
                let mut canvas =
                    Canvas::new(pixels.frame_mut(), config.window_width, config.window_height);
                draw_grid(&mut canvas, automaton.grid(), config.cell_size, &palette);
            }
            if let Err(err) = pixels.render() {
                failure = Some(err.into());
                elwt.exit();
                return;
            }
        }

        // Quit is only honoured between ticks.
        if input.update(&event) {
            if input.key_pressed(KeyCode::Escape) || input.close_requested() {
                info!("quit requested at generation {}", automaton.generation());
                elwt.exit();
                return;
            }

            if let Some(size) = input.window_resized() {
                if let Err(err) = pixels.resize_surface(size.width, size.height) {
                    failure = Some(err.into());
                    elwt.exit();
                    return;
                }
            }

            let now = Instant::now();
            if now >= next_tick {
                automaton.step();
                trace!(
                    "generation {}: {} alive",
                    automaton.generation(),
                    automaton.grid().population()
                );
                next_tick = now + config.tick;
                window.request_redraw();
            }
            elwt.set_control_flow(ControlFlow::WaitUntil(next_tick));
        }
    })?;

    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn log_error<E: std::error::Error + 'static>(context: &str, err: &E) {
    error!("{context} failed: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automata::chessboard::Chessboard;

    #[test]
    fn resize_failure_is_a_demo_error() {
        let err: DemoError = pixels::TextureError::TextureWidth(0).into();
        assert!(matches!(err, DemoError::Resize(_)));
    }

    #[test]
    fn builder_is_skipped_for_invalid_config() {
        let config = DemoConfig::new("bad", 100, 100, 0);
        let mut built = false;
        let result = run(&config, |_| {
            built = true;
            Ok(Chessboard::new(1, 1))
        });
        assert!(matches!(result, Err(DemoError::InvalidConfig(_))));
        assert!(!built);
    }
}
