use std::time::Duration;

use crate::DemoError;

/// Window and grid geometry for one demo.
#[derive(Clone, Debug)]
pub struct DemoConfig {
    pub title: &'static str,
    pub window_width: u32,
    pub window_height: u32,
    pub cell_size: u32,
    /// Pause between two ticks.
    pub tick: Duration,
}

impl DemoConfig {
    pub const fn new(
        title: &'static str,
        window_width: u32,
        window_height: u32,
        cell_size: u32,
    ) -> Self {
        Self {
            title,
            window_width,
            window_height,
            cell_size,
            tick: Duration::from_millis(30),
        }
    }

    pub const fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn validate(&self) -> Result<(), DemoError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(DemoError::InvalidConfig(format!(
                "window is {}x{}",
                self.window_width, self.window_height
            )));
        }
        if self.cell_size == 0 {
            return Err(DemoError::InvalidConfig("cell size is 0".into()));
        }
        if self.cell_size > self.window_width || self.cell_size > self.window_height {
            return Err(DemoError::InvalidConfig(format!(
                "{}px cells do not fit a {}x{} window",
                self.cell_size, self.window_width, self.window_height
            )));
        }
        Ok(())
    }

    pub fn grid_width(&self) -> usize {
        (self.window_width / self.cell_size) as usize
    }

    pub fn grid_height(&self) -> usize {
        (self.window_height / self.cell_size) as usize
    }
}
