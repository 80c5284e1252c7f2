// config.rs - Simulator settings and their validation

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::layout::Layout;
use crate::snapshot::DEFAULT_STATE_PATH;

/// Start-up settings for one simulator instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub window_width: u32,
    pub window_height: u32,
    pub cells_x: usize,
    pub cells_y: usize,
    /// Wall-clock spacing between loop iterations.
    pub tick_interval: Duration,
    /// Probability that a cell starts alive.
    pub density: f64,
    /// Fixed RNG seed for the initial grid; `None` seeds from the OS.
    pub seed: Option<u64>,
    pub state_path: PathBuf,
    pub start_paused: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            cells_x: 40,
            cells_y: 30,
            tick_interval: Duration::from_secs(1),
            density: 0.2,
            seed: None,
            state_path: PathBuf::from(DEFAULT_STATE_PATH),
            start_paused: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cells_x == 0 || self.cells_y == 0 {
            return Err(ConfigError::ZeroCells { x: self.cells_x, y: self.cells_y });
        }
        if self.cells_x > self.window_width as usize || self.cells_y > self.window_height as usize {
            return Err(ConfigError::CellsExceedWindow {
                width: self.window_width,
                height: self.window_height,
                x: self.cells_x,
                y: self.cells_y,
            });
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTick);
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::InvalidDensity(self.density));
        }
        Ok(())
    }

    pub fn layout(&self) -> Layout {
        Layout::new(self.window_width, self.window_height, self.cells_x, self.cells_y)
    }
}
