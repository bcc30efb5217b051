use thiserror::Error;

use crate::clock::{MAX_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS};

pub const ROWS: u32 = 80;
pub const COLS: u32 = 80;
pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 800;
pub const BORDER: u32 = 2;
pub const INITIAL_TICK_INTERVAL_MS: u64 = 500;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Grid must have at least one row and one column (got {cols}x{rows})")]
    EmptyGrid { cols: u32, rows: u32 },
    #[error("Window must be at least one pixel in each direction (got {width}x{height})")]
    EmptyWindow { width: u32, height: u32 },
    #[error("Border thickness must be even (got {0})")]
    OddBorder(u32),
    #[error("Initial tick interval {0}ms is outside [10, 1000]")]
    TickInterval(u64),
}

/// Startup configuration. Fixed for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Config {
    pub title: String,
    pub rows: u32,
    pub cols: u32,
    pub window_width: u32,
    pub window_height: u32,
    /// Background pixels between neighboring cells.
    pub border: u32,
    pub initial_tick_interval_ms: u64,
    pub start_paused: bool,
    pub vsync: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Conway's Game of Life".to_string(),
            rows: ROWS,
            cols: COLS,
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            border: BORDER,
            initial_tick_interval_ms: INITIAL_TICK_INTERVAL_MS,
            start_paused: true,
            vsync: true,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid { cols: self.cols, rows: self.rows });
        }
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::EmptyWindow {
                width: self.window_width,
                height: self.window_height,
            });
        }
        if self.border % 2 != 0 {
            return Err(ConfigError::OddBorder(self.border));
        }
        if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&self.initial_tick_interval_ms) {
            return Err(ConfigError::TickInterval(self.initial_tick_interval_ms));
        }
        Ok(())
    }

    /// Pixel size of one cell slot. Either side is zero when the grid has
    /// more cells than the window has pixels along that axis.
    pub fn cell_size(&self) -> (u32, u32) {
        (self.window_width / self.cols.max(1), self.window_height / self.rows.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.cell_size(), (10, 10));
        assert!(config.start_paused);
    }

    #[test]
    fn rejects_empty_grid() {
        let config = Config { rows: 0, ..Config::default() };
        assert_eq!(config.validate(), Err(ConfigError::EmptyGrid { cols: 80, rows: 0 }));
    }

    #[test]
    fn rejects_empty_window() {
        let config = Config { window_height: 0, ..Config::default() };
        assert!(matches!(config.validate(), Err(ConfigError::EmptyWindow { .. })));
    }

    #[test]
    fn rejects_odd_border() {
        let config = Config { border: 3, ..Config::default() };
        assert_eq!(config.validate(), Err(ConfigError::OddBorder(3)));
    }

    #[test]
    fn rejects_out_of_range_tick_interval() {
        let config = Config { initial_tick_interval_ms: 5, ..Config::default() };
        assert_eq!(config.validate(), Err(ConfigError::TickInterval(5)));
    }

    #[test]
    fn oversized_grid_is_valid_but_has_zero_cell_size() {
        let config = Config { cols: 1000, ..Config::default() };
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.cell_size(), (0, 10));
    }
}
