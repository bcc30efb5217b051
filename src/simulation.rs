use crate::board::Board;
use crate::clock::SimulationClock;
use crate::config::Config;
use crate::controller;
use crate::input::{InputTracker, RawInput};

/// Everything the frame loop mutates, owned in one place.
#[derive(Debug)]
pub struct Simulation {
    board: Board,
    clock: SimulationClock,
    input: InputTracker,
}

impl Simulation {
    pub fn new(config: &Config) -> Self {
        Self {
            board: Board::new(config.cols, config.rows),
            clock: SimulationClock::new(config.initial_tick_interval_ms, config.start_paused),
            input: InputTracker::new(config.cell_size(), (config.cols, config.rows)),
        }
    }

    pub fn handle_input(&mut self, raw: RawInput) {
        self.input.handle(raw);
    }

    /// Runs one loop iteration after the event batch has been drained:
    /// apply inputs, roll edge state forward, then drain simulation lag.
    /// Returns the number of generations computed from lag.
    pub fn frame(&mut self, elapsed_ms: u64) -> u32 {
        controller::process_inputs(&self.input, &mut self.board, &mut self.clock);
        self.input.end_frame();
        self.clock.advance(elapsed_ms, &mut self.board)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn quit_requested(&self) -> bool {
        self.input.quit_requested()
    }
}
