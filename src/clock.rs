use std::time::Instant;

use crate::board::Board;
use crate::rules::advance_generation;

pub const MIN_TICK_INTERVAL_MS: u64 = 10;
pub const MAX_TICK_INTERVAL_MS: u64 = 1000;

/// Fixed-timestep clock. Wall time accumulates as lag and is drained one
/// tick interval at a time, independent of how often frames are drawn.
#[derive(Debug)]
pub struct SimulationClock {
    tick_interval_ms: u64,
    lag_ms: u64,
    paused: bool,
}

impl SimulationClock {
    pub fn new(tick_interval_ms: u64, paused: bool) -> Self {
        Self {
            tick_interval_ms: tick_interval_ms.clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS),
            lag_ms: 0,
            paused,
        }
    }

    /// Adds `elapsed_ms` to the lag and drains it in whole ticks, returning
    /// how many generations were actually computed.
    ///
    /// While paused the lag still drains, so unpausing doesn't fire a burst
    /// of catch-up ticks.
    pub fn advance(&mut self, elapsed_ms: u64, board: &mut Board) -> u32 {
        self.lag_ms += elapsed_ms;

        let mut generations = 0;
        while self.lag_ms >= self.tick_interval_ms {
            if !self.paused {
                advance_generation(board);
                generations += 1;
            }
            self.lag_ms -= self.tick_interval_ms;
        }

        if generations > 0 {
            log::debug!("{} generation(s), population {}", generations, board.population());
        }
        generations
    }

    pub fn force_single_tick(&mut self, board: &mut Board) {
        advance_generation(board);
        log::debug!("Single step, population {}", board.population());
    }

    pub fn set_tick_interval(&mut self, ms: u64) {
        self.tick_interval_ms = ms.clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS);
    }

    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms
    }

    pub fn lag_ms(&self) -> u64 {
        self.lag_ms
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

/// Monotonic millisecond time source for the frame loop.
#[derive(Debug)]
pub struct FrameClock {
    start: Instant,
    previous_ms: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            previous_ms: 0,
        }
    }

    pub fn current_time_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    /// Milliseconds since the previous call. Whole-millisecond timestamps are
    /// differenced so sub-millisecond frames don't lose time.
    pub fn elapsed_ms(&mut self) -> u64 {
        let now = self.current_time_ms();
        let elapsed = now.saturating_sub(self.previous_ms);
        self.previous_ms = now;
        elapsed
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    fn blinker_board() -> Board {
        let mut board = Board::new(5, 5);
        for col in 1..=3 {
            board.set(col, 2, Cell::Alive);
        }
        board
    }

    fn is_horizontal(board: &Board) -> bool {
        board.get(1, 2).is_alive() && board.get(3, 2).is_alive()
    }

    #[test]
    fn three_intervals_make_three_ticks() {
        let mut board = blinker_board();
        let mut clock = SimulationClock::new(100, false);

        assert_eq!(clock.advance(300, &mut board), 3);
        assert_eq!(clock.lag_ms(), 0);
        assert!(!is_horizontal(&board));
    }

    #[test]
    fn leftover_lag_stays_below_interval() {
        let mut board = blinker_board();
        let mut clock = SimulationClock::new(100, false);

        assert_eq!(clock.advance(250, &mut board), 2);
        assert_eq!(clock.lag_ms(), 50);
        assert_eq!(clock.advance(49, &mut board), 0);
        assert_eq!(clock.advance(1, &mut board), 1);
        assert_eq!(clock.lag_ms(), 0);
    }

    #[test]
    fn slow_frame_catches_up() {
        let mut board = blinker_board();
        let mut clock = SimulationClock::new(10, false);
        assert_eq!(clock.advance(1005, &mut board), 100);
        assert!(clock.lag_ms() < clock.tick_interval_ms());
    }

    #[test]
    fn paused_time_drains_without_ticking() {
        let mut board = blinker_board();
        let mut clock = SimulationClock::new(100, true);

        assert_eq!(clock.advance(1000, &mut board), 0);
        assert_eq!(clock.lag_ms(), 0);
        assert!(is_horizontal(&board));

        clock.toggle_pause();
        assert_eq!(clock.advance(50, &mut board), 0);
        assert_eq!(clock.advance(50, &mut board), 1);
    }

    #[test]
    fn tick_interval_is_clamped() {
        let mut clock = SimulationClock::new(500, false);
        clock.set_tick_interval(5);
        assert_eq!(clock.tick_interval_ms(), 10);
        clock.set_tick_interval(5000);
        assert_eq!(clock.tick_interval_ms(), 1000);
        clock.set_tick_interval(250);
        assert_eq!(clock.tick_interval_ms(), 250);
    }

    #[test]
    fn forced_tick_ignores_lag() {
        let mut board = blinker_board();
        let mut clock = SimulationClock::new(100, true);
        clock.force_single_tick(&mut board);
        assert!(!is_horizontal(&board));
        assert_eq!(clock.lag_ms(), 0);
    }

    #[test]
    fn frame_clock_is_monotonic() {
        let mut frames = FrameClock::new();
        let first = frames.current_time_ms();
        let _ = frames.elapsed_ms();
        assert!(frames.current_time_ms() >= first);
    }
}
