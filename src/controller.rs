use crate::board::{Board, Cell};
use crate::clock::SimulationClock;
use crate::input::{InputTracker, LogicalInput};

/// Interval change per frame while a speed key is held.
pub const SPEED_STEP_MS: u64 = 10;

/// Applies one frame of input to the board and clock.
///
/// Painting and speed changes are level-triggered and repeat every frame the
/// input is held. Pause, clear and single-step fire on the rising edge only.
pub fn process_inputs(input: &InputTracker, board: &mut Board, clock: &mut SimulationClock) {
    let place = input.is_held(LogicalInput::PlaceCell);
    if place || input.is_held(LogicalInput::ClearCell) {
        let (col, row) = input.cursor_cell();
        board.set(col as i32, row as i32, Cell::from(place));
    }
    if input.is_falling_edge(LogicalInput::PlaceCell) || input.is_falling_edge(LogicalInput::ClearCell) {
        log::debug!("Paint stroke ended at {:?}, population {}", input.cursor_cell(), board.population());
    }

    if input.is_rising_edge(LogicalInput::TogglePause) {
        clock.toggle_pause();
        log::info!("Paused: {}", clock.is_paused());
    }

    if input.is_held(LogicalInput::SpeedUp) {
        clock.set_tick_interval(clock.tick_interval_ms().saturating_sub(SPEED_STEP_MS));
        log::info!("Speed: {:03}", clock.tick_interval_ms());
    }
    if input.is_held(LogicalInput::SpeedDown) {
        clock.set_tick_interval(clock.tick_interval_ms() + SPEED_STEP_MS);
        log::info!("Speed: {:03}", clock.tick_interval_ms());
    }

    if input.is_rising_edge(LogicalInput::ClearBoard) {
        board.clear();
        clock.set_paused(true);
        log::info!("Paused: {}", clock.is_paused());
    }

    if input.is_rising_edge(LogicalInput::SingleStep) && clock.is_paused() {
        clock.force_single_tick(board);
    }
}
