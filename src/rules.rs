use crate::board::{Board, Cell, Grid};

/// Counts live cells among the eight surrounding (col, row), wrapping at the edges.
pub fn count_neighbors(snapshot: &Grid, col: i32, row: i32) -> u8 {
    let mut count = 0;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            if snapshot.get(col + dx, row + dy).is_alive() {
                count += 1;
            }
        }
    }
    count
}

pub fn next_state(cell: Cell, neighbors: u8) -> Cell {
    match (cell, neighbors) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,
        (Cell::Dead, 3) => Cell::Alive,
        _ => Cell::Dead,
    }
}

/// Advances the board by one generation.
///
/// Neighbor counts are taken from a snapshot of the pre-tick board, so the
/// order cells are visited in does not matter.
pub fn advance_generation(board: &mut Board) {
    board.snapshot_into_scratch();
    let (snapshot, current) = board.split_mut();

    for row in 0..snapshot.rows() as i32 {
        for col in 0..snapshot.cols() as i32 {
            let neighbors = count_neighbors(snapshot, col, row);
            current.set(col, row, next_state(snapshot.get(col, row), neighbors));
        }
    }

    log::trace!("Generation advanced, population {}", board.population());
}
