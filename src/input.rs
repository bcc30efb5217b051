/// Logical inputs the simulation reacts to, independent of which key or
/// button produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalInput {
    TogglePause,
    PlaceCell,
    ClearCell,
    SpeedUp,
    SpeedDown,
    ClearBoard,
    SingleStep,
}

impl LogicalInput {
    pub const COUNT: usize = 7;

    pub const ALL: [LogicalInput; Self::COUNT] = [
        LogicalInput::TogglePause,
        LogicalInput::PlaceCell,
        LogicalInput::ClearCell,
        LogicalInput::SpeedUp,
        LogicalInput::SpeedDown,
        LogicalInput::ClearBoard,
        LogicalInput::SingleStep,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// A window event after key/button mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawInput {
    Quit,
    Pressed(LogicalInput),
    Released(LogicalInput),
    /// Pointer position in frame-buffer pixels.
    PointerMoved { x: u32, y: u32 },
}

/// Held state for every logical input this frame and last frame, plus the
/// cell under the pointer.
#[derive(Debug)]
pub struct InputTracker {
    current: [bool; LogicalInput::COUNT],
    previous: [bool; LogicalInput::COUNT],
    cell_size: (u32, u32),
    grid_size: (u32, u32),
    cursor: (u32, u32),
    quit_requested: bool,
}

impl InputTracker {
    pub fn new(cell_size: (u32, u32), grid_size: (u32, u32)) -> Self {
        Self {
            current: [false; LogicalInput::COUNT],
            previous: [false; LogicalInput::COUNT],
            cell_size,
            grid_size,
            cursor: (0, 0),
            quit_requested: false,
        }
    }

    pub fn handle(&mut self, input: RawInput) {
        match input {
            RawInput::Quit => self.quit_requested = true,
            RawInput::Pressed(logical) => self.current[logical.index()] = true,
            RawInput::Released(logical) => self.current[logical.index()] = false,
            RawInput::PointerMoved { x, y } => self.pointer_moved(x, y),
        }
    }

    /// Recomputes the cursor cell. A zero cell size means the grid does not
    /// fit the window; the previous cursor cell is kept.
    fn pointer_moved(&mut self, x: u32, y: u32) {
        let (cell_w, cell_h) = self.cell_size;
        if cell_w == 0 || cell_h == 0 {
            log::error!("Cannot map pointer to a cell: cell size is {}x{}", cell_w, cell_h);
            return;
        }

        let (cols, rows) = self.grid_size;
        self.cursor = (
            (x / cell_w).min(cols.saturating_sub(1)),
            (y / cell_h).min(rows.saturating_sub(1)),
        );
    }

    /// Copies this frame's held state into the previous-frame slots. Call
    /// once per frame, after edges have been consumed.
    pub fn end_frame(&mut self) {
        self.previous = self.current;
    }

    pub fn is_held(&self, input: LogicalInput) -> bool {
        self.current[input.index()]
    }

    pub fn is_rising_edge(&self, input: LogicalInput) -> bool {
        self.current[input.index()] && !self.previous[input.index()]
    }

    pub fn is_falling_edge(&self, input: LogicalInput) -> bool {
        !self.current[input.index()] && self.previous[input.index()]
    }

    pub fn is_held_index(&self, index: usize) -> bool {
        LogicalInput::from_index(index).map_or(false, |input| self.is_held(input))
    }

    pub fn is_rising_edge_index(&self, index: usize) -> bool {
        LogicalInput::from_index(index).map_or(false, |input| self.is_rising_edge(input))
    }

    pub fn is_falling_edge_index(&self, index: usize) -> bool {
        LogicalInput::from_index(index).map_or(false, |input| self.is_falling_edge(input))
    }

    pub fn cursor_cell(&self) -> (u32, u32) {
        self.cursor
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}
