/// State of a single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

/// One toroidal container of cells, flattened row-major.
///
/// Every coordinate is wrapped before lookup, so `get(-1, 0)` reads the last
/// column and `get(cols, 0)` reads the first one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cols: u32,
    rows: u32,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(cols: u32, rows: u32) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::Dead; cols as usize * rows as usize],
        }
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    fn index(&self, col: i32, row: i32) -> usize {
        let col = i64::from(col).rem_euclid(i64::from(self.cols)) as usize;
        let row = i64::from(row).rem_euclid(i64::from(self.rows)) as usize;
        col + row * self.cols as usize
    }

    pub fn get(&self, col: i32, row: i32) -> Cell {
        self.cells[self.index(col, row)]
    }

    pub fn set(&mut self, col: i32, row: i32, cell: Cell) {
        let index = self.index(col, row);
        self.cells[index] = cell;
    }

    pub fn fill(&mut self, cell: Cell) {
        self.cells.iter_mut().for_each(|c| *c = cell);
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }
}

/// Double-buffered board: `current` is what gets drawn and edited, `scratch`
/// holds the pre-tick snapshot the rule engine reads from.
#[derive(Debug, Clone)]
pub struct Board {
    current: Grid,
    scratch: Grid,
}

impl Board {
    pub fn new(cols: u32, rows: u32) -> Self {
        Self {
            current: Grid::new(cols, rows),
            scratch: Grid::new(cols, rows),
        }
    }

    pub fn cols(&self) -> u32 {
        self.current.cols()
    }

    pub fn rows(&self) -> u32 {
        self.current.rows()
    }

    pub fn get(&self, col: i32, row: i32) -> Cell {
        self.current.get(col, row)
    }

    pub fn set(&mut self, col: i32, row: i32, cell: Cell) {
        self.current.set(col, row, cell);
    }

    /// Copies the current generation into scratch verbatim.
    pub fn snapshot_into_scratch(&mut self) {
        self.scratch.cells.copy_from_slice(&self.current.cells);
    }

    /// Snapshot to read from and current grid to write into, borrowed together.
    pub fn split_mut(&mut self) -> (&Grid, &mut Grid) {
        (&self.scratch, &mut self.current)
    }

    pub fn clear(&mut self) {
        self.current.fill(Cell::Dead);
        self.scratch.fill(Cell::Dead);
    }

    pub fn population(&self) -> usize {
        self.current.population()
    }
}
