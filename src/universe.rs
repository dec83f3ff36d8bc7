use std::fmt;

use rand::Rng;

use crate::events::EditCommand;

/// A single cell of the universe.
///
/// The `u8` repr keeps the row-major `Vec<Cell>` densely packed, so a
/// `&[Cell]` doubles as the raw snapshot buffer handed to the renderer.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Dead = 0,
    Alive = 1,
}

impl Cell {
    pub fn toggle(&mut self) {
        *self = match *self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        };
    }

    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

/// Relative coordinates of the 5-cell glider, anchored at its center row.
const GLIDER: [(i64, i64); 5] = [(-1, -1), (0, 0), (0, 1), (1, -1), (1, 0)];

/// A toroidal Game of Life universe.
///
/// The state is double buffered: `tick` reads the current generation from
/// `cells`, writes the next one into `buffer_cells`, then swaps the two.
/// Every coordinate wraps at the grid edges, so patterns stamped near a
/// border continue on the opposite side.
pub struct Universe {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    buffer_cells: Vec<Cell>,
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.cells.chunks(self.width as usize) {
            for &cell in line {
                let symbol = if cell == Cell::Dead { '◻' } else { '◼' };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl Universe {
    fn from_fn(height: u32, width: u32, f: impl FnMut(u32) -> Cell) -> Self {
        assert!(
            height > 0 && width > 0,
            "Cannot create universe with 0 size"
        );

        let cells: Vec<Cell> = (0..width * height).map(f).collect();
        let buffer_cells = cells.clone();

        Self {
            width,
            height,
            cells,
            buffer_cells,
        }
    }

    /// Create a universe seeded with a fixed deterministic pattern.
    pub fn new(height: u32, width: u32) -> Self {
        Self::from_fn(height, width, |i| {
            if i % 2 == 0 || i % 7 == 0 {
                Cell::Alive
            } else {
                Cell::Dead
            }
        })
    }

    /// Create a universe where every cell is independently alive with
    /// probability one half.
    pub fn new_random(height: u32, width: u32) -> Self {
        let mut rng = rand::thread_rng();

        Self::from_fn(height, width, |_| {
            if rng.gen_bool(0.5) {
                Cell::Alive
            } else {
                Cell::Dead
            }
        })
    }

    /// Create a universe with every cell dead.
    pub fn new_dead(height: u32, width: u32) -> Self {
        Self::from_fn(height, width, |_| Cell::Dead)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The dead and alive values of the entire universe, row-major.
    ///
    /// The returned view is only valid until the next mutating call.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn get_index(&self, row: u32, column: u32) -> usize {
        (row * self.width + column) as usize
    }

    /// Resolve possibly-negative offsets onto the torus.
    fn wrap(&self, row: i64, column: i64) -> (u32, u32) {
        let row = row.rem_euclid(self.height as i64) as u32;
        let column = column.rem_euclid(self.width as i64) as u32;

        (row, column)
    }

    fn live_neighbor_count(&self, row: u32, column: u32) -> u8 {
        let mut count = 0;

        for dr in [-1i64, 0, 1] {
            for dc in [-1i64, 0, 1] {
                if dr == 0 && dc == 0 {
                    continue;
                }

                let (r, c) = self.wrap(row as i64 + dr, column as i64 + dc);
                count += self.cells[self.get_index(r, c)] as u8;
            }
        }

        count
    }

    /// Advance the universe by exactly one generation, in place.
    pub fn tick(&mut self) {
        for row in 0..self.height {
            for col in 0..self.width {
                let idx = self.get_index(row, col);
                let cell = self.cells[idx];
                let live_neighbors = self.live_neighbor_count(row, col);

                self.buffer_cells[idx] = match (cell, live_neighbors) {
                    // Underpopulation
                    (Cell::Alive, x) if x < 2 => Cell::Dead,
                    // Survival
                    (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,
                    // Overpopulation
                    (Cell::Alive, x) if x > 3 => Cell::Dead,
                    // Reproduction
                    (Cell::Dead, 3) => Cell::Alive,
                    (otherwise, _) => otherwise,
                };
            }
        }

        std::mem::swap(&mut self.cells, &mut self.buffer_cells);
    }

    /// Flip a single cell between dead and alive.
    pub fn toggle_cell(&mut self, row: u32, column: u32) {
        let idx = self.get_index(row, column);
        self.cells[idx].toggle();
    }

    /// Set the given cells alive.
    pub fn set_cells(&mut self, cells: &[(u32, u32)]) {
        for &(row, col) in cells {
            let idx = self.get_index(row, col);
            self.cells[idx] = Cell::Alive;
        }
    }

    /// Stamp a glider anchored at (`row`, `column`), wrapping at the edges.
    pub fn insert_glider(&mut self, row: u32, column: u32) {
        let coords: Vec<(u32, u32)> = GLIDER
            .iter()
            .map(|&(dr, dc)| self.wrap(row as i64 + dr, column as i64 + dc))
            .collect();

        self.set_cells(&coords);
    }

    /// Stamp a pulsar centered at (`row`, `column`), wrapping at the edges.
    ///
    /// The pulsar is four arms of three cells mirrored over both axes, at
    /// offsets 1 and 6 from the center line:
    ///
    /// ```notrust
    ///   ..###...###..
    ///   .............
    ///   #....#.#....#
    ///   #....#.#....#
    ///   #....#.#....#
    ///   ..###...###..
    ///   .............
    ///   ..###...###..
    ///   #....#.#....#
    ///   #....#.#....#
    ///   #....#.#....#
    ///   .............
    ///   ..###...###..
    /// ```
    pub fn insert_pulsar(&mut self, row: u32, column: u32) {
        let mut coords = Vec::with_capacity(48);

        for line in [-6i64, -1, 1, 6] {
            for d in 2..=4i64 {
                for sign in [-1i64, 1] {
                    // arms parallel to the rows, then mirrored to the columns
                    coords.push(self.wrap(row as i64 + line, column as i64 + sign * d));
                    coords.push(self.wrap(row as i64 + sign * d, column as i64 + line));
                }
            }
        }

        self.set_cells(&coords);
    }

    /// Dispatch one pointer edit onto the universe.
    pub fn apply_edit(&mut self, cmd: EditCommand, row: u32, column: u32) {
        match cmd {
            EditCommand::Toggle => self.toggle_cell(row, column),
            EditCommand::InsertGlider => self.insert_glider(row, column),
            EditCommand::InsertPulsar => self.insert_pulsar(row, column),
        }
    }
}
