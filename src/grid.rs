use crate::{Coords, GridInt};
use crate::error::GameError;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Snake,
    Apple,
    Wall,
}

impl Cell {
    pub fn as_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Snake => 'o',
            Cell::Apple => '@',
            Cell::Wall => '#',
        }
    }
}

/// Occupancy map of the playing field, stored row-major.
///
/// Every accessor is bounds checked: touching a cell outside
/// `[0, width) x [0, height)` yields `GameError::OutOfBounds`.
pub struct Grid {
    width: GridInt,
    height: GridInt,
    wall_column: GridInt,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds the grid and stamps the border and interior walls.
    pub fn new(width: GridInt, height: GridInt, wall_column: GridInt) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");

        let cells = vec![Cell::Empty; width as usize * height as usize];
        let mut grid = Grid { width, height, wall_column, cells };
        grid.clear();
        grid
    }

    pub fn width(&self) -> GridInt {
        self.width
    }

    pub fn height(&self) -> GridInt {
        self.height
    }

    pub fn in_bounds(&self, pos: Coords) -> bool {
        pos.0 >= 0 && pos.0 < self.width && pos.1 >= 0 && pos.1 < self.height
    }

    pub fn get(&self, pos: Coords) -> Result<Cell, GameError> {
        let idx = self.index(pos)?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, pos: Coords, value: Cell) -> Result<(), GameError> {
        let idx = self.index(pos)?;
        self.cells[idx] = value;
        Ok(())
    }

    pub fn clear_cell(&mut self, pos: Coords) -> Result<(), GameError> {
        self.set(pos, Cell::Empty)
    }

    /// Wipes the field and re-stamps the walls.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);

        for y in 0..self.height {
            for x in 0..self.width {
                if x == 0 || x == self.width - 1 || y == 0 || y == self.height - 1 {
                    self.cells[(y * self.width + x) as usize] = Cell::Wall;
                }
            }
        }

        // Interior segment, leaving a passable gap above and below
        if (0..self.width).contains(&self.wall_column) {
            for y in self.height / 4..self.height - self.height / 4 {
                self.cells[(y * self.width + self.wall_column) as usize] = Cell::Wall;
            }
        }
    }

    #[cfg(test)]
    pub fn count(&self, value: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == value).count()
    }

    pub fn has_empty_cell(&self) -> bool {
        self.cells.contains(&Cell::Empty)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width as usize)
    }

    ///////////////////////////////////////////////////////////////////////////

    fn index(&self, pos: Coords) -> Result<usize, GameError> {
        if !self.in_bounds(pos) {
            return Err(GameError::OutOfBounds { pos, width: self.width, height: self.height });
        }

        Ok((pos.1 * self.width + pos.0) as usize)
    }
}
