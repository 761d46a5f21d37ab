use rand::Rng;
use tracing::{debug, warn};

use crate::Coords;
use crate::error::GameError;
use crate::grid::{Cell, Grid};

/// Marks a uniformly random empty cell as the apple and returns it.
///
/// Samples the whole grid until it lands on an empty cell. Returns `None`
/// when the board has no empty cell left.
pub fn place_apple<R: Rng>(grid: &mut Grid, rng: &mut R) -> Result<Option<Coords>, GameError> {
    if !grid.has_empty_cell() {
        warn!("no empty cell left for an apple");
        return Ok(None);
    }

    loop {
        let pos = (rng.gen_range(0..grid.width()), rng.gen_range(0..grid.height()));

        if grid.get(pos)? == Cell::Empty {
            grid.set(pos, Cell::Apple)?;
            debug!(?pos, "placed apple");
            return Ok(Some(pos));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_places_on_empty_cell() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(50, 20, 24);

        for _ in 0..20 {
            let pos = place_apple(&mut grid, &mut rng).unwrap().unwrap();
            assert_eq!(grid.get(pos).unwrap(), Cell::Apple);
            grid.clear_cell(pos).unwrap();
        }
        assert_eq!(grid.count(Cell::Apple), 0);
    }

    #[test]
    fn test_finds_the_only_empty_cell() {
        let mut rng = StdRng::seed_from_u64(1);
        // 3x3 grid: only the centre is not a border wall
        let mut grid = Grid::new(3, 3, 1);
        grid.clear_cell((1, 1)).unwrap();

        assert_eq!(place_apple(&mut grid, &mut rng).unwrap(), Some((1, 1)));
        assert_eq!(grid.count(Cell::Apple), 1);
    }

    #[test]
    fn test_full_board_yields_none() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut grid = Grid::new(4, 4, 1);
        grid.set((1, 1), Cell::Snake).unwrap();
        grid.set((2, 1), Cell::Snake).unwrap();
        grid.set((1, 2), Cell::Snake).unwrap();
        grid.set((2, 2), Cell::Snake).unwrap();

        assert_eq!(place_apple(&mut grid, &mut rng).unwrap(), None);
        assert_eq!(grid.count(Cell::Apple), 0);
    }
}
