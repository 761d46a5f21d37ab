use std::collections::VecDeque;

use crate::Coords;
use crate::error::GameError;
use crate::grid::{Cell, Grid};
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn is_opposite(self, other: Direction) -> bool {
        matches!((self, other), (Up, Down) | (Down, Up) | (Right, Left) | (Left, Right))
    }

    pub fn offset(self, pos: Coords) -> Coords {
        let diff = match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        };

        (pos.0 + diff.0, pos.1 + diff.1)
    }
}

/// The snake's body, tail at the front of the deque and head at the back.
///
/// The snake never owns the grid: every operation that touches occupancy
/// takes it by `&mut`, and keeps the invariant that each body cell is marked
/// `Cell::Snake` there.
pub struct Snake {
    pub(crate) body: VecDeque<Coords>,
    pub(crate) direction: Direction,
    pub(crate) length: usize,
    pub(crate) apples_eaten: usize,
    pub(crate) alive: bool,
}

impl Snake {
    pub fn new() -> Self {
        Snake {
            body: VecDeque::new(),
            direction: Right,
            length: 0,
            apples_eaten: 0,
            alive: true,
        }
    }

    /// Lays out a horizontal body from `tail.x` to `head.x` on the head's row,
    /// heading right.
    pub fn init(head: Coords, tail: Coords, grid: &mut Grid) -> Result<Self, GameError> {
        if head.1 != tail.1 || head.0 < tail.0 {
            return Err(GameError::InvalidBody { head, tail });
        }

        let mut snake = Snake::new();
        for x in tail.0..=head.0 {
            snake.push((x, head.1), grid)?;
        }

        snake.length = snake.body.len();
        Ok(snake)
    }

    pub fn push(&mut self, pos: Coords, grid: &mut Grid) -> Result<(), GameError> {
        grid.set(pos, Cell::Snake)?;
        self.body.push_back(pos);
        Ok(())
    }

    /// Drops the tail segment, freeing its cell. `None` if there was no body left.
    pub fn shift(&mut self, grid: &mut Grid) -> Result<Option<Coords>, GameError> {
        let tail = match self.tail() {
            Some(tail) => tail,
            None => return Ok(None),
        };

        grid.clear_cell(tail)?;
        self.body.pop_front();
        Ok(Some(tail))
    }

    #[cfg(test)]
    pub fn body(&self) -> &VecDeque<Coords> {
        &self.body
    }

    pub fn head(&self) -> Option<Coords> {
        self.body.back().copied()
    }

    pub fn tail(&self) -> Option<Coords> {
        self.body.front().copied()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn apples_eaten(&self) -> usize {
        self.apples_eaten
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Up.is_opposite(Down));
        assert!(Down.is_opposite(Up));
        assert!(Left.is_opposite(Right));
        assert!(Right.is_opposite(Left));

        assert!(!Up.is_opposite(Left));
        assert!(!Right.is_opposite(Right));
    }

    #[test]
    fn test_offset() {
        assert_eq!(Left.offset((5, 5)), (4, 5));
        assert_eq!(Right.offset((5, 5)), (6, 5));
        assert_eq!(Up.offset((5, 5)), (5, 4));
        assert_eq!(Down.offset((5, 5)), (5, 6));
    }

    #[test]
    fn test_init_default_layout() {
        let mut grid = Grid::new(50, 20, 24);
        let snake = Snake::init((6, 5), (3, 5), &mut grid).unwrap();

        let body: Vec<Coords> = snake.body().iter().copied().collect();
        assert_eq!(body, vec![(3, 5), (4, 5), (5, 5), (6, 5)]);
        assert_eq!(snake.head(), Some((6, 5)));
        assert_eq!(snake.tail(), Some((3, 5)));
        assert_eq!(snake.direction(), Right);
        assert_eq!(snake.length(), 4);
        assert_eq!(snake.apples_eaten(), 0);
        assert!(snake.is_alive());

        for pos in &body {
            assert_eq!(grid.get(*pos).unwrap(), Cell::Snake);
        }
        assert_eq!(grid.count(Cell::Snake), 4);
    }

    #[test]
    fn test_init_rejects_bad_layout() {
        let mut grid = Grid::new(50, 20, 24);
        assert_eq!(
            Snake::init((3, 5), (6, 5), &mut grid).err(),
            Some(GameError::InvalidBody { head: (3, 5), tail: (6, 5) })
        );
        assert!(Snake::init((6, 5), (3, 6), &mut grid).is_err());
        assert_eq!(grid.count(Cell::Snake), 0);
    }

    #[test]
    fn test_push_and_shift() {
        let mut grid = Grid::new(10, 10, 5);
        let mut snake = Snake::new();

        snake.push((2, 2), &mut grid).unwrap();
        assert_eq!(snake.head(), Some((2, 2)));
        assert_eq!(snake.tail(), Some((2, 2)));

        snake.push((3, 2), &mut grid).unwrap();
        assert_eq!(snake.head(), Some((3, 2)));
        assert_eq!(grid.count(Cell::Snake), 2);

        assert_eq!(snake.shift(&mut grid).unwrap(), Some((2, 2)));
        assert_eq!(grid.get((2, 2)).unwrap(), Cell::Empty);
        assert_eq!(snake.tail(), Some((3, 2)));

        assert_eq!(snake.shift(&mut grid).unwrap(), Some((3, 2)));
        assert_eq!(snake.shift(&mut grid).unwrap(), None);
        assert_eq!(grid.count(Cell::Snake), 0);
    }

    #[test]
    fn test_push_out_of_bounds_leaves_body_alone() {
        let mut grid = Grid::new(10, 10, 5);
        let mut snake = Snake::new();

        assert!(snake.push((10, 2), &mut grid).is_err());
        assert!(snake.body().is_empty());
    }
}
