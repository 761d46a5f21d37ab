use rand::Rng;
use tracing::{debug, info};

use crate::Coords;
use crate::apple::place_apple;
use crate::error::GameError;
use crate::grid::{Cell, Grid};
use crate::snake::{Direction, Snake};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveResult {
    /// Advanced into an empty cell, dropping the tail.
    Moved { new_head: Coords, old_tail: Option<Coords> },
    /// Ate the apple at `new_head`. `apple` is where the next one went, if
    /// the board still had room.
    Grew { new_head: Coords, apple: Option<Coords> },
    /// The next cell lies off the grid; nothing changed.
    OutOfBounds,
    /// Ran into a wall or into itself this tick. The heading was updated,
    /// the body was not. The snake may still steer away next tick unless it
    /// is boxed in, in which case it is now dead.
    Crashed { at: Coords, obstacle: Cell },
    /// Boxed in by an earlier crash, the request was ignored.
    Dead,
}

impl Snake {
    /// Advances the snake by one tick.
    ///
    /// A request to reverse onto itself is ignored and the snake keeps its
    /// heading. Note the heading is committed before the target cell is
    /// classified, so a blocked move still turns the snake.
    pub fn move_step<R: Rng>(
        &mut self,
        requested: Direction,
        grid: &mut Grid,
        rng: &mut R,
    ) -> Result<MoveResult, GameError> {
        if !self.alive {
            return Ok(MoveResult::Dead);
        }

        let old_head = match self.head() {
            Some(head) => head,
            None => return Ok(MoveResult::Dead),
        };

        let direction = if requested.is_opposite(self.direction) {
            self.direction
        } else {
            requested
        };

        let new_head = direction.offset(old_head);
        if !grid.in_bounds(new_head) {
            return Ok(MoveResult::OutOfBounds);
        }

        self.direction = direction;

        let got_apple = match grid.get(new_head)? {
            Cell::Apple => true,
            Cell::Empty => false,
            obstacle => {
                self.alive = self.can_escape(grid)?;
                info!(at = ?new_head, ?obstacle, alive = self.alive, length = self.length, "snake crashed");
                return Ok(MoveResult::Crashed { at: new_head, obstacle });
            }
        };

        self.push(new_head, grid)?;

        if !got_apple {
            let old_tail = self.shift(grid)?;
            return Ok(MoveResult::Moved { new_head, old_tail });
        }

        let apple = place_apple(grid, rng)?;
        self.length += 1;
        self.apples_eaten += 1;
        debug!(length = self.length, apples_eaten = self.apples_eaten, "snake grew");

        Ok(MoveResult::Grew { new_head, apple })
    }

    /// Whether any cell the snake may turn into next is free to enter.
    /// The reversed direction is left out since a request for it falls back
    /// to the current heading.
    fn can_escape(&self, grid: &Grid) -> Result<bool, GameError> {
        let head = match self.head() {
            Some(head) => head,
            None => return Ok(false),
        };

        for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            if dir.is_opposite(self.direction) {
                continue;
            }

            let next = dir.offset(head);
            if grid.in_bounds(next) && matches!(grid.get(next)?, Cell::Empty | Cell::Apple) {
                return Ok(true);
            }
        }

        Ok(false)
    }
}
