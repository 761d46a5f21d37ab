use thiserror::Error;

use crate::{Coords, GridInt};

/// Contract violations on the grid and snake. Gameplay outcomes such as
/// crashing into a wall are reported through `MoveResult`, never here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("cell {pos:?} lies outside the {width}x{height} grid")]
    OutOfBounds { pos: Coords, width: GridInt, height: GridInt },
    #[error("head {head:?} and tail {tail:?} do not form a horizontal body")]
    InvalidBody { head: Coords, tail: Coords },
}
