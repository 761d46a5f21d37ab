use std::time::Duration;

use crate::{Coords, GridInt};

/// Layout and pacing of a game session
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Width of the grid, walls included
    pub width: GridInt,
    /// Height of the grid, walls included
    pub height: GridInt,
    /// Column of the interior wall segment
    pub wall_column: GridInt,
    /// Initial head of the snake
    pub head: Coords,
    /// Initial tail of the snake, on the head's row
    pub tail: Coords,
    /// How long to wait for a key before moving on the current heading
    pub tick: Duration,
    /// Seed for apple placement; random when unset
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 20,
            wall_column: 24,
            head: (6, 5),
            tail: (3, 5),
            tick: Duration::from_millis(200),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_tick(self, tick: Duration) -> Self {
        Self { tick, ..self }
    }

    pub fn with_seed(self, seed: Option<u64>) -> Self {
        Self { seed, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = GameConfig::default();
        assert_eq!((config.width, config.height), (50, 20));
        assert_eq!(config.wall_column, 24);
        assert_eq!(config.head, (6, 5));
        assert_eq!(config.tail, (3, 5));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builders_keep_layout() {
        let config = GameConfig::default()
            .with_tick(Duration::from_millis(50))
            .with_seed(Some(9));
        assert_eq!(config.tick, Duration::from_millis(50));
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.width, 50);
    }
}
