use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::{SeedableRng, rngs::StdRng};
use tracing::{error, info};

use crate::apple::place_apple;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::grid::Grid;
use crate::movement::MoveResult;
use crate::snake::{Direction::{*, self}, Snake};
use crate::term::{KeySource, Screen, Session};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Steer(Direction),
}

/// One play session: owns the grid, the snake and the apple rng.
pub struct SnakeGame {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    rng: StdRng,
    started: Instant,
}

impl SnakeGame {
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut grid = Grid::new(config.width, config.height, config.wall_column);
        let snake = Snake::init(config.head, config.tail, &mut grid)?;
        let apple = place_apple(&mut grid, &mut rng)?;

        info!(width = config.width, height = config.height, seed = ?config.seed, ?apple, "new game");

        Ok(SnakeGame { config, grid, snake, rng, started: Instant::now() })
    }

    pub fn tick(&mut self, direction: Direction) -> Result<MoveResult, GameError> {
        self.snake.move_step(direction, &mut self.grid, &mut self.rng)
    }

    /// Puts the terminal into game mode, plays until the player quits and
    /// hands the terminal back, whichever way the game ended.
    pub fn play<T: Session>(&mut self, term: &mut T) -> Result<()> {
        if let Err(err) = term.setup() {
            restore_or_log(term);
            return Err(err);
        }

        let result = self.run(term);
        restore_or_log(term);
        result
    }

    /// Draws the initial frame, then polls and ticks until the player quits.
    pub fn run<T: KeySource + Screen>(&mut self, term: &mut T) -> Result<()> {
        self.draw(term)?;

        while self.step(term)? {
            self.draw(term)?;
        }

        info!(length = self.snake.length(), apples_eaten = self.snake.apples_eaten(), "player quit");
        Ok(())
    }

    /// Waits one tick for input and applies it. `false` once the player quits.
    pub fn step<K: KeySource>(&mut self, keys: &mut K) -> Result<bool> {
        match keys.poll_key(self.config.tick)? {
            None => {
                self.tick(self.snake.direction())?;
            }
            Some(key) => match command_for(&key) {
                Some(Command::Quit) => return Ok(false),
                Some(Command::Steer(dir)) => {
                    self.tick(dir)?;
                }
                None => {}
            },
        }

        Ok(true)
    }

    pub fn draw<S: Screen>(&self, screen: &mut S) -> Result<()> {
        screen.clear_screen()?;

        for row in self.grid.rows() {
            for cell in row {
                screen.draw_cell(cell.as_char())?;
            }
            screen.end_row()?;
        }

        screen.draw_text(&format_stats(&self.snake, self.started.elapsed()))?;
        if !self.snake.is_alive() {
            screen.draw_text("Game over! Press q to quit.\n")?;
        }

        screen.flush()
    }
}

pub fn command_for(key: &KeyEvent) -> Option<Command> {
    if is_ctrl_c(key) {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        KeyCode::Char('w') | KeyCode::Up => Some(Command::Steer(Up)),
        KeyCode::Char('a') | KeyCode::Left => Some(Command::Steer(Left)),
        KeyCode::Char('s') | KeyCode::Down => Some(Command::Steer(Down)),
        KeyCode::Char('d') | KeyCode::Right => Some(Command::Steer(Right)),
        _ => None,
    }
}

pub fn format_stats(snake: &Snake, elapsed: Duration) -> String {
    format!(
        "\nLength: {}\nApples eaten: {}\nTime: {}\n\n",
        snake.length(),
        snake.apples_eaten(),
        elapsed.as_secs()
    )
}

fn restore_or_log<T: Session>(term: &mut T) {
    if let Err(err) = term.restore() {
        error!(?err, "failed to restore terminal");
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}
