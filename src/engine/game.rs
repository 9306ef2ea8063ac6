use std::fmt;

use log::{debug, trace, warn};

use super::{
    food::{FoodPlacer, Placement},
    snake::{Snake, SnakeID},
    topology,
};
use crate::{
    error::{BoardError, TopologyError},
    grid::{
        board::Board,
        codec::{self, Cell},
        types::{Coord, Direction},
    },
};

/// Built-in 14x10 board with one snake facing right and a single piece of
/// food.
pub const DEFAULT_BOARD: &str = "\
##############
#            #
#        *   #
#            #
#   d>       #
#            #
#            #
#            #
#            #
##############
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cause {
    OutOfBounds,
    Wall,
    /// Ran into a segment of any snake, its own included.
    Snake,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Moved,
    Grew { food: Placement },
    Died(Cause),
}

/// What happened to each snake that was alive at the start of a tick.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tick {
    pub outcomes: Vec<(SnakeID, Outcome)>,
}

impl Tick {
    #[must_use]
    pub fn outcome(&self, id: SnakeID) -> Option<Outcome> {
        self.outcomes
            .iter()
            .find(|(snake_id, _)| *snake_id == id)
            .map(|(_, outcome)| *outcome)
    }
}

#[derive(Clone, Debug)]
pub struct GameState {
    board:  Board,
    snakes: Vec<Snake>,
    ticks:  u64,
}

impl GameState {
    /// # Errors
    ///
    /// Fails if the board's snakes cannot be reconstructed from its links.
    pub fn from_board(board: Board) -> Result<Self, BoardError> {
        let snakes = topology::discover_snakes(&board)?;
        Ok(Self {
            board,
            snakes,
            ticks: 0,
        })
    }

    /// The [`DEFAULT_BOARD`] with its snake and food.
    ///
    /// # Panics
    ///
    /// Panics if [`DEFAULT_BOARD`] itself fails to load.
    #[must_use]
    pub fn create_default() -> Self {
        Board::parse(DEFAULT_BOARD)
            .and_then(Self::from_board)
            .unwrap_or_else(|e| panic!("built-in board is malformed: {e}"))
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn snakes(&self) -> &[Snake] {
        &self.snakes
    }

    #[must_use]
    pub fn snake(&self, id: SnakeID) -> Option<&Snake> {
        self.snakes.get(id)
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.snakes.iter().filter(|snake| snake.live).count()
    }

    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Cells of snake `id`, tail first, reconstructed from the grid.
    ///
    /// # Errors
    ///
    /// Fails if the snake's links no longer join its tail to its head.
    pub fn snake_chain(
        &self,
        id: SnakeID,
    ) -> Option<Result<Vec<Coord>, TopologyError>> {
        self.snake(id).map(|snake| topology::chain(&self.board, snake))
    }

    #[must_use]
    pub fn snake_length(&self, id: SnakeID) -> Option<usize> {
        self.snake_chain(id)
            .and_then(Result::ok)
            .map(|cells| cells.len())
    }

    /// Consumes the state, releasing the board and snake list.
    pub fn release(self) {
        debug!(
            "releasing {}x{} board with {} snakes",
            self.board.width(),
            self.board.height(),
            self.snakes.len()
        );
    }

    /// Advances every live snake by one cell, in list order.
    ///
    /// A snake moving later in the list sees the cells already updated by
    /// the snakes before it. Dead snakes are skipped and stay on the board.
    ///
    /// # Panics
    ///
    /// Panics if a live snake's links are corrupt.
    pub fn advance(&mut self, placer: &mut impl FoodPlacer) -> Tick {
        let mut tick = Tick::default();

        for id in 0..self.snakes.len() {
            if !self.snakes[id].live {
                continue;
            }

            let outcome = self.advance_snake(id, placer);
            debug!("tick {}: snake #{id} {outcome:?}", self.ticks);
            tick.outcomes.push((id, outcome));
        }

        self.ticks += 1;
        tick
    }

    fn advance_snake(
        &mut self,
        id: SnakeID,
        placer: &mut impl FoodPlacer,
    ) -> Outcome {
        let snake = self.snakes[id];
        let target = topology::next_cell(&self.board, &snake)
            .unwrap_or_else(|e| corrupt(id, &e));
        let cell = self.board.cell(target);
        trace!("snake #{id} heading into {target}: {cell:?}");

        match cell {
            None => self.kill(id, Cause::OutOfBounds),
            Some(Cell::Wall) => self.kill(id, Cause::Wall),
            Some(Cell::Segment { .. }) => self.kill(id, Cause::Snake),
            Some(Cell::Food) => {
                self.grow(id, target);
                let food = placer.place_food(&mut self.board, &self.snakes);
                match food {
                    Placement::Placed(at) => debug!("food replenished at {at}"),
                    Placement::Exhausted => warn!("no room left for food"),
                }
                Outcome::Grew { food }
            }
            Some(Cell::Empty) => {
                self.slither(id, target);
                Outcome::Moved
            }
        }
    }

    fn kill(&mut self, id: SnakeID, cause: Cause) -> Outcome {
        self.snakes[id].live = false;
        Outcome::Died(cause)
    }

    /// Extends the head onto `target` and leaves the tail where it is. The old
    /// head already points at `target`, so its glyph stays as it is; a single
    /// cell snake keeps its tail glyph and becomes the tail.
    fn grow(&mut self, id: SnakeID, target: Coord) {
        let direction = self.heading(id);

        self.board.set(target, segment(direction, false));
        self.snakes[id].head = target;
    }

    /// Moves the head onto `target` and pulls the tail along one cell.
    fn slither(&mut self, id: SnakeID, target: Coord) {
        let snake = self.snakes[id];
        let direction = self.heading(id);

        if snake.is_single_cell() {
            self.board.set(snake.head, Cell::Empty.glyph());
            self.board.set(target, segment(direction, true));
            self.snakes[id].head = target;
            self.snakes[id].tail = target;
            return;
        }

        self.board.set(target, segment(direction, false));

        let new_tail = topology::find_tail_after_head_move(&self.board, &snake)
            .unwrap_or_else(|e| corrupt(id, &e));
        let promoted = self
            .board
            .get(new_tail)
            .and_then(codec::tail_variant_of)
            .unwrap_or_else(|| {
                corrupt(id, &TopologyError::NotSnake { at: new_tail })
            });

        self.board.set(snake.tail, Cell::Empty.glyph());
        self.board.set(new_tail, promoted);
        self.snakes[id].head = target;
        self.snakes[id].tail = new_tail;
    }

    /// Direction the head of snake `id` is about to move in.
    fn heading(&self, id: SnakeID) -> Direction {
        let snake = self.snakes[id];
        snake.facing(&self.board).unwrap_or_else(|| {
            corrupt(id, &TopologyError::NotSnake { at: snake.head })
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::create_default()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

const fn segment(direction: Direction, terminal: bool) -> char {
    Cell::Segment {
        direction,
        terminal,
    }
    .glyph()
}

fn corrupt(id: SnakeID, error: &TopologyError) -> ! {
    panic!("snake #{id} is structurally corrupt: {error}")
}
