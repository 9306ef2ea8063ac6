use crate::grid::{
    board::Board,
    codec,
    types::{Coord, Direction},
};

pub type SnakeID = usize;

/// A snake is only its two ends; the segments in between live in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Snake {
    pub id:   SnakeID,
    pub head: Coord,
    pub tail: Coord,
    pub live: bool,
}

impl Snake {
    #[must_use]
    pub const fn new(id: SnakeID, head: Coord, tail: Coord) -> Self {
        Self {
            id,
            head,
            tail,
            live: true,
        }
    }

    /// Direction the head will move next, read from the grid.
    #[must_use]
    pub fn facing(&self, board: &Board) -> Option<Direction> {
        board.get(self.head).and_then(codec::direction_of)
    }

    #[must_use]
    pub fn is_single_cell(&self) -> bool {
        self.head == self.tail
    }
}
