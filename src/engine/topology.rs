//! Following snake links through the grid.
//!
//! Nothing here mutates the board. Every walk is capped at the board's cell
//! count so a corrupt grid surfaces as an error instead of a hang.

use log::debug;

use super::snake::Snake;
use crate::{
    error::{BoardError, TopologyError},
    grid::{
        board::Board,
        codec,
        types::{Coord, Direction},
    },
};

fn direction_at(board: &Board, at: Coord) -> Result<Direction, TopologyError> {
    board
        .get(at)
        .and_then(codec::direction_of)
        .ok_or(TopologyError::NotSnake { at })
}

/// Cell the head moves into next. Not bounds checked.
///
/// # Errors
///
/// Fails if the recorded head is not a snake segment.
pub fn next_cell(board: &Board, snake: &Snake) -> Result<Coord, TopologyError> {
    Ok(snake.head.neighbour(direction_at(board, snake.head)?))
}

/// Cell the tail shrinks onto once the head has moved.
///
/// # Errors
///
/// Fails if the recorded tail is not a snake segment.
pub fn find_tail_after_head_move(
    board: &Board,
    snake: &Snake,
) -> Result<Coord, TopologyError> {
    if snake.is_single_cell() {
        return Ok(snake.head);
    }
    Ok(snake.tail.neighbour(direction_at(board, snake.tail)?))
}

/// Follows links forward from `start` while the next cell is a linked
/// segment that has not been visited and is admitted by `admit`.
fn walk_forward(
    board: &Board,
    start: Coord,
    admit: impl Fn(usize) -> bool,
) -> Result<Vec<Coord>, TopologyError> {
    let limit = board.cell_count();
    let mut visited = vec![false; limit];
    let start_idx = board
        .index(start)
        .ok_or(TopologyError::NotSnake { at: start })?;
    visited[start_idx] = true;

    let mut chain = vec![start];
    let mut current = start;
    loop {
        let next = current.neighbour(direction_at(board, current)?);
        let Some(idx) = board.index(next) else {
            break;
        };
        let linked = board.get(next).is_some_and(codec::is_linked_char);
        if !linked || visited[idx] || !admit(idx) {
            break;
        }
        if chain.len() >= limit {
            return Err(TopologyError::Unterminated { start, limit });
        }
        visited[idx] = true;
        chain.push(next);
        current = next;
    }

    Ok(chain)
}

/// Finds the head of the chain passing through `anchor`.
///
/// # Errors
///
/// Fails if `anchor` is not a snake segment.
pub fn locate_head(board: &Board, anchor: Coord) -> Result<Coord, TopologyError> {
    let chain = walk_forward(board, anchor, |_| true)?;
    Ok(chain.last().copied().unwrap_or(anchor))
}

/// Walks backwards from `head` through the segments pointing into each cell
/// until a tail glyph is reached.
///
/// # Errors
///
/// Fails if a cell on the way has no predecessor or the walk runs longer
/// than the board.
pub fn locate_tail(board: &Board, head: Coord) -> Result<Coord, TopologyError> {
    let limit = board.cell_count();
    let mut visited = vec![false; limit];
    let mut current = head;

    for _ in 0..limit {
        let glyph = board
            .get(current)
            .filter(|glyph| codec::is_snake_char(*glyph))
            .ok_or(TopologyError::NotSnake { at: current })?;
        if codec::is_tail_char(glyph) {
            return Ok(current);
        }
        if let Some(idx) = board.index(current) {
            visited[idx] = true;
        }

        let here = current;
        let predecessor = Direction::iter()
            .map(|direction| here.neighbour(*direction))
            .find(|candidate| {
                board.index(*candidate).is_some_and(|idx| !visited[idx])
                    && board
                        .get(*candidate)
                        .and_then(codec::direction_of)
                        .is_some_and(|d| candidate.neighbour(d) == here)
            });
        current = predecessor.ok_or(TopologyError::NoPredecessor { at: here })?;
    }

    Err(TopologyError::Unterminated { start: head, limit })
}

/// Every cell of `snake`, tail first.
///
/// # Errors
///
/// Fails if the links from the recorded tail do not lead to the recorded
/// head.
pub fn chain(board: &Board, snake: &Snake) -> Result<Vec<Coord>, TopologyError> {
    let limit = board.cell_count();
    let broken = TopologyError::Disconnected {
        tail: snake.tail,
        head: snake.head,
    };
    let mut visited = vec![false; limit];
    let mut cells = Vec::new();
    let mut current = snake.tail;

    loop {
        let idx = board.index(current).ok_or_else(|| broken.clone())?;
        let glyph = board.get(current).ok_or_else(|| broken.clone())?;
        // only the first cell carries a tail glyph
        if visited[idx]
            || !codec::is_snake_char(glyph)
            || codec::is_tail_char(glyph) != cells.is_empty()
        {
            return Err(broken);
        }
        visited[idx] = true;
        cells.push(current);

        if current == snake.head {
            return Ok(cells);
        }
        if cells.len() >= limit {
            return Err(TopologyError::Unterminated {
                start: snake.tail,
                limit,
            });
        }
        current = current.neighbour(direction_at(board, current)?);
    }
}

/// Rebuilds the snake list from a freshly parsed board.
///
/// Tails are taken in row-major order and each chain is followed to its
/// head. A cell claimed by an earlier snake is never followed again, and any
/// segment left unclaimed afterwards is an orphan.
///
/// # Errors
///
/// Fails on orphaned segments or a chain that cannot be followed.
pub fn discover_snakes(board: &Board) -> Result<Vec<Snake>, BoardError> {
    let mut claimed = vec![false; board.cell_count()];
    let mut snakes = Vec::new();

    for tail in board.coords() {
        if !board.get(tail).is_some_and(codec::is_tail_char) {
            continue;
        }

        let cells = walk_forward(board, tail, |idx| !claimed[idx])?;
        for cell in &cells {
            if let Some(idx) = board.index(*cell) {
                claimed[idx] = true;
            }
        }

        let head = cells.last().copied().unwrap_or(tail);
        debug!(
            "found snake #{} from {tail} to {head} ({} cells)",
            snakes.len(),
            cells.len()
        );
        snakes.push(Snake::new(snakes.len(), head, tail));
    }

    let orphan = board.coords().find(|at| {
        board.get(*at).is_some_and(codec::is_snake_char)
            && board.index(*at).is_some_and(|idx| !claimed[idx])
    });
    if let Some(at) = orphan {
        return Err(BoardError::Orphan { at });
    }

    Ok(snakes)
}
