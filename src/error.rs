use std::io;

use thiserror::Error;

use crate::grid::types::Coord;

/// A snake chain that cannot be followed through the grid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TopologyError {
    #[error("cell {at} is not a snake segment")]
    NotSnake { at: Coord },
    #[error("chain from {start} does not terminate within {limit} cells")]
    Unterminated { start: Coord, limit: usize },
    #[error("chain from tail {tail} never reaches head {head}")]
    Disconnected { tail: Coord, head: Coord },
    #[error("no segment leads into {at}")]
    NoPredecessor { at: Coord },
}

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("board has no rows")]
    Empty,
    #[error("board rows have no cells")]
    ZeroWidth,
    #[error("row {row} has {actual} cells, expected {expected}")]
    Ragged {
        row:      usize,
        expected: usize,
        actual:   usize,
    },
    #[error("unknown glyph {glyph:?} at {at}")]
    UnknownGlyph { glyph: char, at: Coord },
    #[error("segment at {at} is not connected to any tail")]
    Orphan { at: Coord },
    #[error("malformed snake: {0}")]
    Topology(#[from] TopologyError),
    #[error("could not read board: {0}")]
    Io(#[from] io::Error),
}
