//! Character alphabet of the board.
//!
//! Snake segments come in two variants per direction. Linked glyphs
//! (`^ < v >`) are heads and body segments, terminal glyphs (`w a s d`) are
//! tails. Every segment's direction points at the next cell towards the head.

use super::types::Direction;

pub const WALL: char = '#';
pub const EMPTY: char = ' ';
pub const FOOD: char = '*';

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Empty,
    Food,
    Segment {
        direction: Direction,
        terminal:  bool,
    },
}

impl Cell {
    #[must_use]
    pub const fn from_glyph(glyph: char) -> Option<Cell> {
        match glyph {
            WALL => Some(Cell::Wall),
            EMPTY => Some(Cell::Empty),
            FOOD => Some(Cell::Food),
            _ => match segment_of(glyph) {
                Some((direction, terminal)) => {
                    Some(Cell::Segment {
                        direction,
                        terminal,
                    })
                }
                None => None,
            },
        }
    }

    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Cell::Wall => WALL,
            Cell::Empty => EMPTY,
            Cell::Food => FOOD,
            Cell::Segment {
                direction,
                terminal,
            } => glyph_for(direction, terminal),
        }
    }
}

const fn segment_of(glyph: char) -> Option<(Direction, bool)> {
    match glyph {
        '^' => Some((Direction::Up, false)),
        '<' => Some((Direction::Left, false)),
        'v' => Some((Direction::Down, false)),
        '>' => Some((Direction::Right, false)),
        'w' => Some((Direction::Up, true)),
        'a' => Some((Direction::Left, true)),
        's' => Some((Direction::Down, true)),
        'd' => Some((Direction::Right, true)),
        _ => None,
    }
}

#[must_use]
pub const fn glyph_for(direction: Direction, terminal: bool) -> char {
    match (direction, terminal) {
        (Direction::Up, false) => '^',
        (Direction::Left, false) => '<',
        (Direction::Down, false) => 'v',
        (Direction::Right, false) => '>',
        (Direction::Up, true) => 'w',
        (Direction::Left, true) => 'a',
        (Direction::Down, true) => 's',
        (Direction::Right, true) => 'd',
    }
}

#[must_use]
pub const fn direction_of(glyph: char) -> Option<Direction> {
    match segment_of(glyph) {
        Some((direction, _)) => Some(direction),
        None => None,
    }
}

#[must_use]
pub const fn is_snake_char(glyph: char) -> bool {
    segment_of(glyph).is_some()
}

#[must_use]
pub const fn is_tail_char(glyph: char) -> bool {
    matches!(segment_of(glyph), Some((_, true)))
}

#[must_use]
pub const fn is_linked_char(glyph: char) -> bool {
    matches!(segment_of(glyph), Some((_, false)))
}

/// Linked form of a segment glyph. Linked glyphs map to themselves.
#[must_use]
pub const fn body_variant_of(glyph: char) -> Option<char> {
    match segment_of(glyph) {
        Some((direction, _)) => Some(glyph_for(direction, false)),
        None => None,
    }
}

/// Terminal form of a segment glyph, used when the tail shrinks onto it.
#[must_use]
pub const fn tail_variant_of(glyph: char) -> Option<char> {
    match segment_of(glyph) {
        Some((direction, _)) => Some(glyph_for(direction, true)),
        None => None,
    }
}
