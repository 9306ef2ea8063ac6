use std::fmt;

use super::{
    codec::{self, Cell},
    types::Coord,
};
use crate::error::BoardError;

/// Rectangular grid of glyphs, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width:  i64,
    height: i64,
    cells:  Vec<char>,
}

impl Board {
    /// Parses equal-length rows separated by `\n` or `\r\n`.
    ///
    /// # Errors
    ///
    /// Fails on empty input, zero-width or ragged rows, and glyphs outside the
    /// board alphabet.
    pub fn parse(text: &str) -> Result<Self, BoardError> {
        let rows: Vec<&str> = text.lines().collect();

        let Some(first) = rows.first() else {
            return Err(BoardError::Empty);
        };
        let width = first.chars().count();
        if width == 0 {
            return Err(BoardError::ZeroWidth);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let actual = row.chars().count();
            if actual != width {
                return Err(BoardError::Ragged {
                    row: y,
                    expected: width,
                    actual,
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                if Cell::from_glyph(glyph).is_none() {
                    return Err(BoardError::UnknownGlyph {
                        glyph,
                        at: Coord::new(x as i64, y as i64),
                    });
                }
                cells.push(glyph);
            }
        }

        Ok(Self {
            width: width as i64,
            height: rows.len() as i64,
            cells,
        })
    }

    #[must_use]
    pub const fn width(&self) -> i64 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> i64 {
        self.height
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && coord.x < self.width
            && coord.y < self.height
    }

    /// Flat index of `coord`, or `None` when it lies outside the board.
    #[must_use]
    pub const fn index(&self, coord: Coord) -> Option<usize> {
        if self.contains(coord) {
            Some((coord.y * self.width + coord.x) as usize)
        } else {
            None
        }
    }

    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<char> {
        self.index(coord).map(|idx| self.cells[idx])
    }

    /// Role of the glyph at `coord`, or `None` when out of bounds.
    #[must_use]
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        self.get(coord).and_then(Cell::from_glyph)
    }

    /// Drops food on `coord` if the cell is empty. This is the only board
    /// mutation open to code outside the engine.
    pub fn place_food(&mut self, coord: Coord) -> bool {
        match self.index(coord) {
            Some(idx) if self.cells[idx] == codec::EMPTY => {
                self.cells[idx] = codec::FOOD;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn set(&mut self, coord: Coord, glyph: char) {
        let (width, height) = (self.width, self.height);
        let idx = self.index(coord).unwrap_or_else(|| {
            panic!("write to {coord} outside the {width}x{height} board")
        });
        self.cells[idx] = glyph;
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| Coord::new(x, y)))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.width as usize)
    }

    #[must_use]
    pub fn count(&self, glyph: char) -> usize {
        self.cells.iter().filter(|c| **c == glyph).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for glyph in row {
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
