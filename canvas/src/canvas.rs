use crate::error::*;

use tracing::{trace};

///
/// The character used for cells that have not been painted (or have been erased)
///
pub const BACKGROUND: char = ' ';

///
/// How a shape operation combines its characters with the cells that are already on the canvas
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compositing {
    /// The shape's character replaces whatever was in the cell before
    Overwrite,

    /// The shape's character is only written to cells that still contain the background character
    IfBlank,
}

///
/// A fixed-size grid of characters that shapes can be stamped onto
///
/// Cells are addressed as `(x, y)`, with `x` running left to right and `y` running from the top of
/// the picture downwards. Every cell starts out as `BACKGROUND`.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width:  usize,
    height: usize,

    /// The cells, stored row by row
    cells:  Vec<char>,
}

impl Canvas {
    ///
    /// Creates a blank canvas of the specified size
    ///
    /// A canvas with a width or height of 0 is valid: it has no cells and shape operations do nothing.
    ///
    pub fn new(width: usize, height: usize) -> Self {
        Canvas {
            width:  width,
            height: height,
            cells:  vec![BACKGROUND; width*height],
        }
    }

    ///
    /// The number of cells in each row
    ///
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    ///
    /// The number of rows
    ///
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    ///
    /// Returns the index into the cells array of a particular position, or None if it's outside of the grid
    ///
    #[inline]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }

        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            None
        } else {
            Some(y*self.width + x)
        }
    }

    #[inline]
    fn out_of_bounds(&self, x: i64, y: i64) -> CanvasError {
        CanvasError::OutOfBounds { x, y, width: self.width, height: self.height }
    }

    ///
    /// Reads the character at a position, or None if the position is outside of the canvas
    ///
    pub fn cell(&self, x: i64, y: i64) -> Option<char> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    ///
    /// True if the cell at the specified position contains the background character
    ///
    /// Positions outside of the canvas are never blank.
    ///
    pub fn is_blank(&self, x: i64, y: i64) -> bool {
        self.cell(x, y) == Some(BACKGROUND)
    }

    ///
    /// Writes a single character directly to a cell
    ///
    pub fn set_cell(&mut self, x: i64, y: i64, ch: char) -> Result<(), CanvasError> {
        let idx = self.index(x, y).ok_or_else(|| self.out_of_bounds(x, y))?;

        self.cells[idx] = ch;
        Ok(())
    }

    ///
    /// Writes a single character to a cell if it's currently blank, returning true if the cell was written
    ///
    pub fn set_cell_if_blank(&mut self, x: i64, y: i64, ch: char) -> Result<bool, CanvasError> {
        let idx = self.index(x, y).ok_or_else(|| self.out_of_bounds(x, y))?;

        if self.cells[idx] == BACKGROUND {
            self.cells[idx] = ch;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    ///
    /// Counts the cells that contain a particular character
    ///
    pub fn count(&self, ch: char) -> usize {
        self.cells.iter()
            .filter(|cell| **cell == ch)
            .count()
    }

    ///
    /// Iterates over the rows of the canvas, from top to bottom
    ///
    pub fn rows(&self) -> impl '_ + Iterator<Item=&[char]> {
        let width = self.width;

        (0..self.height).map(move |y| &self.cells[(y*width)..((y+1)*width)])
    }

    ///
    /// Performs a pass over every cell in the canvas
    ///
    /// The predicate is called with the coordinates of a cell and returns the character to write there, or
    /// `None` to leave the cell alone. With `Compositing::IfBlank`, cells that already contain something other
    /// than the background are skipped without calling the predicate.
    ///
    /// Every cell is independent of every other cell, so with the `multithreading` feature the rows are
    /// processed in parallel.
    ///
    pub fn stamp<TPredicate>(&mut self, compositing: Compositing, predicate: TPredicate)
    where
        TPredicate: Sync + Fn(f64, f64) -> Option<char>,
    {
        if self.width == 0 || self.height == 0 {
            trace!("skipping stamp on an empty {}x{} canvas", self.width, self.height);
            return;
        }

        let width       = self.width;
        let stamp_row   = |y: usize, row: &mut [char]| {
            let y_pos = y as f64;

            for (x, cell) in row.iter_mut().enumerate() {
                if compositing == Compositing::IfBlank && *cell != BACKGROUND {
                    continue;
                }

                if let Some(ch) = predicate(x as f64, y_pos) {
                    *cell = ch;
                }
            }
        };

        #[cfg(feature="multithreading")]
        {
            use rayon::prelude::*;

            self.cells.par_chunks_mut(width)
                .enumerate()
                .for_each(|(y, row)| stamp_row(y, row));
        }

        #[cfg(not(feature="multithreading"))]
        {
            self.cells.chunks_mut(width)
                .enumerate()
                .for_each(|(y, row)| stamp_row(y, row));
        }
    }
}
