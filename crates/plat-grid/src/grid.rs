//! Row-major 2D grid with bounds-clamped rectangular access.

use crate::error::GridError;
use crate::rect::Rect;
use std::iter::FusedIterator;
use std::ops::Range;
use std::slice::ChunksExact;

/// A fixed-size, row-major 2D array of cell values.
///
/// Cells are addressed as `(row, col)` with `0 <= row < height` and
/// `0 <= col < width`. The grid is fully allocated at construction and
/// never resized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    height: u32,
    width: u32,
    cells: Vec<T>,
}

const NOTHING: Rect = Rect::new(0, 0, 0, 0);

impl<T: Clone> Grid<T> {
    /// Create a `height * width` grid with every cell set to `fill`.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0,
    /// `Err(GridError::DimensionTooLarge)` if either exceeds `i32::MAX`, or
    /// `Err(GridError::TooManyCells)` if the cell count exceeds
    /// [`Grid::max_cells`].
    pub fn new(height: u32, width: u32, fill: T) -> Result<Self, GridError> {
        let count = Self::check_dimensions(height, width)?;
        Ok(Self {
            height,
            width,
            cells: vec![fill; count],
        })
    }

    /// Write `value` to every cell of `rect` that lies inside the grid.
    ///
    /// A no-op when the clamped rectangle is empty.
    pub fn set(&mut self, value: T, rect: Rect) {
        let rows = rect.clamped_rows(self.height);
        let cols = rect.clamped_cols(self.width);
        let stride = self.width as usize;
        for row in rows {
            let start = row * stride;
            self.cells[start + cols.start..start + cols.end].fill(value.clone());
        }
    }
}

impl<T> Grid<T> {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Largest cell count a single allocation of `T` can hold.
    pub fn max_cells() -> u64 {
        let size = std::mem::size_of::<T>().max(1) as u64;
        isize::MAX as u64 / size
    }

    /// Check grid dimensions without allocating.
    ///
    /// Applies the same rules as [`Grid::new`] and returns the cell count.
    pub fn check_dimensions(height: u32, width: u32) -> Result<usize, GridError> {
        if height == 0 || width == 0 {
            return Err(GridError::EmptyGrid);
        }
        if height > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        if width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        let value = u64::from(height) * u64::from(width);
        let max = Self::max_cells();
        match usize::try_from(value) {
            Ok(count) if value <= max => Ok(count),
            _ => Err(GridError::TooManyCells { value, max }),
        }
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The rectangle covering the whole grid.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.height as i32, self.width as i32)
    }

    /// Rows of the grid as slices, top to bottom.
    pub fn row_slices(&self) -> ChunksExact<'_, T> {
        self.cells.chunks_exact(self.width as usize)
    }

    fn index(&self, y: i32, x: i32) -> Option<usize> {
        let row = usize::try_from(y).ok()?;
        let col = usize::try_from(x).ok()?;
        if row >= self.height as usize || col >= self.width as usize {
            return None;
        }
        Some(row * self.width as usize + col)
    }
}

impl<T: Copy> Grid<T> {
    /// The value at `(y, x)`, or `None` outside the grid.
    pub fn get(&self, y: i32, x: i32) -> Option<T> {
        self.index(y, x).map(|i| self.cells[i])
    }

    /// Iterate the cells of `rect` that lie inside the grid.
    ///
    /// Yields `(row, col, value)` in row-major order. Each call returns a
    /// fresh iterator. Rectangles that miss the grid, or have a
    /// non-positive side, yield nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use plat_grid::{Grid, Rect};
    ///
    /// let grid = Grid::new(4, 4, 0u8).unwrap();
    /// let coords: Vec<(i32, i32)> = grid
    ///     .cells(Rect::new(2, 2, 10, 10))
    ///     .map(|(y, x, _)| (y, x))
    ///     .collect();
    /// assert_eq!(coords, vec![(2, 2), (2, 3), (3, 2), (3, 3)]);
    /// ```
    pub fn cells(&self, rect: Rect) -> Cells<'_, T> {
        Cells::new(self, rect)
    }

    /// Iterate the ring of `rect` expanded by `offset` on every side.
    ///
    /// The ring is visited as top row, bottom row, left column, right
    /// column. The columns skip the first and last row, so each corner is
    /// yielded once (as part of a row). Every edge is clamped to the grid
    /// like [`cells`](Self::cells). A `rect` with a non-positive side
    /// yields nothing, whatever the offset.
    ///
    /// With `offset = 1` this samples exactly the cells touching `rect`
    /// (including diagonally) without revisiting its interior.
    pub fn border_cells(
        &self,
        offset: i32,
        rect: Rect,
    ) -> impl Iterator<Item = (i32, i32, T)> + '_ {
        let r = if rect.is_empty() {
            NOTHING
        } else {
            rect.expanded(offset)
        };
        let (top, bottom, left, right) = if r.is_empty() {
            (NOTHING, NOTHING, NOTHING, NOTHING)
        } else {
            let last_row = r.y.saturating_add(r.height - 1);
            let last_col = r.x.saturating_add(r.width - 1);
            let inner = r.height - 2;
            (
                Rect::new(r.y, r.x, 1, r.width),
                if r.height > 1 {
                    Rect::new(last_row, r.x, 1, r.width)
                } else {
                    NOTHING
                },
                Rect::new(r.y.saturating_add(1), r.x, inner, 1),
                if r.width > 1 {
                    Rect::new(r.y.saturating_add(1), last_col, inner, 1)
                } else {
                    NOTHING
                },
            )
        };
        self.cells(top)
            .chain(self.cells(bottom))
            .chain(self.cells(left))
            .chain(self.cells(right))
    }
}

impl<T: Copy + PartialEq> Grid<T> {
    /// Bounding rectangle of every cell whose value differs from `empty`.
    ///
    /// Returns `None` when the whole grid is `empty`.
    pub fn extents(&self, empty: T) -> Option<Rect> {
        let mut bounds: Option<(i32, i32, i32, i32)> = None;
        for (y, x, value) in self.cells(self.bounds()) {
            if value == empty {
                continue;
            }
            bounds = Some(match bounds {
                None => (y, x, y, x),
                Some((y0, x0, y1, x1)) => (y0.min(y), x0.min(x), y1.max(y), x1.max(x)),
            });
        }
        bounds.map(|(y0, x0, y1, x1)| Rect::new(y0, x0, y1 - y0 + 1, x1 - x0 + 1))
    }
}

/// Row-major iterator over a clamped rectangle of a [`Grid`].
///
/// Created by [`Grid::cells`].
#[derive(Clone, Debug)]
pub struct Cells<'a, T> {
    grid: &'a Grid<T>,
    cols: Range<usize>,
    row: usize,
    row_end: usize,
    col: usize,
}

impl<'a, T> Cells<'a, T> {
    fn new(grid: &'a Grid<T>, rect: Rect) -> Self {
        let rows = rect.clamped_rows(grid.height);
        let cols = rect.clamped_cols(grid.width);
        let (row, row_end) = if rows.is_empty() || cols.is_empty() {
            (0, 0)
        } else {
            (rows.start, rows.end)
        };
        Self {
            grid,
            col: cols.start,
            cols,
            row,
            row_end,
        }
    }

    fn remaining(&self) -> usize {
        if self.row >= self.row_end {
            return 0;
        }
        (self.row_end - self.row) * self.cols.len() - (self.col - self.cols.start)
    }
}

impl<T: Copy> Iterator for Cells<'_, T> {
    type Item = (i32, i32, T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.row >= self.row_end {
            return None;
        }
        let value = self.grid.cells[self.row * self.grid.width as usize + self.col];
        let item = (self.row as i32, self.col as i32, value);
        self.col += 1;
        if self.col >= self.cols.end {
            self.col = self.cols.start;
            self.row += 1;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl<T: Copy> ExactSizeIterator for Cells<'_, T> {}

impl<T: Copy> FusedIterator for Cells<'_, T> {}
