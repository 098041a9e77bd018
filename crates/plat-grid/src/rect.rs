//! Axis-aligned rectangles in grid coordinates.

use std::ops::Range;

/// An axis-aligned rectangle anchored at its top-left cell.
///
/// A `Rect` is a *candidate* region: it may start at negative
/// coordinates, reach past the grid, or have a non-positive height or
/// width. Grid queries clamp it to the grid bounds; a rect with a
/// non-positive side covers no cells at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Top row.
    pub y: i32,
    /// Left column.
    pub x: i32,
    /// Number of rows.
    pub height: i32,
    /// Number of columns.
    pub width: i32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    pub const fn new(y: i32, x: i32, height: i32, width: i32) -> Self {
        Self {
            y,
            x,
            height,
            width,
        }
    }

    /// Whether the rectangle covers no cells.
    pub fn is_empty(&self) -> bool {
        self.height <= 0 || self.width <= 0
    }

    /// Number of cells covered, ignoring any grid bounds.
    pub fn area(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.height as u64 * self.width as u64
        }
    }

    /// Grow the rectangle outward by `offset` cells on all four sides.
    ///
    /// A negative offset shrinks it. Arithmetic saturates at the `i32`
    /// range.
    pub fn expanded(&self, offset: i32) -> Self {
        let twice = offset.saturating_mul(2);
        Self {
            y: self.y.saturating_sub(offset),
            x: self.x.saturating_sub(offset),
            height: self.height.saturating_add(twice),
            width: self.width.saturating_add(twice),
        }
    }

    /// Whether cell `(y, x)` lies inside the rectangle.
    pub fn contains(&self, y: i32, x: i32) -> bool {
        let (y, x) = (i64::from(y), i64::from(x));
        !self.is_empty()
            && y >= i64::from(self.y)
            && y < self.end_row()
            && x >= i64::from(self.x)
            && x < self.end_col()
    }

    /// Whether the two rectangles share at least one cell.
    pub fn intersects(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && i64::from(self.y) < other.end_row()
            && i64::from(other.y) < self.end_row()
            && i64::from(self.x) < other.end_col()
            && i64::from(other.x) < self.end_col()
    }

    /// Row indices of the rectangle clamped to `[0, rows)`.
    ///
    /// The range is empty when the rectangle is empty or lies entirely
    /// outside the grid.
    pub fn clamped_rows(&self, rows: u32) -> Range<usize> {
        clamp_axis(self.y, self.height, rows)
    }

    /// Column indices of the rectangle clamped to `[0, cols)`.
    pub fn clamped_cols(&self, cols: u32) -> Range<usize> {
        clamp_axis(self.x, self.width, cols)
    }

    fn end_row(&self) -> i64 {
        i64::from(self.y) + i64::from(self.height)
    }

    fn end_col(&self) -> i64 {
        i64::from(self.x) + i64::from(self.width)
    }
}

fn clamp_axis(start: i32, len: i32, limit: u32) -> Range<usize> {
    if len <= 0 {
        return 0..0;
    }
    let limit = i64::from(limit);
    let lo = i64::from(start).clamp(0, limit);
    let hi = (i64::from(start) + i64::from(len)).clamp(0, limit);
    if lo >= hi {
        0..0
    } else {
        lo as usize..hi as usize
    }
}
