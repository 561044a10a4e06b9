//! Pixel-space geometry.

use serde::{Deserialize, Serialize};

/// A position in pixels relative to the viewport origin (top-left).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Visible drawing area in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Viewport covering a terminal grid of `cols` x `rows` cells.
    pub fn from_cells(cols: u16, rows: u16, cell: CellSize) -> Self {
        Self {
            width: f64::from(cols) * f64::from(cell.width),
            height: f64::from(rows) * f64::from(cell.height),
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Size of one terminal cell in virtual pixels.
///
/// Terminal cells are roughly twice as tall as they are wide, so the default
/// keeps circular orbits looking circular.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSize {
    pub width: u16,
    pub height: u16,
}

impl Default for CellSize {
    fn default() -> Self {
        Self {
            width: 8,
            height: 16,
        }
    }
}

impl CellSize {
    /// Map a pixel position to a (column, row) pair, `None` when off-grid.
    pub fn cell_at(&self, point: Point, cols: u16, rows: u16) -> Option<(u16, u16)> {
        if point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let col = (point.x / f64::from(self.width.max(1))).floor();
        let row = (point.y / f64::from(self.height.max(1))).floor();
        if col >= f64::from(cols) || row >= f64::from(rows) {
            return None;
        }
        Some((col as u16, row as u16))
    }
}
