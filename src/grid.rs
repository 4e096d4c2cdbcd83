use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::GridError;

/// An integer cell coordinate.
///
/// Points may lie outside the grid; such points are valid inputs to every
/// algorithm and are simply dropped when written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The square color buffer every tool draws into.
///
/// All `size * size` cells are always defined. Resizing is not supported in
/// place: a new size means a new grid.
#[derive(Debug, Clone)]
pub struct PixelGrid {
    size: usize,
    cells: Vec<Color>,
    revision: u64,
}

impl PixelGrid {
    /// Create a `size` x `size` grid with every cell white.
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![Color::WHITE; size * size],
            revision: 0,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Bumped whenever a write actually changes a cell.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        self.index(point).is_some()
    }

    fn index(&self, point: Point) -> Option<usize> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        (x < self.size && y < self.size).then(|| y * self.size + x)
    }

    /// Read a cell. Unlike `set`, reading outside the grid is an error.
    pub fn get(&self, x: i32, y: i32) -> Result<Color, GridError> {
        self.index(Point::new(x, y))
            .map(|i| self.cells[i])
            .ok_or(GridError::OutOfBounds { x, y, size: self.size })
    }

    /// Write a cell if it is inside the grid; out-of-range writes are ignored.
    ///
    /// Returns whether the point was in bounds.
    pub fn set(&mut self, x: i32, y: i32, color: Color) -> bool {
        let Some(i) = self.index(Point::new(x, y)) else {
            return false;
        };
        if self.cells[i] != color {
            self.cells[i] = color;
            self.revision += 1;
        }
        true
    }

    pub fn set_point(&mut self, point: Point, color: Color) -> bool {
        self.set(point.x, point.y, color)
    }

    /// Copy the current cells out for rendering or export.
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            size: self.size,
            cells: Arc::from(self.cells.as_slice()),
        }
    }
}

/// Immutable copy of a grid, decoupled from later writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSnapshot {
    size: usize,
    cells: Arc<[Color]>,
}

impl GridSnapshot {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        (x < self.size && y < self.size).then(|| self.cells[y * self.size + x])
    }

    /// Every cell with its `(x, y)` coordinate, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Color)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, color)| (i % size, i / size, *color))
    }
}
