//! Integer rasterization of the shape tools.
//!
//! Control points may lie anywhere in the `i32` plane. Each point function is
//! given the grid size and only enumerates cells inside `[0, size)²`, so the
//! work is bounded by the grid and never by how far away the points are. The
//! cells returned are exactly the in-grid subset of the unclipped shape, in
//! the same order.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::grid::{PixelGrid, Point};

fn limit(size: usize) -> i64 {
    i64::try_from(size).unwrap_or(i64::MAX)
}

fn cell(x: i64, y: i64, size: usize) -> Option<Point> {
    let limit = limit(size);
    if !(0..limit).contains(&x) || !(0..limit).contains(&y) {
        return None;
    }
    Some(Point::new(i32::try_from(x).ok()?, i32::try_from(y).ok()?))
}

/// Steps `k` in `0..=len` for which `start + step * k` lands on the grid.
fn steps_on_grid(start: i64, step: i64, len: i64, size: usize) -> RangeInclusive<i64> {
    let last = limit(size) - 1;
    if step > 0 {
        (-start).max(0)..=len.min(last - start)
    } else {
        (start - last).max(0)..=len.min(start)
    }
}

/// Bresenham line from `from` to `to`, both endpoints included, clipped to a
/// grid of `size`.
///
/// Cells are always computed from the lexicographically smaller endpoint so
/// that swapping the endpoints yields the same cells in reverse order.
pub fn line(from: Point, to: Point, size: usize) -> Vec<Point> {
    if to < from {
        let mut points = bresenham(to, from, size);
        points.reverse();
        points
    } else {
        bresenham(from, to, size)
    }
}

/// Offset along the minor axis after `k` major steps of a `major` x `minor`
/// Bresenham walk: the nearest integer to `k * minor / major`, halves rounding
/// down. This is where the error-term loop (`err = dx - dy`, `e2 = 2 * err`)
/// lands, so single steps can be evaluated without walking from the start.
fn minor_offset(k: i64, major: i64, minor: i64) -> i64 {
    if major == 0 {
        return 0;
    }
    let numerator = 2 * i128::from(k) * i128::from(minor) - i128::from(major);
    let denominator = 2 * i128::from(major);
    let ceil = -(-numerator).div_euclid(denominator);
    // bounded by `minor`, which fits
    ceil as i64
}

fn bresenham(from: Point, to: Point, size: usize) -> Vec<Point> {
    let (x0, y0) = (i64::from(from.x), i64::from(from.y));
    let dx = (i64::from(to.x) - x0).abs();
    let dy = (i64::from(to.y) - y0).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };

    let x_major = dx >= dy;
    let (major, minor) = if x_major { (dx, dy) } else { (dy, dx) };
    let steps = if x_major {
        steps_on_grid(x0, sx, major, size)
    } else {
        steps_on_grid(y0, sy, major, size)
    };

    steps
        .filter_map(|k| {
            let j = minor_offset(k, major, minor);
            let (u, v) = if x_major { (k, j) } else { (j, k) };
            cell(x0 + sx * u, y0 + sy * v, size)
        })
        .collect()
}

/// Outline of the axis-aligned box spanned by two corners, clipped to a grid
/// of `size`.
///
/// Top and bottom rows come first at full width, then the left and right
/// columns for the rows strictly between them. Degenerate boxes collapse to a
/// single row or column without repeating cells.
pub fn rectangle(a: Point, b: Point, size: usize) -> Vec<Point> {
    let (min_x, max_x) = (i64::from(a.x.min(b.x)), i64::from(a.x.max(b.x)));
    let (min_y, max_y) = (i64::from(a.y.min(b.y)), i64::from(a.y.max(b.y)));
    let last = limit(size) - 1;

    let mut points = Vec::new();
    for x in min_x.max(0)..=max_x.min(last) {
        points.extend(cell(x, min_y, size));
        if max_y != min_y {
            points.extend(cell(x, max_y, size));
        }
    }
    for y in (min_y + 1).max(0)..=(max_y - 1).min(last) {
        points.extend(cell(min_x, y, size));
        if max_x != min_x {
            points.extend(cell(max_x, y, size));
        }
    }
    points
}

/// `x` reached by the midpoint recurrence on row `y` of the first octant.
///
/// The decision variable `1 - r`, stepped by `2y + 1` or `2(y - x) + 1`,
/// equals `x² - x + (y + 1)² - r²` at every step. So `x` is the largest value
/// with `x² - x + y² <= r²`, or `None` once the row lies past the octant.
fn octant_x(radius: i64, y: i64) -> Option<i64> {
    let slack = i128::from(radius) * i128::from(radius) - i128::from(y) * i128::from(y);
    if slack < 0 {
        return None;
    }
    // x² - x <= slack  <=>  (2x - 1)² <= 4 * slack + 1
    let root = u128::try_from(4 * slack + 1).ok()?.isqrt();
    let x = i64::try_from((root + 1) / 2).ok()?;
    (y <= x).then_some(x)
}

/// Rows `y >= 0` where `center ± y` is a grid coordinate.
fn rows_near_grid(center: Point, size: usize) -> Vec<i64> {
    let last = limit(size) - 1;
    let mut rows = Vec::new();
    for c in [i64::from(center.x), i64::from(center.y)] {
        rows.extend((-c).max(0)..=last - c);
        rows.extend((c - last).max(0)..=c);
    }
    rows.sort_unstable();
    rows.dedup();
    rows
}

/// Midpoint circle centred on `center` and passing near `edge`, clipped to a
/// grid of `size`.
///
/// The radius is the Euclidean distance between the two points, rounded to
/// the nearest integer before the integer recurrence runs. Every octant cell
/// has one coordinate at `center ± y`, so only rows that put that coordinate
/// on the grid are visited.
pub fn circle(center: Point, edge: Point, size: usize) -> Vec<Point> {
    let dx = (i64::from(edge.x) - i64::from(center.x)) as f64;
    let dy = (i64::from(edge.y) - i64::from(center.y)) as f64;
    let radius = dx.hypot(dy).round() as i64;
    let (cx, cy) = (i64::from(center.x), i64::from(center.y));

    if radius == 0 {
        return cell(cx, cy, size).into_iter().collect();
    }

    let mut seen = HashSet::new();
    let mut points = Vec::new();
    for y in rows_near_grid(center, size) {
        let Some(x) = octant_x(radius, y) else {
            // rows are ascending and the octant ends at the first miss
            break;
        };
        let octants = [
            (x, y),
            (-x, y),
            (x, -y),
            (-x, -y),
            (y, x),
            (-y, x),
            (y, -x),
            (-y, -x),
        ];
        for (ox, oy) in octants {
            if let Some(p) = cell(cx + ox, cy + oy, size) {
                if seen.insert(p) {
                    points.push(p);
                }
            }
        }
    }
    points
}

/// The two-point shape tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Line,
    Rectangle,
    Circle,
}

impl Shape {
    /// Cells of a grid of `size` covered by this shape between the anchor `a`
    /// and the end `b`.
    pub fn points(&self, a: Point, b: Point, size: usize) -> Vec<Point> {
        match self {
            Self::Line => line(a, b, size),
            Self::Rectangle => rectangle(a, b, size),
            Self::Circle => circle(a, b, size),
        }
    }

    /// Write the shape into `grid`, returning how many cells were in bounds.
    pub fn draw(&self, grid: &mut PixelGrid, a: Point, b: Point, color: Color) -> usize {
        let points = self.points(a, b, grid.size());
        for p in &points {
            grid.set_point(*p, color);
        }
        points.len()
    }
}
