use std::collections::VecDeque;

use crate::color::Color;
use crate::grid::{PixelGrid, Point};

/// Fill the 4-connected region of `seed`'s color with `fill_color`.
///
/// The target color is read once before any write. Cells are deduplicated when
/// dequeued, so a cell queued by several neighbours is only handled once.
/// Returns the number of cells written; filling a region with its own color,
/// or seeding outside the grid, writes nothing.
pub fn flood_fill(grid: &mut PixelGrid, seed: Point, fill_color: Color) -> usize {
    let Ok(target) = grid.get(seed.x, seed.y) else {
        log::debug!("Fill seed {:?} is outside the grid", seed);
        return 0;
    };
    if target == fill_color {
        return 0;
    }

    let size = grid.size();
    let mut visited = vec![false; size * size];
    let mut queue = VecDeque::from([seed]);
    let mut written = 0;

    while let Some(p) = queue.pop_front() {
        if !grid.in_bounds(p) {
            continue;
        }
        let index = p.y as usize * size + p.x as usize;
        if visited[index] || grid.get(p.x, p.y) != Ok(target) {
            continue;
        }

        grid.set_point(p, fill_color);
        visited[index] = true;
        written += 1;

        queue.push_back(Point::new(p.x + 1, p.y));
        queue.push_back(Point::new(p.x - 1, p.y));
        queue.push_back(Point::new(p.x, p.y + 1));
        queue.push_back(Point::new(p.x, p.y - 1));
    }

    log::debug!("Filled {} cells from {:?} with {}", written, seed, fill_color);
    written
}
