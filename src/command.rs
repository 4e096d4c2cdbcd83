use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::fill::flood_fill;
use crate::grid::{PixelGrid, Point};
use crate::raster::Shape;

/// One committed mutation of the grid, produced by the stroke controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Freehand write of a single cell
    Pixel { at: Point, color: Color },
    /// Region fill seeded at a cell
    Fill { seed: Point, color: Color },
    /// Two-point shape from the gesture anchor to its end
    Shape {
        shape: Shape,
        from: Point,
        to: Point,
        color: Color,
    },
}

impl DrawCommand {
    /// Apply the command, returning the number of in-bounds cells written.
    pub fn execute(&self, grid: &mut PixelGrid) -> usize {
        let written = match self {
            DrawCommand::Pixel { at, color } => usize::from(grid.set_point(*at, *color)),
            DrawCommand::Fill { seed, color } => flood_fill(grid, *seed, *color),
            DrawCommand::Shape { shape, from, to, color } => shape.draw(grid, *from, *to, *color),
        };
        log::debug!("Executed {:?}: {} cells", self, written);
        written
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_command() {
        let mut grid = PixelGrid::new(3).unwrap();
        let cmd = DrawCommand::Pixel { at: Point::new(1, 2), color: Color::BLACK };
        assert_eq!(cmd.execute(&mut grid), 1);
        assert_eq!(grid.get(1, 2).unwrap(), Color::BLACK);

        let off_grid = DrawCommand::Pixel { at: Point::new(3, 0), color: Color::BLACK };
        assert_eq!(off_grid.execute(&mut grid), 0);
    }

    #[test]
    fn test_shape_command() {
        let mut grid = PixelGrid::new(5).unwrap();
        let cmd = DrawCommand::Shape {
            shape: Shape::Rectangle,
            from: Point::new(0, 0),
            to: Point::new(4, 4),
            color: Color::BLACK,
        };
        assert_eq!(cmd.execute(&mut grid), 16);
    }
}
