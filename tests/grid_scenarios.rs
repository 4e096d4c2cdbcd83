use std::collections::HashSet;

use pixel_editor::raster::{self, Shape};
use pixel_editor::{flood_fill, Color, PixelGrid, Point};

const RED: Color = Color::rgb(255, 0, 0);

// Helper to collect every non-white cell of a grid
fn painted_cells(grid: &PixelGrid) -> HashSet<(usize, usize)> {
    grid.snapshot()
        .cells()
        .filter(|(_, _, c)| *c != Color::WHITE)
        .map(|(x, y, _)| (x, y))
        .collect()
}

#[test]
fn test_diagonal_line_scenario() {
    let mut grid = PixelGrid::new(5).unwrap();
    Shape::Line.draw(&mut grid, Point::new(0, 0), Point::new(4, 4), Color::BLACK);

    let expected: HashSet<_> = (0..5).map(|i| (i, i)).collect();
    assert_eq!(painted_cells(&grid), expected);
    for i in 0..5 {
        assert_eq!(grid.get(i, i).unwrap(), Color::BLACK);
    }
}

#[test]
fn test_reversed_lines_paint_the_same_cells() {
    for (a, b) in [
        (Point::new(0, 0), Point::new(2, 1)),
        (Point::new(1, 7), Point::new(6, 0)),
        (Point::new(0, 3), Point::new(7, 4)),
    ] {
        let mut forward = PixelGrid::new(8).unwrap();
        let mut backward = PixelGrid::new(8).unwrap();
        Shape::Line.draw(&mut forward, a, b, Color::BLACK);
        Shape::Line.draw(&mut backward, b, a, Color::BLACK);
        assert_eq!(forward.snapshot(), backward.snapshot());
    }
}

#[test]
fn test_fill_whole_grid_scenario() {
    let mut grid = PixelGrid::new(5).unwrap();
    flood_fill(&mut grid, Point::new(2, 2), RED);
    assert!(grid.snapshot().cells().all(|(_, _, c)| c == RED));
}

#[test]
fn test_fill_is_idempotent() {
    let mut grid = PixelGrid::new(6).unwrap();
    Shape::Rectangle.draw(&mut grid, Point::new(1, 1), Point::new(4, 4), Color::BLACK);
    flood_fill(&mut grid, Point::new(2, 2), RED);

    let before = grid.snapshot();
    assert_eq!(flood_fill(&mut grid, Point::new(2, 2), RED), 0);
    assert_eq!(grid.snapshot(), before);
}

#[test]
fn test_fill_only_touches_seed_color() {
    // A ring of black around the center; filling the inside must not leak
    // through the ring, and the ring itself must keep its color.
    let mut grid = PixelGrid::new(7).unwrap();
    let ring = raster::rectangle(Point::new(1, 1), Point::new(5, 5), grid.size());
    for p in &ring {
        grid.set_point(*p, Color::BLACK);
    }
    let original = grid.snapshot();

    let written = flood_fill(&mut grid, Point::new(3, 3), RED);
    assert_eq!(written, 9);

    for (x, y, before) in original.cells() {
        let after = grid.get(x as i32, y as i32).unwrap();
        if after != before {
            assert_eq!(before, Color::WHITE);
            assert!((2..=4).contains(&x) && (2..=4).contains(&y));
        }
    }
}

#[test]
fn test_rectangle_border_scenario() {
    let mut grid = PixelGrid::new(5).unwrap();
    Shape::Rectangle.draw(&mut grid, Point::new(0, 0), Point::new(4, 4), Color::BLACK);

    let painted = painted_cells(&grid);
    assert_eq!(painted.len(), 16);
    for y in 1..4 {
        for x in 1..4 {
            assert_eq!(grid.get(x, y).unwrap(), Color::WHITE);
        }
    }
    for (x, y) in painted {
        assert!(x == 0 || x == 4 || y == 0 || y == 4);
    }
}

#[test]
fn test_radius_zero_circle_scenario() {
    let mut grid = PixelGrid::new(5).unwrap();
    let written = Shape::Circle.draw(&mut grid, Point::new(3, 1), Point::new(3, 1), Color::BLACK);
    assert_eq!(written, 1);
    assert_eq!(painted_cells(&grid), HashSet::from([(3, 1)]));
}

#[test]
fn test_circle_partially_off_grid() {
    // radius 3 around the corner: only the quarter arc in +x/+y is visible
    let mut grid = PixelGrid::new(5).unwrap();
    let written = Shape::Circle.draw(&mut grid, Point::new(0, 0), Point::new(3, 0), Color::BLACK);
    assert_eq!(written, 5);
    assert_eq!(
        painted_cells(&grid),
        HashSet::from([(3, 0), (3, 1), (2, 2), (1, 3), (0, 3)])
    );

    let full = raster::circle(Point::new(8, 8), Point::new(11, 8), 16);
    assert_eq!(full.len(), 16);
}

#[test]
fn test_far_away_shapes_only_touch_visible_cells() {
    let mut grid = PixelGrid::new(6).unwrap();
    Shape::Line.draw(&mut grid, Point::new(i32::MIN, i32::MIN), Point::new(i32::MAX, i32::MAX), RED);
    Shape::Rectangle.draw(&mut grid, Point::new(i32::MIN, 5), Point::new(i32::MAX, i32::MAX), Color::BLACK);

    let painted = painted_cells(&grid);
    assert_eq!(painted.len(), 11);
    for (x, y) in painted {
        assert!(x == y || y == 5, "({x}, {y})");
    }
}

#[test]
fn test_off_grid_writes_are_silent() {
    let mut grid = PixelGrid::new(5).unwrap();
    let before = grid.snapshot();
    grid.set(-1, -1, Color::BLACK);
    grid.set(5, 5, Color::BLACK);
    assert_eq!(grid.snapshot(), before);
    assert!(grid.get(5, 5).is_err());
}
