// src/renderer.rs
use std::io::Cursor;
use std::path::Path;

use eframe::egui::{self, Color32, Rect};
use image::{ImageFormat, RgbaImage};
use thiserror::Error;

use crate::color::Color;
use crate::grid::GridSnapshot;

/// Color of the optional 1px cell borders.
pub const GRID_LINE_COLOR: Color = Color::rgb(0xCC, 0xCC, 0xCC);

/// Errors that can occur while exporting the rendered surface
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
    #[error("Failed to write image: {0}")]
    Write(#[from] std::io::Error),
}

/// Draws grid snapshots onto a square surface, either as a raster image for
/// export or onto an egui painter for the live view.
///
/// The renderer never reads the live grid, only snapshots handed to it, so it
/// always shows fully committed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    surface_px: u32,
}

impl Renderer {
    pub fn new(surface_px: u32) -> Self {
        Self { surface_px: surface_px.max(1) }
    }

    pub fn surface_px(&self) -> u32 {
        self.surface_px
    }

    /// Whole pixels per cell for a grid of `grid_size`; never below 1.
    pub fn cell_px(&self, grid_size: usize) -> u32 {
        let grid_size = u32::try_from(grid_size).unwrap_or(u32::MAX).max(1);
        (self.surface_px / grid_size).max(1)
    }

    /// Side of the drawn surface for a grid of `grid_size`: whole cells only,
    /// so it can fall short of `surface_px`.
    pub fn surface_side(&self, grid_size: usize) -> u32 {
        let cells = u32::try_from(grid_size).unwrap_or(u32::MAX);
        self.cell_px(grid_size).saturating_mul(cells)
    }

    /// Pixel offsets of the grid lines, the same along both axes: the top/left
    /// edge of every cell plus the surface's last pixel. Empty when cells are
    /// under 2px.
    pub fn grid_line_offsets(&self, grid_size: usize) -> Vec<u32> {
        let cell = self.cell_px(grid_size);
        let side = self.surface_side(grid_size);
        if cell < 2 || side == 0 {
            return Vec::new();
        }
        let mut offsets: Vec<u32> = (0..side).step_by(cell as usize).collect();
        offsets.push(side - 1);
        offsets
    }

    /// Rasterize `snapshot` into an RGBA image of
    /// [`surface_side`](Self::surface_side) pixels per side.
    ///
    /// With grid lines on, the rows and columns at
    /// [`grid_line_offsets`](Self::grid_line_offsets) take the grid color.
    /// [`paint`](Self::paint) draws the same lines, so a saved image matches
    /// the live view at one pixel per point.
    pub fn render(&self, snapshot: &GridSnapshot, show_grid_lines: bool) -> RgbaImage {
        let cell = self.cell_px(snapshot.size());
        let side = self.surface_side(snapshot.size());

        let mut on_line = vec![false; side as usize];
        if show_grid_lines {
            for offset in self.grid_line_offsets(snapshot.size()) {
                on_line[offset as usize] = true;
            }
        }

        RgbaImage::from_fn(side, side, |px, py| {
            if on_line[px as usize] || on_line[py as usize] {
                return GRID_LINE_COLOR.into();
            }
            snapshot
                .get((px / cell) as usize, (py / cell) as usize)
                .unwrap_or_default()
                .into()
        })
    }

    /// Paint `snapshot` for display, anchored at the top-left of `rect`.
    ///
    /// Cells are [`cell_px`](Self::cell_px) points wide and grid lines are
    /// 1pt bands at the same offsets [`render`](Self::render) uses.
    pub fn paint(&self, painter: &egui::Painter, rect: Rect, snapshot: &GridSnapshot, show_grid_lines: bool) {
        let cell = self.cell_px(snapshot.size()) as f32;
        let side = self.surface_side(snapshot.size()) as f32;

        for (x, y, color) in snapshot.cells() {
            let min = rect.min + egui::vec2(x as f32 * cell, y as f32 * cell);
            let cell_rect = Rect::from_min_size(min, egui::vec2(cell, cell));
            painter.rect_filled(cell_rect, 0.0, Color32::from(color));
        }

        if show_grid_lines {
            let line_color = Color32::from(GRID_LINE_COLOR);
            for offset in self.grid_line_offsets(snapshot.size()) {
                let offset = offset as f32;
                let column = Rect::from_min_size(rect.min + egui::vec2(offset, 0.0), egui::vec2(1.0, side));
                let row = Rect::from_min_size(rect.min + egui::vec2(0.0, offset), egui::vec2(side, 1.0));
                painter.rect_filled(column, 0.0, line_color);
                painter.rect_filled(row, 0.0, line_color);
            }
        }
    }

    /// Encode a rendered surface as PNG bytes.
    pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ExportError> {
        let mut bytes = Cursor::new(Vec::new());
        image.write_to(&mut bytes, ImageFormat::Png)?;
        Ok(bytes.into_inner())
    }

    /// Write a rendered surface to `path` as PNG.
    pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), ExportError> {
        let bytes = Self::encode_png(image)?;
        std::fs::write(path, bytes)?;
        log::info!("Saved {}x{} image to {}", image.width(), image.height(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::PixelGrid;

    fn checker() -> GridSnapshot {
        let mut grid = PixelGrid::new(4).unwrap();
        grid.set(0, 0, Color::BLACK);
        grid.set(3, 3, Color::rgb(255, 0, 0));
        grid.snapshot()
    }

    #[test]
    fn test_cell_px() {
        let renderer = Renderer::new(400);
        assert_eq!(renderer.cell_px(32), 12);
        assert_eq!(renderer.cell_px(400), 1);
        assert_eq!(renderer.cell_px(1000), 1);
        assert_eq!(renderer.cell_px(0), 400);
    }

    #[test]
    fn test_render_without_grid_lines() {
        let image = Renderer::new(40).render(&checker(), false);
        assert_eq!(image.dimensions(), (40, 40));
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(image.get_pixel(9, 9).0, [0, 0, 0, 255]);
        assert_eq!(image.get_pixel(10, 10).0, [255, 255, 255, 255]);
        assert_eq!(image.get_pixel(39, 39).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_render_with_grid_lines() {
        let image = Renderer::new(40).render(&checker(), true);
        let grid = GRID_LINE_COLOR.to_rgba();
        assert_eq!(image.get_pixel(0, 5).0, grid);
        assert_eq!(image.get_pixel(10, 5).0, grid);
        assert_eq!(image.get_pixel(39, 20).0, grid);
        assert_eq!(image.get_pixel(5, 5).0, [0, 0, 0, 255]);
        assert_eq!(image.get_pixel(35, 35).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_grid_line_offsets() {
        let renderer = Renderer::new(40);
        assert_eq!(renderer.grid_line_offsets(4), vec![0, 10, 20, 30, 39]);
        assert_eq!(renderer.surface_side(4), 40);
        assert!(Renderer::new(4).grid_line_offsets(4).is_empty());

        // 400 / 32 leaves a 16px margin that is not drawn
        let renderer = Renderer::new(400);
        assert_eq!(renderer.surface_side(32), 384);
        assert_eq!(renderer.grid_line_offsets(32).last(), Some(&383));
    }

    #[test]
    fn test_rendered_lines_follow_offsets() {
        let renderer = Renderer::new(40);
        let image = renderer.render(&checker(), true);
        let offsets = renderer.grid_line_offsets(4);
        let grid = GRID_LINE_COLOR.to_rgba();
        for p in 0..40 {
            // row 15 and column 15 cross no line except at the offsets
            assert_eq!(image.get_pixel(p, 15).0 == grid, offsets.contains(&p), "x = {p}");
            assert_eq!(image.get_pixel(15, p).0 == grid, offsets.contains(&p), "y = {p}");
        }
    }

    #[test]
    fn test_tiny_cells_skip_grid_lines() {
        let image = Renderer::new(4).render(&checker(), true);
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(image.get_pixel(1, 1).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_png_round_trip() {
        let image = Renderer::new(40).render(&checker(), false);
        let bytes = Renderer::encode_png(&image).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded, image);
    }
}
