use std::path::Path;

use crate::color::Color;
use crate::config::EditorConfig;
use crate::error::GridError;
use crate::grid::{GridSnapshot, PixelGrid};
use crate::input::GestureEvent;
use crate::renderer::{ExportError, Renderer};
use crate::state::StrokeController;
use crate::tools::Tool;

/// The drawing engine as seen by its host: one grid, the stroke controller
/// that is its only writer, and the currently selected settings.
#[derive(Debug)]
pub struct Editor {
    grid: PixelGrid,
    controller: StrokeController,
    tool: Tool,
    color: Color,
    show_grid_lines: bool,
    renderer: Renderer,
}

impl Editor {
    pub fn new(config: &EditorConfig) -> Result<Self, GridError> {
        Ok(Self {
            grid: PixelGrid::new(config.grid_size)?,
            controller: StrokeController::new(),
            tool: config.active_tool,
            color: config.active_color,
            show_grid_lines: config.show_grid_lines,
            renderer: Renderer::new(config.surface_px),
        })
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn grid_size(&self) -> usize {
        self.grid.size()
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn show_grid_lines(&self) -> bool {
        self.show_grid_lines
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn controller(&self) -> &StrokeController {
        &self.controller
    }

    /// Replace the grid with a fresh white one of `size`, discarding all
    /// content and any gesture in progress. On error the current grid is kept.
    pub fn set_grid_size(&mut self, size: usize) -> Result<(), GridError> {
        let grid = PixelGrid::new(size)?;
        log::info!("Grid resized from {} to {}", self.grid.size(), size);
        self.controller.cancel();
        self.grid = grid;
        Ok(())
    }

    /// Switch tools. A gesture started with the previous tool is dropped.
    pub fn set_tool(&mut self, tool: Tool) {
        if tool != self.tool {
            log::info!("Tool selected: {}", tool.name());
            self.controller.cancel();
            self.tool = tool;
        }
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_show_grid_lines(&mut self, show: bool) {
        self.show_grid_lines = show;
    }

    pub fn toggle_grid_lines(&mut self) {
        self.show_grid_lines = !self.show_grid_lines;
    }

    /// Feed one gesture event through the controller and commit whatever it
    /// produces. Returns whether any cell changed.
    pub fn handle(&mut self, event: GestureEvent) -> bool {
        let Some(command) = self.controller.handle(event, self.tool, self.color) else {
            return false;
        };
        let before = self.grid.revision();
        command.execute(&mut self.grid);
        self.grid.revision() != before
    }

    pub fn snapshot(&self) -> GridSnapshot {
        self.grid.snapshot()
    }

    /// Render the current grid and write it to `path` as PNG.
    pub fn export_png(&self, path: &Path) -> Result<(), ExportError> {
        let image = self.renderer.render(&self.snapshot(), self.show_grid_lines);
        Renderer::save_png(&image, path)
    }

    /// Current settings, e.g. for persisting the session.
    pub fn config(&self, base: &EditorConfig) -> EditorConfig {
        EditorConfig {
            grid_size: self.grid.size(),
            active_color: self.color,
            active_tool: self.tool,
            show_grid_lines: self.show_grid_lines,
            surface_px: self.renderer.surface_px(),
            export_path: base.export_path.clone(),
        }
    }
}
