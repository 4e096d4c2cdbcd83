use egui::{Context, Pos2, Rect};

use crate::grid::Point;

/// A pointer gesture event, already mapped to grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEvent {
    /// Primary button pressed over the surface
    Start(Point),
    /// Pointer moved to a different cell while pressed
    Move(Point),
    /// Primary button released over the surface
    End(Point),
    /// Pointer left the surface while pressed
    Abandon,
}

/// Map a surface position to the cell beneath it.
///
/// Positions outside `surface` map to out-of-range cells; the grid clips
/// those, so no clamping happens here.
pub fn cell_at(pos: Pos2, surface: Rect, grid_size: usize) -> Point {
    let scale = grid_size as f32 / surface.width();
    let x = ((pos.x - surface.min.x) * scale).floor() as i32;
    let y = ((pos.y - surface.min.y) * scale).floor() as i32;
    Point::new(x, y)
}

/// Handles converting raw egui input into gesture events for one surface
#[derive(Debug, Default)]
pub struct InputHandler {
    pressed: bool,
    last_cell: Option<Point>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget any press in progress, e.g. after the grid was replaced.
    pub fn reset(&mut self) {
        self.pressed = false;
        self.last_cell = None;
    }

    /// Process raw egui input for this frame and generate gesture events
    pub fn process_input(&mut self, ctx: &Context, surface: Rect, grid_size: usize) -> Vec<GestureEvent> {
        ctx.input(|input| {
            let pointer = &input.pointer;
            self.process(
                pointer.latest_pos(),
                pointer.primary_pressed(),
                pointer.primary_released() || !pointer.primary_down(),
                surface,
                grid_size,
            )
        })
    }

    fn process(
        &mut self,
        pos: Option<Pos2>,
        pressed: bool,
        released: bool,
        surface: Rect,
        grid_size: usize,
    ) -> Vec<GestureEvent> {
        let mut events = Vec::new();
        let inside = pos
            .filter(|p| surface.contains(*p))
            .map(|p| cell_at(p, surface, grid_size));

        if pressed {
            if let Some(cell) = inside {
                events.push(GestureEvent::Start(cell));
                self.pressed = true;
                self.last_cell = Some(cell);
            }
        }

        if self.pressed {
            match inside {
                None => {
                    log::debug!("Pointer left the surface mid-gesture");
                    events.push(GestureEvent::Abandon);
                    self.reset();
                }
                Some(cell) if released => {
                    events.push(GestureEvent::End(cell));
                    self.reset();
                }
                Some(cell) if self.last_cell != Some(cell) => {
                    events.push(GestureEvent::Move(cell));
                    self.last_cell = Some(cell);
                }
                Some(_) => {}
            }
        }

        events
    }
}
