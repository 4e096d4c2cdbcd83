//! The stroke controller: a two-state machine that turns pointer gestures
//! into [`DrawCommand`]s.
//!
//! ```text
//!            start (pencil/eraser/shape)
//!   ┌──────┐ ─────────────────────────► ┌────────┐
//!   │ Idle │                            │ Active │ ── move: freehand write
//!   └──────┘ ◄───────────────────────── └────────┘
//!      │      end / abandon: shape commit
//!      └── start (fill): one-shot fill, stays Idle
//! ```
//!
//! Freehand tools commit on every sample. Shape tools only remember the
//! anchor and commit once, when the gesture ends or the pointer leaves the
//! surface.

use crate::color::Color;
use crate::command::DrawCommand;
use crate::grid::Point;
use crate::input::GestureEvent;
use crate::tools::{Tool, ToolBehavior};

/// The possible states of the stroke controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    /// No gesture in progress
    #[default]
    Idle,
    /// A drag is in progress with `tool`
    Active {
        tool: Tool,
        anchor: Point,
        /// Last cell reported by the pointer, used when the gesture is abandoned
        last: Point,
    },
}

#[derive(Debug, Default)]
pub struct StrokeController {
    state: GestureState,
}

impl StrokeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, GestureState::Active { .. })
    }

    /// Dispatch a gesture event with the current tool and color.
    pub fn handle(&mut self, event: GestureEvent, tool: Tool, color: Color) -> Option<DrawCommand> {
        match event {
            GestureEvent::Start(pos) => self.on_pointer_down(pos, tool, color),
            GestureEvent::Move(pos) => self.on_pointer_move(pos, color),
            GestureEvent::End(pos) => self.on_pointer_up(pos, color),
            GestureEvent::Abandon => self.on_pointer_leave(color),
        }
    }

    /// Begin a gesture. Freehand tools write the first cell right away; fill
    /// runs immediately and never enters the active state.
    pub fn on_pointer_down(&mut self, pos: Point, tool: Tool, color: Color) -> Option<DrawCommand> {
        if let GestureState::Active { anchor, .. } = self.state {
            log::warn!("Gesture started at {:?} while one from {:?} was active; dropping it", pos, anchor);
        }

        match tool.behavior() {
            ToolBehavior::Fill => {
                self.state = GestureState::Idle;
                Some(DrawCommand::Fill { seed: pos, color: tool.paint_color(color) })
            }
            ToolBehavior::Freehand => {
                self.state = GestureState::Active { tool, anchor: pos, last: pos };
                Some(DrawCommand::Pixel { at: pos, color: tool.paint_color(color) })
            }
            ToolBehavior::Shape(_) => {
                self.state = GestureState::Active { tool, anchor: pos, last: pos };
                None
            }
        }
    }

    /// Continue a gesture. Only freehand tools write; cells between
    /// successive samples are not interpolated.
    pub fn on_pointer_move(&mut self, pos: Point, color: Color) -> Option<DrawCommand> {
        let GestureState::Active { tool, last, .. } = &mut self.state else {
            return None;
        };
        *last = pos;

        match tool.behavior() {
            ToolBehavior::Freehand => Some(DrawCommand::Pixel { at: pos, color: tool.paint_color(color) }),
            _ => None,
        }
    }

    /// Finish a gesture, committing the shape if the tool draws one. An end
    /// without a matching start is ignored.
    pub fn on_pointer_up(&mut self, pos: Point, color: Color) -> Option<DrawCommand> {
        let GestureState::Active { tool, anchor, .. } = std::mem::take(&mut self.state) else {
            log::debug!("Ignoring gesture end at {:?} with no gesture in progress", pos);
            return None;
        };

        match tool.behavior() {
            ToolBehavior::Shape(shape) => Some(DrawCommand::Shape {
                shape,
                from: anchor,
                to: pos,
                color: tool.paint_color(color),
            }),
            _ => None,
        }
    }

    /// The pointer left the surface mid-gesture: end it at the last known
    /// in-surface cell.
    pub fn on_pointer_leave(&mut self, color: Color) -> Option<DrawCommand> {
        match self.state {
            GestureState::Active { last, .. } => self.on_pointer_up(last, color),
            GestureState::Idle => None,
        }
    }

    /// Drop any gesture in progress without committing it.
    pub fn cancel(&mut self) {
        if self.is_active() {
            log::debug!("Discarding in-progress gesture");
        }
        self.state = GestureState::Idle;
    }
}
