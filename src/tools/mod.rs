use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::raster::Shape;

/// Every drawing tool the editor offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Pencil,
    Eraser,
    Fill,
    Line,
    Rectangle,
    Circle,
}

/// How a tool turns a gesture into grid writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolBehavior {
    /// One cell per pointer sample, committed immediately.
    Freehand,
    /// One-shot region fill at the gesture start.
    Fill,
    /// Anchor-to-release shape, committed when the gesture ends.
    Shape(Shape),
}

impl Tool {
    pub const ALL: [Tool; 6] = [
        Tool::Pencil,
        Tool::Eraser,
        Tool::Fill,
        Tool::Line,
        Tool::Rectangle,
        Tool::Circle,
    ];

    /// Return the name of the tool
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pencil => "pencil",
            Self::Eraser => "eraser",
            Self::Fill => "fill",
            Self::Line => "line",
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pencil => "✏ Pencil",
            Self::Eraser => "⌫ Eraser",
            Self::Fill => "⬛ Fill",
            Self::Line => "╱ Line",
            Self::Rectangle => "◻ Rectangle",
            Self::Circle => "○ Circle",
        }
    }

    pub fn behavior(&self) -> ToolBehavior {
        match self {
            Self::Pencil | Self::Eraser => ToolBehavior::Freehand,
            Self::Fill => ToolBehavior::Fill,
            Self::Line => ToolBehavior::Shape(Shape::Line),
            Self::Rectangle => ToolBehavior::Shape(Shape::Rectangle),
            Self::Circle => ToolBehavior::Shape(Shape::Circle),
        }
    }

    /// The color this tool writes given the active color. The eraser always
    /// paints white.
    pub fn paint_color(&self, active: Color) -> Color {
        match self {
            Self::Eraser => Color::WHITE,
            _ => active,
        }
    }
}
