#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod command;
pub mod components;
pub mod config;
pub mod editor;
pub mod error;
pub mod fill;
pub mod grid;
pub mod input;
pub mod panels;
pub mod raster;
pub mod renderer;
pub mod state;
pub mod tools;

pub use app::PixelEditorApp;
pub use color::{Color, PALETTE};
pub use command::DrawCommand;
pub use config::{ConfigError, EditorConfig};
pub use editor::Editor;
pub use error::{ColorError, GridError};
pub use fill::flood_fill;
pub use grid::{GridSnapshot, PixelGrid, Point};
pub use input::{GestureEvent, InputHandler};
pub use raster::Shape;
pub use renderer::{ExportError, Renderer};
pub use state::{GestureState, StrokeController};
pub use tools::Tool;
