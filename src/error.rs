use thiserror::Error;

/// Errors raised by the grid store.
///
/// Tool-driven writes never produce these: they go through the clipping
/// `PixelGrid::set` path. Only construction and direct reads can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid grid size {0}: must be at least 1")]
    InvalidSize(usize),
    #[error("Cell ({x}, {y}) is outside a {size}x{size} grid")]
    OutOfBounds { x: i32, y: i32, size: usize },
}

/// Errors raised while parsing a color string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("Invalid color {0:?}: expected 6 hex digits like #1A2B3C")]
    InvalidHex(String),
}
