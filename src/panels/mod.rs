mod central_panel;
mod palette_panel;
mod tools_panel;

pub use central_panel::central_panel;
pub use palette_panel::palette_panel;
pub use tools_panel::tools_panel;
