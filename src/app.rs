use crate::config::EditorConfig;
use crate::editor::Editor;
use crate::error::GridError;
use crate::input::InputHandler;
use crate::panels;

/// The eframe shell around the [`Editor`]: tool bar, palette and canvas.
pub struct PixelEditorApp {
    pub(crate) config: EditorConfig,
    pub(crate) editor: Editor,
    pub(crate) input: InputHandler,
    /// Grid size chosen in the tool bar, applied when the user confirms
    pub(crate) pending_grid_size: usize,
    pub(crate) status: Option<String>,
}

impl PixelEditorApp {
    /// Called once before the first frame.
    ///
    /// An explicit `config` wins; otherwise the last session is restored from
    /// eframe storage, falling back to defaults.
    pub fn new(cc: &eframe::CreationContext<'_>, config: Option<EditorConfig>) -> Result<Self, GridError> {
        let config = config
            .or_else(|| cc.storage.and_then(|storage| eframe::get_value(storage, eframe::APP_KEY)))
            .unwrap_or_default();
        Self::with_config(config)
    }

    pub fn with_config(config: EditorConfig) -> Result<Self, GridError> {
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                log::warn!("Ignoring config: {}", err);
                EditorConfig::default()
            }
        };

        Ok(Self {
            editor: Editor::new(&config)?,
            input: InputHandler::new(),
            pending_grid_size: config.grid_size,
            status: None,
            config,
        })
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Start over on a fresh grid of `size`.
    pub fn resize_grid(&mut self, size: usize) {
        match self.editor.set_grid_size(size) {
            Ok(()) => {
                self.input.reset();
                self.status = Some(format!("New {size}x{size} grid"));
            }
            Err(err) => {
                log::warn!("Failed to resize grid: {}", err);
                self.status = Some(err.to_string());
            }
        }
    }

    /// Export the canvas to the configured PNG path.
    pub fn save_image(&mut self) {
        let path = self.config.export_path.clone();
        self.status = Some(match self.editor.export_png(&path) {
            Ok(()) => format!("Saved {}", path.display()),
            Err(err) => {
                log::error!("Failed to save {}: {}", path.display(), err);
                format!("Save failed: {err}")
            }
        });
    }
}

impl eframe::App for PixelEditorApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.editor.config(&self.config));
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(self, ctx);
        panels::palette_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}
