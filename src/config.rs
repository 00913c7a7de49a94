use egui::Color32;

use crate::state::BrushSize;

pub const BRUSH_SIZE_MIN: u32 = 1;
pub const BRUSH_SIZE_MAX: u32 = 10;

/// File name suggested by the save dialog.
pub const DEFAULT_FILE_NAME: &str = "untitled.png";
/// Appended on save when the chosen path has no extension.
pub const DEFAULT_EXTENSION: &str = "png";

/// Startup constants for the drawing surface. Nothing here is persisted between runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Color of a blank canvas, also used as the eraser color
    pub background: Color32,
    pub default_color: Color32,
    pub default_brush: BrushSize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: Color32::WHITE,
            default_color: Color32::BLACK,
            default_brush: BrushSize::default(),
        }
    }
}
