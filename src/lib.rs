#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod document;
pub mod error;
pub mod file_handler;
pub mod history;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod stroke;
pub mod surface;
pub mod widgets;

pub use app::PaintApp;
pub use config::CanvasConfig;
pub use document::Document;
pub use error::{PaintError, PaintResult};
pub use file_handler::{FileDialogs, NativeFileDialogs};
pub use history::SnapshotHistory;
pub use renderer::Renderer;
pub use state::{BrushSize, EditorState};
pub use stroke::Segment;
pub use surface::{RasterBuffer, RasterSurface};
