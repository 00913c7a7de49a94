use std::path::Path;

use egui::Color32;
use log::{debug, info};

use crate::config::CanvasConfig;
use crate::error::PaintResult;
use crate::history::SnapshotHistory;
use crate::stroke::Segment;
use crate::surface::{RasterBuffer, RasterSurface};

/// The drawing itself: the raster buffer plus its undo history.
///
/// The top of the history mirrors the surface as of the last completed
/// stroke, never the stroke currently in progress.
#[derive(Debug, Clone)]
pub struct Document<S: RasterSurface = RasterBuffer> {
    surface: S,
    history: SnapshotHistory<S>,
    /// The surface as it stood before the oldest recorded stroke
    base: S,
    /// Size and color a cleared canvas returns to
    blank_size: (u32, u32),
    background: Color32,
}

impl<S: RasterSurface> Document<S> {
    pub fn new(config: &CanvasConfig) -> Self {
        let blank = S::blank(config.width, config.height, config.background);
        Self {
            surface: blank.clone(),
            base: blank,
            history: SnapshotHistory::new(),
            blank_size: (config.width, config.height),
            background: config.background,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn history(&self) -> &SnapshotHistory<S> {
        &self.history
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// Paints one live segment into the surface
    pub fn apply_segment(&mut self, segment: &Segment) {
        self.surface
            .draw_line(segment.from(), segment.to(), segment.color(), segment.width());
    }

    /// Called on pointer release: snapshots the surface as the end state of the stroke
    pub fn finish_stroke(&mut self) {
        self.history.push(self.surface.clone());
        debug!("Stroke finished");
    }

    /// Blanks the surface at its startup size and drops all history
    pub fn clear(&mut self) {
        let (width, height) = self.blank_size;
        self.surface = S::blank(width, height, self.background);
        self.base = self.surface.clone();
        self.history.clear();
        info!("Canvas cleared");
    }

    /// Drops the last completed stroke and restores the surface as it was before it.
    ///
    /// Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.history.pop().is_none() {
            return false;
        }
        self.surface = self.history.top().unwrap_or(&self.base).clone();
        debug!("Undo, {} snapshots left", self.history.len());
        true
    }

    pub fn save_to(&self, path: &Path) -> PaintResult<()> {
        self.surface.save(path)?;
        info!("Saved drawing to {}", path.display());
        Ok(())
    }

    /// Replaces the surface with the image at `path`, keeping that image's size.
    ///
    /// History is left as it is. On failure the surface is untouched.
    pub fn load_from(&mut self, path: &Path) -> PaintResult<()> {
        self.surface = S::load(path, self.background)?;
        if self.history.is_empty() {
            self.base = self.surface.clone();
        }
        info!(
            "Loaded {}x{} drawing from {}",
            self.surface.width(),
            self.surface.height(),
            path.display()
        );
        Ok(())
    }
}
