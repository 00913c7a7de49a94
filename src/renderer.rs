use egui::{Color32, Painter, Rect, TextureHandle, TextureOptions, pos2, vec2};

use crate::stroke::Segment;
use crate::surface::RasterSurface;

/// The visible canvas.
///
/// Shows a texture copy of the raster buffer plus the segments of the stroke
/// in progress, which are painted directly until the next refresh.
pub struct Renderer {
    texture: Option<TextureHandle>,
    needs_refresh: bool,
    live_segments: Vec<Segment>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("has_texture", &self.texture.is_some())
            .field("needs_refresh", &self.needs_refresh)
            .field("live_segments", &self.live_segments.len())
            .finish()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            texture: None,
            needs_refresh: true,
            live_segments: Vec::new(),
        }
    }

    /// Draws a segment on screen right away, ahead of the next texture upload
    pub fn push_live_segment(&mut self, segment: Segment) {
        self.live_segments.push(segment);
    }

    pub fn live_segments(&self) -> &[Segment] {
        &self.live_segments
    }

    /// Marks the texture stale; the next `render` re-uploads the buffer and drops live segments
    pub fn invalidate(&mut self) {
        self.needs_refresh = true;
    }

    pub fn needs_refresh(&self) -> bool {
        self.needs_refresh || self.texture.is_none()
    }

    /// Size of the uploaded texture, at most the canvas size
    pub fn texture_size(&self) -> Option<[usize; 2]> {
        self.texture.as_ref().map(|texture| texture.size())
    }

    /// Where the texture lands inside `canvas`
    pub fn image_rect(&self, canvas: Rect) -> Option<Rect> {
        self.texture_size()
            .map(|[w, h]| Rect::from_min_size(canvas.min, vec2(w as f32, h as f32)))
    }

    /// Paints the canvas into `rect`.
    ///
    /// The buffer is drawn at its own size from the top-left of `rect`. Only the
    /// part that fits inside `rect` is uploaded, so oversized images are cut off.
    pub fn render<S: RasterSurface>(
        &mut self,
        ctx: &egui::Context,
        painter: &Painter,
        rect: Rect,
        surface: &S,
        background: Color32,
    ) {
        self.refresh_if_needed(ctx, surface, rect);

        painter.rect_filled(rect, 0.0, background);

        if let (Some(texture), Some(image_rect)) = (&self.texture, self.image_rect(rect)) {
            painter.image(
                texture.id(),
                image_rect,
                Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }

        let offset = rect.min.to_vec2();
        for segment in &self.live_segments {
            painter.line_segment(
                [segment.from() + offset, segment.to() + offset],
                (segment.width() as f32, segment.color()),
            );
        }
    }

    fn refresh_if_needed<S: RasterSurface>(&mut self, ctx: &egui::Context, surface: &S, canvas: Rect) {
        if !self.needs_refresh() {
            return;
        }
        let max_size = [canvas.width().max(0.0) as usize, canvas.height().max(0.0) as usize];
        let image = surface.to_color_image(max_size);
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::NEAREST),
            None => {
                self.texture = Some(ctx.load_texture("raster_buffer", image, TextureOptions::NEAREST));
            }
        }
        self.live_segments.clear();
        self.needs_refresh = false;
    }
}
