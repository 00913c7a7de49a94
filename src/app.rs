use egui::{Color32, Painter, Pos2, Rect, Vec2, vec2};
use log::{error, info};

use crate::config::CanvasConfig;
use crate::document::Document;
use crate::error::PaintError;
use crate::file_handler::{FileDialogs, NativeFileDialogs};
use crate::panels;
use crate::renderer::Renderer;
use crate::state::{BrushSize, EditorState};
use crate::widgets::{ColorPrompt, PromptResult};

pub struct PaintApp {
    config: CanvasConfig,
    document: Document,
    state: EditorState,
    renderer: Renderer,
    color_prompt: ColorPrompt,
    dialogs: Box<dyn FileDialogs>,
    /// Error waiting to be acknowledged by the user
    notice: Option<String>,
}

impl std::fmt::Debug for PaintApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaintApp")
            .field("config", &self.config)
            .field("document", &self.document)
            .field("state", &self.state)
            .field("renderer", &self.renderer)
            .field("notice", &self.notice)
            .finish()
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // The canvas is white; keep the chrome light to match
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::with_dialogs(CanvasConfig::default(), Box::new(NativeFileDialogs::new()))
    }

    /// Builds the app without a window, asking `dialogs` for save and load paths
    pub fn with_dialogs(config: CanvasConfig, dialogs: Box<dyn FileDialogs>) -> Self {
        Self {
            config,
            document: Document::new(&config),
            state: EditorState::new(config.default_color, config.default_brush, config.background),
            renderer: Renderer::new(),
            color_prompt: ColorPrompt::default(),
            dialogs,
            notice: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn color_prompt(&self) -> &ColorPrompt {
        &self.color_prompt
    }

    pub fn color_prompt_mut(&mut self) -> &mut ColorPrompt {
        &mut self.color_prompt
    }

    /// Size of the on-screen canvas, fixed at startup
    pub fn canvas_size(&self) -> Vec2 {
        vec2(self.config.width as f32, self.config.height as f32)
    }

    pub fn is_modal_open(&self) -> bool {
        self.color_prompt.is_open() || self.notice.is_some()
    }

    /// Pointer moved with the primary button held; `pos` is canvas-local
    pub fn pointer_dragged(&mut self, pos: Pos2) {
        if self.state.last_pos() == Some(pos) {
            return;
        }
        let (state, segment) = self.state.drag_to(pos);
        self.state = state;
        if let Some(segment) = segment {
            self.document.apply_segment(&segment);
            self.renderer.push_live_segment(segment);
        }
    }

    /// Primary button released: ends the stroke and records it for undo
    pub fn pointer_released(&mut self) {
        self.state = self.state.release();
        self.document.finish_stroke();
        self.renderer.invalidate();
    }

    /// A press and release with no motion in between: a one-point stroke
    pub fn pointer_clicked(&mut self, pos: Pos2) {
        self.pointer_dragged(pos);
        self.pointer_released();
    }

    /// Toolbar actions are locked while a prompt is waiting for an answer
    pub fn toolbar_enabled(&self) -> bool {
        !self.is_modal_open()
    }

    /// Opens the color prompt seeded with the current color
    pub fn choose_color(&mut self) {
        self.color_prompt.open(self.state.color());
    }

    pub fn apply_color_prompt(&mut self, result: PromptResult) {
        if let PromptResult::Confirmed(color) = result {
            self.set_color(color);
        }
    }

    /// Changes the selected color. The eraser stays as it is.
    pub fn set_color(&mut self, color: Color32) {
        self.state = self.state.with_color(color);
        info!("Color set to {:?}", color);
    }

    pub fn use_eraser(&mut self) {
        self.state = self.state.toggle_eraser();
        info!("Eraser {}", if self.state.eraser_on() { "on" } else { "off" });
    }

    pub fn set_brush_size(&mut self, size: BrushSize) {
        self.state = self.state.with_brush_size(size);
    }

    pub fn clear(&mut self) {
        self.document.clear();
        self.renderer.invalidate();
    }

    pub fn undo(&mut self) {
        if self.document.undo() {
            self.renderer.invalidate();
        }
    }

    pub fn save(&mut self) {
        let Some(path) = self.dialogs.save_path() else {
            return;
        };
        if let Err(err) = self.document.save_to(&path) {
            self.report(err);
        }
    }

    pub fn load(&mut self) {
        let Some(path) = self.dialogs.open_path() else {
            return;
        };
        match self.document.load_from(&path) {
            Ok(()) => self.renderer.invalidate(),
            Err(err) => self.report(err),
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn render_canvas(&mut self, ctx: &egui::Context, painter: &Painter, rect: Rect) {
        self.renderer
            .render(ctx, painter, rect, self.document.surface(), self.document.background());
    }

    fn report(&mut self, err: PaintError) {
        error!("{}", err);
        self.notice = Some(err.to_string());
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(message) = &self.notice else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(message);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.dismiss_notice();
        }
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::toolbar(self, ctx);
        panels::central_panel(self, ctx);

        let result = self.color_prompt.show(ctx);
        self.apply_color_prompt(result);

        self.show_notice(ctx);
    }
}
