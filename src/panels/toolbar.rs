use egui::{Button, Sense, Slider, vec2};

use crate::PaintApp;
use crate::config::{BRUSH_SIZE_MAX, BRUSH_SIZE_MIN};
use crate::state::BrushSize;

pub fn toolbar(app: &mut PaintApp, ctx: &egui::Context) {
    let enabled = app.toolbar_enabled();
    egui::TopBottomPanel::bottom("toolbar").show(ctx, |ui| {
        ui.add_enabled_ui(enabled, |ui| {
            ui.horizontal(|ui| {
                // Swatch of the selected color
                let (swatch, _) = ui.allocate_exact_size(vec2(16.0, 16.0), Sense::hover());
                ui.painter().rect_filled(swatch, 2.0, app.state().color());

                if ui.button("Color…").clicked() {
                    app.choose_color();
                }
                if ui.selectable_label(app.state().eraser_on(), "Eraser").clicked() {
                    app.use_eraser();
                }
                if ui.button("Clear").clicked() {
                    app.clear();
                }
                if ui.button("Save…").clicked() {
                    app.save();
                }
                if ui.button("Load…").clicked() {
                    app.load();
                }

                let can_undo = app.document().history().can_undo();
                if ui.add_enabled(can_undo, Button::new("Undo")).clicked() {
                    app.undo();
                }

                ui.separator();

                let mut size = app.state().brush_size().get();
                let slider = Slider::new(&mut size, BRUSH_SIZE_MIN..=BRUSH_SIZE_MAX).text("Brush size");
                if ui.add(slider).changed() {
                    app.set_brush_size(BrushSize::new(size));
                }
            });
        });
    });
}
