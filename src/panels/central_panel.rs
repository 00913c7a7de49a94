use crate::PaintApp;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) =
            ui.allocate_painter(app.canvas_size(), egui::Sense::click_and_drag());
        let canvas_rect = response.rect;

        // Modal prompts own the pointer while they are open
        if !app.is_modal_open() {
            let primary_down = ctx.input(|i| i.pointer.primary_down());
            if response.is_pointer_button_down_on() && primary_down {
                if let Some(pos) = response.interact_pointer_pos() {
                    app.pointer_dragged((pos - canvas_rect.min).to_pos2());
                }
            } else if app.state().is_stroking() {
                app.pointer_released();
            } else if response.clicked_by(egui::PointerButton::Primary) {
                // Press and release landed in one frame, so no drag was ever seen
                if let Some(pos) = response.interact_pointer_pos().or(response.hover_pos()) {
                    app.pointer_clicked((pos - canvas_rect.min).to_pos2());
                }
            }
        }

        app.render_canvas(ctx, &painter, canvas_rect);
    });
}
