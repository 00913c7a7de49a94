use egui::Color32;
use egui::color_picker::{Alpha, color_picker_color32};

/// Outcome of one frame of the color prompt
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PromptResult {
    /// Still open, nothing decided yet
    Pending,
    Confirmed(Color32),
    Cancelled,
}

/// Modal color selection, seeded with the current color.
///
/// The picked color only takes effect once the user confirms it.
#[derive(Debug, Default)]
pub struct ColorPrompt {
    /// The color being edited while the prompt is open
    pending: Option<Color32>,
}

impl ColorPrompt {
    pub fn open(&mut self, current: Color32) {
        self.pending = Some(current);
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<Color32> {
        self.pending
    }

    pub fn set_pending(&mut self, color: Color32) {
        if let Some(pending) = &mut self.pending {
            *pending = color;
        }
    }

    pub fn confirm(&mut self) -> PromptResult {
        match self.pending.take() {
            Some(color) => PromptResult::Confirmed(color),
            None => PromptResult::Cancelled,
        }
    }

    pub fn cancel(&mut self) -> PromptResult {
        self.pending = None;
        PromptResult::Cancelled
    }

    /// Shows the prompt window if it is open
    pub fn show(&mut self, ctx: &egui::Context) -> PromptResult {
        let Some(mut color) = self.pending else {
            return PromptResult::Pending;
        };

        let mut result = PromptResult::Pending;
        egui::Window::new("Choose color")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                color_picker_color32(ui, &mut color, Alpha::Opaque);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        result = PromptResult::Confirmed(color);
                    }
                    if ui.button("Cancel").clicked() {
                        result = PromptResult::Cancelled;
                    }
                });
            });

        match result {
            PromptResult::Pending => self.set_pending(color),
            _ => self.pending = None,
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_returns_edited_color() {
        let mut prompt = ColorPrompt::default();
        prompt.open(Color32::BLACK);
        assert_eq!(prompt.pending(), Some(Color32::BLACK));

        prompt.set_pending(Color32::RED);
        assert_eq!(prompt.confirm(), PromptResult::Confirmed(Color32::RED));
        assert!(!prompt.is_open());
    }

    #[test]
    fn test_cancel_discards_edit() {
        let mut prompt = ColorPrompt::default();
        prompt.open(Color32::BLACK);
        prompt.set_pending(Color32::RED);
        assert_eq!(prompt.cancel(), PromptResult::Cancelled);
        assert_eq!(prompt.pending(), None);
    }

    #[test]
    fn test_closed_prompt_ignores_edits() {
        let mut prompt = ColorPrompt::default();
        prompt.set_pending(Color32::RED);
        assert!(!prompt.is_open());
    }
}
