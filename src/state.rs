use egui::{Color32, Pos2};

use crate::config::{BRUSH_SIZE_MAX, BRUSH_SIZE_MIN};
use crate::stroke::Segment;

/// Brush width in pixels, always within `BRUSH_SIZE_MIN..=BRUSH_SIZE_MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BrushSize(u32);

impl BrushSize {
    /// Clamps `size` into the valid range
    pub fn new(size: u32) -> Self {
        Self(size.clamp(BRUSH_SIZE_MIN, BRUSH_SIZE_MAX))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for BrushSize {
    fn default() -> Self {
        Self(2)
    }
}

/// The drawing session: everything a pointer event needs to turn into a segment.
///
/// Transitions take `self` by value and hand back the next state, so stroke
/// handling can be driven without a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorState {
    color: Color32,
    eraser_on: bool,
    brush_size: BrushSize,
    /// Previous pointer position while a stroke is in progress
    last_pos: Option<Pos2>,
    /// Color painted while the eraser is on
    background: Color32,
}

impl EditorState {
    pub fn new(color: Color32, brush_size: BrushSize, background: Color32) -> Self {
        Self {
            color,
            eraser_on: false,
            brush_size,
            last_pos: None,
            background,
        }
    }

    /// The user-selected color, regardless of the eraser
    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn eraser_on(&self) -> bool {
        self.eraser_on
    }

    pub fn brush_size(&self) -> BrushSize {
        self.brush_size
    }

    pub fn last_pos(&self) -> Option<Pos2> {
        self.last_pos
    }

    pub fn is_stroking(&self) -> bool {
        self.last_pos.is_some()
    }

    /// Color the next segment will be painted with
    pub fn active_color(&self) -> Color32 {
        if self.eraser_on {
            self.background
        } else {
            self.color
        }
    }

    /// Leaves the eraser flag alone.
    pub fn with_color(self, color: Color32) -> Self {
        Self { color, ..self }
    }

    pub fn with_brush_size(self, brush_size: BrushSize) -> Self {
        Self { brush_size, ..self }
    }

    pub fn toggle_eraser(self) -> Self {
        Self {
            eraser_on: !self.eraser_on,
            ..self
        }
    }

    /// Pointer moved to `pos` with the button held.
    ///
    /// Returns the segment from the previous position, or `None` when this is
    /// the first position of a stroke.
    pub fn drag_to(self, pos: Pos2) -> (Self, Option<Segment>) {
        let segment = self
            .last_pos
            .map(|from| Segment::new(from, pos, self.active_color(), self.brush_size.get()));
        let next = Self {
            last_pos: Some(pos),
            ..self
        };
        (next, segment)
    }

    /// Button released: the next drag starts a fresh stroke.
    pub fn release(self) -> Self {
        Self {
            last_pos: None,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn state() -> EditorState {
        EditorState::new(Color32::BLACK, BrushSize::default(), Color32::WHITE)
    }

    #[test]
    fn test_brush_size_is_clamped() {
        assert_eq!(BrushSize::new(0).get(), 1);
        assert_eq!(BrushSize::new(11).get(), 10);
        assert_eq!(BrushSize::new(7).get(), 7);
        assert_eq!(BrushSize::default().get(), 2);
    }

    #[test]
    fn test_first_drag_only_records_position() {
        let (next, segment) = state().drag_to(pos2(5.0, 5.0));
        assert!(segment.is_none());
        assert_eq!(next.last_pos(), Some(pos2(5.0, 5.0)));
    }

    #[test]
    fn test_second_drag_yields_segment() {
        let (s, _) = state().drag_to(pos2(5.0, 5.0));
        let (s, segment) = s.drag_to(pos2(9.0, 5.0));
        let segment = segment.unwrap();
        assert_eq!(segment.from(), pos2(5.0, 5.0));
        assert_eq!(segment.to(), pos2(9.0, 5.0));
        assert_eq!(segment.color(), Color32::BLACK);
        assert_eq!(segment.width(), 2);
        assert_eq!(s.last_pos(), Some(pos2(9.0, 5.0)));
    }

    #[test]
    fn test_origin_is_a_valid_previous_position() {
        let (s, _) = state().drag_to(pos2(0.0, 0.0));
        let (_, segment) = s.drag_to(pos2(3.0, 0.0));
        assert!(segment.is_some());
    }

    #[test]
    fn test_release_breaks_the_stroke() {
        let (s, _) = state().drag_to(pos2(5.0, 5.0));
        let s = s.release();
        assert!(!s.is_stroking());
        let (_, segment) = s.drag_to(pos2(300.0, 300.0));
        assert!(segment.is_none());
    }

    #[test]
    fn test_eraser_paints_background_and_keeps_color() {
        let s = state().with_color(Color32::RED).toggle_eraser();
        assert_eq!(s.active_color(), Color32::WHITE);
        assert_eq!(s.color(), Color32::RED);

        let s = s.with_color(Color32::BLUE);
        assert!(s.eraser_on());
        assert_eq!(s.active_color(), Color32::WHITE);

        let s = s.toggle_eraser();
        assert_eq!(s.active_color(), Color32::BLUE);
    }
}
