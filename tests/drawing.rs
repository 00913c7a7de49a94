use egui::{Color32, Pos2, pos2};
use sketchpad::stroke::line_points;
use sketchpad::{BrushSize, CanvasConfig, Document, EditorState, RasterBuffer, RasterSurface};

fn new_document() -> Document {
    Document::new(&CanvasConfig::default())
}

fn new_state() -> EditorState {
    let config = CanvasConfig::default();
    EditorState::new(config.default_color, config.default_brush, config.background)
}

/// Drives one press-drag-release stroke through the state and document
fn stroke(doc: &mut Document, state: EditorState, points: &[Pos2]) -> EditorState {
    let mut state = state;
    for &p in points {
        let (next, segment) = state.drag_to(p);
        if let Some(segment) = segment {
            doc.apply_segment(&segment);
        }
        state = next;
    }
    doc.finish_stroke();
    state.release()
}

#[test]
fn test_each_stroke_adds_one_snapshot() {
    let mut doc = new_document();
    let mut state = new_state();

    let strokes = [
        vec![pos2(10.0, 10.0), pos2(50.0, 10.0)],
        vec![pos2(10.0, 30.0), pos2(20.0, 40.0), pos2(60.0, 40.0)],
        vec![pos2(100.0, 100.0), pos2(100.0, 200.0)],
    ];
    for (n, points) in strokes.iter().enumerate() {
        state = stroke(&mut doc, state, points);
        assert_eq!(doc.history().len(), n + 1);
        assert_eq!(doc.history().top(), Some(doc.surface()));
    }
}

#[test]
fn test_undo_restores_earlier_strokes() {
    let mut doc = new_document();
    let mut state = new_state();
    let mut after = vec![doc.surface().clone()];

    for i in 0..4 {
        let y = 20.0 + i as f32 * 20.0;
        state = stroke(&mut doc, state, &[pos2(10.0, y), pos2(200.0, y)]);
        after.push(doc.surface().clone());
    }

    assert!(doc.undo());
    assert_eq!(doc.surface(), &after[3]);
    assert!(doc.undo());
    assert_eq!(doc.surface(), &after[2]);
    assert_eq!(doc.history().len(), 2);

    assert!(doc.undo());
    assert!(doc.undo());
    assert_eq!(doc.surface(), &after[0]);
    assert!(doc.surface().is_filled_with(Color32::WHITE));

    // Beyond the stack depth nothing changes
    assert!(!doc.undo());
    assert_eq!(doc.surface(), &after[0]);
}

#[test]
fn test_clear_blanks_buffer_and_history() {
    let mut doc = new_document();
    let state = new_state().with_color(Color32::RED);
    let state = stroke(&mut doc, state, &[pos2(5.0, 5.0), pos2(300.0, 300.0)]);
    stroke(&mut doc, state, &[pos2(5.0, 300.0), pos2(300.0, 5.0)]);
    assert!(!doc.surface().is_filled_with(Color32::WHITE));

    doc.clear();

    assert!(doc.surface().is_filled_with(Color32::WHITE));
    assert!(doc.history().is_empty());
    assert_eq!((doc.surface().width(), doc.surface().height()), (800, 600));
}

#[test]
fn test_eraser_stroke_paints_background() {
    let mut doc = new_document();
    let state = new_state().with_color(Color32::BLUE);

    // Something to erase
    let state = stroke(&mut doc, state, &[pos2(10.0, 50.0), pos2(100.0, 50.0)]);
    assert_eq!(doc.surface().pixel(50, 50), Some(Color32::BLUE));

    let state = stroke(&mut doc, state.toggle_eraser(), &[pos2(10.0, 50.0), pos2(100.0, 50.0)]);
    for (x, y) in line_points(10, 50, 100, 50) {
        assert_eq!(doc.surface().pixel(x as u32, y as u32), Some(Color32::WHITE));
    }

    stroke(&mut doc, state.toggle_eraser(), &[pos2(10.0, 80.0), pos2(100.0, 80.0)]);
    for (x, y) in line_points(10, 80, 100, 80) {
        assert_eq!(doc.surface().pixel(x as u32, y as u32), Some(Color32::BLUE));
    }
}

#[test]
fn test_drag_covers_every_reported_position() {
    let mut doc = new_document();
    let state = new_state().with_brush_size(BrushSize::new(3));
    let points = [pos2(20.0, 20.0), pos2(60.0, 35.0), pos2(90.0, 90.0), pos2(40.0, 120.0)];
    stroke(&mut doc, state, &points);

    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        for (x, y) in line_points(a.x as i32, a.y as i32, b.x as i32, b.y as i32) {
            assert_eq!(doc.surface().pixel(x as u32, y as u32), Some(Color32::BLACK));
        }
    }
}

#[test]
fn test_separate_strokes_leave_gap() {
    let mut doc = new_document();
    let state = new_state();
    let state = stroke(&mut doc, state, &[pos2(10.0, 10.0), pos2(20.0, 10.0)]);
    stroke(&mut doc, state, &[pos2(400.0, 10.0), pos2(410.0, 10.0)]);

    // Nothing between the end of the first stroke and the start of the second
    for x in 30..390 {
        assert_eq!(doc.surface().pixel(x, 10), Some(Color32::WHITE));
    }
}

#[test]
fn test_blank_document_matches_config() {
    let config = CanvasConfig {
        width: 64,
        height: 32,
        ..Default::default()
    };
    let doc: Document<RasterBuffer> = Document::new(&config);
    assert_eq!(doc.surface().width(), 64);
    assert_eq!(doc.surface().height(), 32);
    assert!(doc.history().is_empty());
}
