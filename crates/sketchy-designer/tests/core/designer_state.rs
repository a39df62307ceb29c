use sketchy_designer::canvas::DrawingMode;
use sketchy_designer::designer_state::{DesignerState, Modifiers};
use sketchy_designer::model::DrawingShape;
use sketchy_designer::{Color, Point};
use sketchy_settings::EditorSettings;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Creates a zero-size rectangle at `at` and switches back to Select.
fn create_rectangle(state: &mut DesignerState, at: Point) -> u64 {
    state.set_tool(DrawingMode::Rectangle);
    state.on_press(at).unwrap();
    state.on_release();
    state.set_tool(DrawingMode::Select);
    state.canvas.selected_id().unwrap()
}

#[test]
fn test_designer_state_new() {
    let state = DesignerState::new();
    assert!(state.canvas.is_empty());
    assert_eq!(state.tool(), None);
    assert_eq!(state.current_color, Color::WHITE);
    assert_eq!(state.stroke_width(), 2.0);
    assert!(!state.can_undo());
    assert!(!state.can_redo());
    assert!(!state.is_modified);
}

#[test]
fn test_create_resize_rotate_then_undo_all() {
    let mut state = DesignerState::new();
    let id = create_rectangle(&mut state, Point::new(10.0, 10.0));

    // Resize to 50 x 30.
    state.on_press(Point::new(10.0, 10.0)).unwrap();
    state.on_drag(Point::new(35.0, 25.0), Modifiers::RESIZE);
    state.on_release();

    // Rotate by 45 degrees.
    state.on_press(Point::new(10.0, 10.0)).unwrap();
    state.on_drag(Point::new(20.0, 10.0), Modifiers::ROTATE);
    state.on_drag(Point::new(20.0, 20.0), Modifiers::ROTATE);
    state.on_release();

    {
        let shape = &state.canvas.get_shape(id).unwrap().shape;
        assert_close(shape.width(), 50.0);
        assert_close(shape.height(), 30.0);
        assert_close(shape.angle(), 45.0);
        assert_eq!(shape.center(), Point::new(10.0, 10.0));
    }
    assert_eq!(state.history.undo_depth(), 3);

    for _ in 0..3 {
        assert_eq!(state.undo(), Ok(true));
    }
    assert!(state.canvas.is_empty());
    assert_eq!(state.undo(), Ok(false));

    assert_eq!(state.redo(), Ok(true));
    let shape = &state.canvas.get_shape(id).unwrap().shape;
    assert_eq!(shape.center(), Point::new(10.0, 10.0));
    assert_eq!(shape.width(), 0.0);
    assert_eq!(shape.height(), 0.0);
    assert_eq!(shape.angle(), 0.0);
    state.canvas.check_invariants().unwrap();
}

#[test]
fn test_creation_drag_is_part_of_create() {
    let mut state = DesignerState::new();
    state.set_tool(DrawingMode::Ellipse);
    state.on_press(Point::new(0.0, 0.0)).unwrap();
    state.on_drag(Point::new(10.0, 5.0), Modifiers::NONE);
    state.on_drag(Point::new(20.0, 6.0), Modifiers::NONE);
    state.on_release();

    assert_eq!(state.history.undo_depth(), 1);
    assert_eq!(state.history.undo_name(), Some("Create Shape"));
    // Ellipse radii are twice the drag offset from the center.
    let shape = &state.canvas.selected().unwrap().shape;
    assert_close(shape.width(), 40.0);
    assert_close(shape.height(), 12.0);
    assert!(shape.hit(Point::new(35.0, 0.0)));
    assert!(!shape.hit(Point::new(0.0, 13.0)));

    // The whole creation is undone in one step and redone with its size.
    state.undo().unwrap();
    assert!(state.canvas.is_empty());
    state.redo().unwrap();
    let shape = &state.canvas.saveables().next().unwrap().shape;
    assert_close(shape.width(), 40.0);
    assert_close(shape.height(), 12.0);
}

#[test]
fn test_move_gesture() {
    let mut state = DesignerState::new();
    let id = create_rectangle(&mut state, Point::new(10.0, 10.0));

    state.on_press(Point::new(10.0, 10.0)).unwrap();
    state.on_drag(Point::new(15.0, 12.0), Modifiers::NONE);
    state.on_drag(Point::new(20.0, 30.0), Modifiers::NONE);
    state.on_release();

    assert_eq!(state.history.undo_name(), Some("Move"));
    assert_eq!(
        state.canvas.get_shape(id).unwrap().shape.center(),
        Point::new(20.0, 30.0)
    );

    state.undo().unwrap();
    assert_eq!(
        state.canvas.get_shape(id).unwrap().shape.center(),
        Point::new(10.0, 10.0)
    );
}

#[test]
fn test_rotate_then_resize_in_one_gesture() {
    let mut state = DesignerState::new();
    let id = create_rectangle(&mut state, Point::new(0.0, 0.0));

    state.on_press(Point::new(0.0, 0.0)).unwrap();
    state.on_drag(Point::new(10.0, 0.0), Modifiers::ROTATE);
    state.on_drag(Point::new(0.0, 10.0), Modifiers::ROTATE);
    state.on_drag(Point::new(4.0, 6.0), Modifiers::RESIZE);
    state.on_release();

    // Both a rotate and a resize are recorded.
    assert_eq!(state.history.undo_depth(), 3);
    assert_eq!(state.history.undo_name(), Some("Resize"));
    state.undo().unwrap();
    assert_eq!(state.history.undo_name(), Some("Rotate"));
    state.undo().unwrap();

    let shape = &state.canvas.get_shape(id).unwrap().shape;
    assert_eq!(shape.angle(), 0.0);
    assert_eq!((shape.width(), shape.height()), (0.0, 0.0));
}

#[test]
fn test_select_miss_clears_selection() {
    let mut state = DesignerState::new();
    create_rectangle(&mut state, Point::new(0.0, 0.0));
    assert!(state.canvas.selected_id().is_some());

    state.on_press(Point::new(100.0, 100.0)).unwrap();
    state.on_release();
    assert_eq!(state.canvas.selected_id(), None);
}

#[test]
fn test_select_transfers_to_hit_shape() {
    let mut state = DesignerState::new();
    let first = create_rectangle(&mut state, Point::new(0.0, 0.0));
    let second = create_rectangle(&mut state, Point::new(50.0, 50.0));
    assert_eq!(state.canvas.selected_id(), Some(second));

    state.on_press(Point::new(0.0, 0.0)).unwrap();
    state.on_release();
    assert_eq!(state.canvas.selected_id(), Some(first));
    assert!(!state.canvas.get_shape(second).unwrap().selected);
}

#[test]
fn test_pen_uses_color_and_stroke_width() {
    let mut state = DesignerState::new();
    state.set_color(Color::rgb(10, 20, 30));
    state.set_stroke_width(7.0);
    state.set_tool(DrawingMode::Pen);
    state.on_press(Point::new(1.0, 1.0)).unwrap();
    state.on_drag(Point::new(2.0, 2.0), Modifiers::NONE);
    state.on_release();

    let curve = state.canvas.saveables().next().unwrap();
    assert!(curve.is_curve());
    assert_eq!(curve.shape.color(), Color::rgb(10, 20, 30));
    match &curve.shape {
        sketchy_designer::Shape::Curve(curve) => {
            assert_eq!(curve.stroke_width(), 7.0);
            assert_eq!(curve.points(), &[Point::new(1.0, 1.0), Point::new(2.0, 2.0)]);
        }
        other => panic!("expected a curve, got {other:?}"),
    }
    assert_eq!(state.canvas.shape_count(), 0);
}

#[test]
fn test_fill_undo_redo() {
    let mut state = DesignerState::new();
    let id = create_rectangle(&mut state, Point::new(0.0, 0.0));
    let blue = Color::rgb(0, 0, 255);
    state.set_color(blue);
    assert!(state.fill_selected());

    state.undo().unwrap();
    assert_eq!(state.canvas.get_shape(id).unwrap().shape.color(), Color::WHITE);
    state.redo().unwrap();
    assert_eq!(state.canvas.get_shape(id).unwrap().shape.color(), blue);
}

#[test]
fn test_keyboard_shortcuts() {
    let mut state = DesignerState::new();
    create_rectangle(&mut state, Point::new(0.0, 0.0));

    assert_eq!(state.on_key('z', true), Ok(true));
    assert!(state.canvas.is_empty());
    assert_eq!(state.on_key('y', true), Ok(true));
    assert_eq!(state.canvas.len(), 1);
    assert_eq!(state.on_key('z', false), Ok(false));
    assert_eq!(state.canvas.len(), 1);
}

#[test]
fn test_clear_resets_history() {
    let mut state = DesignerState::new();
    create_rectangle(&mut state, Point::new(0.0, 0.0));
    state.undo().unwrap();
    state.redo().unwrap();
    state.undo().unwrap();

    state.clear();
    assert!(state.canvas.is_empty());
    assert!(!state.can_undo());
    assert!(!state.can_redo());
    assert_eq!(state.tool(), Some(DrawingMode::Select));
}

#[test]
fn test_history_limit_from_settings() {
    let settings = EditorSettings {
        history_limit: 2,
        ..Default::default()
    };
    let mut state = DesignerState::with_settings(settings);
    for i in 0..4 {
        create_rectangle(&mut state, Point::new(i as f64 * 10.0, 0.0));
    }
    assert_eq!(state.history.undo_depth(), 2);

    while state.undo().unwrap() {}
    assert_eq!(state.canvas.len(), 2);
}
