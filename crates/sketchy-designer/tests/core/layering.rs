use sketchy_designer::canvas::DrawingMode;
use sketchy_designer::designer_state::{DesignerState, Modifiers};
use sketchy_designer::Point;

fn create(state: &mut DesignerState, mode: DrawingMode, at: Point) -> u64 {
    state.set_tool(mode);
    state.on_press(at).unwrap();
    state.on_drag(Point::new(at.x + 2.0, at.y + 2.0), Modifiers::NONE);
    state.on_release();
    *state.canvas.display_ids().last().unwrap()
}

fn select(state: &mut DesignerState, id: u64) {
    assert!(state.canvas.select(id));
}

#[test]
fn test_raise_adjacent_shape_swaps_shape_order() {
    let mut state = DesignerState::new();
    let bottom = create(&mut state, DrawingMode::Rectangle, Point::new(0.0, 0.0));
    let top = create(&mut state, DrawingMode::Ellipse, Point::new(50.0, 0.0));

    select(&mut state, bottom);
    assert_eq!(state.raise_selected(), Ok(true));
    assert_eq!(state.canvas.shape_ids(), &[top, bottom]);
    assert_eq!(state.canvas.display_ids(), &[top, bottom]);
    assert_eq!(state.canvas.display_index(bottom), Some(1));

    state.undo().unwrap();
    assert_eq!(state.canvas.shape_ids(), &[bottom, top]);
    assert_eq!(state.canvas.display_ids(), &[bottom, top]);
}

#[test]
fn test_raise_past_unrelated_item_keeps_shape_order() {
    let mut state = DesignerState::new();
    let bottom = create(&mut state, DrawingMode::Rectangle, Point::new(0.0, 0.0));
    let between = create(&mut state, DrawingMode::Pen, Point::new(20.0, 0.0));
    let top = create(&mut state, DrawingMode::Rectangle, Point::new(50.0, 0.0));

    select(&mut state, bottom);
    assert_eq!(state.raise_selected(), Ok(true));
    assert_eq!(state.canvas.shape_ids(), &[bottom, top]);
    assert_eq!(state.canvas.display_ids(), &[between, bottom, top]);

    // Now display-adjacent: the second raise swaps the shape order too.
    assert_eq!(state.raise_selected(), Ok(true));
    assert_eq!(state.canvas.shape_ids(), &[top, bottom]);
    assert_eq!(state.canvas.display_ids(), &[between, top, bottom]);

    // Already on top.
    assert_eq!(state.raise_selected(), Ok(false));

    state.undo().unwrap();
    state.undo().unwrap();
    assert_eq!(state.canvas.shape_ids(), &[bottom, top]);
    assert_eq!(state.canvas.display_ids(), &[bottom, between, top]);
    state.canvas.check_invariants().unwrap();
}

#[test]
fn test_lower_mirrors_raise() {
    let mut state = DesignerState::new();
    let bottom = create(&mut state, DrawingMode::Rectangle, Point::new(0.0, 0.0));
    let between = create(&mut state, DrawingMode::Pen, Point::new(20.0, 0.0));
    let top = create(&mut state, DrawingMode::Ellipse, Point::new(50.0, 0.0));

    select(&mut state, top);
    assert_eq!(state.lower_selected(), Ok(true));
    assert_eq!(state.canvas.shape_ids(), &[bottom, top]);
    assert_eq!(state.canvas.display_ids(), &[bottom, top, between]);

    assert_eq!(state.lower_selected(), Ok(true));
    assert_eq!(state.canvas.shape_ids(), &[top, bottom]);
    assert_eq!(state.canvas.display_ids(), &[top, bottom, between]);

    assert_eq!(state.lower_selected(), Ok(false));
    assert_eq!(state.history.undo_name(), Some("Lower"));
}

#[test]
fn test_delete_and_undo_restore_both_orders() {
    let mut state = DesignerState::new();
    let a = create(&mut state, DrawingMode::Rectangle, Point::new(0.0, 0.0));
    let curve = create(&mut state, DrawingMode::Pen, Point::new(20.0, 0.0));
    let b = create(&mut state, DrawingMode::Ellipse, Point::new(50.0, 0.0));
    let c = create(&mut state, DrawingMode::Rectangle, Point::new(80.0, 0.0));

    select(&mut state, b);
    assert_eq!(state.delete_selected(), Ok(true));
    assert_eq!(state.canvas.display_ids(), &[a, curve, c]);
    assert_eq!(state.canvas.shape_ids(), &[a, c]);

    state.undo().unwrap();
    assert_eq!(state.canvas.display_ids(), &[a, curve, b, c]);
    assert_eq!(state.canvas.shape_ids(), &[a, b, c]);

    state.redo().unwrap();
    assert_eq!(state.canvas.display_ids(), &[a, curve, c]);
    state.canvas.check_invariants().unwrap();
}
