use sketchy_core::StateError;
use sketchy_designer::canvas::Canvas;
use sketchy_designer::commands::{DesignerCommand, FillShape, InsertObject, MoveShape};
use sketchy_designer::history::History;
use sketchy_designer::model::DrawingShape;
use sketchy_designer::{Color, Point};

fn fill(id: u64, old_color: Color, new_color: Color) -> DesignerCommand {
    DesignerCommand::Fill(FillShape {
        id,
        old_color,
        new_color,
    })
}

#[test]
fn test_history_creation() {
    let history = History::new(50);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert_eq!(history.undo_depth(), 0);
    assert_eq!(history.redo_depth(), 0);
    assert_eq!(history.undo_name(), None);
}

#[test]
fn test_empty_stacks_are_noops() {
    let mut canvas = Canvas::new();
    let mut history = History::new(0);
    assert_eq!(history.undo(&mut canvas), Ok(false));
    assert_eq!(history.redo(&mut canvas), Ok(false));
}

#[test]
fn test_undo_redo_moves_between_stacks() {
    let mut canvas = Canvas::new();
    let id = canvas.add_rectangle(Point::new(0.0, 0.0), Color::WHITE);
    let mut history = History::new(0);
    history.record(DesignerCommand::CreateShape(
        InsertObject::on_canvas(&canvas, id).unwrap(),
    ));

    assert_eq!(history.undo(&mut canvas), Ok(true));
    assert!(!history.can_undo());
    assert!(history.can_redo());
    assert_eq!(history.redo_name(), Some("Create Shape"));
    assert!(canvas.is_empty());

    assert_eq!(history.redo(&mut canvas), Ok(true));
    assert!(history.can_undo());
    assert!(!history.can_redo());
    assert!(canvas.contains_id(id));
}

#[test]
fn test_record_clears_redo() {
    let mut canvas = Canvas::new();
    let id = canvas.add_rectangle(Point::new(0.0, 0.0), Color::WHITE);
    let red = Color::rgb(255, 0, 0);
    let mut history = History::new(0);

    canvas.get_shape_mut(id).unwrap().shape.set_color(red);
    history.record(fill(id, Color::WHITE, red));
    history.undo(&mut canvas).unwrap();
    assert!(history.can_redo());

    history.record(DesignerCommand::Move(MoveShape {
        id,
        old_center: Point::new(0.0, 0.0),
        new_center: Point::new(0.0, 0.0),
    }));
    assert!(!history.can_redo());
    assert_eq!(history.redo(&mut canvas), Ok(false));
    assert_eq!(canvas.get_shape(id).unwrap().shape.color(), Color::WHITE);
}

#[test]
fn test_limit_drops_oldest() {
    let mut canvas = Canvas::new();
    let mut history = History::new(3);
    let ids: Vec<u64> = (0..5)
        .map(|i| canvas.add_rectangle(Point::new(i as f64, 0.0), Color::WHITE))
        .collect();
    for &id in &ids {
        canvas.get_shape_mut(id).unwrap().shape.set_color(Color::BLACK);
        history.record(fill(id, Color::WHITE, Color::BLACK));
    }
    assert_eq!(history.undo_depth(), 3);

    let mut undone = 0;
    while history.undo(&mut canvas).unwrap() {
        undone += 1;
    }
    assert_eq!(undone, 3);

    let colors: Vec<Color> = ids
        .iter()
        .map(|&id| canvas.get_shape(id).unwrap().shape.color())
        .collect();
    assert_eq!(
        colors,
        vec![Color::BLACK, Color::BLACK, Color::WHITE, Color::WHITE, Color::WHITE]
    );
}

#[test]
fn test_failed_replay_stays_on_stack() {
    let mut canvas = Canvas::new();
    let id = canvas.add_rectangle(Point::new(0.0, 0.0), Color::WHITE);
    let mut history = History::new(0);
    history.record(fill(id, Color::WHITE, Color::BLACK));

    canvas.detach(id).unwrap();
    assert_eq!(
        history.undo(&mut canvas),
        Err(StateError::UnknownObject { id })
    );
    assert_eq!(history.undo_depth(), 1);
    assert_eq!(history.redo_depth(), 0);
}

#[test]
fn test_clear() {
    let mut canvas = Canvas::new();
    let id = canvas.add_rectangle(Point::new(0.0, 0.0), Color::WHITE);
    let mut history = History::new(0);
    history.record(fill(id, Color::WHITE, Color::BLACK));
    history.record(fill(id, Color::BLACK, Color::WHITE));
    history.undo(&mut canvas).unwrap();

    history.clear();
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}
