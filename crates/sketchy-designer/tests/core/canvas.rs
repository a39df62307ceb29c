use proptest::prelude::*;
use sketchy_designer::canvas::{Canvas, Placement};
use sketchy_designer::model::DrawingShape;
use sketchy_designer::{Color, Point};

#[test]
fn test_canvas_new() {
    let canvas = Canvas::new();
    assert!(canvas.is_empty());
    assert_eq!(canvas.shape_count(), 0);
    assert_eq!(canvas.mode(), None);
    assert_eq!(canvas.selected_id(), None);
}

#[test]
fn test_ids_are_unique() {
    let mut canvas = Canvas::new();
    let a = canvas.add_rectangle(Point::new(0.0, 0.0), Color::WHITE);
    let b = canvas.add_curve(Point::new(0.0, 0.0), Color::BLACK, 2.0);
    let (object, placement) = canvas.detach(a).unwrap();
    let c = canvas.add_ellipse(Point::new(0.0, 0.0), Color::WHITE);
    canvas.attach(object, placement).unwrap();

    assert_ne!(a, b);
    assert_ne!(a, c);
    assert_ne!(b, c);
    assert_eq!(canvas.display_ids(), &[a, b, c]);
}

#[test]
fn test_display_items_bottom_to_top() {
    let mut canvas = Canvas::new();
    let a = canvas.add_rectangle(Point::new(0.0, 0.0), Color::WHITE);
    let b = canvas.add_curve(Point::new(0.0, 0.0), Color::BLACK, 2.0);

    let items: Vec<(usize, u64)> = canvas.display_items().map(|(i, obj)| (i, obj.id)).collect();
    assert_eq!(items, vec![(0, a), (1, b)]);
    assert_eq!(canvas.shapes().map(|obj| obj.id).collect::<Vec<_>>(), vec![a]);
}

#[test]
fn test_hit_test_rotated_rectangle() {
    let mut canvas = Canvas::new();
    let id = canvas.add_rectangle(Point::new(50.0, 50.0), Color::WHITE);
    {
        let shape = &mut canvas.get_shape_mut(id).unwrap().shape;
        shape.set_width(40.0);
        shape.set_height(4.0);
        shape.set_angle(90.0);
    }

    // Turned upright: long along y, thin along x.
    assert_eq!(canvas.hit_test(Point::new(50.0, 68.0)), Some(id));
    assert_eq!(canvas.hit_test(Point::new(68.0, 50.0)), None);
}

#[test]
fn test_curves_are_never_hit() {
    let mut canvas = Canvas::new();
    let curve = canvas.add_curve(Point::new(0.0, 0.0), Color::BLACK, 5.0);
    canvas.extend_curve(curve, Point::new(10.0, 10.0));
    assert_eq!(canvas.hit_test(Point::new(0.0, 0.0)), None);
    assert_eq!(canvas.hit_test(Point::new(5.0, 5.0)), None);
}

#[test]
fn test_detach_unknown_id() {
    let mut canvas = Canvas::new();
    assert!(canvas.detach(42).is_err());
    assert!(canvas.raise(42).is_err());
    assert!(canvas
        .move_to(
            42,
            Placement {
                shape_index: None,
                display_index: 0
            }
        )
        .is_err());
}

proptest! {
    #[test]
    fn center_is_always_hit(
        cx in -500.0f64..500.0,
        cy in -500.0f64..500.0,
        width in 0.0f64..200.0,
        height in 0.0f64..200.0,
        angle in -720.0f64..720.0,
        ellipse in any::<bool>(),
    ) {
        let mut canvas = Canvas::new();
        let center = Point::new(cx, cy);
        let id = if ellipse {
            canvas.add_ellipse(center, Color::WHITE)
        } else {
            canvas.add_rectangle(center, Color::WHITE)
        };
        {
            let shape = &mut canvas.get_shape_mut(id).unwrap().shape;
            shape.set_width(width);
            shape.set_height(height);
            shape.set_angle(angle);
        }

        prop_assert!(canvas.get_shape(id).unwrap().shape.hit(center));
        prop_assert_eq!(canvas.hit_test(center), Some(id));
    }
}
