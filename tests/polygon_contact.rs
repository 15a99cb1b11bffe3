use approx::assert_relative_eq;
use clash2d::math::{Point, Vector};
use clash2d::query::{self, details};
use clash2d::shape::ConvexPolygon;

#[test]
fn square_square_contact_manifold() {
    let a = ConvexPolygon::rectangle(Point::origin(), 0.0, Vector::new(1.0, 1.0));
    let b = ConvexPolygon::rectangle(Point::new(1.0, 0.0), 0.0, Vector::new(1.0, 1.0));

    let manifold = query::contact(&a, &b).unwrap().expect("no contact");

    assert_relative_eq!(*manifold.normal, Vector::new(-1.0, 0.0), epsilon = 1.0e-4);
    assert_relative_eq!(manifold.depth, 1.0, epsilon = 2.0e-3);
    assert_eq!(manifold.points.len(), 2);

    // The overlap face is x = 1, shared from y = -1 to y = 1.
    let mut ys: Vec<f32> = manifold.points.iter().map(|pt| pt.y).collect();
    ys.sort_by(|p, q| p.partial_cmp(q).unwrap());
    assert_relative_eq!(manifold.points[0].x, 1.0, epsilon = 1.0e-4);
    assert_relative_eq!(manifold.points[1].x, 1.0, epsilon = 1.0e-4);
    assert_relative_eq!(ys[0], -1.0, epsilon = 1.0e-4);
    assert_relative_eq!(ys[1], 1.0, epsilon = 1.0e-4);

    let (w1, w2) = (a.to_world(), b.to_world());
    for pt in &manifold.points {
        assert!(w1.contains_point(pt, 1.0e-3));
        assert!(w2.contains_point(pt, 1.0e-3));
    }
}

#[test]
fn separated_squares_report_nothing() {
    let a = ConvexPolygon::rectangle(Point::origin(), 0.0, Vector::new(1.0, 1.0));
    let b = ConvexPolygon::rectangle(Point::new(3.0, 0.0), 0.0, Vector::new(1.0, 1.0));

    assert!(!query::intersection_test(&a, &b));
    assert!(query::contact(&a, &b).unwrap().is_none());
    assert!(query::penetration(&a, &b).unwrap().is_none());
}

#[test]
fn vertex_touch_yields_a_single_contact() {
    // The triangle's apex rests exactly on the square's right face.
    let a = ConvexPolygon::rectangle(Point::origin(), 0.0, Vector::new(1.0, 1.0));
    let b = ConvexPolygon::new(
        Point::new(2.0, 0.0),
        0.0,
        vec![
            Point::new(-1.0, 0.0),
            Point::new(1.0, -1.0),
            Point::new(1.0, 1.0),
        ],
    )
    .unwrap();

    let pen = query::penetration(&a, &b)
        .unwrap()
        .expect("touching shapes count as penetrating");
    assert_relative_eq!(pen.depth, 0.0, epsilon = 1.0e-6);
    assert_relative_eq!(*pen.normal, Vector::new(-1.0, 0.0), epsilon = 1.0e-6);

    let manifold =
        details::contact_manifold_polygon_polygon(&a.to_world(), &b.to_world(), &pen).unwrap();
    assert_eq!(manifold.points.len(), 1);
    assert_relative_eq!(manifold.points[0], Point::new(1.0, 0.0), epsilon = 1.0e-4);
}

#[test]
fn offset_squares_pick_the_shallowest_face() {
    let a = ConvexPolygon::rectangle(Point::origin(), 0.0, Vector::new(1.0, 1.0));
    let b = ConvexPolygon::rectangle(Point::new(1.25, 0.4), 0.0, Vector::new(1.0, 1.0));

    // The x overlap (0.75) is smaller than the y overlap (1.6).
    let pen = query::penetration(&a, &b).unwrap().expect("no penetration");
    assert_relative_eq!(pen.depth, 0.75, epsilon = 1.0e-6);
    assert_relative_eq!(*pen.normal, Vector::new(-1.0, 0.0), epsilon = 1.0e-6);

    let manifold = query::contact(&a, &b).unwrap().expect("no contact");
    assert_relative_eq!(*manifold.normal, Vector::new(-1.0, 0.0), epsilon = 1.0e-4);
    assert_relative_eq!(manifold.depth, 0.75, epsilon = 2.0e-3);
}
