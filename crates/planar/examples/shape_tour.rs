//! Print metrics for one shape of each kind.
//!
//! Usage:
//!   cargo run -p planar --example shape_tour

use planar::prelude::*;

fn main() {
    let o = Point::ORIGIN;
    let mut shapes = vec![
        Polygon::line_at(o, 30.0, 10.0),
        Polygon::triangle_on_base(o, Point::new(6.0, 0.0), 4.0),
        Polygon::rectangle_at(o, 8.0, 5.0),
        Polygon::regular(o, 5.0, 0.0, 6),
        Polygon::ellipse(o, 8.0, 2.0),
        Polygon::circle(o, 4.0),
        Polygon::irregular(vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(2.0, 1.0),
            Point::new(2.0, 4.0),
        ]),
    ];
    for shape in &mut shapes {
        println!(
            "{:<16} V={:<4} area={:<10.4} perimeter={:<10.4} convex={}",
            shape.kind().name(),
            shape.points().len(),
            shape.area(),
            shape.perimeter(),
            shape.is_convex()
        );
    }
}
