#![cfg(test)]
use primer_common::error::ValueError;
use primer_core::shapes::{Circle, Rectangle, Shape};
use std::f64::consts::PI;

const EPS: f64 = 1e-9;

/// Any positive radius round-trips through construction unchanged.
#[test]
fn circle_keeps_every_positive_radius() {
    let radii: Vec<f64> = (1..=200).map(|i| i as f64 * 0.37).collect();
    for radius in radii {
        let circle = Circle::new(radius).unwrap();
        assert_eq!(circle.radius(), radius);
        assert!((circle.area() - PI * radius * radius).abs() < EPS * radius * radius);
        assert!((circle.perimeter() - 2.0 * PI * radius).abs() < EPS * radius);
    }
}

#[test]
fn circle_rejects_non_positive_radius() {
    for radius in [0.0, -0.0, -0.5, -1.0, -1e9] {
        assert!(
            matches!(Circle::new(radius), Err(ValueError::InvalidArgument(_))),
            "radius {radius} should be rejected"
        );
    }
}

#[test]
fn failed_mutation_keeps_previous_state() {
    let mut circle = Circle::new(2.0).unwrap();
    let before_area = circle.area();

    assert!(circle.set_radius(-1.0).is_err());

    assert_eq!(circle.radius(), 2.0);
    assert_eq!(circle.area(), before_area);
}

#[test]
fn shapes_share_area_through_trait() {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle::new(1.0).unwrap()),
        Box::new(Rectangle::new(2.0, 3.0).unwrap()),
        Box::new(Rectangle::default()),
    ];

    let names: Vec<&str> = shapes.iter().map(|shape| shape.name()).collect();
    assert_eq!(names, vec!["circle", "rectangle", "rectangle"]);

    let total: f64 = shapes.iter().map(|shape| shape.area()).sum();
    assert!((total - (PI + 6.0 + 1.0)).abs() < EPS);
}
