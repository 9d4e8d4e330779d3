use crate::terminal::colors;
use colored::*;
use primer_core::shapes::{Circle, Rectangle, Shape};
use primer_core::staff::Employee;

pub type Detail = (String, ColoredString);

/// Renders `value` with `precision` decimals.
pub fn decimal(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

/// Capitalised shape name used as a tree heading, e.g. `Circle`.
pub fn heading(shape: &dyn Shape) -> String {
    let mut chars = shape.name().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn measure(key: &str, value: f64, precision: usize) -> Detail {
    (key.to_string(), decimal(value, precision).color(colors::VALUE))
}

pub fn circle_to_details(circle: &Circle, precision: usize) -> Vec<Detail> {
    vec![
        measure("Radius", circle.radius(), precision),
        measure("Area", circle.area(), precision),
        measure("Perimeter", circle.perimeter(), precision),
    ]
}

pub fn rectangle_to_details(rectangle: &Rectangle, precision: usize) -> Vec<Detail> {
    vec![
        measure("Width", rectangle.width(), precision),
        measure("Height", rectangle.height(), precision),
        measure("Area", rectangle.area(), precision),
    ]
}

pub fn employee_to_details(employee: &Employee) -> Vec<Detail> {
    vec![
        (
            "Salary".to_string(),
            employee.salary().to_string().color(colors::VALUE),
        ),
        (
            "Designation".to_string(),
            employee.designation().color(colors::TEXT_DEFAULT),
        ),
        (
            "Employee ID".to_string(),
            employee.id().to_string().color(colors::ACCENT),
        ),
    ]
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
