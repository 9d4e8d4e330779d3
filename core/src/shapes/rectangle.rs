use primer_common::error::ValueError;
use tracing::debug;

use super::Shape;
use crate::validate;

/// A rectangle with non-negative sides. Defaults to `1 × 1`.
///
/// Degenerate rectangles (a zero side) are allowed; negative sides are not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Default for Rectangle {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
        }
    }
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Result<Self, ValueError> {
        Ok(Self {
            width: validate::non_negative("width", width)?,
            height: validate::non_negative("height", height)?,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_width(&mut self, width: f64) -> Result<(), ValueError> {
        self.width = validate::non_negative("width", width)?;
        debug!(width, "rectangle width updated");
        Ok(())
    }

    pub fn set_height(&mut self, height: f64) -> Result<(), ValueError> {
        self.height = validate::non_negative("height", height)?;
        debug!(height, "rectangle height updated");
        Ok(())
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &'static str {
        "rectangle"
    }

    fn area(&self) -> f64 {
        Rectangle::area(self)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unit_square() {
        let rect = Rectangle::default();
        assert_eq!(rect.width(), 1.0);
        assert_eq!(rect.height(), 1.0);
        assert_eq!(rect.area(), 1.0);
    }

    #[test]
    fn test_new_validates_both_sides() {
        assert_eq!(Rectangle::new(3.0, 4.0).unwrap().area(), 12.0);
        assert_eq!(
            Rectangle::new(-3.0, 4.0),
            Err(ValueError::invalid("negative width not allowed"))
        );
        assert_eq!(
            Rectangle::new(3.0, -4.0),
            Err(ValueError::invalid("negative height not allowed"))
        );
    }

    #[test]
    fn test_zero_side_is_accepted() {
        let mut rect = Rectangle::default();
        rect.set_width(0.0).unwrap();
        assert_eq!(rect.area(), 0.0);
    }

    #[test]
    fn test_negative_zero_is_stored_as_zero() {
        let mut rect = Rectangle::default();
        rect.set_width(-0.0).unwrap();
        assert!(rect.width().is_sign_positive());
        assert_eq!(format!("{:.2}", rect.width()), "0.00");

        let rect = Rectangle::new(1.0, -0.0).unwrap();
        assert!(rect.height().is_sign_positive());
    }

    #[test]
    fn test_negative_setters_keep_previous_values() {
        let mut rect = Rectangle::default();

        assert!(rect.set_height(-5.0).is_err());
        assert!(rect.set_width(-4.0).is_err());

        assert_eq!(rect, Rectangle::default());
    }

    #[test]
    fn test_setters_update_area() {
        let mut rect = Rectangle::default();
        rect.set_width(2.5).unwrap();
        rect.set_height(4.0).unwrap();
        assert_eq!(rect.area(), 10.0);
    }
}
