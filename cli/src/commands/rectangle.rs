use primer_common::{config::Config, warn};
use primer_core::shapes::Rectangle;

use crate::terminal::{format, print};

/// Starts from a unit rectangle and applies the requested sides through the
/// validating setters. Rejected sides are reported and the old value stays.
pub fn rectangle(width: Option<f64>, height: Option<f64>, cfg: &Config) -> Rectangle {
    let mut rect: Rectangle = Rectangle::default();

    if let Some(height) = height {
        if let Err(e) = rect.set_height(height) {
            warn!("Height kept at {}: {e}", rect.height());
        }
    }

    if let Some(width) = width {
        if let Err(e) = rect.set_width(width) {
            warn!("Width kept at {}: {e}", rect.width());
        }
    }

    if cfg.quiet < 2 {
        print::tree_head(1, &format::heading(&rect));
        print::as_tree_one_level(format::rectangle_to_details(&rect, cfg.precision));
    }

    rect
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
    fn test_no_sides_keeps_unit_square() {
        let rect = rectangle(None, None, &Config::default());
        assert_eq!(rect, Rectangle::default());
    }

    #[test]
    fn test_valid_sides_are_applied() {
        let rect = rectangle(Some(3.0), Some(2.0), &Config::default());
        assert_eq!(rect.area(), 6.0);
    }

    #[test]
    fn test_negative_sides_are_rejected() {
        let rect = rectangle(Some(-4.0), Some(-5.0), &Config::default());
        assert_eq!(rect, Rectangle::default());
    }

    #[test]
    fn test_one_bad_side_does_not_block_the_other() {
        let rect = rectangle(Some(-4.0), Some(0.0), &Config::default());
        assert_eq!(rect.width(), 1.0);
        assert_eq!(rect.height(), 0.0);
    }
}
