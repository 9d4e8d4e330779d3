use std::f64::consts::PI;

use primer_common::error::ValueError;
use tracing::debug;

use super::Shape;
use crate::validate;

/// A circle whose radius is always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Builds a circle, rejecting zero, negative and non-finite radii.
    pub fn new(radius: f64) -> Result<Self, ValueError> {
        let radius = validate::positive("radius", radius)?;
        Ok(Self { radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Replaces the radius. On error the current radius is kept.
    pub fn set_radius(&mut self, radius: f64) -> Result<(), ValueError> {
        self.radius = validate::positive("radius", radius)?;
        debug!(radius, "circle radius updated");
        Ok(())
    }

    /// `π × r²`
    pub fn area(&self) -> f64 {
        PI * self.radius.powi(2)
    }

    /// `2 × π × r`
    pub fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn area(&self) -> f64 {
        Circle::area(self)
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
