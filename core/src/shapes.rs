//! Geometric value objects.
//!
//! Every shape keeps its dimensions valid at all times: constructors and
//! setters return a [`ValueError`](primer_common::error::ValueError) instead of
//! storing a bad value, and a failed setter leaves the previous value in place.

mod circle;
mod rectangle;

pub use circle::Circle;
pub use rectangle::Rectangle;

/// Derived measurements shared by every shape.
pub trait Shape {
    /// Human readable name, used in headers and logs.
    fn name(&self) -> &'static str;

    fn area(&self) -> f64;
}
