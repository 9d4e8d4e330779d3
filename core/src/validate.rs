//! Validation helpers run before a value object commits new state.
//!
//! Each helper returns the accepted value so callers can write
//! `self.radius = validate::positive("radius", radius)?;` and keep the old
//! value untouched on failure.

use primer_common::error::ValueError;

/// Accepts finite values strictly greater than zero.
pub fn positive(name: &str, value: f64) -> Result<f64, ValueError> {
    let value = non_negative(name, value)?;
    if value == 0.0 {
        return Err(ValueError::invalid(format!("{name} must be non-zero")));
    }
    Ok(value)
}

/// Accepts finite values greater than or equal to zero.
pub fn non_negative(name: &str, value: f64) -> Result<f64, ValueError> {
    if value.is_nan() || value.is_infinite() {
        return Err(ValueError::invalid(format!("{name} must be a finite number")));
    }
    if value < 0.0 {
        return Err(ValueError::invalid(format!("negative {name} not allowed")));
    }
    // -0.0 + 0.0 is +0.0
    Ok(value + 0.0)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
