//! # Status Macros
//!
//! Thin wrappers over `tracing` that tag each event with a status target.
//! The CLI formatter turns the level and target into a coloured symbol:
//!
//! | Macro        | Symbol |
//! |--------------|--------|
//! | `info!`      | `[+]`  |
//! | `success!`   | `[✓]`  |
//! | `warn!`      | `[*]`  |
//! | `error!`     | `[-]`  |

pub const SUCCESS_TARGET: &str = "primer::success";
pub const PRINT_TARGET: &str = "primer::print";

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::tracing::info!(target: "primer::status", $($arg)+)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => {
        $crate::tracing::info!(target: "primer::success", $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::tracing::warn!(target: "primer::status", $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::tracing::error!(target: "primer::status", $($arg)+)
    };
}
