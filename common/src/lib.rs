//! # Primer Common
//!
//! Pieces shared by every crate in the workspace:
//!
//! * **[`config`]**: runtime options collected from the command line.
//! * **[`error`]**: the typed error taxonomy returned by the value objects.
//! * **[`log`]**: status macros (`info!`, `success!`, `warn!`, `error!`).

pub mod config;
pub mod error;
pub mod log;

#[doc(hidden)]
pub use tracing;
