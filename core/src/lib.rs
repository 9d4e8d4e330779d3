//! # Primer Core
//!
//! The value objects behind every exercise. Each type checks its invariants
//! when it is built and whenever it is mutated, and exposes pure derived
//! computations on top of the validated state.
//!
//! * **[`shapes`]**: [`shapes::Circle`] and [`shapes::Rectangle`].
//! * **[`calculator`]**: [`calculator::Accumulator`] and the menu [`calculator::Operation`]s.
//! * **[`staff`]**: employees, id sequences, job titles and the random [`staff::Roster`].
//!
//! All types are plain owned data without interior mutability. Sharing a
//! mutable instance across threads requires an external lock.

pub mod calculator;
pub mod shapes;
pub mod staff;
pub mod validate;
