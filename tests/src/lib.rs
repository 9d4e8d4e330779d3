//! Cross-crate tests of the primer value objects, driven only through their
//! public API.

mod calculator;
mod shapes;
mod staff;
