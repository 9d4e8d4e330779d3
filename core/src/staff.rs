//! # Staff
//!
//! The random employee generator. An [`IdSequence`] is passed explicitly to
//! every hire instead of living in global state, so independent rosters (and
//! tests) never share counters.

mod employee;
mod ids;
mod roster;
mod titles;

pub use employee::Employee;
pub use ids::IdSequence;
pub use roster::{Roster, SALARY_RANGE};
pub use titles::JobTitles;
