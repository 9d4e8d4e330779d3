use std::ops::RangeInclusive;

use primer_common::error::RosterError;
use rand::Rng;
use tracing::debug;

use super::{Employee, IdSequence, JobTitles};

/// Salaries handed out by [`Roster::hire`], inclusive on both ends.
pub const SALARY_RANGE: RangeInclusive<u32> = 25_000..=75_000;

/// Hires employees with a random title and salary and keeps them in hire order.
#[derive(Debug, Clone)]
pub struct Roster {
    titles: JobTitles,
    ids: IdSequence,
    employees: Vec<Employee>,
}

impl Roster {
    pub fn new(titles: JobTitles, ids: IdSequence) -> Self {
        Self {
            titles,
            ids,
            employees: Vec::new(),
        }
    }

    /// Hires `name` with a random designation and salary.
    pub fn hire<R: Rng>(
        &mut self,
        name: &str,
        rng: &mut R,
    ) -> Result<&Employee, RosterError> {
        let designation = self.titles.choose(rng).to_string();
        let salary = rng.random_range(SALARY_RANGE);
        let employee = Employee::hire(name, salary, designation, &mut self.ids)?;

        debug!(id = employee.id(), salary, "employee hired");
        let idx = self.employees.len();
        self.employees.push(employee);
        Ok(&self.employees[idx])
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn titles(&self) -> &JobTitles {
        &self.titles
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
