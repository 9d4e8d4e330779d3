use std::fmt;

use primer_common::error::ValueError;

use super::IdSequence;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    id: u32,
    name: String,
    salary: u32,
    designation: String,
}

impl Employee {
    /// Validates the name, then takes the next id from `ids`.
    ///
    /// A rejected name does not consume an id. Fails when `ids` is exhausted.
    pub fn hire(
        name: &str,
        salary: u32,
        designation: impl Into<String>,
        ids: &mut IdSequence,
    ) -> Result<Self, ValueError> {
        let name = validate_name(name)?;

        Ok(Self {
            id: ids.issue()?,
            name: name.to_string(),
            salary,
            designation: designation.into(),
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn salary(&self) -> u32 {
        self.salary
    }

    pub fn designation(&self) -> &str {
        &self.designation
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Salary: {}", self.salary)?;
        writeln!(f, "Designation: {}", self.designation)?;
        write!(f, "Employee ID: {}", self.id)
    }
}

/// Names must contain something other than whitespace and must not be a bare number.
fn validate_name(name: &str) -> Result<&str, ValueError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValueError::invalid("name must not be empty"));
    }
    if name.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValueError::invalid("name must be text, not a number"));
    }
    Ok(name)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
