//! # Calculator
//!
//! [`Accumulator`] holds a fixed list of operands captured once and derives the
//! four aggregates from it. The derivations reproduce the behaviour of the
//! original exercise, including two unusual ones:
//!
//! * **Subtraction** is sequential from zero: `0 - a - b - c`, not `a - b - c`.
//! * **Division** only looks at the first two operands: `a / b`, the rest are ignored.

use std::fmt;
use std::str::FromStr;

use primer_common::error::ValueError;

/// An immutable list of operands with fold-style derivations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Accumulator {
    operands: Box<[f64]>,
}

impl Accumulator {
    pub fn new(operands: impl IntoIterator<Item = f64>) -> Self {
        Self {
            operands: operands.into_iter().collect(),
        }
    }

    pub fn operands(&self) -> &[f64] {
        &self.operands
    }

    pub fn len(&self) -> usize {
        self.operands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operands.is_empty()
    }

    /// Sum of all operands, `0` when empty.
    pub fn sum(&self) -> f64 {
        self.operands.iter().fold(0.0, |acc, op| acc + op)
    }

    /// Subtracts every operand, in order, from a running total seeded at zero.
    pub fn sequential_difference(&self) -> f64 {
        self.operands.iter().fold(0.0, |acc, op| acc - op)
    }

    /// Product of all operands, `1` when empty.
    pub fn product(&self) -> f64 {
        self.operands.iter().fold(1.0, |acc, op| acc * op)
    }

    /// Divides the first operand by the second.
    ///
    /// # Errors
    /// * [`ValueError::IndexOutOfRange`] with fewer than two operands.
    /// * [`ValueError::DivisionByZero`] when the second operand is zero.
    pub fn quotient(&self) -> Result<f64, ValueError> {
        let &[numerator, denominator, ..] = &*self.operands else {
            return Err(ValueError::IndexOutOfRange {
                operation: Operation::Division.label(),
                required: 2,
                supplied: self.operands.len(),
            });
        };

        if denominator == 0.0 {
            return Err(ValueError::DivisionByZero);
        }

        Ok(numerator / denominator)
    }
}

impl FromIterator<f64> for Accumulator {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl FromStr for Accumulator {
    type Err = ValueError;

    /// Parses whitespace separated numbers, e.g. `"10 2.5 -3"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .map(|token| {
                token
                    .parse::<f64>()
                    .map_err(|_| ValueError::invalid(format!("'{token}' is not a number")))
            })
            .collect()
    }
}

/// The four aggregates offered by the calculator menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Multiplication => "multiplication",
            Operation::Division => "division",
        }
    }

    pub fn apply(self, accumulator: &Accumulator) -> Result<f64, ValueError> {
        match self {
            Operation::Addition => Ok(accumulator.sum()),
            Operation::Subtraction => Ok(accumulator.sequential_difference()),
            Operation::Multiplication => Ok(accumulator.product()),
            Operation::Division => accumulator.quotient(),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.label();
        let mut chars = label.chars();
        match chars.next() {
            Some(first) => write!(f, "{}{}", first.to_ascii_uppercase(), chars.as_str()),
            None => Ok(()),
        }
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
