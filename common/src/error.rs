//! # Error Taxonomy
//!
//! Every contract violation is reported synchronously to the caller as one of
//! these types. Nothing here is fatal: the caller decides whether to re-prompt
//! or abort.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the value objects when an input breaks their contract.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("cannot divide by zero")]
    DivisionByZero,

    #[error("{operation} needs at least {required} operands, got {supplied}")]
    IndexOutOfRange {
        operation: &'static str,
        required: usize,
        supplied: usize,
    },

    #[error("no ids left after {last}")]
    SequenceExhausted { last: u32 },
}

impl ValueError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        ValueError::InvalidArgument(reason.into())
    }
}

/// Errors raised while preparing or growing a roster of employees.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("cannot read job titles from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no job titles found in {path}")]
    NoTitles { path: PathBuf },

    #[error(transparent)]
    Value(#[from] ValueError),
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
