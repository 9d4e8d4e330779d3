use primer_common::error::ValueError;

/// Base of the default sequence. The first id issued is `DEFAULT_BASE + 1`.
pub const DEFAULT_BASE: u32 = 1000;

/// Issues increasing employee ids and counts how many were handed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    last: u32,
    issued: usize,
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::starting_at(DEFAULT_BASE)
    }
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(base: u32) -> Self {
        Self {
            last: base,
            issued: 0,
        }
    }

    /// Advances the sequence and returns the new id.
    ///
    /// Fails once `u32::MAX` has been handed out; the sequence never wraps.
    pub fn issue(&mut self) -> Result<u32, ValueError> {
        let next = self
            .last
            .checked_add(1)
            .ok_or(ValueError::SequenceExhausted { last: self.last })?;
        self.last = next;
        self.issued += 1;
        Ok(next)
    }

    pub fn issued(&self) -> usize {
        self.issued
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
