//! UnitRunner port - executes one generator unit
//!
//! Each unit runs as an isolated program in its output directory. It reports
//! failure only through its exit status.

use std::io;
use std::path::Path;

use crate::domain::value_objects::Unit;

/// Result of running a generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitOutcome {
    /// Exited with status zero
    Success,
    /// Exited non-zero; `None` when terminated without an exit code
    Failed { exit_code: Option<i32> },
}

impl UnitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, UnitOutcome::Success)
    }
}

/// Runs generator units
pub trait UnitRunner {
    /// Run `unit` with `workdir` as its working directory and wait for it.
    ///
    /// `Err` means the unit could not be launched at all.
    fn run(&self, unit: &Unit, workdir: &Path) -> io::Result<UnitOutcome>;
}
