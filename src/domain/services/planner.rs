//! Invalidation planning service
//!
//! Pure domain logic deciding which generators must run, given the
//! fingerprints recorded by the last successful run and the current ones.
//! Any change to a shared unit invalidates every generator; otherwise a
//! generator runs only when its own content changed.

use std::fmt;

use crate::domain::entities::FingerprintSet;
use crate::domain::value_objects::Unit;

/// Why a generator was selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionReason {
    /// No fingerprint recorded for this generator
    New,
    /// The generator's own content changed
    Changed,
    /// Unchanged itself, but a shared unit changed
    SharedChanged,
    /// Recorded state was ignored on request
    Forced,
}

impl SelectionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionReason::New => "new",
            SelectionReason::Changed => "changed",
            SelectionReason::SharedChanged => "shared-changed",
            SelectionReason::Forced => "forced",
        }
    }
}

impl fmt::Display for SelectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generator selected for execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedUnit {
    pub unit: Unit,
    pub reason: SelectionReason,
}

/// Planning errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// Not a single generator unit exists
    #[error("no generator units to plan")]
    NoGenerators,
}

/// Result of planning a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionPlan {
    selected: Vec<PlannedUnit>,
    skipped: Vec<Unit>,
    rerun_all: bool,
    changed_shared: Vec<String>,
}

impl ExecutionPlan {
    /// Generators to run, in discovery order
    pub fn selected(&self) -> &[PlannedUnit] {
        &self.selected
    }

    /// Generators left alone, in discovery order
    pub fn skipped(&self) -> &[Unit] {
        &self.skipped
    }

    /// True iff at least one shared unit is new or changed
    pub fn rerun_all(&self) -> bool {
        self.rerun_all
    }

    /// Keys of shared units that are new or changed
    pub fn changed_shared(&self) -> &[String] {
        &self.changed_shared
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn total_generators(&self) -> usize {
        self.selected.len() + self.skipped.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Whether the generator with `key` is selected
    pub fn is_selected(&self, key: &str) -> bool {
        self.selected.iter().any(|p| p.unit.key() == key)
    }
}

/// Decides which generators must run
#[derive(Debug, Clone, Copy, Default)]
pub struct Planner {
    force: bool,
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select every generator regardless of recorded state
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Plan a run over `units`.
    ///
    /// `current` must hold a fingerprint for every unit. A unit without a
    /// current fingerprint is treated as changed.
    pub fn plan(
        &self,
        units: &[Unit],
        previous: &FingerprintSet,
        current: &FingerprintSet,
    ) -> Result<ExecutionPlan, PlanError> {
        if !units.iter().any(Unit::is_generator) {
            return Err(PlanError::NoGenerators);
        }

        let mut plan = ExecutionPlan::default();

        // Every shared unit is checked so the report lists all of them.
        for unit in units.iter().filter(|u| u.is_shared()) {
            if is_changed(unit, previous, current) {
                plan.rerun_all = true;
                plan.changed_shared.push(unit.key().to_string());
            }
        }

        for unit in units.iter().filter(|u| u.is_generator()) {
            let reason = if self.force {
                Some(SelectionReason::Forced)
            } else if is_changed(unit, previous, current) {
                if previous.contains(unit.key()) {
                    Some(SelectionReason::Changed)
                } else {
                    Some(SelectionReason::New)
                }
            } else if plan.rerun_all {
                Some(SelectionReason::SharedChanged)
            } else {
                None
            };

            match reason {
                Some(reason) => plan.selected.push(PlannedUnit {
                    unit: unit.clone(),
                    reason,
                }),
                None => plan.skipped.push(unit.clone()),
            }
        }

        Ok(plan)
    }
}

/// Plan with default options
pub fn plan(
    units: &[Unit],
    previous: &FingerprintSet,
    current: &FingerprintSet,
) -> Result<ExecutionPlan, PlanError> {
    Planner::new().plan(units, previous, current)
}

fn is_changed(unit: &Unit, previous: &FingerprintSet, current: &FingerprintSet) -> bool {
    match current.get(unit.key()) {
        Some(hash) => !previous.matches(unit.key(), hash),
        None => true,
    }
}
