//! Run Use Case
//!
//! Orchestrates one regeneration pass:
//! 1. Discover units under the tracked root
//! 2. Fingerprint every unit
//! 3. Plan against the fingerprints of the last successful run
//! 4. Run the selected generators one at a time, in discovery order
//! 5. Persist the new fingerprints
//!
//! Persistence only happens after every selected generator succeeded, so a
//! failed run leaves the state file exactly as it was.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use crate::domain::entities::FingerprintSet;
use crate::domain::ports::{
    FileSystem, FingerprintStore, NoopEventSink, RunEvent, RunEventSink, UnitDiscovery,
    UnitOutcome, UnitRunner,
};
use crate::domain::services::{ExecutionPlan, PlanError, Planner};
use crate::domain::value_objects::{Layout, Unit};
use crate::error::{RegenError, RegenResult};

use super::options::RunOptions;
use super::result::RunReport;

/// Run use case - orchestrates change detection and generator execution
///
/// Parameterized by its ports so tests can substitute in-memory fakes.
pub struct RunUseCase<D, S, R, FS>
where
    D: UnitDiscovery,
    S: FingerprintStore,
    R: UnitRunner,
    FS: FileSystem,
{
    discovery: D,
    store: S,
    runner: R,
    file_system: FS,
    layout: Layout,
}

impl<D, S, R, FS> RunUseCase<D, S, R, FS>
where
    D: UnitDiscovery,
    S: FingerprintStore,
    R: UnitRunner,
    FS: FileSystem,
{
    pub fn new(discovery: D, store: S, runner: R, file_system: FS, layout: Layout) -> Self {
        Self {
            discovery,
            store,
            runner,
            file_system,
            layout,
        }
    }

    /// Execute the run use case
    pub fn execute(&self, options: &RunOptions) -> RegenResult<RunReport> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Execute the run use case with event reporting
    pub fn execute_with_events(
        &self,
        options: &RunOptions,
        events: Arc<dyn RunEventSink>,
    ) -> RegenResult<RunReport> {
        events.on_event(RunEvent::Started {
            tracked_root: options.tracked_root.clone(),
            state_file: options.state_file.clone(),
            dry_run: options.dry_run,
        });

        let units = self.discovery.discover(&options.tracked_root)?;
        let generators = units.iter().filter(|u| u.is_generator()).count();
        if generators == 0 {
            return Err(RegenError::NoGenerators {
                root: options.tracked_root.clone(),
            });
        }
        events.on_event(RunEvent::Discovered {
            generators,
            shared: units.len() - generators,
        });

        let current = self.fingerprint(&units)?;
        let previous = if options.force {
            FingerprintSet::new()
        } else {
            self.store.load(&options.state_file)?
        };

        let plan = Planner::new()
            .with_force(options.force)
            .plan(&units, &previous, &current)
            .map_err(|e| match e {
                PlanError::NoGenerators => RegenError::NoGenerators {
                    root: options.tracked_root.clone(),
                },
            })?;
        self.report_plan(&plan, events.as_ref());

        let mut report = RunReport {
            plan,
            executed: Vec::new(),
            fingerprints: current,
            state_file: options.state_file.clone(),
            dry_run: options.dry_run,
        };

        if !options.dry_run {
            report.executed = self.execute_plan(&report.plan, events.as_ref())?;

            self.store.save(&report.fingerprints, &options.state_file)?;
            events.on_event(RunEvent::Persisted {
                path: options.state_file.clone(),
                entries: report.fingerprints.len(),
            });
        }

        let executed = if options.dry_run {
            report.plan.selected_count()
        } else {
            report.executed.len()
        };
        events.on_event(RunEvent::Completed {
            executed,
            skipped: report.skipped_count(),
            dry_run: options.dry_run,
        });

        Ok(report)
    }

    fn fingerprint(&self, units: &[Unit]) -> RegenResult<FingerprintSet> {
        units
            .iter()
            .map(|unit| {
                self.file_system
                    .hash(unit.path())
                    .map(|hash| (unit.key().to_string(), hash))
                    .map_err(|e| RegenError::io(unit.path(), e))
            })
            .collect()
    }

    fn report_plan(&self, plan: &ExecutionPlan, events: &dyn RunEventSink) {
        events.on_event(RunEvent::Planned {
            selected: plan.selected_count(),
            total_generators: plan.total_generators(),
            rerun_all: plan.rerun_all(),
            changed_shared: plan.changed_shared().to_vec(),
        });

        if events.wants_detailed_events() {
            for unit in plan.skipped() {
                events.on_event(RunEvent::UnitSkipped {
                    key: unit.key().to_string(),
                });
            }
        }
    }

    /// Run every selected generator; the first failure aborts the pass.
    fn execute_plan(
        &self,
        plan: &ExecutionPlan,
        events: &dyn RunEventSink,
    ) -> RegenResult<Vec<String>> {
        let total = plan.selected_count();
        let mut executed = Vec::with_capacity(total);

        for (index, planned) in plan.selected().iter().enumerate() {
            let unit = &planned.unit;
            let workdir = self.prepare_output(unit.path())?;

            events.on_event(RunEvent::UnitStarted {
                index,
                total,
                key: unit.key().to_string(),
                reason: planned.reason,
                workdir: workdir.clone(),
            });

            let started = Instant::now();
            let outcome = self
                .runner
                .run(unit, &workdir)
                .map_err(|e| RegenError::io(unit.path(), e))?;

            match outcome {
                UnitOutcome::Success => {
                    events.on_event(RunEvent::UnitFinished {
                        index,
                        key: unit.key().to_string(),
                        duration_ms: started.elapsed().as_millis() as u64,
                    });
                    executed.push(unit.key().to_string());
                }
                UnitOutcome::Failed { exit_code } => {
                    events.on_event(RunEvent::UnitFailed {
                        index,
                        key: unit.key().to_string(),
                        exit_code,
                    });
                    return Err(RegenError::GeneratorFailed {
                        unit: unit.key().to_string(),
                        exit_code,
                    });
                }
            }
        }

        Ok(executed)
    }

    fn prepare_output(&self, unit_path: &Path) -> RegenResult<PathBuf> {
        let workdir = self.layout.output_location(unit_path).ok_or_else(|| {
            RegenError::io(
                unit_path,
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!(
                        "generator is not inside a {} directory",
                        self.layout.generators_dir()
                    ),
                ),
            )
        })?;

        self.file_system
            .create_dir_all(&workdir)
            .map_err(|e| RegenError::io(&workdir, e))?;
        Ok(workdir)
    }
}
