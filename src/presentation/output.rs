//! Output Rendering
//!
//! Renders the execution plan printed by `regen plan`.

use std::io::{self, Write};

use crossterm::style::Stylize;

use crate::application::RunReport;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

/// Trait for rendering a planned run
pub trait PlanRenderer {
    fn render(&self, report: &RunReport, out: &mut dyn Write) -> io::Result<()>;
}

/// Text renderer for plans
pub struct TextRenderer {
    /// Whether to use colors
    pub color: bool,
    /// List generators that would be skipped too
    pub verbose: bool,
}

impl PlanRenderer for TextRenderer {
    fn render(&self, report: &RunReport, out: &mut dyn Write) -> io::Result<()> {
        let plan = &report.plan;

        if plan.is_empty() {
            writeln!(
                out,
                "✓ All {} generator(s) up to date",
                plan.total_generators()
            )?;
        } else {
            writeln!(
                out,
                "{} of {} generator(s) would run:",
                plan.selected_count(),
                plan.total_generators()
            )?;
            for planned in plan.selected() {
                let reason = format!("({})", planned.reason);
                let reason = if self.color {
                    reason.dark_grey().to_string()
                } else {
                    reason
                };
                writeln!(out, "  → {} {}", planned.unit.key(), reason)?;
            }
        }

        if !plan.changed_shared().is_empty() {
            writeln!(out)?;
            writeln!(out, "Shared files changed ({}):", plan.changed_shared().len())?;
            for key in plan.changed_shared() {
                writeln!(out, "  ! {}", key)?;
            }
        }

        if self.verbose && !plan.skipped().is_empty() {
            writeln!(out)?;
            writeln!(out, "Up to date ({}):", plan.skipped().len())?;
            for unit in plan.skipped() {
                writeln!(out, "  ○ {}", unit.key())?;
            }
        }

        Ok(())
    }
}

/// JSON renderer for plans
pub struct JsonRenderer;

impl PlanRenderer for JsonRenderer {
    fn render(&self, report: &RunReport, out: &mut dyn Write) -> io::Result<()> {
        let plan = &report.plan;
        let json = serde_json::json!({
            "event": "plan",
            "state_file": report.state_file.display().to_string(),
            "rerun_all": plan.rerun_all(),
            "selected": plan
                .selected()
                .iter()
                .map(|p| serde_json::json!({
                    "unit": p.unit.key(),
                    "reason": p.reason.as_str(),
                }))
                .collect::<Vec<_>>(),
            "skipped": plan.skipped().iter().map(|u| u.key()).collect::<Vec<_>>(),
            "changed_shared": plan.changed_shared(),
        });

        writeln!(out, "{}", json)
    }
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat, color: bool, verbose: bool) -> Box<dyn PlanRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { color, verbose }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
